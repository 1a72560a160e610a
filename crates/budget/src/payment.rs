use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Text};
use validator::Validate;

use magnus_db::table;
use magnus_shared::{EntityRef, Resource, sql, types::PaymentMethod, validate::non_negative};

#[derive(Debug, FromRow)]
pub struct PaymentRow {
    pub id: i64,
    pub method: Text<PaymentMethod>,
    pub amount: Text<Decimal>,
    pub payment_date: NaiveDate,
    pub reference: Option<String>,
    pub notes: Option<String>,
    pub is_confirmed: bool,
    pub confirmation_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub budget_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Option<i64>,
    #[validate(required)]
    pub method: Option<PaymentMethod>,
    #[validate(required, custom(function = "non_negative"))]
    pub amount: Option<Decimal>,
    #[validate(required)]
    pub payment_date: Option<NaiveDate>,
    #[validate(length(max = 100))]
    pub reference: Option<String>,
    pub notes: Option<String>,
    #[validate(required)]
    pub is_confirmed: Option<bool>,
    #[validate(length(max = 100))]
    pub confirmation_number: Option<String>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub updated_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub budget: Option<EntityRef>,
}

impl From<PaymentRow> for Payment {
    fn from(row: PaymentRow) -> Self {
        Self {
            id: Some(row.id),
            method: Some(row.method.0),
            amount: Some(row.amount.0),
            payment_date: Some(row.payment_date),
            reference: row.reference,
            notes: row.notes,
            is_confirmed: Some(row.is_confirmed),
            confirmation_number: row.confirmation_number,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
            budget: Some(row.budget_id.into()),
        }
    }
}

impl Resource for Payment {
    type Row = PaymentRow;
    type Column = table::Payment;

    const ENTITY_NAME: &'static str = "payment";
    const TABLE: table::Payment = table::Payment::Table;
    const ID: table::Payment = table::Payment::Id;
    const COLUMNS: &'static [table::Payment] = &[
        table::Payment::Method,
        table::Payment::Amount,
        table::Payment::PaymentDate,
        table::Payment::Reference,
        table::Payment::Notes,
        table::Payment::IsConfirmed,
        table::Payment::ConfirmationNumber,
        table::Payment::CreatedAt,
        table::Payment::UpdatedAt,
        table::Payment::BudgetId,
    ];
    const MONEY: &'static [table::Payment] = &[
        table::Payment::Amount,
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            sql::name(self.method),
            sql::money(self.amount),
            self.payment_date.into(),
            self.reference.clone().into(),
            self.notes.clone().into(),
            self.is_confirmed.into(),
            self.confirmation_number.clone().into(),
            self.created_at.into(),
            self.updated_at.into(),
            sql::reference(self.budget),
        ]
    }
}
