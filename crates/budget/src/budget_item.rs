use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Text};
use validator::Validate;

use magnus_db::table;
use magnus_shared::{EntityRef, Resource, sql, validate::{non_negative, BUDGET_ITEM_TYPE}};

#[derive(Debug, FromRow)]
pub struct BudgetItemRow {
    pub id: i64,
    pub item_type: String,
    pub template_id: String,
    pub template_name: String,
    pub quantity: i32,
    pub unit_price: Text<Decimal>,
    pub unit_cost: Option<Text<Decimal>>,
    pub total_price: Text<Decimal>,
    pub total_cost: Option<Text<Decimal>>,
    pub customizations: Option<String>,
    pub notes: Option<String>,
    pub is_customized: bool,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub budget_id: i64,
}

/// One priced line of a [`Budget`](crate::Budget), copied from a catalogue template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    pub id: Option<i64>,
    #[validate(required, length(max = 20), regex(path = *BUDGET_ITEM_TYPE))]
    pub item_type: Option<String>,
    #[validate(required, length(max = 100))]
    pub template_id: Option<String>,
    #[validate(required, length(max = 200))]
    pub template_name: Option<String>,
    #[validate(required, range(min = 1))]
    pub quantity: Option<i32>,
    #[validate(required, custom(function = "non_negative"))]
    pub unit_price: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub unit_cost: Option<Decimal>,
    #[validate(required, custom(function = "non_negative"))]
    pub total_price: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub total_cost: Option<Decimal>,
    pub customizations: Option<String>,
    pub notes: Option<String>,
    #[validate(required)]
    pub is_customized: Option<bool>,
    #[validate(required, range(min = 1))]
    pub version: Option<i32>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub updated_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub budget: Option<EntityRef>,
}

impl From<BudgetItemRow> for BudgetItem {
    fn from(row: BudgetItemRow) -> Self {
        Self {
            id: Some(row.id),
            item_type: Some(row.item_type),
            template_id: Some(row.template_id),
            template_name: Some(row.template_name),
            quantity: Some(row.quantity),
            unit_price: Some(row.unit_price.0),
            unit_cost: sql::text(row.unit_cost),
            total_price: Some(row.total_price.0),
            total_cost: sql::text(row.total_cost),
            customizations: row.customizations,
            notes: row.notes,
            is_customized: Some(row.is_customized),
            version: Some(row.version),
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
            budget: Some(row.budget_id.into()),
        }
    }
}

impl Resource for BudgetItem {
    type Row = BudgetItemRow;
    type Column = table::BudgetItem;

    const ENTITY_NAME: &'static str = "budgetItem";
    const TABLE: table::BudgetItem = table::BudgetItem::Table;
    const ID: table::BudgetItem = table::BudgetItem::Id;
    const COLUMNS: &'static [table::BudgetItem] = &[
        table::BudgetItem::ItemType,
        table::BudgetItem::TemplateId,
        table::BudgetItem::TemplateName,
        table::BudgetItem::Quantity,
        table::BudgetItem::UnitPrice,
        table::BudgetItem::UnitCost,
        table::BudgetItem::TotalPrice,
        table::BudgetItem::TotalCost,
        table::BudgetItem::Customizations,
        table::BudgetItem::Notes,
        table::BudgetItem::IsCustomized,
        table::BudgetItem::Version,
        table::BudgetItem::CreatedAt,
        table::BudgetItem::UpdatedAt,
        table::BudgetItem::BudgetId,
    ];
    const MONEY: &'static [table::BudgetItem] = &[
        table::BudgetItem::UnitPrice,
        table::BudgetItem::UnitCost,
        table::BudgetItem::TotalPrice,
        table::BudgetItem::TotalCost,
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.item_type.clone().into(),
            self.template_id.clone().into(),
            self.template_name.clone().into(),
            self.quantity.into(),
            sql::money(self.unit_price),
            sql::money(self.unit_cost),
            sql::money(self.total_price),
            sql::money(self.total_cost),
            self.customizations.clone().into(),
            self.notes.clone().into(),
            self.is_customized.into(),
            self.version.into(),
            self.created_at.into(),
            self.updated_at.into(),
            sql::reference(self.budget),
        ]
    }
}
