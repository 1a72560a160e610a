use chrono::{DateTime, Utc};
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use magnus_db::table;
use magnus_shared::{Resource};

#[derive(Debug, FromRow)]
pub struct ClientRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub company: Option<String>,
    pub tax_id: Option<String>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Option<i64>,
    #[validate(required, length(max = 100))]
    pub name: Option<String>,
    #[validate(required, email, length(max = 254))]
    pub email: Option<String>,
    #[validate(required, length(max = 20))]
    pub phone: Option<String>,
    pub address: Option<String>,
    #[validate(length(max = 100))]
    pub company: Option<String>,
    #[validate(length(max = 50))]
    pub tax_id: Option<String>,
    pub notes: Option<String>,
    #[validate(required)]
    pub is_active: Option<bool>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ClientRow> for Client {
    fn from(row: ClientRow) -> Self {
        Self {
            id: Some(row.id),
            name: Some(row.name),
            email: Some(row.email),
            phone: Some(row.phone),
            address: row.address,
            company: row.company,
            tax_id: row.tax_id,
            notes: row.notes,
            is_active: Some(row.is_active),
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        }
    }
}

impl Resource for Client {
    type Row = ClientRow;
    type Column = table::Client;

    const ENTITY_NAME: &'static str = "client";
    const TABLE: table::Client = table::Client::Table;
    const ID: table::Client = table::Client::Id;
    const COLUMNS: &'static [table::Client] = &[
        table::Client::Name,
        table::Client::Email,
        table::Client::Phone,
        table::Client::Address,
        table::Client::Company,
        table::Client::TaxId,
        table::Client::Notes,
        table::Client::IsActive,
        table::Client::CreatedAt,
        table::Client::UpdatedAt,
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.name.clone().into(),
            self.email.clone().into(),
            self.phone.clone().into(),
            self.address.clone().into(),
            self.company.clone().into(),
            self.tax_id.clone().into(),
            self.notes.clone().into(),
            self.is_active.into(),
            self.created_at.into(),
            self.updated_at.into(),
        ]
    }
}
