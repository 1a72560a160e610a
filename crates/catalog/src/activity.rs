use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Text};
use validator::Validate;

use magnus_db::table;
use magnus_shared::{Resource, sql, types::ActivityCategory, validate::non_negative};

#[derive(Debug, FromRow)]
pub struct ActivityRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: Text<ActivityCategory>,
    pub base_price: Text<Decimal>,
    pub base_cost: Option<Text<Decimal>>,
    pub duration: i32,
    pub max_capacity: i32,
    pub location: String,
    pub transport_required: bool,
    pub transport_included: bool,
    pub equipment_provided: Option<String>,
    pub requirements: Option<String>,
    pub is_active: bool,
    pub is_template: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: Option<i64>,
    #[validate(required, length(max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(required)]
    pub category: Option<ActivityCategory>,
    #[validate(required, custom(function = "non_negative"))]
    pub base_price: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub base_cost: Option<Decimal>,
    #[validate(required, range(min = 1))]
    pub duration: Option<i32>,
    #[validate(required, range(min = 1))]
    pub max_capacity: Option<i32>,
    #[validate(required, length(max = 200))]
    pub location: Option<String>,
    #[validate(required)]
    pub transport_required: Option<bool>,
    #[validate(required)]
    pub transport_included: Option<bool>,
    pub equipment_provided: Option<String>,
    pub requirements: Option<String>,
    #[validate(required)]
    pub is_active: Option<bool>,
    #[validate(required)]
    pub is_template: Option<bool>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ActivityRow> for Activity {
    fn from(row: ActivityRow) -> Self {
        Self {
            id: Some(row.id),
            name: Some(row.name),
            description: row.description,
            category: Some(row.category.0),
            base_price: Some(row.base_price.0),
            base_cost: sql::text(row.base_cost),
            duration: Some(row.duration),
            max_capacity: Some(row.max_capacity),
            location: Some(row.location),
            transport_required: Some(row.transport_required),
            transport_included: Some(row.transport_included),
            equipment_provided: row.equipment_provided,
            requirements: row.requirements,
            is_active: Some(row.is_active),
            is_template: Some(row.is_template),
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        }
    }
}

impl Resource for Activity {
    type Row = ActivityRow;
    type Column = table::Activity;

    const ENTITY_NAME: &'static str = "activity";
    const TABLE: table::Activity = table::Activity::Table;
    const ID: table::Activity = table::Activity::Id;
    const COLUMNS: &'static [table::Activity] = &[
        table::Activity::Name,
        table::Activity::Description,
        table::Activity::Category,
        table::Activity::BasePrice,
        table::Activity::BaseCost,
        table::Activity::Duration,
        table::Activity::MaxCapacity,
        table::Activity::Location,
        table::Activity::TransportRequired,
        table::Activity::TransportIncluded,
        table::Activity::EquipmentProvided,
        table::Activity::Requirements,
        table::Activity::IsActive,
        table::Activity::IsTemplate,
        table::Activity::CreatedAt,
        table::Activity::UpdatedAt,
    ];
    const MONEY: &'static [table::Activity] = &[
        table::Activity::BasePrice,
        table::Activity::BaseCost,
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
            self.description.clone().into(),
            sql::name(self.category),
            sql::money(self.base_price),
            sql::money(self.base_cost),
            self.duration.into(),
            self.max_capacity.into(),
            self.location.clone().into(),
            self.transport_required.into(),
            self.transport_included.into(),
            self.equipment_provided.clone().into(),
            self.requirements.clone().into(),
            self.is_active.into(),
            self.is_template.into(),
            self.created_at.into(),
            self.updated_at.into(),
        ]
    }
}
