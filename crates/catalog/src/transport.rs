use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Text};
use validator::Validate;

use magnus_db::table;
use magnus_shared::{Resource, sql, types::VehicleType, validate::non_negative};

#[derive(Debug, FromRow)]
pub struct TransportRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub vehicle_type: Text<VehicleType>,
    pub capacity: i32,
    pub price_per_hour: Text<Decimal>,
    pub price_per_km: Option<Text<Decimal>>,
    pub cost_per_hour: Option<Text<Decimal>>,
    pub cost_per_km: Option<Text<Decimal>>,
    pub includes_driver: bool,
    pub driver_cost: Option<Text<Decimal>>,
    pub fuel_type: Option<String>,
    pub contact_info: Option<String>,
    pub is_active: bool,
    pub is_template: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Transport {
    pub id: Option<i64>,
    #[validate(required, length(max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(required)]
    pub vehicle_type: Option<VehicleType>,
    #[validate(required, range(min = 1))]
    pub capacity: Option<i32>,
    #[validate(required, custom(function = "non_negative"))]
    pub price_per_hour: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub price_per_km: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub cost_per_hour: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub cost_per_km: Option<Decimal>,
    #[validate(required)]
    pub includes_driver: Option<bool>,
    #[validate(custom(function = "non_negative"))]
    pub driver_cost: Option<Decimal>,
    #[validate(length(max = 50))]
    pub fuel_type: Option<String>,
    pub contact_info: Option<String>,
    #[validate(required)]
    pub is_active: Option<bool>,
    #[validate(required)]
    pub is_template: Option<bool>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<TransportRow> for Transport {
    fn from(row: TransportRow) -> Self {
        Self {
            id: Some(row.id),
            name: Some(row.name),
            description: row.description,
            vehicle_type: Some(row.vehicle_type.0),
            capacity: Some(row.capacity),
            price_per_hour: Some(row.price_per_hour.0),
            price_per_km: sql::text(row.price_per_km),
            cost_per_hour: sql::text(row.cost_per_hour),
            cost_per_km: sql::text(row.cost_per_km),
            includes_driver: Some(row.includes_driver),
            driver_cost: sql::text(row.driver_cost),
            fuel_type: row.fuel_type,
            contact_info: row.contact_info,
            is_active: Some(row.is_active),
            is_template: Some(row.is_template),
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        }
    }
}

impl Resource for Transport {
    type Row = TransportRow;
    type Column = table::Transport;

    const ENTITY_NAME: &'static str = "transport";
    const TABLE: table::Transport = table::Transport::Table;
    const ID: table::Transport = table::Transport::Id;
    const COLUMNS: &'static [table::Transport] = &[
        table::Transport::Name,
        table::Transport::Description,
        table::Transport::VehicleType,
        table::Transport::Capacity,
        table::Transport::PricePerHour,
        table::Transport::PricePerKm,
        table::Transport::CostPerHour,
        table::Transport::CostPerKm,
        table::Transport::IncludesDriver,
        table::Transport::DriverCost,
        table::Transport::FuelType,
        table::Transport::ContactInfo,
        table::Transport::IsActive,
        table::Transport::IsTemplate,
        table::Transport::CreatedAt,
        table::Transport::UpdatedAt,
    ];
    const MONEY: &'static [table::Transport] = &[
        table::Transport::PricePerHour,
        table::Transport::PricePerKm,
        table::Transport::CostPerHour,
        table::Transport::CostPerKm,
        table::Transport::DriverCost,
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
            sql::name(self.vehicle_type),
            self.capacity.into(),
            sql::money(self.price_per_hour),
            sql::money(self.price_per_km),
            sql::money(self.cost_per_hour),
            sql::money(self.cost_per_km),
            self.includes_driver.into(),
            sql::money(self.driver_cost),
            self.fuel_type.clone().into(),
            self.contact_info.clone().into(),
            self.is_active.into(),
            self.is_template.into(),
            self.created_at.into(),
            self.updated_at.into(),
        ]
    }
}
