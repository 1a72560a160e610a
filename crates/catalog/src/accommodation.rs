use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Text};
use validator::Validate;

use magnus_db::table;
use magnus_shared::{Resource, sql, types::AccommodationType, validate::non_negative};

#[derive(Debug, FromRow)]
pub struct AccommodationRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[sqlx(rename = "type")]
    pub kind: Text<AccommodationType>,
    pub price_per_night: Text<Decimal>,
    pub cost_per_night: Option<Text<Decimal>>,
    pub max_occupancy: i32,
    pub address: Option<String>,
    pub amenities: Option<String>,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
    pub rating: Option<f64>,
    pub contact_info: Option<String>,
    pub is_active: bool,
    pub is_template: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    pub id: Option<i64>,
    #[validate(required, length(max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[validate(required)]
    pub kind: Option<AccommodationType>,
    #[validate(required, custom(function = "non_negative"))]
    pub price_per_night: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub cost_per_night: Option<Decimal>,
    #[validate(required, range(min = 1))]
    pub max_occupancy: Option<i32>,
    pub address: Option<String>,
    pub amenities: Option<String>,
    #[validate(length(max = 10))]
    pub check_in_time: Option<String>,
    #[validate(length(max = 10))]
    pub check_out_time: Option<String>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
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

impl From<AccommodationRow> for Accommodation {
    fn from(row: AccommodationRow) -> Self {
        Self {
            id: Some(row.id),
            name: Some(row.name),
            description: row.description,
            kind: Some(row.kind.0),
            price_per_night: Some(row.price_per_night.0),
            cost_per_night: sql::text(row.cost_per_night),
            max_occupancy: Some(row.max_occupancy),
            address: row.address,
            amenities: row.amenities,
            check_in_time: row.check_in_time,
            check_out_time: row.check_out_time,
            rating: row.rating,
            contact_info: row.contact_info,
            is_active: Some(row.is_active),
            is_template: Some(row.is_template),
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        }
    }
}

impl Resource for Accommodation {
    type Row = AccommodationRow;
    type Column = table::Accommodation;

    const ENTITY_NAME: &'static str = "accommodation";
    const TABLE: table::Accommodation = table::Accommodation::Table;
    const ID: table::Accommodation = table::Accommodation::Id;
    const COLUMNS: &'static [table::Accommodation] = &[
        table::Accommodation::Name,
        table::Accommodation::Description,
        table::Accommodation::Type,
        table::Accommodation::PricePerNight,
        table::Accommodation::CostPerNight,
        table::Accommodation::MaxOccupancy,
        table::Accommodation::Address,
        table::Accommodation::Amenities,
        table::Accommodation::CheckInTime,
        table::Accommodation::CheckOutTime,
        table::Accommodation::Rating,
        table::Accommodation::ContactInfo,
        table::Accommodation::IsActive,
        table::Accommodation::IsTemplate,
        table::Accommodation::CreatedAt,
        table::Accommodation::UpdatedAt,
    ];
    const MONEY: &'static [table::Accommodation] = &[
        table::Accommodation::PricePerNight,
        table::Accommodation::CostPerNight,
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
            sql::name(self.kind),
            sql::money(self.price_per_night),
            sql::money(self.cost_per_night),
            self.max_occupancy.into(),
            self.address.clone().into(),
            self.amenities.clone().into(),
            self.check_in_time.clone().into(),
            self.check_out_time.clone().into(),
            self.rating.into(),
            self.contact_info.clone().into(),
            self.is_active.into(),
            self.is_template.into(),
            self.created_at.into(),
            self.updated_at.into(),
        ]
    }
}
