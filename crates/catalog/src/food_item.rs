use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Text};
use validator::Validate;

use magnus_db::table;
use magnus_shared::{Resource, sql, types::FoodCategory, validate::non_negative};

#[derive(Debug, FromRow)]
pub struct FoodItemRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: Text<FoodCategory>,
    pub base_price: Text<Decimal>,
    pub base_cost: Option<Text<Decimal>>,
    pub serving_size: Option<String>,
    pub guests_per_unit: i32,
    pub max_units: Option<i32>,
    pub allergens: Option<String>,
    pub dietary_info: Option<String>,
    pub is_active: bool,
    pub is_template: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: Option<i64>,
    #[validate(required, length(max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(required)]
    pub category: Option<FoodCategory>,
    #[validate(required, custom(function = "non_negative"))]
    pub base_price: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub base_cost: Option<Decimal>,
    #[validate(length(max = 50))]
    pub serving_size: Option<String>,
    #[validate(required, range(min = 1))]
    pub guests_per_unit: Option<i32>,
    #[validate(range(min = 1))]
    pub max_units: Option<i32>,
    pub allergens: Option<String>,
    pub dietary_info: Option<String>,
    #[validate(required)]
    pub is_active: Option<bool>,
    #[validate(required)]
    pub is_template: Option<bool>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<FoodItemRow> for FoodItem {
    fn from(row: FoodItemRow) -> Self {
        Self {
            id: Some(row.id),
            name: Some(row.name),
            description: row.description,
            category: Some(row.category.0),
            base_price: Some(row.base_price.0),
            base_cost: sql::text(row.base_cost),
            serving_size: row.serving_size,
            guests_per_unit: Some(row.guests_per_unit),
            max_units: row.max_units,
            allergens: row.allergens,
            dietary_info: row.dietary_info,
            is_active: Some(row.is_active),
            is_template: Some(row.is_template),
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        }
    }
}

impl Resource for FoodItem {
    type Row = FoodItemRow;
    type Column = table::FoodItem;

    const ENTITY_NAME: &'static str = "foodItem";
    const TABLE: table::FoodItem = table::FoodItem::Table;
    const ID: table::FoodItem = table::FoodItem::Id;
    const COLUMNS: &'static [table::FoodItem] = &[
        table::FoodItem::Name,
        table::FoodItem::Description,
        table::FoodItem::Category,
        table::FoodItem::BasePrice,
        table::FoodItem::BaseCost,
        table::FoodItem::ServingSize,
        table::FoodItem::GuestsPerUnit,
        table::FoodItem::MaxUnits,
        table::FoodItem::Allergens,
        table::FoodItem::DietaryInfo,
        table::FoodItem::IsActive,
        table::FoodItem::IsTemplate,
        table::FoodItem::CreatedAt,
        table::FoodItem::UpdatedAt,
    ];
    const MONEY: &'static [table::FoodItem] = &[
        table::FoodItem::BasePrice,
        table::FoodItem::BaseCost,
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
            self.serving_size.clone().into(),
            self.guests_per_unit.into(),
            self.max_units.into(),
            self.allergens.clone().into(),
            self.dietary_info.clone().into(),
            self.is_active.into(),
            self.is_template.into(),
            self.created_at.into(),
            self.updated_at.into(),
        ]
    }
}
