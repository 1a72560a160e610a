use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Text};
use validator::Validate;

use magnus_db::table;
use magnus_shared::{EntityRef, Resource, sql, types::FoodCategory, validate::non_negative};

#[derive(Debug, FromRow)]
pub struct MenuItemRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: Text<FoodCategory>,
    pub price: Text<Decimal>,
    pub cost: Option<Text<Decimal>>,
    pub allergens: Option<String>,
    pub dietary_info: Option<String>,
    pub preparation_time: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub menu_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: Option<i64>,
    #[validate(required, length(max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(required)]
    pub category: Option<FoodCategory>,
    #[validate(required, custom(function = "non_negative"))]
    pub price: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub cost: Option<Decimal>,
    pub allergens: Option<String>,
    pub dietary_info: Option<String>,
    #[validate(range(min = 0))]
    pub preparation_time: Option<i32>,
    #[validate(required)]
    pub is_active: Option<bool>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub updated_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub menu: Option<EntityRef>,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        Self {
            id: Some(row.id),
            name: Some(row.name),
            description: row.description,
            category: Some(row.category.0),
            price: Some(row.price.0),
            cost: sql::text(row.cost),
            allergens: row.allergens,
            dietary_info: row.dietary_info,
            preparation_time: row.preparation_time,
            is_active: Some(row.is_active),
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
            menu: Some(row.menu_id.into()),
        }
    }
}

impl Resource for MenuItem {
    type Row = MenuItemRow;
    type Column = table::MenuItem;

    const ENTITY_NAME: &'static str = "menuItem";
    const TABLE: table::MenuItem = table::MenuItem::Table;
    const ID: table::MenuItem = table::MenuItem::Id;
    const COLUMNS: &'static [table::MenuItem] = &[
        table::MenuItem::Name,
        table::MenuItem::Description,
        table::MenuItem::Category,
        table::MenuItem::Price,
        table::MenuItem::Cost,
        table::MenuItem::Allergens,
        table::MenuItem::DietaryInfo,
        table::MenuItem::PreparationTime,
        table::MenuItem::IsActive,
        table::MenuItem::CreatedAt,
        table::MenuItem::UpdatedAt,
        table::MenuItem::MenuId,
    ];
    const MONEY: &'static [table::MenuItem] = &[
        table::MenuItem::Price,
        table::MenuItem::Cost,
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
            sql::money(self.price),
            sql::money(self.cost),
            self.allergens.clone().into(),
            self.dietary_info.clone().into(),
            self.preparation_time.into(),
            self.is_active.into(),
            self.created_at.into(),
            self.updated_at.into(),
            sql::reference(self.menu),
        ]
    }
}
