use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Text};
use validator::Validate;

use magnus_db::table;
use magnus_shared::{EntityRef, Resource, sql, types::MenuType, validate::non_negative};

#[derive(Debug, FromRow)]
pub struct MenuRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    #[sqlx(rename = "type")]
    pub kind: Text<MenuType>,
    pub price_per_person: Text<Decimal>,
    pub cost_per_person: Option<Text<Decimal>>,
    pub min_people: i32,
    pub max_people: Option<i32>,
    pub restaurant: String,
    pub preparation_time: Option<i32>,
    pub is_active: bool,
    pub is_template: bool,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A set menu offered per person.
///
/// `included_food_items` is kept in a join table, see [`MenuService`](crate::MenuService).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: Option<i64>,
    #[validate(required, length(max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[validate(required)]
    pub kind: Option<MenuType>,
    #[validate(required, custom(function = "non_negative"))]
    pub price_per_person: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub cost_per_person: Option<Decimal>,
    #[validate(required, range(min = 1))]
    pub min_people: Option<i32>,
    #[validate(range(min = 1))]
    pub max_people: Option<i32>,
    #[validate(required, length(max = 100))]
    pub restaurant: Option<String>,
    #[validate(range(min = 0))]
    pub preparation_time: Option<i32>,
    #[validate(required)]
    pub is_active: Option<bool>,
    #[validate(required)]
    pub is_template: Option<bool>,
    #[validate(required, range(min = 1))]
    pub version: Option<i32>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub updated_at: Option<DateTime<Utc>>,
    pub included_food_items: Option<Vec<EntityRef>>,
}

impl From<MenuRow> for Menu {
    fn from(row: MenuRow) -> Self {
        Self {
            id: Some(row.id),
            name: Some(row.name),
            description: row.description,
            kind: Some(row.kind.0),
            price_per_person: Some(row.price_per_person.0),
            cost_per_person: sql::text(row.cost_per_person),
            min_people: Some(row.min_people),
            max_people: row.max_people,
            restaurant: Some(row.restaurant),
            preparation_time: row.preparation_time,
            is_active: Some(row.is_active),
            is_template: Some(row.is_template),
            version: Some(row.version),
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
            included_food_items: None,
        }
    }
}

impl Resource for Menu {
    type Row = MenuRow;
    type Column = table::Menu;

    const ENTITY_NAME: &'static str = "menu";
    const TABLE: table::Menu = table::Menu::Table;
    const ID: table::Menu = table::Menu::Id;
    const COLUMNS: &'static [table::Menu] = &[
        table::Menu::Name,
        table::Menu::Description,
        table::Menu::Type,
        table::Menu::PricePerPerson,
        table::Menu::CostPerPerson,
        table::Menu::MinPeople,
        table::Menu::MaxPeople,
        table::Menu::Restaurant,
        table::Menu::PreparationTime,
        table::Menu::IsActive,
        table::Menu::IsTemplate,
        table::Menu::Version,
        table::Menu::CreatedAt,
        table::Menu::UpdatedAt,
    ];
    const MONEY: &'static [table::Menu] = &[
        table::Menu::PricePerPerson,
        table::Menu::CostPerPerson,
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
            sql::money(self.price_per_person),
            sql::money(self.cost_per_person),
            self.min_people.into(),
            self.max_people.into(),
            self.restaurant.clone().into(),
            self.preparation_time.into(),
            self.is_active.into(),
            self.is_template.into(),
            self.version.into(),
            self.created_at.into(),
            self.updated_at.into(),
        ]
    }
}
