use chrono::{DateTime, Utc};
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Text};
use validator::Validate;

use magnus_db::table;
use magnus_shared::{EntityRef, Resource, sql, types::ProductUnit};

#[derive(Debug, FromRow)]
pub struct CookingIngredientRow {
    pub id: i64,
    pub original_quantity: f64,
    pub modified_quantity: Option<f64>,
    pub modified_unit: Option<Text<ProductUnit>>,
    pub notes: Option<String>,
    pub added_by_user: bool,
    pub is_available: bool,
    pub available_at: Option<DateTime<Utc>>,
    pub last_modified_by: Option<String>,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub product_requirement_id: i64,
    pub cooking_schedule_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CookingIngredient {
    pub id: Option<i64>,
    #[validate(required, range(min = 0.0))]
    pub original_quantity: Option<f64>,
    #[validate(range(min = 0.0))]
    pub modified_quantity: Option<f64>,
    pub modified_unit: Option<ProductUnit>,
    pub notes: Option<String>,
    #[validate(required)]
    pub added_by_user: Option<bool>,
    #[validate(required)]
    pub is_available: Option<bool>,
    pub available_at: Option<DateTime<Utc>>,
    #[validate(length(max = 50))]
    pub last_modified_by: Option<String>,
    #[validate(required, range(min = 1))]
    pub version: Option<i32>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub updated_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub product_requirement: Option<EntityRef>,
    #[validate(required)]
    pub cooking_schedule: Option<EntityRef>,
}

impl From<CookingIngredientRow> for CookingIngredient {
    fn from(row: CookingIngredientRow) -> Self {
        Self {
            id: Some(row.id),
            original_quantity: Some(row.original_quantity),
            modified_quantity: row.modified_quantity,
            modified_unit: sql::text(row.modified_unit),
            notes: row.notes,
            added_by_user: Some(row.added_by_user),
            is_available: Some(row.is_available),
            available_at: row.available_at,
            last_modified_by: row.last_modified_by,
            version: Some(row.version),
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
            product_requirement: Some(row.product_requirement_id.into()),
            cooking_schedule: Some(row.cooking_schedule_id.into()),
        }
    }
}

impl Resource for CookingIngredient {
    type Row = CookingIngredientRow;
    type Column = table::CookingIngredient;

    const ENTITY_NAME: &'static str = "cookingIngredient";
    const TABLE: table::CookingIngredient = table::CookingIngredient::Table;
    const ID: table::CookingIngredient = table::CookingIngredient::Id;
    const COLUMNS: &'static [table::CookingIngredient] = &[
        table::CookingIngredient::OriginalQuantity,
        table::CookingIngredient::ModifiedQuantity,
        table::CookingIngredient::ModifiedUnit,
        table::CookingIngredient::Notes,
        table::CookingIngredient::AddedByUser,
        table::CookingIngredient::IsAvailable,
        table::CookingIngredient::AvailableAt,
        table::CookingIngredient::LastModifiedBy,
        table::CookingIngredient::Version,
        table::CookingIngredient::CreatedAt,
        table::CookingIngredient::UpdatedAt,
        table::CookingIngredient::ProductRequirementId,
        table::CookingIngredient::CookingScheduleId,
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.original_quantity.into(),
            self.modified_quantity.into(),
            sql::name(self.modified_unit),
            self.notes.clone().into(),
            self.added_by_user.into(),
            self.is_available.into(),
            self.available_at.into(),
            self.last_modified_by.clone().into(),
            self.version.into(),
            self.created_at.into(),
            self.updated_at.into(),
            sql::reference(self.product_requirement),
            sql::reference(self.cooking_schedule),
        ]
    }
}
