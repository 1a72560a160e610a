use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_query::Value;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Text};
use validator::Validate;

use magnus_db::table;
use magnus_shared::{
    EntityRef,
    Resource,
    entity_ref,
    sql,
    types::{ConflictStatus, ProductUnit},
    validate::non_negative,
};

#[derive(Debug, FromRow)]
pub struct ProductRequirementRow {
    pub id: i64,
    pub quantity: f64,
    pub unit: Text<ProductUnit>,
    pub notes: Option<String>,
    pub estimated_cost: Option<Text<Decimal>>,
    pub actual_cost: Option<Text<Decimal>>,
    pub is_purchased: bool,
    pub purchased_by: Option<String>,
    pub purchased_at: Option<DateTime<Utc>>,
    pub version: i32,
    pub conflict_status: Text<ConflictStatus>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub product_id: i64,
    pub related_task_id: Option<i64>,
    pub food_item_id: Option<i64>,
    pub activity_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequirement {
    pub id: Option<i64>,
    #[validate(required, range(min = 0.0))]
    pub quantity: Option<f64>,
    #[validate(required)]
    pub unit: Option<ProductUnit>,
    pub notes: Option<String>,
    #[validate(custom(function = "non_negative"))]
    pub estimated_cost: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub actual_cost: Option<Decimal>,
    #[validate(required)]
    pub is_purchased: Option<bool>,
    #[validate(length(max = 100))]
    pub purchased_by: Option<String>,
    pub purchased_at: Option<DateTime<Utc>>,
    #[validate(required, range(min = 1))]
    pub version: Option<i32>,
    #[validate(required)]
    pub conflict_status: Option<ConflictStatus>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub updated_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub product: Option<EntityRef>,
    pub related_task: Option<EntityRef>,
    pub food_item: Option<EntityRef>,
    pub activity: Option<EntityRef>,
}

impl From<ProductRequirementRow> for ProductRequirement {
    fn from(row: ProductRequirementRow) -> Self {
        Self {
            id: Some(row.id),
            quantity: Some(row.quantity),
            unit: Some(row.unit.0),
            notes: row.notes,
            estimated_cost: sql::text(row.estimated_cost),
            actual_cost: sql::text(row.actual_cost),
            is_purchased: Some(row.is_purchased),
            purchased_by: row.purchased_by,
            purchased_at: row.purchased_at,
            version: Some(row.version),
            conflict_status: Some(row.conflict_status.0),
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
            product: Some(row.product_id.into()),
            related_task: entity_ref(row.related_task_id),
            food_item: entity_ref(row.food_item_id),
            activity: entity_ref(row.activity_id),
        }
    }
}

impl Resource for ProductRequirement {
    type Row = ProductRequirementRow;
    type Column = table::ProductRequirement;

    const ENTITY_NAME: &'static str = "productRequirement";
    const TABLE: table::ProductRequirement = table::ProductRequirement::Table;
    const ID: table::ProductRequirement = table::ProductRequirement::Id;
    const COLUMNS: &'static [table::ProductRequirement] = &[
        table::ProductRequirement::Quantity,
        table::ProductRequirement::Unit,
        table::ProductRequirement::Notes,
        table::ProductRequirement::EstimatedCost,
        table::ProductRequirement::ActualCost,
        table::ProductRequirement::IsPurchased,
        table::ProductRequirement::PurchasedBy,
        table::ProductRequirement::PurchasedAt,
        table::ProductRequirement::Version,
        table::ProductRequirement::ConflictStatus,
        table::ProductRequirement::CreatedAt,
        table::ProductRequirement::UpdatedAt,
        table::ProductRequirement::ProductId,
        table::ProductRequirement::RelatedTaskId,
        table::ProductRequirement::FoodItemId,
        table::ProductRequirement::ActivityId,
    ];
    const MONEY: &'static [table::ProductRequirement] = &[
        table::ProductRequirement::EstimatedCost,
        table::ProductRequirement::ActualCost,
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.quantity.into(),
            sql::name(self.unit),
            self.notes.clone().into(),
            sql::money(self.estimated_cost),
            sql::money(self.actual_cost),
            self.is_purchased.into(),
            self.purchased_by.clone().into(),
            self.purchased_at.into(),
            self.version.into(),
            sql::name(self.conflict_status),
            self.created_at.into(),
            self.updated_at.into(),
            sql::reference(self.product),
            sql::reference(self.related_task),
            sql::reference(self.food_item),
            sql::reference(self.activity),
        ]
    }
}
