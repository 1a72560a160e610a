use chrono::{DateTime, NaiveDate, Utc};
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
    types::{ConflictStatus, ProductCategory, ProductUnit},
    validate::non_negative,
};

#[derive(Debug, FromRow)]
pub struct ShoppingItemRow {
    pub id: i64,
    pub product_name: String,
    pub total_quantity: f64,
    pub unit: Text<ProductUnit>,
    pub category: Text<ProductCategory>,
    pub budget_ids: Option<String>,
    pub client_names: Option<String>,
    pub is_purchased: bool,
    pub purchased_quantity: Option<f64>,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub notes: Option<String>,
    pub supplier: Option<String>,
    pub supplier_contact: Option<String>,
    pub estimated_cost: Option<Text<Decimal>>,
    pub actual_cost: Option<Text<Decimal>>,
    pub delivery_date: Option<NaiveDate>,
    pub is_consolidated: bool,
    pub consolidated_at: Option<DateTime<Utc>>,
    pub purchased_at: Option<DateTime<Utc>>,
    pub conflict_status: Text<ConflictStatus>,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub purchased_by_id: Option<i64>,
    pub weekly_plan_id: i64,
}

/// A consolidated purchase line for one week of events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: Option<i64>,
    #[validate(required, length(max = 100))]
    pub product_name: Option<String>,
    #[validate(required, range(min = 0.0))]
    pub total_quantity: Option<f64>,
    #[validate(required)]
    pub unit: Option<ProductUnit>,
    #[validate(required)]
    pub category: Option<ProductCategory>,
    pub budget_ids: Option<String>,
    pub client_names: Option<String>,
    #[validate(required)]
    pub is_purchased: Option<bool>,
    #[validate(range(min = 0.0))]
    pub purchased_quantity: Option<f64>,
    #[validate(required)]
    pub week_start: Option<NaiveDate>,
    #[validate(required)]
    pub week_end: Option<NaiveDate>,
    pub notes: Option<String>,
    #[validate(length(max = 100))]
    pub supplier: Option<String>,
    #[validate(length(max = 200))]
    pub supplier_contact: Option<String>,
    #[validate(custom(function = "non_negative"))]
    pub estimated_cost: Option<Decimal>,
    #[validate(custom(function = "non_negative"))]
    pub actual_cost: Option<Decimal>,
    pub delivery_date: Option<NaiveDate>,
    #[validate(required)]
    pub is_consolidated: Option<bool>,
    pub consolidated_at: Option<DateTime<Utc>>,
    pub purchased_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub conflict_status: Option<ConflictStatus>,
    #[validate(required, range(min = 1))]
    pub version: Option<i32>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub updated_at: Option<DateTime<Utc>>,
    pub purchased_by: Option<EntityRef>,
    #[validate(required)]
    pub weekly_plan: Option<EntityRef>,
}

impl From<ShoppingItemRow> for ShoppingItem {
    fn from(row: ShoppingItemRow) -> Self {
        Self {
            id: Some(row.id),
            product_name: Some(row.product_name),
            total_quantity: Some(row.total_quantity),
            unit: Some(row.unit.0),
            category: Some(row.category.0),
            budget_ids: row.budget_ids,
            client_names: row.client_names,
            is_purchased: Some(row.is_purchased),
            purchased_quantity: row.purchased_quantity,
            week_start: Some(row.week_start),
            week_end: Some(row.week_end),
            notes: row.notes,
            supplier: row.supplier,
            supplier_contact: row.supplier_contact,
            estimated_cost: sql::text(row.estimated_cost),
            actual_cost: sql::text(row.actual_cost),
            delivery_date: row.delivery_date,
            is_consolidated: Some(row.is_consolidated),
            consolidated_at: row.consolidated_at,
            purchased_at: row.purchased_at,
            conflict_status: Some(row.conflict_status.0),
            version: Some(row.version),
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
            purchased_by: entity_ref(row.purchased_by_id),
            weekly_plan: Some(row.weekly_plan_id.into()),
        }
    }
}

impl Resource for ShoppingItem {
    type Row = ShoppingItemRow;
    type Column = table::ShoppingItem;

    const ENTITY_NAME: &'static str = "shoppingItem";
    const TABLE: table::ShoppingItem = table::ShoppingItem::Table;
    const ID: table::ShoppingItem = table::ShoppingItem::Id;
    const COLUMNS: &'static [table::ShoppingItem] = &[
        table::ShoppingItem::ProductName,
        table::ShoppingItem::TotalQuantity,
        table::ShoppingItem::Unit,
        table::ShoppingItem::Category,
        table::ShoppingItem::BudgetIds,
        table::ShoppingItem::ClientNames,
        table::ShoppingItem::IsPurchased,
        table::ShoppingItem::PurchasedQuantity,
        table::ShoppingItem::WeekStart,
        table::ShoppingItem::WeekEnd,
        table::ShoppingItem::Notes,
        table::ShoppingItem::Supplier,
        table::ShoppingItem::SupplierContact,
        table::ShoppingItem::EstimatedCost,
        table::ShoppingItem::ActualCost,
        table::ShoppingItem::DeliveryDate,
        table::ShoppingItem::IsConsolidated,
        table::ShoppingItem::ConsolidatedAt,
        table::ShoppingItem::PurchasedAt,
        table::ShoppingItem::ConflictStatus,
        table::ShoppingItem::Version,
        table::ShoppingItem::CreatedAt,
        table::ShoppingItem::UpdatedAt,
        table::ShoppingItem::PurchasedById,
        table::ShoppingItem::WeeklyPlanId,
    ];
    const MONEY: &'static [table::ShoppingItem] = &[
        table::ShoppingItem::EstimatedCost,
        table::ShoppingItem::ActualCost,
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn values(&self) -> Vec<Value> {
        vec![
            self.product_name.clone().into(),
            self.total_quantity.into(),
            sql::name(self.unit),
            sql::name(self.category),
            self.budget_ids.clone().into(),
            self.client_names.clone().into(),
            self.is_purchased.into(),
            self.purchased_quantity.into(),
            self.week_start.into(),
            self.week_end.into(),
            self.notes.clone().into(),
            self.supplier.clone().into(),
            self.supplier_contact.clone().into(),
            sql::money(self.estimated_cost),
            sql::money(self.actual_cost),
            self.delivery_date.into(),
            self.is_consolidated.into(),
            self.consolidated_at.into(),
            self.purchased_at.into(),
            sql::name(self.conflict_status),
            self.version.into(),
            self.created_at.into(),
            self.updated_at.into(),
            sql::reference(self.purchased_by),
            sql::reference(self.weekly_plan),
        ]
    }
}
