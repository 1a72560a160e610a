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
    sql,
    types::{ProductCategory, ProductUnit},
    validate::non_negative,
};

#[derive(Debug, FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: Text<ProductCategory>,
    pub unit: Text<ProductUnit>,
    pub price_per_unit: Text<Decimal>,
    pub min_order_quantity: Option<f64>,
    pub max_order_quantity: Option<f64>,
    pub supplier: Option<String>,
    pub supplier_contact: Option<String>,
    pub lead_time: Option<i32>,
    pub shelf_life: Option<i32>,
    pub storage_conditions: Option<String>,
    pub is_active: bool,
    pub last_updated_price: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Option<i64>,
    #[validate(required, length(max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(required)]
    pub category: Option<ProductCategory>,
    #[validate(required)]
    pub unit: Option<ProductUnit>,
    #[validate(required, custom(function = "non_negative"))]
    pub price_per_unit: Option<Decimal>,
    #[validate(range(min = 0.0))]
    pub min_order_quantity: Option<f64>,
    #[validate(range(min = 0.0))]
    pub max_order_quantity: Option<f64>,
    #[validate(length(max = 100))]
    pub supplier: Option<String>,
    pub supplier_contact: Option<String>,
    #[validate(range(min = 0))]
    pub lead_time: Option<i32>,
    #[validate(range(min = 0))]
    pub shelf_life: Option<i32>,
    pub storage_conditions: Option<String>,
    #[validate(required)]
    pub is_active: Option<bool>,
    pub last_updated_price: Option<DateTime<Utc>>,
    #[validate(required)]
    pub created_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub updated_at: Option<DateTime<Utc>>,
    #[validate(required)]
    pub created_by: Option<EntityRef>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: Some(row.id),
            name: Some(row.name),
            description: row.description,
            category: Some(row.category.0),
            unit: Some(row.unit.0),
            price_per_unit: Some(row.price_per_unit.0),
            min_order_quantity: row.min_order_quantity,
            max_order_quantity: row.max_order_quantity,
            supplier: row.supplier,
            supplier_contact: row.supplier_contact,
            lead_time: row.lead_time,
            shelf_life: row.shelf_life,
            storage_conditions: row.storage_conditions,
            is_active: Some(row.is_active),
            last_updated_price: row.last_updated_price,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
            created_by: Some(row.created_by_id.into()),
        }
    }
}

impl Resource for Product {
    type Row = ProductRow;
    type Column = table::Product;

    const ENTITY_NAME: &'static str = "product";
    const TABLE: table::Product = table::Product::Table;
    const ID: table::Product = table::Product::Id;
    const COLUMNS: &'static [table::Product] = &[
        table::Product::Name,
        table::Product::Description,
        table::Product::Category,
        table::Product::Unit,
        table::Product::PricePerUnit,
        table::Product::MinOrderQuantity,
        table::Product::MaxOrderQuantity,
        table::Product::Supplier,
        table::Product::SupplierContact,
        table::Product::LeadTime,
        table::Product::ShelfLife,
        table::Product::StorageConditions,
        table::Product::IsActive,
        table::Product::LastUpdatedPrice,
        table::Product::CreatedAt,
        table::Product::UpdatedAt,
        table::Product::CreatedById,
    ];
    const MONEY: &'static [table::Product] = &[
        table::Product::PricePerUnit,
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
            sql::name(self.unit),
            sql::money(self.price_per_unit),
            self.min_order_quantity.into(),
            self.max_order_quantity.into(),
            self.supplier.clone().into(),
            self.supplier_contact.clone().into(),
            self.lead_time.into(),
            self.shelf_life.into(),
            self.storage_conditions.clone().into(),
            self.is_active.into(),
            self.last_updated_price.into(),
            self.created_at.into(),
            self.updated_at.into(),
            sql::reference(self.created_by),
        ]
    }
}
