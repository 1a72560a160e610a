use sea_query::{ColumnDef, ForeignKey, Table, TableCreateStatement, TableDropStatement};

use crate::table::{Activity, FoodItem, Product, ProductRequirement, Task};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(ProductRequirement::Table)
        .col(
            ColumnDef::new(ProductRequirement::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(ProductRequirement::Quantity)
                .double()
                .not_null(),
        )
        .col(
            ColumnDef::new(ProductRequirement::Unit)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(ColumnDef::new(ProductRequirement::Notes).text())
        .col(ColumnDef::new(ProductRequirement::EstimatedCost).string())
        .col(ColumnDef::new(ProductRequirement::ActualCost).string())
        .col(
            ColumnDef::new(ProductRequirement::IsPurchased)
                .boolean()
                .not_null(),
        )
        .col(
            ColumnDef::new(ProductRequirement::PurchasedBy)
                .string()
                .string_len(100),
        )
        .col(
            ColumnDef::new(ProductRequirement::PurchasedAt)
                .timestamp_with_time_zone(),
        )
        .col(
            ColumnDef::new(ProductRequirement::Version)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(ProductRequirement::ConflictStatus)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(
            ColumnDef::new(ProductRequirement::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(ProductRequirement::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(ProductRequirement::ProductId)
                .integer()
                .not_null(),
        )
        .col(ColumnDef::new(ProductRequirement::RelatedTaskId).integer())
        .col(ColumnDef::new(ProductRequirement::FoodItemId).integer())
        .col(ColumnDef::new(ProductRequirement::ActivityId).integer())
        .foreign_key(
            ForeignKey::create()
                .name("fk_product_requirement__product_id")
                .from(ProductRequirement::Table, ProductRequirement::ProductId)
                .to(Product::Table, Product::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_product_requirement__related_task_id")
                .from(ProductRequirement::Table, ProductRequirement::RelatedTaskId)
                .to(Task::Table, Task::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_product_requirement__food_item_id")
                .from(ProductRequirement::Table, ProductRequirement::FoodItemId)
                .to(FoodItem::Table, FoodItem::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_product_requirement__activity_id")
                .from(ProductRequirement::Table, ProductRequirement::ActivityId)
                .to(Activity::Table, Activity::Id),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(ProductRequirement::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
