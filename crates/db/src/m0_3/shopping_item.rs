use sea_query::{ColumnDef, ForeignKey, Table, TableCreateStatement, TableDropStatement};

use crate::table::{AppUser, ShoppingItem, WeeklyPlan};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(ShoppingItem::Table)
        .col(
            ColumnDef::new(ShoppingItem::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(ShoppingItem::ProductName)
                .string()
                .string_len(100)
                .not_null(),
        )
        .col(
            ColumnDef::new(ShoppingItem::TotalQuantity)
                .double()
                .not_null(),
        )
        .col(
            ColumnDef::new(ShoppingItem::Unit)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(
            ColumnDef::new(ShoppingItem::Category)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(ColumnDef::new(ShoppingItem::BudgetIds).text())
        .col(ColumnDef::new(ShoppingItem::ClientNames).text())
        .col(
            ColumnDef::new(ShoppingItem::IsPurchased)
                .boolean()
                .not_null(),
        )
        .col(ColumnDef::new(ShoppingItem::PurchasedQuantity).double())
        .col(ColumnDef::new(ShoppingItem::WeekStart).date().not_null())
        .col(ColumnDef::new(ShoppingItem::WeekEnd).date().not_null())
        .col(ColumnDef::new(ShoppingItem::Notes).text())
        .col(
            ColumnDef::new(ShoppingItem::Supplier)
                .string()
                .string_len(100),
        )
        .col(
            ColumnDef::new(ShoppingItem::SupplierContact)
                .string()
                .string_len(200),
        )
        .col(ColumnDef::new(ShoppingItem::EstimatedCost).string())
        .col(ColumnDef::new(ShoppingItem::ActualCost).string())
        .col(ColumnDef::new(ShoppingItem::DeliveryDate).date())
        .col(
            ColumnDef::new(ShoppingItem::IsConsolidated)
                .boolean()
                .not_null(),
        )
        .col(
            ColumnDef::new(ShoppingItem::ConsolidatedAt)
                .timestamp_with_time_zone(),
        )
        .col(
            ColumnDef::new(ShoppingItem::PurchasedAt)
                .timestamp_with_time_zone(),
        )
        .col(
            ColumnDef::new(ShoppingItem::ConflictStatus)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(ColumnDef::new(ShoppingItem::Version).integer().not_null())
        .col(
            ColumnDef::new(ShoppingItem::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(ShoppingItem::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(ColumnDef::new(ShoppingItem::PurchasedById).integer())
        .col(
            ColumnDef::new(ShoppingItem::WeeklyPlanId)
                .integer()
                .not_null(),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_shopping_item__purchased_by_id")
                .from(ShoppingItem::Table, ShoppingItem::PurchasedById)
                .to(AppUser::Table, AppUser::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_shopping_item__weekly_plan_id")
                .from(ShoppingItem::Table, ShoppingItem::WeeklyPlanId)
                .to(WeeklyPlan::Table, WeeklyPlan::Id),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(ShoppingItem::Table).to_owned()
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
