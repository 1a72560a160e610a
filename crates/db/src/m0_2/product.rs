use sea_query::{ColumnDef, ForeignKey, Table, TableCreateStatement, TableDropStatement};

use crate::table::{AppUser, Product};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Product::Table)
        .col(
            ColumnDef::new(Product::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Product::Name)
                .string()
                .string_len(100)
                .not_null(),
        )
        .col(ColumnDef::new(Product::Description).text())
        .col(
            ColumnDef::new(Product::Category)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(
            ColumnDef::new(Product::Unit)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(ColumnDef::new(Product::PricePerUnit).string().not_null())
        .col(ColumnDef::new(Product::MinOrderQuantity).double())
        .col(ColumnDef::new(Product::MaxOrderQuantity).double())
        .col(ColumnDef::new(Product::Supplier).string().string_len(100))
        .col(ColumnDef::new(Product::SupplierContact).text())
        .col(ColumnDef::new(Product::LeadTime).integer())
        .col(ColumnDef::new(Product::ShelfLife).integer())
        .col(ColumnDef::new(Product::StorageConditions).text())
        .col(ColumnDef::new(Product::IsActive).boolean().not_null())
        .col(
            ColumnDef::new(Product::LastUpdatedPrice)
                .timestamp_with_time_zone(),
        )
        .col(
            ColumnDef::new(Product::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(Product::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(ColumnDef::new(Product::CreatedById).integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_product__created_by_id")
                .from(Product::Table, Product::CreatedById)
                .to(AppUser::Table, AppUser::Id),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Product::Table).to_owned()
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
