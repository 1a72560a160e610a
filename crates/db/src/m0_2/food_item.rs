use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::FoodItem;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(FoodItem::Table)
        .col(
            ColumnDef::new(FoodItem::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(FoodItem::Name)
                .string()
                .string_len(100)
                .not_null(),
        )
        .col(ColumnDef::new(FoodItem::Description).text())
        .col(
            ColumnDef::new(FoodItem::Category)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(ColumnDef::new(FoodItem::BasePrice).string().not_null())
        .col(ColumnDef::new(FoodItem::BaseCost).string())
        .col(
            ColumnDef::new(FoodItem::ServingSize)
                .string()
                .string_len(50),
        )
        .col(ColumnDef::new(FoodItem::GuestsPerUnit).integer().not_null())
        .col(ColumnDef::new(FoodItem::MaxUnits).integer())
        .col(ColumnDef::new(FoodItem::Allergens).text())
        .col(ColumnDef::new(FoodItem::DietaryInfo).text())
        .col(ColumnDef::new(FoodItem::IsActive).boolean().not_null())
        .col(ColumnDef::new(FoodItem::IsTemplate).boolean().not_null())
        .col(
            ColumnDef::new(FoodItem::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(FoodItem::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(FoodItem::Table).to_owned()
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
