use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Menu;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Menu::Table)
        .col(
            ColumnDef::new(Menu::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Menu::Name)
                .string()
                .string_len(100)
                .not_null(),
        )
        .col(ColumnDef::new(Menu::Description).text())
        .col(
            ColumnDef::new(Menu::Type)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(ColumnDef::new(Menu::PricePerPerson).string().not_null())
        .col(ColumnDef::new(Menu::CostPerPerson).string())
        .col(ColumnDef::new(Menu::MinPeople).integer().not_null())
        .col(ColumnDef::new(Menu::MaxPeople).integer())
        .col(
            ColumnDef::new(Menu::Restaurant)
                .string()
                .string_len(100)
                .not_null(),
        )
        .col(ColumnDef::new(Menu::PreparationTime).integer())
        .col(ColumnDef::new(Menu::IsActive).boolean().not_null())
        .col(ColumnDef::new(Menu::IsTemplate).boolean().not_null())
        .col(ColumnDef::new(Menu::Version).integer().not_null())
        .col(
            ColumnDef::new(Menu::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(Menu::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Menu::Table).to_owned()
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
