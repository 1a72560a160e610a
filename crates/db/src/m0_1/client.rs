use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Client;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Client::Table)
        .col(
            ColumnDef::new(Client::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Client::Name)
                .string()
                .string_len(100)
                .not_null(),
        )
        .col(
            ColumnDef::new(Client::Email)
                .string()
                .string_len(254)
                .not_null(),
        )
        .col(
            ColumnDef::new(Client::Phone)
                .string()
                .string_len(20)
                .not_null(),
        )
        .col(ColumnDef::new(Client::Address).text())
        .col(ColumnDef::new(Client::Company).string().string_len(100))
        .col(ColumnDef::new(Client::TaxId).string().string_len(50))
        .col(ColumnDef::new(Client::Notes).text())
        .col(ColumnDef::new(Client::IsActive).boolean().not_null())
        .col(
            ColumnDef::new(Client::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(Client::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Client::Table).to_owned()
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
