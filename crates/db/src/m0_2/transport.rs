use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Transport;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Transport::Table)
        .col(
            ColumnDef::new(Transport::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Transport::Name)
                .string()
                .string_len(100)
                .not_null(),
        )
        .col(ColumnDef::new(Transport::Description).text())
        .col(
            ColumnDef::new(Transport::VehicleType)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(ColumnDef::new(Transport::Capacity).integer().not_null())
        .col(ColumnDef::new(Transport::PricePerHour).string().not_null())
        .col(ColumnDef::new(Transport::PricePerKm).string())
        .col(ColumnDef::new(Transport::CostPerHour).string())
        .col(ColumnDef::new(Transport::CostPerKm).string())
        .col(
            ColumnDef::new(Transport::IncludesDriver)
                .boolean()
                .not_null(),
        )
        .col(ColumnDef::new(Transport::DriverCost).string())
        .col(ColumnDef::new(Transport::FuelType).string().string_len(50))
        .col(ColumnDef::new(Transport::ContactInfo).text())
        .col(ColumnDef::new(Transport::IsActive).boolean().not_null())
        .col(ColumnDef::new(Transport::IsTemplate).boolean().not_null())
        .col(
            ColumnDef::new(Transport::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(Transport::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Transport::Table).to_owned()
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
