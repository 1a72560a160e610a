use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Accommodation;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Accommodation::Table)
        .col(
            ColumnDef::new(Accommodation::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Accommodation::Name)
                .string()
                .string_len(100)
                .not_null(),
        )
        .col(ColumnDef::new(Accommodation::Description).text())
        .col(
            ColumnDef::new(Accommodation::Type)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(
            ColumnDef::new(Accommodation::PricePerNight)
                .string()
                .not_null(),
        )
        .col(ColumnDef::new(Accommodation::CostPerNight).string())
        .col(
            ColumnDef::new(Accommodation::MaxOccupancy)
                .integer()
                .not_null(),
        )
        .col(ColumnDef::new(Accommodation::Address).text())
        .col(ColumnDef::new(Accommodation::Amenities).text())
        .col(
            ColumnDef::new(Accommodation::CheckInTime)
                .string()
                .string_len(10),
        )
        .col(
            ColumnDef::new(Accommodation::CheckOutTime)
                .string()
                .string_len(10),
        )
        .col(ColumnDef::new(Accommodation::Rating).double())
        .col(ColumnDef::new(Accommodation::ContactInfo).text())
        .col(ColumnDef::new(Accommodation::IsActive).boolean().not_null())
        .col(
            ColumnDef::new(Accommodation::IsTemplate)
                .boolean()
                .not_null(),
        )
        .col(
            ColumnDef::new(Accommodation::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(Accommodation::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Accommodation::Table).to_owned()
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
