use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Activity;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Activity::Table)
        .col(
            ColumnDef::new(Activity::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Activity::Name)
                .string()
                .string_len(100)
                .not_null(),
        )
        .col(ColumnDef::new(Activity::Description).text())
        .col(
            ColumnDef::new(Activity::Category)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(ColumnDef::new(Activity::BasePrice).string().not_null())
        .col(ColumnDef::new(Activity::BaseCost).string())
        .col(ColumnDef::new(Activity::Duration).integer().not_null())
        .col(ColumnDef::new(Activity::MaxCapacity).integer().not_null())
        .col(
            ColumnDef::new(Activity::Location)
                .string()
                .string_len(200)
                .not_null(),
        )
        .col(
            ColumnDef::new(Activity::TransportRequired)
                .boolean()
                .not_null(),
        )
        .col(
            ColumnDef::new(Activity::TransportIncluded)
                .boolean()
                .not_null(),
        )
        .col(ColumnDef::new(Activity::EquipmentProvided).text())
        .col(ColumnDef::new(Activity::Requirements).text())
        .col(ColumnDef::new(Activity::IsActive).boolean().not_null())
        .col(ColumnDef::new(Activity::IsTemplate).boolean().not_null())
        .col(
            ColumnDef::new(Activity::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(Activity::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Activity::Table).to_owned()
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
