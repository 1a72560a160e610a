use sea_query::{ColumnDef, ForeignKey, Table, TableCreateStatement, TableDropStatement};

use crate::table::{Budget, Payment};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Payment::Table)
        .col(
            ColumnDef::new(Payment::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Payment::Method)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(ColumnDef::new(Payment::Amount).string().not_null())
        .col(ColumnDef::new(Payment::PaymentDate).date().not_null())
        .col(ColumnDef::new(Payment::Reference).string().string_len(100))
        .col(ColumnDef::new(Payment::Notes).text())
        .col(ColumnDef::new(Payment::IsConfirmed).boolean().not_null())
        .col(
            ColumnDef::new(Payment::ConfirmationNumber)
                .string()
                .string_len(100),
        )
        .col(
            ColumnDef::new(Payment::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(Payment::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(ColumnDef::new(Payment::BudgetId).integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_payment__budget_id")
                .from(Payment::Table, Payment::BudgetId)
                .to(Budget::Table, Budget::Id),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Payment::Table).to_owned()
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
