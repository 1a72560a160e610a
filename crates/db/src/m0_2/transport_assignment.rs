use sea_query::{ColumnDef, ForeignKey, Table, TableCreateStatement, TableDropStatement};

use crate::table::{Activity, Budget, Transport, TransportAssignment};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(TransportAssignment::Table)
        .col(
            ColumnDef::new(TransportAssignment::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(TransportAssignment::GuestCount)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(TransportAssignment::Duration)
                .double()
                .not_null(),
        )
        .col(ColumnDef::new(TransportAssignment::Distance).double())
        .col(
            ColumnDef::new(TransportAssignment::PickupLocation)
                .string()
                .string_len(200),
        )
        .col(
            ColumnDef::new(TransportAssignment::DropoffLocation)
                .string()
                .string_len(200),
        )
        .col(
            ColumnDef::new(TransportAssignment::PickupTime)
                .timestamp_with_time_zone(),
        )
        .col(
            ColumnDef::new(TransportAssignment::ReturnTime)
                .timestamp_with_time_zone(),
        )
        .col(
            ColumnDef::new(TransportAssignment::CalculatedPrice)
                .string()
                .not_null(),
        )
        .col(ColumnDef::new(TransportAssignment::CalculatedCost).string())
        .col(ColumnDef::new(TransportAssignment::Notes).text())
        .col(
            ColumnDef::new(TransportAssignment::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(TransportAssignment::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(TransportAssignment::TransportId)
                .integer()
                .not_null(),
        )
        .col(ColumnDef::new(TransportAssignment::BudgetId).integer())
        .col(ColumnDef::new(TransportAssignment::ActivityId).integer())
        .foreign_key(
            ForeignKey::create()
                .name("fk_transport_assignment__transport_id")
                .from(TransportAssignment::Table, TransportAssignment::TransportId)
                .to(Transport::Table, Transport::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_transport_assignment__budget_id")
                .from(TransportAssignment::Table, TransportAssignment::BudgetId)
                .to(Budget::Table, Budget::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_transport_assignment__activity_id")
                .from(TransportAssignment::Table, TransportAssignment::ActivityId)
                .to(Activity::Table, Activity::Id),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(TransportAssignment::Table).to_owned()
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
