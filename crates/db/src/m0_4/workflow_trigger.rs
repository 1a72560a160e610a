use sea_query::{ColumnDef, ForeignKey, Table, TableCreateStatement, TableDropStatement};

use crate::table::{AppUser, WorkflowTrigger};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(WorkflowTrigger::Table)
        .col(
            ColumnDef::new(WorkflowTrigger::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(WorkflowTrigger::TriggerName)
                .string()
                .string_len(100)
                .not_null(),
        )
        .col(
            ColumnDef::new(WorkflowTrigger::EntityType)
                .string()
                .string_len(50)
                .not_null(),
        )
        .col(
            ColumnDef::new(WorkflowTrigger::TriggerCondition)
                .text()
                .not_null(),
        )
        .col(
            ColumnDef::new(WorkflowTrigger::ActionType)
                .string()
                .string_len(50)
                .not_null(),
        )
        .col(ColumnDef::new(WorkflowTrigger::ActionConfiguration).text())
        .col(
            ColumnDef::new(WorkflowTrigger::IsActive)
                .boolean()
                .not_null(),
        )
        .col(
            ColumnDef::new(WorkflowTrigger::ExecutionOrder)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(WorkflowTrigger::LastExecuted)
                .timestamp_with_time_zone(),
        )
        .col(ColumnDef::new(WorkflowTrigger::ExecutionCount).integer())
        .col(
            ColumnDef::new(WorkflowTrigger::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(WorkflowTrigger::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(WorkflowTrigger::CreatedById)
                .integer()
                .not_null(),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_workflow_trigger__created_by_id")
                .from(WorkflowTrigger::Table, WorkflowTrigger::CreatedById)
                .to(AppUser::Table, AppUser::Id),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(WorkflowTrigger::Table).to_owned()
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
