use sea_query::{
    ColumnDef, ForeignKey, Index, IndexCreateStatement, IndexDropStatement, Table,
    TableCreateStatement, TableDropStatement,
};

use crate::table::{AppUser, Budget, Task, WeeklyPlan};

pub struct CreateTable;
pub struct CreateRelatedBudgetIdx;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Task::Table)
        .col(
            ColumnDef::new(Task::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Task::Title)
                .string()
                .string_len(200)
                .not_null(),
        )
        .col(ColumnDef::new(Task::Description).text())
        .col(
            ColumnDef::new(Task::Type)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(
            ColumnDef::new(Task::Priority)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(
            ColumnDef::new(Task::Status)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(
            ColumnDef::new(Task::AssignedToRole)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(ColumnDef::new(Task::DueDate).date().not_null())
        .col(ColumnDef::new(Task::DueTime).time())
        .col(ColumnDef::new(Task::EstimatedDuration).integer())
        .col(ColumnDef::new(Task::ActualDuration).integer())
        .col(ColumnDef::new(Task::Location).string().string_len(200))
        .col(ColumnDef::new(Task::Requirements).text())
        .col(ColumnDef::new(Task::Notes).text())
        .col(ColumnDef::new(Task::InvoiceUrl).string().string_len(500))
        .col(ColumnDef::new(Task::AutoScheduled).boolean().not_null())
        .col(ColumnDef::new(Task::IsRecurring).boolean().not_null())
        .col(ColumnDef::new(Task::ParentTaskId).string().string_len(100))
        .col(ColumnDef::new(Task::CompletedAt).timestamp_with_time_zone())
        .col(ColumnDef::new(Task::StartedAt).timestamp_with_time_zone())
        .col(ColumnDef::new(Task::Version).integer().not_null())
        .col(
            ColumnDef::new(Task::ConflictStatus)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(ColumnDef::new(Task::LastModifiedBy).string().string_len(50))
        .col(
            ColumnDef::new(Task::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(Task::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(ColumnDef::new(Task::CreatedById).integer().not_null())
        .col(ColumnDef::new(Task::AssignedToId).integer())
        .col(ColumnDef::new(Task::WeeklyPlanId).integer())
        .col(ColumnDef::new(Task::RelatedBudgetId).integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_task__created_by_id")
                .from(Task::Table, Task::CreatedById)
                .to(AppUser::Table, AppUser::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_task__assigned_to_id")
                .from(Task::Table, Task::AssignedToId)
                .to(AppUser::Table, AppUser::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_task__weekly_plan_id")
                .from(Task::Table, Task::WeeklyPlanId)
                .to(WeeklyPlan::Table, WeeklyPlan::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_task__related_budget_id")
                .from(Task::Table, Task::RelatedBudgetId)
                .to(Budget::Table, Budget::Id),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Task::Table).to_owned()
}

fn create_related_budget_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_task_related_budget_id")
        .table(Task::Table)
        .col(Task::RelatedBudgetId)
        .to_owned()
}

fn drop_related_budget_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_task_related_budget_id")
        .table(Task::Table)
        .to_owned()
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

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateRelatedBudgetIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_related_budget_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_related_budget_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
