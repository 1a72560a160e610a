use sea_query::{
    ColumnDef, ForeignKey, Index, IndexCreateStatement, IndexDropStatement, Table,
    TableCreateStatement, TableDropStatement,
};

use crate::table::{Budget, CookingSchedule, Task};

pub struct CreateTable;
pub struct CreateRelatedTaskIdx;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(CookingSchedule::Table)
        .col(
            ColumnDef::new(CookingSchedule::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(CookingSchedule::EventDate).date().not_null())
        .col(
            ColumnDef::new(CookingSchedule::CookingTime)
                .time()
                .not_null(),
        )
        .col(
            ColumnDef::new(CookingSchedule::MealType)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(
            ColumnDef::new(CookingSchedule::MenuName)
                .string()
                .string_len(100)
                .not_null(),
        )
        .col(
            ColumnDef::new(CookingSchedule::GuestCount)
                .integer()
                .not_null(),
        )
        .col(ColumnDef::new(CookingSchedule::SpecialInstructions).text())
        .col(
            ColumnDef::new(CookingSchedule::IsCompleted)
                .boolean()
                .not_null(),
        )
        .col(
            ColumnDef::new(CookingSchedule::CompletedAt)
                .timestamp_with_time_zone(),
        )
        .col(
            ColumnDef::new(CookingSchedule::IngredientsReady)
                .boolean()
                .not_null(),
        )
        .col(ColumnDef::new(CookingSchedule::EstimatedDuration).integer())
        .col(ColumnDef::new(CookingSchedule::ActualDuration).integer())
        .col(
            ColumnDef::new(CookingSchedule::StartedAt)
                .timestamp_with_time_zone(),
        )
        .col(
            ColumnDef::new(CookingSchedule::Version)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(CookingSchedule::ConflictStatus)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(
            ColumnDef::new(CookingSchedule::LastModifiedBy)
                .string()
                .string_len(50),
        )
        .col(
            ColumnDef::new(CookingSchedule::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(CookingSchedule::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(ColumnDef::new(CookingSchedule::RelatedTaskId).integer())
        .col(
            ColumnDef::new(CookingSchedule::BudgetId)
                .integer()
                .not_null(),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_cooking_schedule__related_task_id")
                .from(CookingSchedule::Table, CookingSchedule::RelatedTaskId)
                .to(Task::Table, Task::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_cooking_schedule__budget_id")
                .from(CookingSchedule::Table, CookingSchedule::BudgetId)
                .to(Budget::Table, Budget::Id),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(CookingSchedule::Table).to_owned()
}

fn create_related_task_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_cooking_schedule_related_task_id")
        .table(CookingSchedule::Table)
        .unique()
        .col(CookingSchedule::RelatedTaskId)
        .to_owned()
}

fn drop_related_task_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_cooking_schedule_related_task_id")
        .table(CookingSchedule::Table)
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
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateRelatedTaskIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_related_task_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_related_task_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
