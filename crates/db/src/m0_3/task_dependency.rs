use sea_query::{
    ColumnDef, ForeignKey, Index, IndexCreateStatement, IndexDropStatement, Table,
    TableCreateStatement, TableDropStatement,
};

use crate::table::{Task, TaskDependency};

pub struct CreateTable;
pub struct CreatePrerequisiteTaskIdx;
pub struct CreateDependentTaskIdx;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(TaskDependency::Table)
        .col(
            ColumnDef::new(TaskDependency::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(TaskDependency::DependencyType)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(
            ColumnDef::new(TaskDependency::Notes)
                .string()
                .string_len(500),
        )
        .col(
            ColumnDef::new(TaskDependency::IsActive)
                .boolean()
                .not_null(),
        )
        .col(
            ColumnDef::new(TaskDependency::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(TaskDependency::PrerequisiteTaskId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(TaskDependency::DependentTaskId)
                .integer()
                .not_null(),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_task_dependency__prerequisite_task_id")
                .from(TaskDependency::Table, TaskDependency::PrerequisiteTaskId)
                .to(Task::Table, Task::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_task_dependency__dependent_task_id")
                .from(TaskDependency::Table, TaskDependency::DependentTaskId)
                .to(Task::Table, Task::Id),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(TaskDependency::Table).to_owned()
}

fn create_prerequisite_task_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_task_dependency_prerequisite_task_id")
        .table(TaskDependency::Table)
        .col(TaskDependency::PrerequisiteTaskId)
        .to_owned()
}

fn drop_prerequisite_task_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_task_dependency_prerequisite_task_id")
        .table(TaskDependency::Table)
        .to_owned()
}

fn create_dependent_task_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_task_dependency_dependent_task_id")
        .table(TaskDependency::Table)
        .col(TaskDependency::DependentTaskId)
        .to_owned()
}

fn drop_dependent_task_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_task_dependency_dependent_task_id")
        .table(TaskDependency::Table)
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
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreatePrerequisiteTaskIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_prerequisite_task_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_prerequisite_task_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateDependentTaskIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_dependent_task_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_dependent_task_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
