use sea_query::{ColumnDef, ForeignKey, Table, TableCreateStatement, TableDropStatement};

use crate::table::{AppUser, Need, Task};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Need::Table)
        .col(
            ColumnDef::new(Need::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Need::Description)
                .string()
                .string_len(500)
                .not_null(),
        )
        .col(ColumnDef::new(Need::Quantity).integer().not_null())
        .col(ColumnDef::new(Need::Unit).string().string_len(20))
        .col(
            ColumnDef::new(Need::Urgency)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(
            ColumnDef::new(Need::Status)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(ColumnDef::new(Need::RequestedDate).date().not_null())
        .col(ColumnDef::new(Need::RequiredDate).date())
        .col(ColumnDef::new(Need::FulfilledDate).date())
        .col(ColumnDef::new(Need::EstimatedCost).string())
        .col(ColumnDef::new(Need::ActualCost).string())
        .col(ColumnDef::new(Need::Notes).text())
        .col(
            ColumnDef::new(Need::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(Need::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(ColumnDef::new(Need::RequestedById).integer().not_null())
        .col(ColumnDef::new(Need::FulfilledById).integer())
        .col(ColumnDef::new(Need::ParentTaskId).integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_need__requested_by_id")
                .from(Need::Table, Need::RequestedById)
                .to(AppUser::Table, AppUser::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_need__fulfilled_by_id")
                .from(Need::Table, Need::FulfilledById)
                .to(AppUser::Table, AppUser::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_need__parent_task_id")
                .from(Need::Table, Need::ParentTaskId)
                .to(Task::Table, Task::Id),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Need::Table).to_owned()
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
