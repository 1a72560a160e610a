use sea_query::{
    ColumnDef, ForeignKey, Index, IndexCreateStatement, IndexDropStatement, Table,
    TableCreateStatement, TableDropStatement,
};

use crate::table::{AppUser, Notification};

pub struct CreateTable;
pub struct CreateTargetRoleIdx;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Notification::Table)
        .col(
            ColumnDef::new(Notification::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Notification::Title)
                .string()
                .string_len(200)
                .not_null(),
        )
        .col(ColumnDef::new(Notification::Message).text().not_null())
        .col(
            ColumnDef::new(Notification::Type)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(
            ColumnDef::new(Notification::TargetRole)
                .string()
                .string_len(30),
        )
        .col(
            ColumnDef::new(Notification::RelatedEntityType)
                .string()
                .string_len(50),
        )
        .col(
            ColumnDef::new(Notification::RelatedEntityId)
                .string()
                .string_len(100),
        )
        .col(ColumnDef::new(Notification::IsRead).boolean().not_null())
        .col(ColumnDef::new(Notification::IsGlobal).boolean().not_null())
        .col(
            ColumnDef::new(Notification::ActionRequired)
                .boolean()
                .not_null(),
        )
        .col(
            ColumnDef::new(Notification::ActionUrl)
                .string()
                .string_len(500),
        )
        .col(
            ColumnDef::new(Notification::Priority)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(
            ColumnDef::new(Notification::ExpiresAt)
                .timestamp_with_time_zone(),
        )
        .col(
            ColumnDef::new(Notification::ReadAt)
                .timestamp_with_time_zone(),
        )
        .col(
            ColumnDef::new(Notification::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(Notification::CreatedById)
                .integer()
                .not_null(),
        )
        .col(ColumnDef::new(Notification::TargetUserId).integer())
        .foreign_key(
            ForeignKey::create()
                .name("fk_notification__created_by_id")
                .from(Notification::Table, Notification::CreatedById)
                .to(AppUser::Table, AppUser::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_notification__target_user_id")
                .from(Notification::Table, Notification::TargetUserId)
                .to(AppUser::Table, AppUser::Id),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Notification::Table).to_owned()
}

fn create_target_role_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_notification_target_role")
        .table(Notification::Table)
        .col(Notification::TargetRole)
        .to_owned()
}

fn drop_target_role_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_notification_target_role")
        .table(Notification::Table)
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
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTargetRoleIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_target_role_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_target_role_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
