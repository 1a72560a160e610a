use sea_query::{ColumnDef, ForeignKey, Table, TableCreateStatement, TableDropStatement};

use crate::table::{AppUser, AuditLog};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(AuditLog::Table)
        .col(
            ColumnDef::new(AuditLog::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(AuditLog::EntityType)
                .string()
                .string_len(50)
                .not_null(),
        )
        .col(
            ColumnDef::new(AuditLog::EntityId)
                .string()
                .string_len(100)
                .not_null(),
        )
        .col(
            ColumnDef::new(AuditLog::Action)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(ColumnDef::new(AuditLog::OldValue).text())
        .col(ColumnDef::new(AuditLog::NewValue).text())
        .col(ColumnDef::new(AuditLog::FieldName).string().string_len(100))
        .col(ColumnDef::new(AuditLog::UserId).string().string_len(50))
        .col(ColumnDef::new(AuditLog::UserRole).string().string_len(30))
        .col(
            ColumnDef::new(AuditLog::Timestamp)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(ColumnDef::new(AuditLog::IpAddress).string().string_len(45))
        .col(ColumnDef::new(AuditLog::UserAgent).text())
        .col(ColumnDef::new(AuditLog::SessionId).string().string_len(100))
        .col(ColumnDef::new(AuditLog::AppUserId).integer())
        .foreign_key(
            ForeignKey::create()
                .name("fk_audit_log__app_user_id")
                .from(AuditLog::Table, AuditLog::AppUserId)
                .to(AppUser::Table, AppUser::Id),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(AuditLog::Table).to_owned()
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
