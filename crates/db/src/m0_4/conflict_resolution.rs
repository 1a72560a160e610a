use sea_query::{ColumnDef, ForeignKey, Table, TableCreateStatement, TableDropStatement};

use crate::table::{AppUser, ConflictResolution};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(ConflictResolution::Table)
        .col(
            ColumnDef::new(ConflictResolution::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(ConflictResolution::EntityType)
                .string()
                .string_len(50)
                .not_null(),
        )
        .col(
            ColumnDef::new(ConflictResolution::EntityId)
                .string()
                .string_len(100)
                .not_null(),
        )
        .col(
            ColumnDef::new(ConflictResolution::FieldName)
                .string()
                .string_len(100),
        )
        .col(ColumnDef::new(ConflictResolution::LocalValue).text())
        .col(ColumnDef::new(ConflictResolution::RemoteValue).text())
        .col(ColumnDef::new(ConflictResolution::ResolvedValue).text())
        .col(
            ColumnDef::new(ConflictResolution::ResolutionStrategy)
                .string()
                .string_len(50)
                .not_null(),
        )
        .col(
            ColumnDef::new(ConflictResolution::IsResolved)
                .boolean()
                .not_null(),
        )
        .col(
            ColumnDef::new(ConflictResolution::ResolvedAt)
                .timestamp_with_time_zone(),
        )
        .col(
            ColumnDef::new(ConflictResolution::ConflictDetectedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(ConflictResolution::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(ColumnDef::new(ConflictResolution::ConflictUserId).integer())
        .col(ColumnDef::new(ConflictResolution::ResolvedById).integer())
        .foreign_key(
            ForeignKey::create()
                .name("fk_conflict_resolution__conflict_user_id")
                .from(ConflictResolution::Table, ConflictResolution::ConflictUserId)
                .to(AppUser::Table, AppUser::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_conflict_resolution__resolved_by_id")
                .from(ConflictResolution::Table, ConflictResolution::ResolvedById)
                .to(AppUser::Table, AppUser::Id),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(ConflictResolution::Table).to_owned()
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
