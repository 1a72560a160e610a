use sea_query::{
    ColumnDef, ForeignKey, Index, IndexCreateStatement, IndexDropStatement, Table,
    TableCreateStatement, TableDropStatement,
};

use crate::table::{AppUser, SystemConfig};

pub struct CreateTable;
pub struct CreateConfigKeyIdx;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(SystemConfig::Table)
        .col(
            ColumnDef::new(SystemConfig::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(SystemConfig::ConfigKey)
                .string()
                .string_len(100)
                .not_null(),
        )
        .col(ColumnDef::new(SystemConfig::ConfigValue).text().not_null())
        .col(
            ColumnDef::new(SystemConfig::Description)
                .string()
                .string_len(500),
        )
        .col(ColumnDef::new(SystemConfig::IsActive).boolean().not_null())
        .col(
            ColumnDef::new(SystemConfig::Category)
                .string()
                .string_len(50),
        )
        .col(ColumnDef::new(SystemConfig::IsSystem).boolean().not_null())
        .col(
            ColumnDef::new(SystemConfig::DataType)
                .string()
                .string_len(20),
        )
        .col(ColumnDef::new(SystemConfig::ValidationRules).text())
        .col(
            ColumnDef::new(SystemConfig::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(SystemConfig::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(SystemConfig::CreatedById)
                .integer()
                .not_null(),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_system_config__created_by_id")
                .from(SystemConfig::Table, SystemConfig::CreatedById)
                .to(AppUser::Table, AppUser::Id),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(SystemConfig::Table).to_owned()
}

fn create_config_key_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_system_config_config_key")
        .table(SystemConfig::Table)
        .unique()
        .col(SystemConfig::ConfigKey)
        .to_owned()
}

fn drop_config_key_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_system_config_config_key")
        .table(SystemConfig::Table)
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
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateConfigKeyIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_config_key_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_config_key_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
