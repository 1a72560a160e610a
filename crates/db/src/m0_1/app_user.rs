use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::AppUser;

pub struct CreateTable;
pub struct CreateLoginIdx;
pub struct CreateEmailIdx;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(AppUser::Table)
        .col(
            ColumnDef::new(AppUser::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(AppUser::Login)
                .string()
                .string_len(50)
                .not_null(),
        )
        .col(ColumnDef::new(AppUser::FirstName).string().string_len(50))
        .col(ColumnDef::new(AppUser::LastName).string().string_len(50))
        .col(
            ColumnDef::new(AppUser::Email)
                .string()
                .string_len(254)
                .not_null(),
        )
        .col(ColumnDef::new(AppUser::Phone).string().string_len(20))
        .col(
            ColumnDef::new(AppUser::Role)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(ColumnDef::new(AppUser::IsActive).boolean().not_null())
        .col(
            ColumnDef::new(AppUser::ProfilePicture)
                .string()
                .string_len(500),
        )
        .col(ColumnDef::new(AppUser::Preferences).text())
        .col(
            ColumnDef::new(AppUser::LastLoginAt)
                .timestamp_with_time_zone(),
        )
        .col(
            ColumnDef::new(AppUser::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(AppUser::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(AppUser::Table).to_owned()
}

fn create_login_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_app_user_login")
        .table(AppUser::Table)
        .unique()
        .col(AppUser::Login)
        .to_owned()
}

fn drop_login_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_app_user_login")
        .table(AppUser::Table)
        .to_owned()
}

fn create_email_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_app_user_email")
        .table(AppUser::Table)
        .unique()
        .col(AppUser::Email)
        .to_owned()
}

fn drop_email_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_app_user_email")
        .table(AppUser::Table)
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
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateLoginIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_login_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_login_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateEmailIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_email_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_email_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
