use sea_query::{ColumnDef, ForeignKey, Table, TableCreateStatement, TableDropStatement};

use crate::table::{AppUser, BudgetTemplate};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(BudgetTemplate::Table)
        .col(
            ColumnDef::new(BudgetTemplate::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(BudgetTemplate::Name)
                .string()
                .string_len(100)
                .not_null(),
        )
        .col(ColumnDef::new(BudgetTemplate::Description).text())
        .col(
            ColumnDef::new(BudgetTemplate::Type)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(
            ColumnDef::new(BudgetTemplate::Category)
                .string()
                .string_len(50),
        )
        .col(
            ColumnDef::new(BudgetTemplate::IsActive)
                .boolean()
                .not_null(),
        )
        .col(
            ColumnDef::new(BudgetTemplate::IsSystem)
                .boolean()
                .not_null(),
        )
        .col(ColumnDef::new(BudgetTemplate::Configuration).text())
        .col(ColumnDef::new(BudgetTemplate::TemplateData).text())
        .col(ColumnDef::new(BudgetTemplate::Version).integer().not_null())
        .col(
            ColumnDef::new(BudgetTemplate::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(BudgetTemplate::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(BudgetTemplate::CreatedById)
                .integer()
                .not_null(),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_budget_template__created_by_id")
                .from(BudgetTemplate::Table, BudgetTemplate::CreatedById)
                .to(AppUser::Table, AppUser::Id),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(BudgetTemplate::Table).to_owned()
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
