use sea_query::{ColumnDef, ForeignKey, Table, TableCreateStatement, TableDropStatement};

use crate::table::{AppUser, WeeklyPlan};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(WeeklyPlan::Table)
        .col(
            ColumnDef::new(WeeklyPlan::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(WeeklyPlan::WeekStart).date().not_null())
        .col(ColumnDef::new(WeeklyPlan::WeekEnd).date().not_null())
        .col(
            ColumnDef::new(WeeklyPlan::PlanName)
                .string()
                .string_len(100)
                .not_null(),
        )
        .col(
            ColumnDef::new(WeeklyPlan::Status)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(ColumnDef::new(WeeklyPlan::TotalBudgets).integer())
        .col(ColumnDef::new(WeeklyPlan::TotalGuests).integer())
        .col(ColumnDef::new(WeeklyPlan::EstimatedCost).string())
        .col(ColumnDef::new(WeeklyPlan::ActualCost).string())
        .col(ColumnDef::new(WeeklyPlan::Notes).text())
        .col(
            ColumnDef::new(WeeklyPlan::IsConsolidated)
                .boolean()
                .not_null(),
        )
        .col(
            ColumnDef::new(WeeklyPlan::ConsolidatedAt)
                .timestamp_with_time_zone(),
        )
        .col(
            ColumnDef::new(WeeklyPlan::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(WeeklyPlan::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(ColumnDef::new(WeeklyPlan::CreatedById).integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_weekly_plan__created_by_id")
                .from(WeeklyPlan::Table, WeeklyPlan::CreatedById)
                .to(AppUser::Table, AppUser::Id),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(WeeklyPlan::Table).to_owned()
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
