use sea_query::{
    ColumnDef, ForeignKey, Index, IndexCreateStatement, IndexDropStatement, Table,
    TableCreateStatement, TableDropStatement,
};

use crate::table::{AppUser, Budget, BudgetTemplate, Client, WeeklyPlan};

pub struct CreateTable;
pub struct CreateStatusIdx;
pub struct CreateEventDateIdx;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Budget::Table)
        .col(
            ColumnDef::new(Budget::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Budget::Name)
                .string()
                .string_len(200)
                .not_null(),
        )
        .col(
            ColumnDef::new(Budget::ClientName)
                .string()
                .string_len(100)
                .not_null(),
        )
        .col(ColumnDef::new(Budget::EventDate).date().not_null())
        .col(
            ColumnDef::new(Budget::EventLocation)
                .string()
                .string_len(200),
        )
        .col(ColumnDef::new(Budget::GuestCount).integer().not_null())
        .col(
            ColumnDef::new(Budget::EventGender)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(ColumnDef::new(Budget::Description).text())
        .col(ColumnDef::new(Budget::TotalAmount).string().not_null())
        .col(ColumnDef::new(Budget::TotalCost).string())
        .col(ColumnDef::new(Budget::ProfitMargin).string())
        .col(ColumnDef::new(Budget::MealsAmount).string())
        .col(ColumnDef::new(Budget::ActivitiesAmount).string())
        .col(ColumnDef::new(Budget::TransportAmount).string())
        .col(ColumnDef::new(Budget::AccommodationAmount).string())
        .col(
            ColumnDef::new(Budget::Status)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(
            ColumnDef::new(Budget::PaymentStatus)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(ColumnDef::new(Budget::IsClosed).boolean().not_null())
        .col(ColumnDef::new(Budget::InternalNotes).text())
        .col(ColumnDef::new(Budget::ClientNotes).text())
        .col(ColumnDef::new(Budget::TemplateId).string().string_len(100))
        .col(
            ColumnDef::new(Budget::WorkflowTriggered)
                .boolean()
                .not_null(),
        )
        .col(
            ColumnDef::new(Budget::LastWorkflowExecution)
                .timestamp_with_time_zone(),
        )
        .col(ColumnDef::new(Budget::Version).integer().not_null())
        .col(
            ColumnDef::new(Budget::ConflictStatus)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(
            ColumnDef::new(Budget::LastModifiedBy)
                .string()
                .string_len(50),
        )
        .col(
            ColumnDef::new(Budget::ApprovedAt)
                .timestamp_with_time_zone(),
        )
        .col(
            ColumnDef::new(Budget::ReservedAt)
                .timestamp_with_time_zone(),
        )
        .col(
            ColumnDef::new(Budget::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(Budget::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(ColumnDef::new(Budget::CreatedById).integer().not_null())
        .col(ColumnDef::new(Budget::AssignedToId).integer())
        .col(ColumnDef::new(Budget::ClientId).integer().not_null())
        .col(ColumnDef::new(Budget::BudgetTemplateId).integer())
        .col(ColumnDef::new(Budget::WeeklyPlanId).integer())
        .foreign_key(
            ForeignKey::create()
                .name("fk_budget__created_by_id")
                .from(Budget::Table, Budget::CreatedById)
                .to(AppUser::Table, AppUser::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_budget__assigned_to_id")
                .from(Budget::Table, Budget::AssignedToId)
                .to(AppUser::Table, AppUser::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_budget__client_id")
                .from(Budget::Table, Budget::ClientId)
                .to(Client::Table, Client::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_budget__budget_template_id")
                .from(Budget::Table, Budget::BudgetTemplateId)
                .to(BudgetTemplate::Table, BudgetTemplate::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_budget__weekly_plan_id")
                .from(Budget::Table, Budget::WeeklyPlanId)
                .to(WeeklyPlan::Table, WeeklyPlan::Id),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Budget::Table).to_owned()
}

fn create_status_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_budget_status")
        .table(Budget::Table)
        .col(Budget::Status)
        .to_owned()
}

fn drop_status_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_budget_status")
        .table(Budget::Table)
        .to_owned()
}

fn create_event_date_idx() -> IndexCreateStatement {
    Index::create()
        .name("idx_budget_event_date")
        .table(Budget::Table)
        .col(Budget::EventDate)
        .to_owned()
}

fn drop_event_date_idx() -> IndexDropStatement {
    Index::drop()
        .name("idx_budget_event_date")
        .table(Budget::Table)
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
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateStatusIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_status_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_status_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateEventDateIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_event_date_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_event_date_idx().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
