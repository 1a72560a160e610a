use sea_query::{ColumnDef, ForeignKey, Table, TableCreateStatement, TableDropStatement};

use crate::table::{CookingIngredient, CookingSchedule, ProductRequirement};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(CookingIngredient::Table)
        .col(
            ColumnDef::new(CookingIngredient::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(CookingIngredient::OriginalQuantity)
                .double()
                .not_null(),
        )
        .col(ColumnDef::new(CookingIngredient::ModifiedQuantity).double())
        .col(
            ColumnDef::new(CookingIngredient::ModifiedUnit)
                .string()
                .string_len(30),
        )
        .col(ColumnDef::new(CookingIngredient::Notes).text())
        .col(
            ColumnDef::new(CookingIngredient::AddedByUser)
                .boolean()
                .not_null(),
        )
        .col(
            ColumnDef::new(CookingIngredient::IsAvailable)
                .boolean()
                .not_null(),
        )
        .col(
            ColumnDef::new(CookingIngredient::AvailableAt)
                .timestamp_with_time_zone(),
        )
        .col(
            ColumnDef::new(CookingIngredient::LastModifiedBy)
                .string()
                .string_len(50),
        )
        .col(
            ColumnDef::new(CookingIngredient::Version)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(CookingIngredient::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(CookingIngredient::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(CookingIngredient::ProductRequirementId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(CookingIngredient::CookingScheduleId)
                .integer()
                .not_null(),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_cooking_ingredient__product_requirement_id")
                .from(CookingIngredient::Table, CookingIngredient::ProductRequirementId)
                .to(ProductRequirement::Table, ProductRequirement::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_cooking_ingredient__cooking_schedule_id")
                .from(CookingIngredient::Table, CookingIngredient::CookingScheduleId)
                .to(CookingSchedule::Table, CookingSchedule::Id),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(CookingIngredient::Table).to_owned()
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
