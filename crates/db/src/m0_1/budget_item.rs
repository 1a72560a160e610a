use sea_query::{ColumnDef, ForeignKey, Table, TableCreateStatement, TableDropStatement};

use crate::table::{Budget, BudgetItem};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(BudgetItem::Table)
        .col(
            ColumnDef::new(BudgetItem::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(BudgetItem::ItemType)
                .string()
                .string_len(20)
                .not_null(),
        )
        .col(
            ColumnDef::new(BudgetItem::TemplateId)
                .string()
                .string_len(100)
                .not_null(),
        )
        .col(
            ColumnDef::new(BudgetItem::TemplateName)
                .string()
                .string_len(200)
                .not_null(),
        )
        .col(ColumnDef::new(BudgetItem::Quantity).integer().not_null())
        .col(ColumnDef::new(BudgetItem::UnitPrice).string().not_null())
        .col(ColumnDef::new(BudgetItem::UnitCost).string())
        .col(ColumnDef::new(BudgetItem::TotalPrice).string().not_null())
        .col(ColumnDef::new(BudgetItem::TotalCost).string())
        .col(ColumnDef::new(BudgetItem::Customizations).text())
        .col(ColumnDef::new(BudgetItem::Notes).text())
        .col(
            ColumnDef::new(BudgetItem::IsCustomized)
                .boolean()
                .not_null(),
        )
        .col(ColumnDef::new(BudgetItem::Version).integer().not_null())
        .col(
            ColumnDef::new(BudgetItem::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(BudgetItem::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(ColumnDef::new(BudgetItem::BudgetId).integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_budget_item__budget_id")
                .from(BudgetItem::Table, BudgetItem::BudgetId)
                .to(Budget::Table, Budget::Id),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(BudgetItem::Table).to_owned()
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
