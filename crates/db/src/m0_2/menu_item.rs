use sea_query::{ColumnDef, ForeignKey, Table, TableCreateStatement, TableDropStatement};

use crate::table::{Menu, MenuItem};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(MenuItem::Table)
        .col(
            ColumnDef::new(MenuItem::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(MenuItem::Name)
                .string()
                .string_len(100)
                .not_null(),
        )
        .col(ColumnDef::new(MenuItem::Description).text())
        .col(
            ColumnDef::new(MenuItem::Category)
                .string()
                .string_len(30)
                .not_null(),
        )
        .col(ColumnDef::new(MenuItem::Price).string().not_null())
        .col(ColumnDef::new(MenuItem::Cost).string())
        .col(ColumnDef::new(MenuItem::Allergens).text())
        .col(ColumnDef::new(MenuItem::DietaryInfo).text())
        .col(ColumnDef::new(MenuItem::PreparationTime).integer())
        .col(ColumnDef::new(MenuItem::IsActive).boolean().not_null())
        .col(
            ColumnDef::new(MenuItem::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(MenuItem::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(ColumnDef::new(MenuItem::MenuId).integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_menu_item__menu_id")
                .from(MenuItem::Table, MenuItem::MenuId)
                .to(Menu::Table, Menu::Id),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(MenuItem::Table).to_owned()
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
