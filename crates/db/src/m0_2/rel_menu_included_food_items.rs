use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::{FoodItem, Menu, RelMenuIncludedFoodItems};

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(RelMenuIncludedFoodItems::Table)
        .col(
            ColumnDef::new(RelMenuIncludedFoodItems::MenuId)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(RelMenuIncludedFoodItems::IncludedFoodItemsId)
                .integer()
                .not_null(),
        )
        .primary_key(
            Index::create()
                .col(RelMenuIncludedFoodItems::MenuId)
                .col(RelMenuIncludedFoodItems::IncludedFoodItemsId),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_rel_menu__included_food_items__menu_id")
                .from(RelMenuIncludedFoodItems::Table, RelMenuIncludedFoodItems::MenuId)
                .to(Menu::Table, Menu::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_rel_menu__included_food_items__included_food_items_id")
                .from(
                    RelMenuIncludedFoodItems::Table,
                    RelMenuIncludedFoodItems::IncludedFoodItemsId,
                )
                .to(FoodItem::Table, FoodItem::Id),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop()
        .table(RelMenuIncludedFoodItems::Table)
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
