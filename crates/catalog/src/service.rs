use std::collections::{BTreeSet, HashMap};

use magnus_db::table::RelMenuIncludedFoodItems;
use magnus_shared::{Crud, EntityRef, Page, Pageable, Repository, Result};
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqliteConnection, SqlitePool};

use crate::Menu;

/// Menu storage including the `includedFoodItems` links.
#[derive(Clone)]
pub struct MenuService {
    repository: Repository<Menu>,
}

impl MenuService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: Repository::new(pool),
        }
    }

    async fn food_items(&self, menu_ids: &[i64]) -> Result<HashMap<i64, Vec<EntityRef>>> {
        if menu_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let statement = Query::select()
            .columns([
                RelMenuIncludedFoodItems::MenuId,
                RelMenuIncludedFoodItems::IncludedFoodItemsId,
            ])
            .from(RelMenuIncludedFoodItems::Table)
            .and_where(
                Expr::col(RelMenuIncludedFoodItems::MenuId).is_in(menu_ids.iter().copied()),
            )
            .order_by(RelMenuIncludedFoodItems::IncludedFoodItemsId, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let links = sqlx::query_as_with::<_, (i64, i64), _>(&sql, values)
            .fetch_all(self.repository.pool())
            .await?;

        let mut items: HashMap<i64, Vec<EntityRef>> = HashMap::new();
        for (menu_id, food_item_id) in links {
            items
                .entry(menu_id)
                .or_default()
                .push(EntityRef::from(food_item_id));
        }

        Ok(items)
    }

    async fn replace_food_items(
        conn: &mut SqliteConnection,
        menu_id: i64,
        items: &BTreeSet<i64>,
    ) -> Result<()> {
        let statement = Query::delete()
            .from_table(RelMenuIncludedFoodItems::Table)
            .and_where(Expr::col(RelMenuIncludedFoodItems::MenuId).eq(menu_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *conn).await?;

        if items.is_empty() {
            return Ok(());
        }

        let mut statement = Query::insert()
            .into_table(RelMenuIncludedFoodItems::Table)
            .columns([
                RelMenuIncludedFoodItems::MenuId,
                RelMenuIncludedFoodItems::IncludedFoodItemsId,
            ])
            .to_owned();

        for food_item_id in items {
            statement.values_panic([menu_id.into(), (*food_item_id).into()]);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *conn).await?;

        Ok(())
    }

    async fn with_food_items(&self, mut menu: Menu) -> Result<Menu> {
        let Some(id) = menu.id else {
            return Ok(menu);
        };

        let mut items = self.food_items(&[id]).await?;
        menu.included_food_items = Some(items.remove(&id).unwrap_or_default());

        Ok(menu)
    }
}

fn linked_ids(menu: &Menu) -> BTreeSet<i64> {
    menu.included_food_items
        .iter()
        .flatten()
        .map(|item| item.id)
        .collect()
}

fn as_refs(ids: &BTreeSet<i64>) -> Vec<EntityRef> {
    ids.iter().copied().map(EntityRef::from).collect()
}

#[async_trait::async_trait]
impl Crud for MenuService {
    type Dto = Menu;

    #[tracing::instrument(skip_all)]
    async fn save(&self, dto: Menu) -> Result<Menu> {
        let items = linked_ids(&dto);
        let mut tx = self.repository.pool().begin().await?;

        let mut stored = Repository::<Menu>::insert_with(&mut tx, &dto).await?;
        if let Some(id) = stored.id {
            Self::replace_food_items(&mut tx, id, &items).await?;
        }

        tx.commit().await?;
        stored.included_food_items = Some(as_refs(&items));

        Ok(stored)
    }

    #[tracing::instrument(skip_all, fields(id = dto.id))]
    async fn update(&self, dto: Menu) -> Result<Menu> {
        let items = linked_ids(&dto);
        let mut tx = self.repository.pool().begin().await?;

        let mut stored = Repository::<Menu>::update_with(&mut tx, &dto).await?;
        if let Some(id) = stored.id {
            Self::replace_food_items(&mut tx, id, &items).await?;
        }

        tx.commit().await?;
        stored.included_food_items = Some(as_refs(&items));

        Ok(stored)
    }

    async fn find_all(&self, pageable: &Pageable) -> Result<Page<Menu>> {
        let page = self.repository.find_all(pageable).await?;
        let ids: Vec<i64> = page.content.iter().filter_map(|m| m.id).collect();
        let mut items = self.food_items(&ids).await?;

        Ok(page.map(|mut menu| {
            let linked = menu.id.and_then(|id| items.remove(&id));
            menu.included_food_items = Some(linked.unwrap_or_default());
            menu
        }))
    }

    async fn find_one(&self, id: i64) -> Result<Option<Menu>> {
        match self.repository.find_one(id).await? {
            Some(menu) => Ok(Some(self.with_food_items(menu).await?)),
            None => Ok(None),
        }
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        self.repository.exists(id).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<()> {
        let mut tx = self.repository.pool().begin().await?;

        Self::replace_food_items(&mut tx, id, &BTreeSet::new()).await?;
        Repository::<Menu>::delete_with(&mut tx, id).await?;

        tx.commit().await?;

        Ok(())
    }
}
