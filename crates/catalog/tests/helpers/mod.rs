use std::{path::PathBuf, str::FromStr};

use chrono::Utc;
use magnus_catalog::{FoodItem, FoodItemRepository, Menu};
use magnus_shared::{
    EntityRef,
    types::{FoodCategory, MenuType},
};
use rust_decimal::Decimal;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    magnus_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

pub async fn create_food_items(
    pool: &SqlitePool,
    names: impl IntoIterator<Item = &'static str>,
) -> anyhow::Result<Vec<EntityRef>> {
    let repository = FoodItemRepository::new(pool.clone());
    let now = Utc::now();
    let mut refs = vec![];

    for name in names {
        let item = repository
            .insert(&FoodItem {
                name: Some(name.to_owned()),
                category: Some(FoodCategory::Main),
                base_price: Some(Decimal::new(1_200, 2)),
                guests_per_unit: Some(1),
                is_active: Some(true),
                is_template: Some(false),
                created_at: Some(now),
                updated_at: Some(now),
                ..Default::default()
            })
            .await?;
        refs.push(EntityRef::from(item.id.unwrap()));
    }

    Ok(refs)
}

pub fn new_menu(name: &str, items: Vec<EntityRef>) -> Menu {
    let now = Utc::now();

    Menu {
        name: Some(name.to_owned()),
        kind: Some(MenuType::Dinner),
        price_per_person: Some(Decimal::new(4_500, 2)),
        min_people: Some(10),
        restaurant: Some("Casa Magnus".to_owned()),
        is_active: Some(true),
        is_template: Some(false),
        version: Some(1),
        created_at: Some(now),
        updated_at: Some(now),
        included_food_items: Some(items),
        ..Default::default()
    }
}
