use std::{path::PathBuf, str::FromStr};

use chrono::Utc;
use magnus_shared::{EntityRef, types::UserRole};
use magnus_user::{AppUser, AppUserRepository};
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

pub async fn create_logistics_user(pool: &SqlitePool) -> anyhow::Result<EntityRef> {
    let now = Utc::now();
    let user = AppUserRepository::new(pool.clone())
        .insert(&AppUser {
            login: Some("logistics".to_owned()),
            email: Some("logistics@magnus.localhost".to_owned()),
            role: Some(UserRole::Logistics),
            is_active: Some(true),
            created_at: Some(now),
            updated_at: Some(now),
            ..Default::default()
        })
        .await?;

    Ok(EntityRef::from(user.id.unwrap()))
}
