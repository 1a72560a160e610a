use std::{path::PathBuf, str::FromStr};

use chrono::Utc;
use magnus_shared::types::UserRole;
use magnus_user::AppUser;
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

pub fn new_user(login: impl Into<String>, role: UserRole) -> AppUser {
    let login = login.into();
    let now = Utc::now();

    AppUser {
        email: Some(format!("{login}@magnus.localhost")),
        login: Some(login),
        first_name: Some("Ana".to_owned()),
        role: Some(role),
        is_active: Some(true),
        created_at: Some(now),
        updated_at: Some(now),
        ..Default::default()
    }
}
