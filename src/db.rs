use anyhow::Result;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use sqlx::{ConnectOptions, SqlitePool};
use sqlx_migrator::{Migrate, Plan};
use std::str::FromStr;
use std::time::Duration;
use tracing::log::LevelFilter;

/// Connection options with the PRAGMAs every connection needs.
///
/// - WAL lets readers run alongside the single writer
/// - busy_timeout waits on locks instead of failing with SQLITE_BUSY
/// - foreign_keys is off by default in SQLite
pub fn connect_options(database_url: &str) -> Result<SqliteConnectOptions> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_millis(5000))
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true)
        .pragma("cache_size", "-20000")
        .pragma("temp_store", "memory")
        .log_statements(LevelFilter::Debug);

    Ok(options)
}

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options(database_url)?)
        .await?;

    tracing::info!("Created pool with {} max connections", max_connections);

    Ok(pool)
}

/// Applies every pending schema migration.
#[tracing::instrument(skip(pool))]
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    let mut conn = pool.acquire().await?;
    magnus_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(())
}
