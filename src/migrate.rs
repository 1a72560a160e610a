//! Database migration utilities

use sqlx::{Sqlite, migrate::MigrateDatabase};

use crate::Config;

/// Create the database if needed and run all migrations
pub async fn migrate(config: &Config) -> anyhow::Result<()> {
    let url = &config.database.url;

    tracing::info!("Migrating database {url}");

    let pool = crate::db::create_pool(url, 1).await?;
    crate::db::migrate(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

/// Drop the database and run migrations
pub async fn reset(config: &Config) -> anyhow::Result<()> {
    let url = &config.database.url;

    if Sqlite::database_exists(url).await? {
        tracing::warn!("Dropping existing database: {url}");
        Sqlite::drop_database(url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}

#[cfg(test)]
mod tests {
    use temp_dir::TempDir;

    use super::*;

    fn config(dir: &TempDir) -> Config {
        let mut config = Config::load(None).unwrap();
        config.database.url = format!("sqlite:{}", dir.child("db.sqlite3").display());
        config
    }

    #[tokio::test]
    async fn test_reset_recreates_schema() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let config = config(&dir);

        migrate(&config).await?;

        let pool = crate::db::create_pool(&config.database.url, 1).await?;
        sqlx::query(
            "INSERT INTO client (name, email, phone, is_active, created_at, updated_at) \
             VALUES ('Marta', 'marta@example.com', '600123123', 1, \
             '2026-05-01T10:00:00Z', '2026-05-01T10:00:00Z')",
        )
            .execute(&pool)
            .await?;
        pool.close().await;

        reset(&config).await?;

        let pool = crate::db::create_pool(&config.database.url, 1).await?;
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM client")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count, 0);

        Ok(())
    }
}
