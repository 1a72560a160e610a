use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub workflow: magnus_workflow::Settings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (MAGNUS__DATABASE__URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("database.url", "sqlite:magnus.db")?
            .set_default("database.max_connections", 5)?
            .set_default("observability.log_level", "info")?
            .set_default("workflow.task_generation.enabled", true)?
            .set_default("workflow.task_generation.async_processing", true)?
            .set_default("workflow.notifications.enabled", true)?
            .set_default("workflow.scheduling.shopping_days_before", 3)?
            .set_default("workflow.scheduling.preparation_days_before", 1)?
            .set_default("workflow.scheduling.delivery_days_before", 0)?
            .set_default("workflow.scheduling.cooking_hours_before", 4)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored when absent
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MAGNUS")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        let scheduling = &self.workflow.scheduling;
        for (name, days) in [
            ("shopping_days_before", scheduling.shopping_days_before),
            ("preparation_days_before", scheduling.preparation_days_before),
            ("delivery_days_before", scheduling.delivery_days_before),
        ] {
            if days > 30 {
                return Err(format!("Workflow {name} must be between 0 and 30"));
            }
        }
        if scheduling.cooking_hours_before > 24 {
            return Err("Workflow cooking_hours_before must be between 0 and 24".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "sqlite:test.db".to_string(),
                max_connections: 5,
            },
            observability: ObservabilityConfig::default(),
            workflow: magnus_workflow::Settings::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_connections() {
        let mut config = config();
        config.database.max_connections = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_scheduling_range() {
        let mut config = config();
        config.workflow.scheduling.shopping_days_before = 31;
        assert!(config.validate().is_err());

        let mut config = self::config();
        config.workflow.scheduling.cooking_hours_before = 25;
        assert!(config.validate().is_err());

        let mut config = self::config();
        config.workflow.scheduling.delivery_days_before = 30;
        config.workflow.scheduling.cooking_hours_before = 24;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_defaults() {
        let config = Config::load(Some("does/not/exist.toml".to_string())).unwrap();

        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.workflow.scheduling.shopping_days_before, 3);
        assert_eq!(config.workflow.scheduling.cooking_hours_before, 4);
        assert!(config.workflow.task_generation.async_processing);
    }
}
