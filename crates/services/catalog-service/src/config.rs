//! Catalog service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

/// Catalog service configuration.
#[derive(Debug, Clone)]
pub struct CatalogServiceConfig {
    pub service: ServiceConfig,
    pub database: DatabaseConfig,
}

impl CatalogServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();

        Self {
            service: ServiceConfig {
                service_name: "catalog-service".to_string(),
                log_level: env::var("CATALOG_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            database: DatabaseConfig {
                url: env::var("CATALOG_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.url),
                max_connections: parsed("CATALOG_DB_MAX_CONNECTIONS").unwrap_or(defaults.max_connections),
                min_connections: parsed("CATALOG_DB_MIN_CONNECTIONS").unwrap_or(defaults.min_connections),
                connect_timeout_secs: parsed("CATALOG_DB_CONNECT_TIMEOUT_SECS")
                    .unwrap_or(defaults.connect_timeout_secs),
                sqlx_logging: parsed("CATALOG_DB_SQL_LOGGING").unwrap_or(defaults.sqlx_logging),
            },
        }
    }

    /// Default tracing filter; `RUST_LOG` still takes precedence.
    pub fn log_filter(&self, verbose: bool) -> String {
        if verbose {
            "debug".to_string()
        } else {
            self.service.log_level.clone()
        }
    }
}

impl Default for CatalogServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "catalog-service".to_string(),
                log_level: "info".to_string(),
            },
            database: DatabaseConfig::default(),
        }
    }
}

/// Unset or unparsable values fall back to the default
fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_postgres() {
        let config = CatalogServiceConfig::default();
        assert!(config.database.url.starts_with("postgres://"));
        assert_eq!(config.service.service_name, "catalog-service");
    }

    #[test]
    fn test_log_filter_follows_configured_level() {
        env::set_var("CATALOG_LOG_LEVEL", "warn");
        let config = CatalogServiceConfig::from_env();

        assert_eq!(config.service.log_level, "warn");
        assert_eq!(config.log_filter(false), "warn");
        assert_eq!(config.log_filter(true), "debug");
    }

    #[test]
    fn test_unparsable_value_is_ignored() {
        env::set_var("CATALOG_TEST_NOT_A_NUMBER", "ten");
        assert_eq!(parsed::<u32>("CATALOG_TEST_NOT_A_NUMBER"), None);
        assert_eq!(parsed::<u32>("CATALOG_TEST_UNSET_KEY"), None);
    }
}
