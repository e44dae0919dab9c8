//! Database connection pool management
//!
//! Uses sqlx MySqlPool with explicit connection limits.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use crate::config::StoreConfig;
use crate::error::ConfigError;

/// Create a MySQL connection pool.
///
/// The pool connects lazily: no connection is opened until the first
/// statement runs, so the server can start before the database is up.
/// Must be called inside a Tokio runtime.
///
/// # Errors
///
/// Returns an error if the configured URL cannot be parsed.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&StoreConfig::from_env()?)?;
/// ```
pub fn create_pool(config: &StoreConfig) -> Result<MySqlPool, ConfigError> {
    let options = config.connect_options()?;

    tracing::debug!(
        db = %config.display_target(),
        max_connections = config.max_connections,
        "creating connection pool"
    );

    Ok(MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lazy_pool_opens_no_connections() {
        let config = StoreConfig {
            host: "127.0.0.1".into(),
            port: 1,
            ..StoreConfig::default()
        };
        let pool = create_pool(&config).expect("pool creation failed");
        assert_eq!(pool.size(), 0);
        assert_eq!(pool.options().get_max_connections(), config.max_connections);
    }

    #[tokio::test]
    async fn bad_url_is_config_error() {
        let config = StoreConfig {
            url: Some("postgres//nope".into()),
            ..StoreConfig::default()
        };
        assert!(create_pool(&config).is_err());
    }

    // Integration tests require a real database
    // Run with: DATABASE_URL=mysql://... cargo test -p usergql-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let config = StoreConfig::from_env().expect("invalid config");
        let pool = create_pool(&config).expect("pool creation failed");

        let result: (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_pool_access() {
        let config = StoreConfig::from_env().expect("invalid config");
        let pool = create_pool(&config).expect("pool creation failed");

        let handles: Vec<_> = (0..10i64)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let result: (i64,) = sqlx::query_as("SELECT CAST(? AS SIGNED)")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.expect("task panicked");
            assert_eq!(result, i as i64);
        }
    }
}
