//! Database connection pool management
//!
//! Connection pooling via SQLx with MySQL. The pool is created once at
//! startup and cloned into every repository.

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use tracing::info;

use tt_core::errors::DomainError;
use tt_shared::config::DatabaseConfig;

/// Create the MySQL connection pool from configuration.
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, DomainError> {
    info!(
        max_connections = config.max_connections,
        "creating database connection pool"
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .test_before_acquire(true)
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::Storage {
            message: format!("failed to create database pool: {}", e),
        })?;

    info!("database connection pool created");
    Ok(pool)
}
