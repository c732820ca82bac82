//! Database connection pool bootstrap.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::{MySql, Pool};
use std::time::Duration;
use tracing::info;

use otp_shared::config::DatabaseConfig;

use crate::InfrastructureError;

/// Create the MySQL connection pool from configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<Pool<MySql>, InfrastructureError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .connect(&config.url)
        .await
        .map_err(|e| InfrastructureError::Connection(format!("failed to connect to MySQL: {e}")))?;

    info!(max_connections = config.max_connections, "database pool created");
    Ok(pool)
}

/// Apply the embedded schema migrations
pub async fn run_migrations(pool: &Pool<MySql>) -> Result<(), InfrastructureError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| InfrastructureError::Database(format!("migration failed: {e}")))?;

    info!("database migrations applied");
    Ok(())
}
