//! Redis cache client
//!
//! Thin async wrapper over a multiplexed Redis connection exposing the small
//! set of operations the OTP store needs: set-with-expiry, get and delete.

use redis::{aio::MultiplexedConnection, AsyncCommands, Client};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use otp_shared::config::CacheConfig;

use crate::InfrastructureError;

/// Thread-safe async Redis client with connect-time retry.
#[derive(Clone)]
pub struct RedisClient {
    connection: MultiplexedConnection,
}

impl RedisClient {
    /// Connect to Redis, retrying a few times before giving up
    pub async fn new(config: &CacheConfig) -> Result<Self, InfrastructureError> {
        Self::new_with_retry(config, 3, 100).await
    }

    /// Connect with explicit retry parameters
    pub async fn new_with_retry(
        config: &CacheConfig,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<Self, InfrastructureError> {
        let client = Client::open(config.url.as_str())
            .map_err(|e| InfrastructureError::Config(format!("invalid Redis URL: {e}")))?;

        let mut attempts = 0;
        let mut delay = retry_delay_ms;
        let connection = loop {
            attempts += 1;
            debug!(attempt = attempts, "connecting to Redis");
            match client.get_multiplexed_async_connection().await {
                Ok(connection) => break connection,
                Err(err) if attempts < max_retries => {
                    warn!(attempt = attempts, error = %err, "Redis connection failed, retrying");
                    sleep(Duration::from_millis(delay)).await;
                    delay *= 2;
                }
                Err(err) => {
                    return Err(InfrastructureError::Connection(format!(
                        "failed to connect to Redis after {attempts} attempts: {err}"
                    )));
                }
            }
        };

        info!("Redis client connected");
        Ok(Self { connection })
    }

    /// Set a key with a TTL in seconds, overwriting any existing value
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        let mut conn = self.connection.clone();
        conn.set_ex(key, value, ttl_seconds)
            .await
            .map_err(|e| InfrastructureError::Cache(format!("SETEX {key} failed: {e}")))
    }

    /// Get a key; `None` when absent or expired
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        let mut conn = self.connection.clone();
        conn.get(key)
            .await
            .map_err(|e| InfrastructureError::Cache(format!("GET {key} failed: {e}")))
    }

    /// Delete a key, ignoring whether it existed
    pub async fn delete(&self, key: &str) -> Result<(), InfrastructureError> {
        let mut conn = self.connection.clone();
        conn.del(key)
            .await
            .map_err(|e| InfrastructureError::Cache(format!("DEL {key} failed: {e}")))
    }

    /// Round-trip a PING to verify the connection is alive
    pub async fn ping(&self) -> Result<(), InfrastructureError> {
        let mut conn = self.connection.clone();
        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .map(|_| ())
            .map_err(|e| InfrastructureError::Cache(format!("PING failed: {e}")))
    }
}
