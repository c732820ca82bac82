//! Redis cache configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Redis connection configuration for the OTP store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Connection URL, e.g. `redis://localhost:6379/0`
    pub url: String,
}

impl CacheConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Load from `REDIS_URL`
    pub fn from_env() -> Self {
        Self {
            url: env_or("REDIS_URL", "redis://localhost:6379/0"),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self::new("redis://localhost:6379/0")
    }
}
