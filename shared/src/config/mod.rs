//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `server` - HTTP server bind address
//! - `database` - MySQL connection settings
//! - `cache` - Redis connection settings
//! - `auth` - JWT signing configuration
//! - `otp` - OTP issuance policy (code length, expiry, rate limiting)
//!
//! Every sub-configuration loads from environment variables with sensible
//! development defaults, so a bare `AppConfig::from_env()` works locally.

pub mod auth;
pub mod cache;
pub mod database;
pub mod otp;
pub mod server;

// Re-export commonly used types
pub use auth::JwtConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use otp::OtpConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Redis cache configuration
    pub cache: CacheConfig,

    /// JWT signing configuration
    pub auth: JwtConfig,

    /// OTP issuance policy
    pub otp: OtpConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            auth: JwtConfig::from_env(),
            otp: OtpConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            auth: JwtConfig::default(),
            otp: OtpConfig::default(),
        }
    }
}

/// Read an environment variable, falling back to a default when unset or empty
pub(crate) fn env_or(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

/// Read and parse an environment variable, falling back on parse failure
pub(crate) fn env_parse_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
