//! HTTP server configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or};

/// HTTP server bind configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Load from `SERVER_HOST` / `SERVER_PORT`
    pub fn from_env() -> Self {
        Self {
            host: env_or("SERVER_HOST", "127.0.0.1"),
            port: env_parse_or("SERVER_PORT", 8080),
        }
    }

    /// Bind address in `host:port` form
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new("127.0.0.1", 8080)
    }
}
