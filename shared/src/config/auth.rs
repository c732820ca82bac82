//! JWT signing configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or};

/// Configuration for the symmetric JWT signing key and token lifetime.
///
/// The secret is injected into the token service at construction time; it is
/// never read from a process-wide global.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Symmetric HS256 signing secret
    pub secret: String,
    /// Token lifetime in hours
    pub token_expiry_hours: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_expiry_hours: 24,
        }
    }

    /// Load from `JWT_SECRET` / `JWT_TOKEN_EXPIRY_HOURS`
    pub fn from_env() -> Self {
        Self {
            secret: env_or("JWT_SECRET", "dev-secret-change-me"),
            token_expiry_hours: env_parse_or("JWT_TOKEN_EXPIRY_HOURS", 24),
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self::new("dev-secret-change-me")
    }
}
