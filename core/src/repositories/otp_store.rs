//! OTP store trait: ephemeral `phone -> code` association with expiry.

use async_trait::async_trait;
use std::time::Duration;

use crate::errors::DomainError;

/// Durable key-value store holding at most one live code per phone.
///
/// Implementations must make a single `store_code` or `clear_code` atomic from
/// the caller's point of view; cross-operation atomicity is not assumed.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Store a code for a phone with the given TTL, overwriting any prior
    /// live code for the same phone
    async fn store_code(
        &self,
        phone: &str,
        code: &str,
        ttl: Duration,
    ) -> Result<(), DomainError>;

    /// Fetch the live code for a phone
    ///
    /// Returns `Ok(None)` when no code exists or the TTL has lapsed.
    async fn get_code(&self, phone: &str) -> Result<Option<String>, DomainError>;

    /// Remove the live code for a phone, if any
    async fn clear_code(&self, phone: &str) -> Result<(), DomainError>;
}
