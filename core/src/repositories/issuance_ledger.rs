//! Issuance ledger trait: append-only record of every issuance attempt.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::DomainError;

/// Append-only history of OTP issuance attempts plus the count queries used
/// for rate limiting and statistics.
///
/// Rows are never mutated or deleted. Both rate limiting and the stats
/// aggregator read from this same ledger, so attempts and successes stay
/// consistent with each other by construction.
#[async_trait]
pub trait IssuanceLedger: Send + Sync {
    /// Append one attempt record
    async fn record_attempt(
        &self,
        phone: &str,
        requested_at: DateTime<Utc>,
        successful: bool,
    ) -> Result<(), DomainError>;

    /// Count all attempts for a phone with `requested_at >= since`
    async fn count_since(&self, phone: &str, since: DateTime<Utc>) -> Result<u64, DomainError>;

    /// Count successful attempts for a phone with `requested_at >= since`
    async fn count_successful_since(
        &self,
        phone: &str,
        since: DateTime<Utc>,
    ) -> Result<u64, DomainError>;
}
