//! Issuance record entity: one row per OTP issuance attempt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single OTP issuance attempt, successful or not.
///
/// Records are append-only: they are never mutated or deleted. The ledger of
/// these records is the system of record for both rate limiting and issuance
/// statistics, so attempt and success counts are always consistent with each
/// other by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuanceRecord {
    /// Database-assigned identifier
    pub id: i64,

    /// Phone number the attempt was made for (normalized)
    pub phone_number: String,

    /// When the attempt was made (UTC)
    pub requested_at: DateTime<Utc>,

    /// Whether the attempt resulted in a stored, deliverable code
    pub successful: bool,
}
