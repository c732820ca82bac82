//! Issuance statistics over a lookback window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only statistics derived from the issuance ledger for one phone number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtpStats {
    /// Phone number the statistics were computed for (normalized)
    pub phone_number: String,

    /// Size of the lookback window in hours
    pub hours_looked_back: i64,

    /// Total issuance attempts inside the window
    pub total_requests: u64,

    /// Attempts that resulted in a stored code
    pub successful_requests: u64,

    /// `total - successful`
    pub failed_requests: u64,

    /// `successful / total * 100`, rounded to two decimal places;
    /// `0.0` when there were no attempts
    pub success_rate: f64,

    /// Start of the window (UTC)
    pub since: DateTime<Utc>,
}
