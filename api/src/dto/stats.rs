//! Stats endpoint DTOs

use serde::{Deserialize, Serialize};

use otp_core::domain::value_objects::OtpStats;

/// Query string of `GET /otp/stats`.
///
/// `hours` is kept as a raw string so non-numeric input reaches the handler
/// and gets the documented 400 instead of an extractor-generated error.
#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub phone: Option<String>,
    pub hours: Option<String>,
}

/// Body of a successful `GET /otp/stats`
#[derive(Debug, Serialize, Deserialize)]
pub struct OtpStatsResponse {
    pub phone_number: String,
    pub hours_looked_back: i64,
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub success_rate: f64,
    /// Window start, RFC3339 in UTC
    pub since: String,
    pub timezone: String,
}

impl From<OtpStats> for OtpStatsResponse {
    fn from(stats: OtpStats) -> Self {
        Self {
            phone_number: stats.phone_number,
            hours_looked_back: stats.hours_looked_back,
            total_requests: stats.total_requests,
            successful_requests: stats.successful_requests,
            failed_requests: stats.failed_requests,
            success_rate: stats.success_rate,
            since: stats.since.to_rfc3339(),
            timezone: "UTC".to_string(),
        }
    }
}
