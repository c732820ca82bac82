//! OTP engine configuration

use std::time::Duration;

/// Immutable policy configuration for the OTP engine, set once at startup.
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Number of digits in a generated code
    pub code_length: usize,
    /// Lifetime of a stored code
    pub otp_expiry: Duration,
    /// Maximum issuance attempts allowed inside the rate window; the
    /// `(rate_limit + 1)`-th attempt is rejected
    pub rate_limit: u64,
    /// Sliding window over which issuance attempts are counted
    pub rate_window: Duration,
    /// Bounded timeout applied to every store/ledger call
    pub storage_timeout: Duration,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_length: 6,
            otp_expiry: Duration::from_secs(120),
            rate_limit: 3,
            rate_window: Duration::from_secs(600),
            storage_timeout: Duration::from_secs(5),
        }
    }
}

impl From<otp_shared::config::OtpConfig> for OtpServiceConfig {
    fn from(config: otp_shared::config::OtpConfig) -> Self {
        Self {
            code_length: config.code_length,
            otp_expiry: Duration::from_secs(config.otp_expiry_seconds),
            rate_limit: config.rate_limit,
            rate_window: Duration::from_secs(config.rate_window_seconds),
            storage_timeout: Duration::from_secs(config.storage_timeout_seconds),
        }
    }
}
