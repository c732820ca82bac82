//! OTP issuance policy configuration

use serde::{Deserialize, Serialize};

use super::env_parse_or;

/// Policy knobs for OTP issuance and verification.
///
/// These are loaded once at startup and treated as immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpConfig {
    /// Number of digits in a generated code
    pub code_length: usize,
    /// Lifetime of a stored code in seconds
    pub otp_expiry_seconds: u64,
    /// Maximum issuance attempts allowed inside the rate window
    pub rate_limit: u64,
    /// Sliding rate-limit window in seconds
    pub rate_window_seconds: u64,
    /// Bounded timeout applied to every store/ledger call, in seconds
    pub storage_timeout_seconds: u64,
}

impl OtpConfig {
    /// Load from `OTP_CODE_LENGTH` / `OTP_EXPIRY_SECONDS` / `OTP_RATE_LIMIT` /
    /// `OTP_RATE_WINDOW_SECONDS` / `OTP_STORAGE_TIMEOUT_SECONDS`
    pub fn from_env() -> Self {
        Self {
            code_length: env_parse_or("OTP_CODE_LENGTH", 6),
            otp_expiry_seconds: env_parse_or("OTP_EXPIRY_SECONDS", 120),
            rate_limit: env_parse_or("OTP_RATE_LIMIT", 3),
            rate_window_seconds: env_parse_or("OTP_RATE_WINDOW_SECONDS", 600),
            storage_timeout_seconds: env_parse_or("OTP_STORAGE_TIMEOUT_SECONDS", 5),
        }
    }
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_length: 6,
            otp_expiry_seconds: 120,
            rate_limit: 3,
            rate_window_seconds: 600,
            storage_timeout_seconds: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_policy() {
        let config = OtpConfig::default();
        assert_eq!(config.code_length, 6);
        assert_eq!(config.otp_expiry_seconds, 120);
        assert_eq!(config.rate_limit, 3);
        assert_eq!(config.rate_window_seconds, 600);
    }
}
