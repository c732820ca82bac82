//! Value objects derived from domain data

pub mod otp_stats;

pub use otp_stats::OtpStats;
