//! Shared configuration and utilities used across the OTP auth service crates.

pub mod config;
pub mod utils;
