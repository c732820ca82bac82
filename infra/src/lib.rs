//! Infrastructure layer for the OTP auth service.
//!
//! Concrete implementations of the core's storage and delivery traits:
//! a Redis-backed OTP store, MySQL-backed user repository and issuance
//! ledger, and a console delivery channel for development.

pub mod cache;
pub mod database;
pub mod sms;

use thiserror::Error;

/// Errors raised by infrastructure components before they cross the trait
/// boundary into the domain.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("cache error: {0}")]
    Cache(String),

    #[error("database error: {0}")]
    Database(String),
}

impl From<InfrastructureError> for otp_core::errors::DomainError {
    fn from(err: InfrastructureError) -> Self {
        otp_core::errors::DomainError::storage(err)
    }
}
