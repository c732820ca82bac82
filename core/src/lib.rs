//! Core business logic and domain layer for the OTP auth service.
//!
//! This crate contains the OTP engine, stats aggregator, token issuer and the
//! data contracts they depend on. All I/O lives behind async traits
//! (`OtpStore`, `IssuanceLedger`, `UserRepository`, `OtpDelivery`) so the core
//! stays testable without any infrastructure.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
