//! Business logic services

pub mod otp;
pub mod stats;
pub mod token;
pub mod user;
