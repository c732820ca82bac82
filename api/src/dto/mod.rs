//! Request and response DTOs

pub mod auth;
pub mod stats;
pub mod user;
