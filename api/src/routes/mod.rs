//! HTTP route handlers

pub mod auth;
pub mod health;
pub mod stats;
pub mod users;
