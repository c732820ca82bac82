//! HTTP API layer for the OTP auth service.
//!
//! Plumbing around the core: routing, request binding, JWT middleware and the
//! mapping from typed domain errors to HTTP statuses.

pub mod app;
pub mod dto;
pub mod middleware;
pub mod routes;
pub mod state;
