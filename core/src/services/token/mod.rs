//! Token issuer: signed, stateless, time-bounded session credentials

pub mod service;

pub use service::{Claims, TokenService};
