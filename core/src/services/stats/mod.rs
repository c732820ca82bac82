//! Stats aggregator: issuance statistics derived from the ledger

pub mod service;

pub use service::StatsService;
