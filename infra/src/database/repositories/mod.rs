//! MySQL repository implementations

pub mod issuance_ledger;
pub mod user_repository;

pub use issuance_ledger::MySqlIssuanceLedger;
pub use user_repository::MySqlUserRepository;
