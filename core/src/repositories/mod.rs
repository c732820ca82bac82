//! Repository and store traits separating the domain from infrastructure.
//!
//! One canonical trait per collaborator; implementations live in the infra
//! crate, and in-memory mocks for testing live in [`mock`].

pub mod issuance_ledger;
pub mod mock;
pub mod otp_store;
pub mod user_repository;

pub use issuance_ledger::IssuanceLedger;
pub use otp_store::OtpStore;
pub use user_repository::UserRepository;
