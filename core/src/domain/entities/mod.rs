//! Domain entities

pub mod issuance;
pub mod user;

pub use issuance::IssuanceRecord;
pub use user::User;
