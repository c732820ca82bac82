//! MySQL database: connection bootstrap and repository implementations

pub mod connection;
pub mod repositories;

pub use connection::{create_pool, run_migrations};
pub use repositories::{MySqlIssuanceLedger, MySqlUserRepository};
