//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository contract for phone-number-keyed user records.
///
/// Implementations handle the actual database operations while keeping the
/// abstraction boundary between the domain and infrastructure layers.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their normalized phone number
    ///
    /// # Returns
    /// * `Ok(Some(User))` - user found
    /// * `Ok(None)` - no user with that phone
    /// * `Err(DomainError)` - database error
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Create a new user record, returning it with its assigned id
    ///
    /// Fails when the phone number is already registered.
    async fn create(
        &self,
        phone: &str,
        created_at: DateTime<Utc>,
    ) -> Result<User, DomainError>;

    /// List users with pagination and optional phone substring search,
    /// returning the page plus the total matching count
    async fn list(
        &self,
        offset: u64,
        limit: u64,
        search: Option<&str>,
    ) -> Result<(Vec<User>, u64), DomainError>;

    /// Check that the backing store is reachable
    async fn health_check(&self) -> Result<(), DomainError>;
}
