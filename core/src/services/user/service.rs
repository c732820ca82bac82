//! Read-only user queries backing the authenticated endpoints.

use std::sync::Arc;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

pub struct UserService<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Fetch a single user by id
    pub async fn get_user(&self, id: i64) -> DomainResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "user".to_string(),
            })
    }

    /// Fetch the authenticated caller's own record
    pub async fn get_me(&self, user_id: i64) -> DomainResult<User> {
        self.get_user(user_id).await
    }

    /// List users with pagination and optional phone substring search
    pub async fn list_users(
        &self,
        offset: u64,
        limit: u64,
        search: Option<&str>,
    ) -> DomainResult<(Vec<User>, u64)> {
        self.user_repository.list(offset, limit, search).await
    }

    /// Check that the backing store is reachable, for the health endpoint
    pub async fn health_check(&self) -> DomainResult<()> {
        self.user_repository.health_check().await
    }
}
