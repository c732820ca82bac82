//! User endpoint DTOs

use serde::{Deserialize, Serialize};

use otp_core::domain::entities::user::User;

/// A single user as returned by the authenticated endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub phone_number: String,
    /// RFC3339 in UTC
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            phone_number: user.phone_number,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// Query string of `GET /users/`
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub search: Option<String>,
}

/// Body of `GET /users/`
#[derive(Debug, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
    pub total: u64,
}
