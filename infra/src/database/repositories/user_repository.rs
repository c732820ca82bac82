//! MySQL implementation of the user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySql, Pool, Row};
use tracing::{error, info};

use otp_core::domain::entities::user::User;
use otp_core::errors::{AuthError, DomainError};
use otp_core::repositories::UserRepository;
use otp_shared::utils::phone::mask_phone;

pub struct MySqlUserRepository {
    pool: Pool<MySql>,
}

impl MySqlUserRepository {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }

    fn map_row(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::storage(format!("failed to read id: {e}")))?,
            phone_number: row
                .try_get("phone_number")
                .map_err(|e| DomainError::storage(format!("failed to read phone_number: {e}")))?,
            created_at: row
                .try_get("created_at")
                .map_err(|e| DomainError::storage(format!("failed to read created_at: {e}")))?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query("SELECT id, phone_number, created_at FROM users WHERE phone_number = ?")
            .bind(phone)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(phone = mask_phone(phone), error = %e, "user lookup failed");
                DomainError::storage(format!("user lookup failed: {e}"))
            })?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let row = sqlx::query("SELECT id, phone_number, created_at FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("user lookup failed: {e}")))?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn create(
        &self,
        phone: &str,
        created_at: DateTime<Utc>,
    ) -> Result<User, DomainError> {
        let result = sqlx::query("INSERT INTO users (phone_number, created_at) VALUES (?, ?)")
            .bind(phone)
            .bind(created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                let unique_violation = e
                    .as_database_error()
                    .map(|db| matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation))
                    .unwrap_or(false);
                if unique_violation {
                    DomainError::Auth(AuthError::IdentityCreationFailure {
                        message: "phone number already registered".to_string(),
                    })
                } else {
                    error!(phone = mask_phone(phone), error = %e, "user creation failed");
                    DomainError::Auth(AuthError::IdentityCreationFailure {
                        message: e.to_string(),
                    })
                }
            })?;

        let user = User {
            id: result.last_insert_id() as i64,
            phone_number: phone.to_string(),
            created_at,
        };
        info!(phone = mask_phone(phone), user_id = user.id, "user created");
        Ok(user)
    }

    async fn list(
        &self,
        offset: u64,
        limit: u64,
        search: Option<&str>,
    ) -> Result<(Vec<User>, u64), DomainError> {
        let pattern = search
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{s}%"));

        let total: i64 = match &pattern {
            Some(pattern) => {
                sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE phone_number LIKE ?")
                    .bind(pattern)
                    .fetch_one(&self.pool)
                    .await
            }
            None => {
                sqlx::query_scalar("SELECT COUNT(*) FROM users")
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(|e| DomainError::storage(format!("user count failed: {e}")))?;

        let rows = match &pattern {
            Some(pattern) => {
                sqlx::query(
                    "SELECT id, phone_number, created_at FROM users \
                     WHERE phone_number LIKE ? ORDER BY id LIMIT ? OFFSET ?",
                )
                .bind(pattern)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query(
                    "SELECT id, phone_number, created_at FROM users ORDER BY id LIMIT ? OFFSET ?",
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| DomainError::storage(format!("user listing failed: {e}")))?;

        let users = rows
            .iter()
            .map(Self::map_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((users, total as u64))
    }

    async fn health_check(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| DomainError::storage(format!("database ping failed: {e}")))
    }
}
