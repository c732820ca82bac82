//! MySQL implementation of the issuance ledger.
//!
//! Rows are only ever inserted; there are no UPDATE or DELETE paths here,
//! matching the append-only contract of the ledger.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySql, Pool};
use tracing::error;

use otp_core::errors::DomainError;
use otp_core::repositories::IssuanceLedger;
use otp_shared::utils::phone::mask_phone;

pub struct MySqlIssuanceLedger {
    pool: Pool<MySql>,
}

impl MySqlIssuanceLedger {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IssuanceLedger for MySqlIssuanceLedger {
    async fn record_attempt(
        &self,
        phone: &str,
        requested_at: DateTime<Utc>,
        successful: bool,
    ) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO otp_requests (phone_number, requested_at, successful) VALUES (?, ?, ?)",
        )
        .bind(phone)
        .bind(requested_at)
        .bind(successful)
        .execute(&self.pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            error!(phone = mask_phone(phone), error = %e, "ledger append failed");
            DomainError::storage(format!("ledger append failed: {e}"))
        })
    }

    async fn count_since(&self, phone: &str, since: DateTime<Utc>) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM otp_requests WHERE phone_number = ? AND requested_at >= ?",
        )
        .bind(phone)
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("ledger count failed: {e}")))?;

        Ok(count as u64)
    }

    async fn count_successful_since(
        &self,
        phone: &str,
        since: DateTime<Utc>,
    ) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM otp_requests \
             WHERE phone_number = ? AND requested_at >= ? AND successful = TRUE",
        )
        .bind(phone)
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("ledger count failed: {e}")))?;

        Ok(count as u64)
    }
}
