//! In-memory mock implementations of the repository traits for testing.

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::entities::issuance::IssuanceRecord;
use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::services::otp::OtpDelivery;

use super::issuance_ledger::IssuanceLedger;
use super::otp_store::OtpStore;
use super::user_repository::UserRepository;

/// Mock OTP store keeping codes with an expiry timestamp
#[derive(Default)]
pub struct MockOtpStore {
    codes: RwLock<HashMap<String, (String, DateTime<Utc>)>>,
    should_fail: AtomicBool,
}

impl MockOtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with a storage error
    pub fn set_failing(&self, failing: bool) {
        self.should_fail.store(failing, Ordering::SeqCst);
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            Err(DomainError::storage("mock otp store failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl OtpStore for MockOtpStore {
    async fn store_code(
        &self,
        phone: &str,
        code: &str,
        ttl: Duration,
    ) -> Result<(), DomainError> {
        self.check_failure()?;
        let expires_at = Utc::now()
            + ChronoDuration::from_std(ttl).unwrap_or_else(|_| ChronoDuration::seconds(0));
        self.codes
            .write()
            .await
            .insert(phone.to_string(), (code.to_string(), expires_at));
        Ok(())
    }

    async fn get_code(&self, phone: &str) -> Result<Option<String>, DomainError> {
        self.check_failure()?;
        let mut codes = self.codes.write().await;
        match codes.get(phone) {
            Some((code, expires_at)) if *expires_at > Utc::now() => Ok(Some(code.clone())),
            Some(_) => {
                // expired entries are evicted lazily
                codes.remove(phone);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn clear_code(&self, phone: &str) -> Result<(), DomainError> {
        self.check_failure()?;
        self.codes.write().await.remove(phone);
        Ok(())
    }
}

/// Mock issuance ledger backed by an append-only vector
#[derive(Default)]
pub struct MockIssuanceLedger {
    records: RwLock<Vec<IssuanceRecord>>,
    should_fail: AtomicBool,
}

impl MockIssuanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with a storage error
    pub fn set_failing(&self, failing: bool) {
        self.should_fail.store(failing, Ordering::SeqCst);
    }

    /// All recorded attempts, for test assertions
    pub async fn records(&self) -> Vec<IssuanceRecord> {
        self.records.read().await.clone()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            Err(DomainError::storage("mock ledger failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl IssuanceLedger for MockIssuanceLedger {
    async fn record_attempt(
        &self,
        phone: &str,
        requested_at: DateTime<Utc>,
        successful: bool,
    ) -> Result<(), DomainError> {
        self.check_failure()?;
        let mut records = self.records.write().await;
        let id = records.len() as i64 + 1;
        records.push(IssuanceRecord {
            id,
            phone_number: phone.to_string(),
            requested_at,
            successful,
        });
        Ok(())
    }

    async fn count_since(&self, phone: &str, since: DateTime<Utc>) -> Result<u64, DomainError> {
        self.check_failure()?;
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.phone_number == phone && r.requested_at >= since)
            .count() as u64)
    }

    async fn count_successful_since(
        &self,
        phone: &str,
        since: DateTime<Utc>,
    ) -> Result<u64, DomainError> {
        self.check_failure()?;
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.phone_number == phone && r.requested_at >= since && r.successful)
            .count() as u64)
    }
}

/// Mock user repository backed by a hash map
#[derive(Default)]
pub struct MockUserRepository {
    users: RwLock<HashMap<i64, User>>,
    should_fail: AtomicBool,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with a storage error
    pub fn set_failing(&self, failing: bool) {
        self.should_fail.store(failing, Ordering::SeqCst);
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            Err(DomainError::storage("mock user repository failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
        self.check_failure()?;
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.phone_number == phone).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        self.check_failure()?;
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn create(
        &self,
        phone: &str,
        created_at: DateTime<Utc>,
    ) -> Result<User, DomainError> {
        self.check_failure()?;
        let mut users = self.users.write().await;

        if users.values().any(|u| u.phone_number == phone) {
            return Err(DomainError::Auth(
                crate::errors::AuthError::IdentityCreationFailure {
                    message: "phone number already registered".to_string(),
                },
            ));
        }

        let id = users.len() as i64 + 1;
        let user = User {
            id,
            phone_number: phone.to_string(),
            created_at,
        };
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn list(
        &self,
        offset: u64,
        limit: u64,
        search: Option<&str>,
    ) -> Result<(Vec<User>, u64), DomainError> {
        self.check_failure()?;
        let users = self.users.read().await;
        let mut matching: Vec<User> = users
            .values()
            .filter(|u| match search {
                Some(needle) if !needle.is_empty() => u.phone_number.contains(needle),
                _ => true,
            })
            .cloned()
            .collect();
        matching.sort_by_key(|u| u.id);

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn health_check(&self) -> Result<(), DomainError> {
        self.check_failure()
    }
}

/// Mock delivery channel capturing every code handed to it
#[derive(Default)]
pub struct MockOtpDelivery {
    sent: Arc<RwLock<HashMap<String, String>>>,
    should_fail: AtomicBool,
}

impl MockOtpDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent delivery fail
    pub fn set_failing(&self, failing: bool) {
        self.should_fail.store(failing, Ordering::SeqCst);
    }

    /// Last code delivered to a phone, for test assertions
    pub async fn last_code_for(&self, phone: &str) -> Option<String> {
        self.sent.read().await.get(phone).cloned()
    }
}

#[async_trait]
impl OtpDelivery for MockOtpDelivery {
    async fn deliver(&self, phone: &str, code: &str) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::Internal {
                message: "mock delivery failure".to_string(),
            });
        }
        self.sent
            .write()
            .await
            .insert(phone.to_string(), code.to_string());
        Ok(())
    }
}
