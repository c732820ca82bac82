//! Redis-backed OTP store.
//!
//! One key per phone (`otp:{phone}`) holding the current code with the TTL
//! enforced by Redis itself, so expiry needs no sweeper and a new issuance
//! for the same phone atomically overwrites the previous code.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use otp_core::errors::DomainError;
use otp_core::repositories::OtpStore;
use otp_shared::utils::phone::mask_phone;

use super::redis_client::RedisClient;

/// Redis key prefix for OTP codes
const OTP_KEY_PREFIX: &str = "otp";

pub struct RedisOtpStore {
    client: RedisClient,
}

impl RedisOtpStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn format_key(phone: &str) -> String {
        format!("{OTP_KEY_PREFIX}:{phone}")
    }
}

#[async_trait]
impl OtpStore for RedisOtpStore {
    async fn store_code(
        &self,
        phone: &str,
        code: &str,
        ttl: Duration,
    ) -> Result<(), DomainError> {
        // Redis rejects a zero expiry
        let ttl_seconds = ttl.as_secs().max(1);
        self.client
            .set_with_expiry(&Self::format_key(phone), code, ttl_seconds)
            .await?;

        debug!(
            phone = mask_phone(phone),
            ttl_seconds, "stored OTP code"
        );
        Ok(())
    }

    async fn get_code(&self, phone: &str) -> Result<Option<String>, DomainError> {
        Ok(self.client.get(&Self::format_key(phone)).await?)
    }

    async fn clear_code(&self, phone: &str) -> Result<(), DomainError> {
        self.client.delete(&Self::format_key(phone)).await?;
        debug!(phone = mask_phone(phone), "cleared OTP code");
        Ok(())
    }
}
