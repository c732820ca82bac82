//! The OTP engine: rate-limited issuance and verification.

use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use tracing::{debug, error, warn};

use otp_shared::utils::phone::mask_phone;

use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{IssuanceLedger, OtpStore, UserRepository};
use crate::services::token::TokenService;

use super::config::OtpServiceConfig;
use super::delivery::OtpDelivery;
use super::generator::generate_code;

/// Orchestrates the OTP lifecycle: issuance with rate limiting, verification,
/// lazy identity creation and credential minting.
///
/// The engine is request-scoped and stateless between calls; the only shared
/// state is the immutable configuration. Durability and per-key write
/// atomicity are delegated to the store and ledger collaborators. The
/// count-then-append sequence in [`request_otp`](AuthService::request_otp) is
/// deliberately not transactional: concurrent requests for the same phone can
/// race past the rate-limit check. The limit is a courtesy, not a security
/// boundary.
pub struct AuthService<O, L, U, D>
where
    O: OtpStore,
    L: IssuanceLedger,
    U: UserRepository,
    D: OtpDelivery,
{
    otp_store: Arc<O>,
    ledger: Arc<L>,
    user_repository: Arc<U>,
    delivery: Arc<D>,
    token_service: Arc<TokenService>,
    config: OtpServiceConfig,
}

impl<O, L, U, D> AuthService<O, L, U, D>
where
    O: OtpStore,
    L: IssuanceLedger,
    U: UserRepository,
    D: OtpDelivery,
{
    pub fn new(
        otp_store: Arc<O>,
        ledger: Arc<L>,
        user_repository: Arc<U>,
        delivery: Arc<D>,
        token_service: Arc<TokenService>,
        config: OtpServiceConfig,
    ) -> Self {
        Self {
            otp_store,
            ledger,
            user_repository,
            delivery,
            token_service,
            config,
        }
    }

    /// Issue a new OTP for a normalized phone number.
    ///
    /// 1. Count prior attempts inside the sliding rate window; at
    ///    `rate_limit` or more, append a failed record and fail with
    ///    `RateLimited`.
    /// 2. Generate a fixed-length code from the OS CSPRNG.
    /// 3. Store it with TTL `otp_expiry`, overwriting any prior live code.
    /// 4. Append a successful ledger record.
    /// 5. Hand the code to the delivery collaborator.
    ///
    /// Every call appends exactly one ledger record, success or failure.
    /// Issuance is successful once the code is stored; a delivery failure is
    /// logged but does not roll anything back.
    pub async fn request_otp(&self, phone: &str) -> DomainResult<()> {
        let now = Utc::now();
        let window_start = now - self.rate_window();

        let count = match self
            .bounded("ledger count", self.ledger.count_since(phone, window_start))
            .await
        {
            Ok(count) => count,
            Err(err) => {
                self.record_attempt(phone, now, false).await;
                return Err(err);
            }
        };

        if count >= self.config.rate_limit {
            warn!(
                phone = mask_phone(phone),
                attempts = count,
                limit = self.config.rate_limit,
                "OTP issuance rejected by rate limit"
            );
            self.record_attempt(phone, now, false).await;
            return Err(AuthError::RateLimited.into());
        }

        let code = match generate_code(self.config.code_length) {
            Ok(code) => code,
            Err(err) => {
                error!(phone = mask_phone(phone), "OTP generation failed");
                self.record_attempt(phone, now, false).await;
                return Err(err);
            }
        };

        if let Err(err) = self
            .bounded(
                "otp store write",
                self.otp_store
                    .store_code(phone, &code, self.config.otp_expiry),
            )
            .await
        {
            error!(phone = mask_phone(phone), error = %err, "failed to store OTP");
            self.record_attempt(phone, now, false).await;
            return Err(err);
        }

        self.record_attempt(phone, now, true).await;

        if let Err(err) = self.delivery.deliver(phone, &code).await {
            // the code is already stored and usable
            error!(phone = mask_phone(phone), error = %err, "OTP delivery failed");
        }

        debug!(phone = mask_phone(phone), "OTP issued");
        Ok(())
    }

    /// Verify a candidate code and exchange it for a signed credential.
    ///
    /// Absence of a live code, an expired code and a mismatching code all
    /// surface as the same `InvalidOrExpired` so callers cannot probe which
    /// case occurred. A matched code is deleted immediately: verification is
    /// single-use.
    pub async fn verify_otp(&self, phone: &str, candidate: &str) -> DomainResult<String> {
        let stored = self
            .bounded("otp store read", self.otp_store.get_code(phone))
            .await?;

        let code = match stored {
            Some(code) => code,
            None => {
                debug!(phone = mask_phone(phone), "no live OTP for phone");
                return Err(AuthError::InvalidOrExpired.into());
            }
        };

        if code != candidate {
            debug!(phone = mask_phone(phone), "OTP mismatch");
            return Err(AuthError::InvalidOrExpired.into());
        }

        // Single-use: a matched code must never verify twice.
        if let Err(err) = self
            .bounded("otp store clear", self.otp_store.clear_code(phone))
            .await
        {
            warn!(phone = mask_phone(phone), error = %err, "failed to clear consumed OTP");
        }

        let user = match self
            .bounded("user lookup", self.user_repository.find_by_phone(phone))
            .await?
        {
            Some(user) => user,
            None => self
                .bounded(
                    "user create",
                    self.user_repository.create(phone, Utc::now()),
                )
                .await
                .map_err(|err| match err {
                    DomainError::Auth(AuthError::IdentityCreationFailure { .. }) => err,
                    other => DomainError::Auth(AuthError::IdentityCreationFailure {
                        message: other.to_string(),
                    }),
                })?,
        };

        self.token_service.issue(&user)
    }

    /// Append a ledger record, best-effort; a record failure is logged but
    /// never masks the outcome of the attempt itself.
    async fn record_attempt(&self, phone: &str, requested_at: DateTime<Utc>, successful: bool) {
        if let Err(err) = self
            .bounded(
                "ledger append",
                self.ledger.record_attempt(phone, requested_at, successful),
            )
            .await
        {
            warn!(
                phone = mask_phone(phone),
                successful,
                error = %err,
                "failed to append issuance record"
            );
        }
    }

    /// Run a store/ledger call under the configured bounded timeout,
    /// converting a timeout into a storage failure.
    async fn bounded<T, F>(&self, what: &str, fut: F) -> DomainResult<T>
    where
        F: Future<Output = DomainResult<T>>,
    {
        match tokio::time::timeout(self.config.storage_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::storage(format!("{what} timed out"))),
        }
    }

    fn rate_window(&self) -> ChronoDuration {
        ChronoDuration::from_std(self.config.rate_window)
            .unwrap_or_else(|_| ChronoDuration::seconds(600))
    }
}
