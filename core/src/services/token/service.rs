//! JWT issuance and verification.

use chrono::{Duration as ChronoDuration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use otp_shared::config::JwtConfig;

use crate::domain::entities::user::User;
use crate::errors::{DomainResult, TokenError};

/// Claims carried by a session credential.
///
/// The credential is self-contained: validity is determined purely by
/// signature and expiry, with no server-side state or revocation list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identity the credential is bound to
    pub user_id: i64,
    /// Phone number of the identity (normalized)
    pub phone: String,
    /// Expiry as unix seconds
    pub exp: i64,
}

/// Mints and verifies HS256-signed session credentials.
///
/// The symmetric secret is an explicit constructor dependency, never a
/// package-level global, so the service can be built with a throwaway secret
/// in tests.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry: ChronoDuration,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            expiry: ChronoDuration::hours(config.token_expiry_hours),
        }
    }

    /// Mint a credential bound to a verified identity, expiring after the
    /// configured lifetime (24h by default)
    pub fn issue(&self, user: &User) -> DomainResult<String> {
        let claims = Claims {
            user_id: user.id,
            phone: user.phone_number.clone(),
            exp: (Utc::now() + self.expiry).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| TokenError::SigningFailure.into())
    }

    /// Verify signature and expiry, returning the decoded claims.
    ///
    /// Malformed or unsigned tokens, and tokens whose claims do not have the
    /// expected shape, are rejected as typed errors; they never panic.
    pub fn verify(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|err| {
                match err.kind() {
                    ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    ErrorKind::Json(_) | ErrorKind::MissingRequiredClaim(_) => {
                        TokenError::InvalidClaims
                    }
                    _ => TokenError::InvalidToken,
                }
                .into()
            })
    }
}
