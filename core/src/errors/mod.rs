//! Domain error types for the OTP auth service.
//!
//! Every failure is a typed value the boundary layer can match on; nothing in
//! the core distinguishes failures by comparing error message strings.

use thiserror::Error;

/// Convenience result alias used throughout the core
pub type DomainResult<T> = Result<T, DomainError>;

/// Failures of the OTP issuance and verification flow
#[derive(Error, Debug)]
pub enum AuthError {
    /// The phone exhausted its issuance budget inside the rate window
    #[error("rate limit exceeded")]
    RateLimited,

    /// The secure random source was unavailable or failed
    #[error("failed to generate OTP code")]
    GenerationFailure,

    /// The OTP store or issuance ledger was unreachable, rejected a write,
    /// or timed out
    #[error("storage failure: {message}")]
    StorageFailure { message: String },

    /// Wrong code, expired code, or no code was ever issued; the distinction
    /// is deliberately not surfaced to callers
    #[error("invalid or expired OTP")]
    InvalidOrExpired,

    /// Creating the identity record after a successful verification failed
    #[error("failed to create user: {message}")]
    IdentityCreationFailure { message: String },
}

/// Failures of token issuance and verification
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("failed to sign token")]
    SigningFailure,

    #[error("token expired")]
    TokenExpired,

    #[error("invalid token")]
    InvalidToken,

    #[error("invalid token claims")]
    InvalidClaims,
}

/// Unified domain error surfaced to the boundary layer
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Stable error code for logging and API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Auth(AuthError::RateLimited) => "RATE_LIMITED",
            DomainError::Auth(AuthError::GenerationFailure) => "GENERATION_FAILURE",
            DomainError::Auth(AuthError::StorageFailure { .. }) => "STORAGE_FAILURE",
            DomainError::Auth(AuthError::InvalidOrExpired) => "INVALID_OR_EXPIRED",
            DomainError::Auth(AuthError::IdentityCreationFailure { .. }) => {
                "IDENTITY_CREATION_FAILURE"
            }
            DomainError::Token(TokenError::SigningFailure) => "SIGNING_FAILURE",
            DomainError::Token(TokenError::TokenExpired) => "TOKEN_EXPIRED",
            DomainError::Token(TokenError::InvalidToken) => "INVALID_TOKEN",
            DomainError::Token(TokenError::InvalidClaims) => "INVALID_CLAIMS",
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Shorthand for a storage failure wrapping a collaborator error
    pub fn storage(message: impl ToString) -> Self {
        DomainError::Auth(AuthError::StorageFailure {
            message: message.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(
            DomainError::Auth(AuthError::RateLimited).error_code(),
            "RATE_LIMITED"
        );
        assert_eq!(
            DomainError::Auth(AuthError::InvalidOrExpired).error_code(),
            "INVALID_OR_EXPIRED"
        );
        assert_eq!(
            DomainError::Token(TokenError::TokenExpired).error_code(),
            "TOKEN_EXPIRED"
        );
    }

    #[test]
    fn test_rate_limited_is_matchable_not_string_matched() {
        let err: DomainError = AuthError::RateLimited.into();
        assert!(matches!(err, DomainError::Auth(AuthError::RateLimited)));
    }

    #[test]
    fn test_storage_shorthand() {
        let err = DomainError::storage("redis down");
        match err {
            DomainError::Auth(AuthError::StorageFailure { message }) => {
                assert_eq!(message, "redis down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
