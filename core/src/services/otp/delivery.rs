//! Delivery seam: how a generated code reaches the user.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Channel that hands a freshly generated code to the user (SMS, console, ...).
///
/// Delivery runs after the code has been stored and the issuance recorded;
/// a delivery failure never rolls those steps back.
#[async_trait]
pub trait OtpDelivery: Send + Sync {
    /// Deliver a code to a phone number
    async fn deliver(&self, phone: &str, code: &str) -> Result<(), DomainError>;
}
