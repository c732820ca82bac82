//! Console delivery channel for development environments.
//!
//! Prints the code to the process log instead of sending an SMS. This is the
//! only place in the system where a full code and phone number are emitted,
//! which is why it must never be wired up in production.

use async_trait::async_trait;
use tracing::info;

use otp_core::errors::DomainError;
use otp_core::services::otp::OtpDelivery;

#[derive(Default)]
pub struct ConsoleOtpDelivery;

impl ConsoleOtpDelivery {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OtpDelivery for ConsoleOtpDelivery {
    async fn deliver(&self, phone: &str, code: &str) -> Result<(), DomainError> {
        info!("OTP for {phone}: {code}");
        Ok(())
    }
}
