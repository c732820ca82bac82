//! Auth endpoint DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /auth/request-otp`
#[derive(Debug, Deserialize, Validate)]
pub struct RequestOtpRequest {
    #[validate(length(min = 1, max = 20, message = "phone_number must be 1-20 characters"))]
    pub phone_number: String,
}

/// Body of `POST /auth/verify-otp`
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(length(min = 1, max = 20, message = "phone_number must be 1-20 characters"))]
    pub phone_number: String,

    #[validate(length(min = 1, max = 10, message = "otp must be 1-10 characters"))]
    pub otp: String,
}

/// Body of a successful `POST /auth/verify-otp`
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
