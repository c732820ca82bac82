//! OTP issuance and verification handlers.

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, warn};
use validator::Validate;

use otp_core::errors::{AuthError, DomainError};
use otp_core::repositories::{IssuanceLedger, OtpStore, UserRepository};
use otp_core::services::otp::OtpDelivery;
use otp_shared::utils::phone::{is_valid_phone, mask_phone, normalize_phone};

use crate::dto::auth::{RequestOtpRequest, TokenResponse, VerifyOtpRequest};
use crate::state::AppState;

/// Handler for `POST /auth/request-otp`.
///
/// Normalizes and validates the phone number, then asks the auth service to
/// generate, store and deliver a one-time code.
pub async fn request_otp<O, L, U, D>(
    state: web::Data<AppState<O, L, U, D>>,
    request: web::Json<RequestOtpRequest>,
) -> HttpResponse
where
    O: OtpStore + 'static,
    L: IssuanceLedger + 'static,
    U: UserRepository + 'static,
    D: OtpDelivery + 'static,
{
    if let Err(errors) = request.0.validate() {
        return HttpResponse::BadRequest().json(json!({ "error": errors.to_string() }));
    }

    let phone = normalize_phone(&request.phone_number);
    if !is_valid_phone(&phone) {
        return HttpResponse::BadRequest().json(json!({ "error": "Invalid phone number" }));
    }

    match state.auth_service.request_otp(&phone).await {
        Ok(()) => {
            info!("OTP issued for {}", mask_phone(&phone));
            HttpResponse::Ok().json(json!({ "message": "OTP sent successfully" }))
        }
        Err(DomainError::Auth(AuthError::RateLimited)) => {
            warn!("OTP request rate limited for {}", mask_phone(&phone));
            HttpResponse::TooManyRequests().json(json!({ "error": "Too many requests" }))
        }
        Err(err) => {
            warn!("OTP request failed for {}: {}", mask_phone(&phone), err);
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to generate OTP" }))
        }
    }
}

/// Handler for `POST /auth/verify-otp`.
///
/// Every verification failure collapses into a single 401 so the response
/// does not reveal whether a code was ever issued for the number.
pub async fn verify_otp<O, L, U, D>(
    state: web::Data<AppState<O, L, U, D>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    O: OtpStore + 'static,
    L: IssuanceLedger + 'static,
    U: UserRepository + 'static,
    D: OtpDelivery + 'static,
{
    if let Err(errors) = request.0.validate() {
        return HttpResponse::BadRequest().json(json!({ "error": errors.to_string() }));
    }

    let phone = normalize_phone(&request.phone_number);
    // a malformed phone can never hold a code; answer the same 401 as a
    // wrong code so the response shape leaks nothing
    if !is_valid_phone(&phone) {
        return HttpResponse::Unauthorized().json(json!({ "error": "Invalid OTP" }));
    }

    match state.auth_service.verify_otp(&phone, &request.otp).await {
        Ok(token) => {
            info!("OTP verified for {}", mask_phone(&phone));
            HttpResponse::Ok().json(TokenResponse { token })
        }
        Err(err) => {
            warn!("OTP verification failed for {}: {}", mask_phone(&phone), err);
            HttpResponse::Unauthorized().json(json!({ "error": "Invalid OTP" }))
        }
    }
}
