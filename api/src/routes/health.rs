//! Liveness endpoint.

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::warn;

use otp_core::repositories::{IssuanceLedger, OtpStore, UserRepository};
use otp_core::services::otp::OtpDelivery;

use crate::state::AppState;

/// Handler for `GET /health`: reports whether the backing store answers.
pub async fn health<O, L, U, D>(state: web::Data<AppState<O, L, U, D>>) -> HttpResponse
where
    O: OtpStore + 'static,
    L: IssuanceLedger + 'static,
    U: UserRepository + 'static,
    D: OtpDelivery + 'static,
{
    match state.user_service.health_check().await {
        Ok(()) => HttpResponse::Ok().json(json!({ "status": "healthy" })),
        Err(err) => {
            warn!("health check failed: {}", err);
            HttpResponse::ServiceUnavailable().json(json!({ "status": "unhealthy" }))
        }
    }
}
