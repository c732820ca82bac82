//! Issuance statistics handler.

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::warn;

use otp_core::repositories::{IssuanceLedger, OtpStore, UserRepository};
use otp_core::services::otp::OtpDelivery;
use otp_shared::utils::phone::{is_valid_phone, mask_phone, normalize_phone};

use crate::dto::stats::{OtpStatsResponse, StatsQuery};
use crate::state::AppState;

/// Handler for `GET /otp/stats?phone=...&hours=...`.
///
/// `hours` defaults to 24 and must parse as a positive integer.
pub async fn get_stats<O, L, U, D>(
    state: web::Data<AppState<O, L, U, D>>,
    query: web::Query<StatsQuery>,
) -> HttpResponse
where
    O: OtpStore + 'static,
    L: IssuanceLedger + 'static,
    U: UserRepository + 'static,
    D: OtpDelivery + 'static,
{
    let phone = match query.phone.as_deref() {
        Some(phone) if !phone.trim().is_empty() => normalize_phone(phone),
        _ => {
            return HttpResponse::BadRequest().json(json!({ "error": "Phone number is required" }));
        }
    };
    if !is_valid_phone(&phone) {
        return HttpResponse::BadRequest().json(json!({ "error": "Invalid phone number" }));
    }

    let hours = match query.hours.as_deref().unwrap_or("24").parse::<i64>() {
        Ok(hours) if hours > 0 => hours,
        _ => {
            return HttpResponse::BadRequest().json(json!({ "error": "Invalid hours parameter" }));
        }
    };

    match state.stats_service.get_stats(&phone, hours).await {
        Ok(stats) => HttpResponse::Ok().json(OtpStatsResponse::from(stats)),
        Err(err) => {
            warn!("stats lookup failed for {}: {}", mask_phone(&phone), err);
            HttpResponse::InternalServerError()
                .json(json!({ "error": "Failed to retrieve statistics" }))
        }
    }
}
