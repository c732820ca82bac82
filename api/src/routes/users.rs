//! Authenticated user endpoints.

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::warn;

use otp_core::errors::DomainError;
use otp_core::repositories::{IssuanceLedger, OtpStore, UserRepository};
use otp_core::services::otp::OtpDelivery;

use crate::dto::user::{ListUsersQuery, UserListResponse, UserResponse};
use crate::middleware::AuthContext;
use crate::state::AppState;

const DEFAULT_PAGE_SIZE: u64 = 20;
const MAX_PAGE_SIZE: u64 = 100;

/// Handler for `GET /me`: returns the authenticated caller's own record.
pub async fn get_me<O, L, U, D>(
    state: web::Data<AppState<O, L, U, D>>,
    auth: AuthContext,
) -> HttpResponse
where
    O: OtpStore + 'static,
    L: IssuanceLedger + 'static,
    U: UserRepository + 'static,
    D: OtpDelivery + 'static,
{
    match state.user_service.get_me(auth.user_id).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(DomainError::NotFound { .. }) => {
            HttpResponse::NotFound().json(json!({ "error": "User not found" }))
        }
        Err(err) => {
            warn!("get_me failed for user {}: {}", auth.user_id, err);
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to fetch user" }))
        }
    }
}

/// Handler for `GET /users/{id}`.
pub async fn get_user<O, L, U, D>(
    state: web::Data<AppState<O, L, U, D>>,
    path: web::Path<i64>,
) -> HttpResponse
where
    O: OtpStore + 'static,
    L: IssuanceLedger + 'static,
    U: UserRepository + 'static,
    D: OtpDelivery + 'static,
{
    let id = path.into_inner();
    match state.user_service.get_user(id).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(DomainError::NotFound { .. }) => {
            HttpResponse::NotFound().json(json!({ "error": "User not found" }))
        }
        Err(err) => {
            warn!("get_user failed for id {}: {}", id, err);
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to fetch user" }))
        }
    }
}

/// Handler for `GET /users/` with pagination and optional phone search.
pub async fn list_users<O, L, U, D>(
    state: web::Data<AppState<O, L, U, D>>,
    query: web::Query<ListUsersQuery>,
) -> HttpResponse
where
    O: OtpStore + 'static,
    L: IssuanceLedger + 'static,
    U: UserRepository + 'static,
    D: OtpDelivery + 'static,
{
    let offset = query.offset.unwrap_or(0);
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);

    match state
        .user_service
        .list_users(offset, limit, query.search.as_deref())
        .await
    {
        Ok((users, total)) => HttpResponse::Ok().json(UserListResponse {
            users: users.into_iter().map(UserResponse::from).collect(),
            total,
        }),
        Err(err) => {
            warn!("list_users failed: {}", err);
            HttpResponse::InternalServerError().json(json!({ "error": "Failed to list users" }))
        }
    }
}
