//! Actix application factory.
//!
//! Builds the `App` with all routes and middleware wired, generic over the
//! storage and delivery collaborators so tests can run it against the
//! in-memory mocks.

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse};
use serde_json::json;

use otp_core::repositories::{IssuanceLedger, OtpStore, UserRepository};
use otp_core::services::otp::OtpDelivery;
use otp_core::services::token::TokenService;

use crate::middleware::JwtAuth;
use crate::routes;
use crate::state::AppState;

/// Create the application with all routes configured.
///
/// `token_service` is registered as app data so the auth middleware can
/// verify bearer tokens without holding its own copy of the secret.
pub fn create_app<O, L, U, D>(
    app_state: web::Data<AppState<O, L, U, D>>,
    token_service: Arc<TokenService>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    O: OtpStore + 'static,
    L: IssuanceLedger + 'static,
    U: UserRepository + 'static,
    D: OtpDelivery + 'static,
{
    App::new()
        .app_data(app_state)
        .app_data(web::Data::from(token_service))
        .wrap(Logger::default())
        .route("/health", web::get().to(routes::health::health::<O, L, U, D>))
        .service(
            web::scope("/auth")
                .route(
                    "/request-otp",
                    web::post().to(routes::auth::request_otp::<O, L, U, D>),
                )
                .route(
                    "/verify-otp",
                    web::post().to(routes::auth::verify_otp::<O, L, U, D>),
                ),
        )
        .route(
            "/otp/stats",
            web::get().to(routes::stats::get_stats::<O, L, U, D>),
        )
        .service(
            web::resource("/me")
                .wrap(JwtAuth)
                .route(web::get().to(routes::users::get_me::<O, L, U, D>)),
        )
        .service(
            web::scope("/users")
                .wrap(JwtAuth)
                .route("/{id}", web::get().to(routes::users::get_user::<O, L, U, D>))
                .route("/", web::get().to(routes::users::list_users::<O, L, U, D>)),
        )
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Not found" }))
}
