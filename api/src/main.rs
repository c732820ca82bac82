//! Server entrypoint: loads configuration, connects to MySQL and Redis,
//! wires the services together and starts the HTTP listener.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use otp_api::app::create_app;
use otp_api::state::AppState;
use otp_core::services::otp::AuthService;
use otp_core::services::stats::StatsService;
use otp_core::services::token::TokenService;
use otp_core::services::user::UserService;
use otp_infra::cache::{otp_store::RedisOtpStore, redis_client::RedisClient};
use otp_infra::database::connection::{create_pool, run_migrations};
use otp_infra::database::repositories::issuance_ledger::MySqlIssuanceLedger;
use otp_infra::database::repositories::user_repository::MySqlUserRepository;
use otp_infra::sms::console::ConsoleOtpDelivery;
use otp_infra::InfrastructureError;
use otp_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    info!("starting otp-auth server on {}", config.server.bind_address());

    let pool = create_pool(&config.database).await.map_err(io_error)?;
    run_migrations(&pool).await.map_err(io_error)?;

    let redis = RedisClient::new(&config.cache).await.map_err(io_error)?;
    redis.ping().await.map_err(io_error)?;

    let otp_store = Arc::new(RedisOtpStore::new(redis));
    let ledger = Arc::new(MySqlIssuanceLedger::new(pool.clone()));
    let user_repository = Arc::new(MySqlUserRepository::new(pool));
    let delivery = Arc::new(ConsoleOtpDelivery::new());
    let token_service = Arc::new(TokenService::new(&config.auth));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&otp_store),
        Arc::clone(&ledger),
        Arc::clone(&user_repository),
        delivery,
        Arc::clone(&token_service),
        config.otp.clone().into(),
    ));
    let stats_service = Arc::new(StatsService::new(Arc::clone(&ledger)));
    let user_service = Arc::new(UserService::new(Arc::clone(&user_repository)));

    let state = web::Data::new(AppState {
        auth_service,
        stats_service,
        user_service,
    });

    let bind_address = config.server.bind_address();
    HttpServer::new(move || create_app(state.clone(), Arc::clone(&token_service)))
        .bind(&bind_address)?
        .run()
        .await
}

fn io_error(err: InfrastructureError) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
}
