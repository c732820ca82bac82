//! End-to-end HTTP tests running the full app against in-memory stores.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web};
use serde_json::{json, Value};

use otp_api::app::create_app;
use otp_api::state::AppState;
use otp_core::repositories::mock::{
    MockIssuanceLedger, MockOtpDelivery, MockOtpStore, MockUserRepository,
};
use otp_core::services::otp::{AuthService, OtpServiceConfig};
use otp_core::services::stats::StatsService;
use otp_core::services::token::TokenService;
use otp_core::services::user::UserService;
use otp_shared::config::JwtConfig;

type TestState = AppState<MockOtpStore, MockIssuanceLedger, MockUserRepository, MockOtpDelivery>;

struct TestHarness {
    state: web::Data<TestState>,
    token_service: Arc<TokenService>,
    delivery: Arc<MockOtpDelivery>,
}

fn harness_with_config(config: OtpServiceConfig) -> TestHarness {
    let otp_store = Arc::new(MockOtpStore::new());
    let ledger = Arc::new(MockIssuanceLedger::new());
    let user_repository = Arc::new(MockUserRepository::new());
    let delivery = Arc::new(MockOtpDelivery::new());
    let token_service = Arc::new(TokenService::new(&JwtConfig::new(
        "integration-test-secret".to_string(),
    )));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&otp_store),
        Arc::clone(&ledger),
        Arc::clone(&user_repository),
        Arc::clone(&delivery),
        Arc::clone(&token_service),
        config,
    ));
    let stats_service = Arc::new(StatsService::new(Arc::clone(&ledger)));
    let user_service = Arc::new(UserService::new(Arc::clone(&user_repository)));

    TestHarness {
        state: web::Data::new(AppState {
            auth_service,
            stats_service,
            user_service,
        }),
        token_service,
        delivery,
    }
}

fn harness() -> TestHarness {
    harness_with_config(OtpServiceConfig::default())
}

#[actix_rt::test]
async fn test_full_auth_flow() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone(), Arc::clone(&h.token_service))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/auth/request-otp")
            .set_json(json!({ "phone_number": "14155552671" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    // normalization prepends the plus sign
    let code = h.delivery.last_code_for("+14155552671").await.unwrap();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/auth/verify-otp")
            .set_json(json!({ "phone_number": "14155552671", "otp": code }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap().to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let me: Value = test::read_body_json(resp).await;
    assert_eq!(me["phone_number"], "+14155552671");
}

#[actix_rt::test]
async fn test_request_otp_rate_limited() {
    let config = OtpServiceConfig {
        rate_limit: 2,
        ..OtpServiceConfig::default()
    };
    let h = harness_with_config(config);
    let app = test::init_service(create_app(h.state.clone(), Arc::clone(&h.token_service))).await;

    for _ in 0..2 {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/request-otp")
                .set_json(json!({ "phone_number": "+14155552671" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/auth/request-otp")
            .set_json(json!({ "phone_number": "+14155552671" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Too many requests");
}

#[actix_rt::test]
async fn test_request_otp_invalid_phone() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone(), Arc::clone(&h.token_service))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/auth/request-otp")
            .set_json(json!({ "phone_number": "not-a-phone" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_verify_otp_wrong_code() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone(), Arc::clone(&h.token_service))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/auth/request-otp")
            .set_json(json!({ "phone_number": "+14155552671" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/auth/verify-otp")
            .set_json(json!({ "phone_number": "+14155552671", "otp": "000000" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid OTP");
}

#[actix_rt::test]
async fn test_verify_otp_rejects_malformed_phone_without_panicking() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone(), Arc::clone(&h.token_service))).await;

    // non-E.164 input, including multibyte text, gets the same 401 as a
    // wrong code and never reaches the store
    for phone in ["日本語テスト", "not-a-phone", "+1415"] {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/verify-otp")
                .set_json(json!({ "phone_number": phone, "otp": "1" }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid OTP");
    }
}

#[actix_rt::test]
async fn test_stats_rejects_malformed_phone() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone(), Arc::clone(&h.token_service))).await;

    for phone in ["%E6%97%A5%E6%9C%AC%E8%AA%9E", "abc"] {
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/otp/stats?phone={}", phone))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid phone number");
    }
}

#[actix_rt::test]
async fn test_verify_otp_without_issuance() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone(), Arc::clone(&h.token_service))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/auth/verify-otp")
            .set_json(json!({ "phone_number": "+14155552671", "otp": "123456" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_stats_reports_success_rate() {
    let config = OtpServiceConfig {
        rate_limit: 2,
        ..OtpServiceConfig::default()
    };
    let h = harness_with_config(config);
    let app = test::init_service(create_app(h.state.clone(), Arc::clone(&h.token_service))).await;

    // two successful issuances, then one rejected by the rate limit
    for _ in 0..3 {
        let _ = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/request-otp")
                .set_json(json!({ "phone_number": "+14155552671" }))
                .to_request(),
        )
        .await;
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/otp/stats?phone=%2B14155552671")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["phone_number"], "+14155552671");
    assert_eq!(body["hours_looked_back"], 24);
    assert_eq!(body["total_requests"], 3);
    assert_eq!(body["successful_requests"], 2);
    assert_eq!(body["failed_requests"], 1);
    assert_eq!(body["success_rate"], 66.67);
    assert_eq!(body["timezone"], "UTC");
}

#[actix_rt::test]
async fn test_stats_requires_phone() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone(), Arc::clone(&h.token_service))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/otp/stats").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Phone number is required");
}

#[actix_rt::test]
async fn test_stats_rejects_bad_hours() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone(), Arc::clone(&h.token_service))).await;

    for hours in ["0", "-3", "abc"] {
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/otp/stats?phone=%2B14155552671&hours={}", hours))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid hours parameter");
    }
}

#[actix_rt::test]
async fn test_me_requires_auth() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone(), Arc::clone(&h.token_service))).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/me").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", "Bearer not.a.token"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_users_endpoints() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone(), Arc::clone(&h.token_service))).await;

    // register two users through the normal flow
    let mut token = String::new();
    for phone in ["+14155552671", "+442071838750"] {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/request-otp")
                .set_json(json!({ "phone_number": phone }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let code = h.delivery.last_code_for(phone).await.unwrap();
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/auth/verify-otp")
                .set_json(json!({ "phone_number": phone, "otp": code }))
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(resp).await;
        token = body["token"].as_str().unwrap().to_string();
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/users/")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["total"], 2);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/users/1")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 1);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/users/999")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_health_endpoint() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone(), Arc::clone(&h.token_service))).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_rt::test]
async fn test_unknown_route_returns_json_404() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone(), Arc::clone(&h.token_service))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/nope").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Not found");
}
