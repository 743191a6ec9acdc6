mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use chrono::{Duration, Utc};
use linkcut::api::handlers::redirect_handler;
use linkcut::state::AppState;

fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/{slug}", get(redirect_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_success() {
    let (state, store) = common::create_test_state();
    common::seed_link(&store, "promo123", "https://example.com/landing").await;
    let server = make_server(state);

    let response = server.get("/promo123").await;

    response.assert_status(axum::http::StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.header("location").to_str().unwrap(),
        "https://example.com/landing"
    );
}

#[tokio::test]
async fn test_redirect_unknown_slug() {
    let (state, _store) = common::create_test_state();
    let server = make_server(state);

    let response = server.get("/missing1").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["message"], "Link not found");
}

#[tokio::test]
async fn test_redirect_expired_link() {
    let (state, store) = common::create_test_state();
    common::seed_link_expiring(
        &store,
        "stale123",
        "https://example.com/expired",
        Some(Utc::now() - Duration::hours(1)),
    )
    .await;
    let server = make_server(state);

    let response = server.get("/stale123").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_link_expiring_in_future_still_served() {
    let (state, store) = common::create_test_state();
    common::seed_link_expiring(
        &store,
        "timed123",
        "https://example.com/timed",
        Some(Utc::now() + Duration::hours(1)),
    )
    .await;
    let server = make_server(state);

    let response = server.get("/timed123").await;

    response.assert_status(axum::http::StatusCode::TEMPORARY_REDIRECT);
}
