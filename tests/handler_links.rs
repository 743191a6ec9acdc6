mod common;

use std::collections::HashSet;

use axum::{Router, routing::post};
use axum_test::TestServer;
use chrono::Utc;
use linkcut::api::handlers::create_link_handler;
use linkcut::domain::repositories::LinkStore;
use linkcut::state::AppState;
use linkcut::utils::expiration::ExpirationPolicy;
use linkcut::utils::slug::DEFAULT_RESERVED_SLUGS;
use serde_json::json;

fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/links", post(create_link_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_create_link_with_generated_slug() {
    let (state, _store) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/api/links")
        .add_header("Host", "s.example.com")
        .json(&json!({ "url": "https://example.com/page" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let slug = json["link"]["slug"].as_str().unwrap();
    assert_eq!(slug.len(), 8);
    assert_eq!(json["link"]["url"], "https://example.com/page");
    assert_eq!(
        json["short_link"],
        format!("http://s.example.com/{}", slug)
    );
}

#[tokio::test]
async fn test_create_link_with_custom_slug() {
    let (state, _store) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/api/links")
        .add_header("Host", "s.example.com")
        .json(&json!({
            "url": "https://example.com/launch",
            "slug": "launch-page",
            "comment": "spring launch"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["link"]["slug"], "launch-page");
    assert_eq!(json["link"]["comment"], "spring launch");
    assert_eq!(json["short_link"], "http://s.example.com/launch-page");
}

#[tokio::test]
async fn test_generated_slugs_are_pairwise_distinct_and_unreserved() {
    let (state, _store) = common::create_test_state();
    let server = make_server(state);

    let mut slugs = HashSet::new();

    for i in 0..20 {
        let response = server
            .post("/api/links")
            .add_header("Host", "s.example.com")
            .json(&json!({ "url": format!("https://example.com/page/{}", i) }))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);

        let json = response.json::<serde_json::Value>();
        let slug = json["link"]["slug"].as_str().unwrap().to_string();

        assert!(!DEFAULT_RESERVED_SLUGS.contains(&slug.as_str()));
        assert!(slugs.insert(slug), "slug allocated twice");
    }
}

#[tokio::test]
async fn test_reserved_slug_rejected_without_store_write() {
    let (state, store) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/api/links")
        .add_header("Host", "s.example.com")
        .json(&json!({ "url": "https://example.com", "slug": "api" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "reserved_slug");
    assert_eq!(json["error"]["message"], "Slug is reserved");

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_taken_slug_conflicts_and_preserves_original() {
    let (state, store) = common::create_test_state();
    let original = common::seed_link(&store, "occupied", "https://example.com/first").await;
    let server = make_server(state);

    let response = server
        .post("/api/links")
        .add_header("Host", "s.example.com")
        .json(&json!({ "url": "https://example.com/second", "slug": "occupied" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "conflict");
    assert_eq!(json["error"]["message"], "Link already exists");

    // The pre-existing record is unchanged.
    let stored = store.get("occupied").await.unwrap().unwrap();
    assert_eq!(stored, original);
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_expired_slug_can_be_reclaimed() {
    let (state, store) = common::create_test_state();
    common::seed_link_expiring(
        &store,
        "seasonal",
        "https://example.com/old",
        Some(Utc::now() - chrono::Duration::hours(1)),
    )
    .await;
    let server = make_server(state);

    let response = server
        .post("/api/links")
        .add_header("Host", "s.example.com")
        .json(&json!({ "url": "https://example.com/new", "slug": "seasonal" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let stored = store.get("seasonal").await.unwrap().unwrap();
    assert_eq!(stored.url, "https://example.com/new");
}

#[tokio::test]
async fn test_created_link_round_trips_through_store() {
    let (state, store) = common::create_test_state();
    let server = make_server(state);

    let expiration = Utc::now().timestamp() + 3600;
    let response = server
        .post("/api/links")
        .add_header("Host", "s.example.com")
        .json(&json!({
            "url": "https://example.com/page?q=1",
            "slug": "round-trip",
            "comment": "note",
            "expiration": expiration
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let returned: linkcut::domain::entities::Link =
        serde_json::from_value(response.json::<serde_json::Value>()["link"].clone()).unwrap();

    let stored = store.get("round-trip").await.unwrap().unwrap();
    assert_eq!(stored, returned);
    assert_eq!(stored.expires_at.map(|at| at.timestamp()), Some(expiration));
}

#[tokio::test]
async fn test_stored_entry_is_namespaced_with_metadata() {
    let (state, store) = common::create_test_state();
    let server = make_server(state);

    let expiration = Utc::now().timestamp() + 3600;
    server
        .post("/api/links")
        .add_header("Host", "s.example.com")
        .json(&json!({
            "url": "https://example.com",
            "slug": "keyed",
            "expiration": expiration
        }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let payload = store.raw_payload("link:keyed").await.unwrap();
    let envelope: serde_json::Value = serde_json::from_str(&payload).unwrap();

    assert_eq!(envelope["link"]["slug"], "keyed");
    assert_eq!(envelope["metadata"]["expiration"], expiration);
}

#[tokio::test]
async fn test_preview_mode_caps_store_expiry() {
    let (state, store) = common::create_test_state_with(ExpirationPolicy::new(true, 3600));
    let server = make_server(state);

    server
        .post("/api/links")
        .add_header("Host", "s.example.com")
        .json(&json!({ "url": "https://example.com", "slug": "fleeting" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let payload = store.raw_payload("link:fleeting").await.unwrap();
    let envelope: serde_json::Value = serde_json::from_str(&payload).unwrap();

    let capped = envelope["metadata"]["expiration"].as_i64().unwrap();
    let expected = Utc::now().timestamp() + 3600;
    assert!((capped - expected).abs() <= 2);
}

#[tokio::test]
async fn test_invalid_url_rejected() {
    let (state, store) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/api/links")
        .add_header("Host", "s.example.com")
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_malformed_slug_rejected() {
    let (state, _store) = common::create_test_state();
    let server = make_server(state);

    for slug in ["-leading", "a--b", "has space"] {
        let response = server
            .post("/api/links")
            .add_header("Host", "s.example.com")
            .json(&json!({ "url": "https://example.com", "slug": slug }))
            .await;

        response.assert_status_bad_request();
    }
}

#[tokio::test]
async fn test_past_expiration_rejected() {
    let (state, store) = common::create_test_state();
    let server = make_server(state);

    let response = server
        .post("/api/links")
        .add_header("Host", "s.example.com")
        .json(&json!({
            "url": "https://example.com",
            "expiration": Utc::now().timestamp() - 60
        }))
        .await;

    response.assert_status_bad_request();
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_missing_host_header_rejected_before_store_write() {
    let (state, store) = common::create_test_state();

    // Mount without the usual test Host header.
    let app = Router::new()
        .route("/api/links", post(create_link_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_bad_request();
    assert!(store.is_empty().await);
}
