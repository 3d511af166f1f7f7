//! Integration tests for server API endpoints
//!
//! These tests drive the full router with the deterministic stub embedding
//! backend, covering the analyze endpoint, health probes, per-IP rate
//! limiting, and error envelopes.

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use embedding::EmbeddingError;
use lexigauge::ScoreError;
use server::error::ErrorResponse;
use server::{ServerConfig, ServerError, ServerState, build_router};

/// Create a test server state backed by the stub embedder
fn create_test_state() -> Arc<ServerState> {
    state_with_limit(1000) // High limit for tests
}

fn state_with_limit(rate_limit_per_minute: u32) -> Arc<ServerState> {
    let mut config = ServerConfig::default();
    config.embedding.mode = "stub".to_string();
    config.rate_limit_per_minute = rate_limit_per_minute;

    Arc::new(ServerState::new(config).expect("Failed to create test state"))
}

fn test_router() -> Router {
    build_router(create_test_state())
}

fn analyze_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_state_initialization() {
    let state = create_test_state();

    assert_eq!(state.scorer.model(), "deterministic-stub");
    assert!(state.check_rate_limit(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1))));
}

#[tokio::test]
async fn test_analyze_returns_full_verdict() {
    let app = test_router();

    let response = app
        .oneshot(analyze_request(&json!({ "word": "file" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["word"], "file");

    let contexts = body["contexts"].as_object().unwrap();
    assert_eq!(contexts.len(), 4);
    for key in ["technical", "emotional", "physical", "abstract"] {
        assert!(contexts[key].is_number(), "missing context {key}");
    }

    let clarity = &body["clarity"];
    let score = clarity["score"].as_f64().unwrap();
    let ambiguity = clarity["ambiguity"].as_f64().unwrap();
    assert!((score / 100.0 + ambiguity - 1.0).abs() < 1e-6);
    assert!(["low", "medium", "high"].contains(&clarity["level"].as_str().unwrap()));
    assert!(!clarity["interpretation"].as_str().unwrap().is_empty());
    assert!(!clarity["recommendation"].as_str().unwrap().is_empty());
    assert!(!clarity["emoji"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_analyze_is_deterministic_across_requests() {
    let app = test_router();

    let first = app
        .clone()
        .oneshot(analyze_request(&json!({ "word": "bank" })))
        .await
        .unwrap();
    let second = app
        .oneshot(analyze_request(&json!({ "word": "bank" })))
        .await
        .unwrap();

    assert_eq!(body_json(first).await, body_json(second).await);
}

#[tokio::test]
async fn test_analyze_trims_the_word() {
    let app = test_router();

    let response = app
        .oneshot(analyze_request(&json!({ "word": "  file  " })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["word"], "file");
}

#[tokio::test]
async fn test_empty_word_is_rejected() {
    let app = test_router();

    let response = app
        .oneshot(analyze_request(&json!({ "word": "" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_whitespace_word_is_rejected() {
    let app = test_router();

    let response = app
        .oneshot(analyze_request(&json!({ "word": "   " })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_word_field_is_rejected() {
    let app = test_router();

    let response = app.oneshot(analyze_request(&json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_unknown_route_returns_error_envelope() {
    let app = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_rate_limit_applies_per_window() {
    let app = build_router(state_with_limit(2));

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/analyze")
                    .header("content-type", "application/json")
                    .header("x-forwarded-for", "203.0.113.9")
                    .body(Body::from(r#"{"word":"file"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/analyze")
                .header("content-type", "application/json")
                .header("x-forwarded-for", "203.0.113.9")
                .body(Body::from(r#"{"word":"file"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "RATE_LIMIT_EXCEEDED");
}

#[tokio::test]
async fn test_rate_limit_is_per_client_address() {
    let state = state_with_limit(1);

    let first = IpAddr::V4(Ipv4Addr::new(198, 51, 100, 1));
    let second = IpAddr::V4(Ipv4Addr::new(198, 51, 100, 2));

    assert!(state.check_rate_limit(first));
    assert!(state.check_rate_limit(second));
    assert!(!state.check_rate_limit(first));
    assert!(!state.check_rate_limit(second));
}

#[tokio::test]
async fn test_health_probes_do_not_consume_rate_budget() {
    let app = build_router(state_with_limit(1));

    // Burn the analyze budget for this client.
    let response = app
        .clone()
        .oneshot(analyze_request(&json!({ "word": "file" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(analyze_request(&json!({ "word": "file" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    for uri in ["/", "/health", "/ready"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "unexpected status for {uri}");
    }
}

#[tokio::test]
async fn test_root_reports_endpoints() {
    let app = test_router();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "running");
    let endpoints = body["endpoints"].as_array().unwrap();
    assert!(endpoints.iter().any(|e| e == "/analyze"));
}

#[tokio::test]
async fn test_ready_reports_embedding_backend() {
    let app = test_router();

    let response = app
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["components"]["embedding"]["mode"], "stub");
    assert_eq!(
        body["components"]["embedding"]["model"],
        "deterministic-stub"
    );
}

#[tokio::test]
async fn test_request_id_header_round_trips() {
    let app = test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "trace-me-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "trace-me-123"
    );
}

#[tokio::test]
async fn test_error_status_mapping() {
    let cases = [
        (
            ServerError::Score(ScoreError::InvalidInput("no word provided".into())),
            StatusCode::BAD_REQUEST,
            "INVALID_INPUT",
        ),
        (
            ServerError::Score(ScoreError::EmbeddingProvider(EmbeddingError::Provider {
                status: 500,
                body: "upstream".into(),
            })),
            StatusCode::BAD_GATEWAY,
            "EMBEDDING_PROVIDER_ERROR",
        ),
        (
            ServerError::Score(ScoreError::DegenerateVector("zero norm".into())),
            StatusCode::INTERNAL_SERVER_ERROR,
            "DEGENERATE_VECTOR",
        ),
        (
            ServerError::Embedding(EmbeddingError::InvalidConfig("missing key".into())),
            StatusCode::INTERNAL_SERVER_ERROR,
            "EMBEDDING_ERROR",
        ),
        (
            ServerError::RateLimitExceeded,
            StatusCode::TOO_MANY_REQUESTS,
            "RATE_LIMIT_EXCEEDED",
        ),
        (
            ServerError::BadRequest("bad".into()),
            StatusCode::BAD_REQUEST,
            "BAD_REQUEST",
        ),
        (ServerError::NotFound, StatusCode::NOT_FOUND, "NOT_FOUND"),
    ];

    for (error, expected_status, expected_code) in cases {
        let response = error.into_response();
        assert_eq!(response.status(), expected_status);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let envelope: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(envelope.error.code, expected_code);
        assert!(!envelope.error.message.is_empty());
    }
}
