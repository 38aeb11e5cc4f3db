//! `/health`, the fallback route and the middleware stack.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use common::{assert_json_content_type, body_json, delete, get, send};
use shows_api::config::{SeedSource, ServerConfig};

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_seeded_store() {
    let app = common::build_test_app(common::seeded_pool());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_json_content_type(&response);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["store_healthy"], true);
    assert_eq!(json["shows"], 3);
    assert_eq!(json["seed"], "bundled");
}

#[tokio::test]
async fn health_reports_empty_store() {
    let config = ServerConfig {
        seed: SeedSource::Empty,
        ..common::test_config()
    };
    let pool = config.seed.create_pool().unwrap();
    let app = common::build_test_app_with(pool, config);

    let json = body_json(get(app, "/health").await).await;

    assert_eq!(json["status"], "ok");
    assert_eq!(json["shows"], 0);
    assert_eq!(json["seed"], "empty");
}

#[tokio::test]
async fn health_row_count_follows_deletes() {
    let pool = common::seeded_pool();

    let response = delete(common::build_test_app(pool.clone()), "/api/v1/shows/6").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(common::build_test_app(pool), "/health").await).await;
    assert_eq!(json["shows"], 2);
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_gets_error_envelope() {
    let app = common::build_test_app(common::seeded_pool());
    let response = get(app, "/api/v2/shows").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_json_content_type(&response);

    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Route not found");
}

// ---------------------------------------------------------------------------
// Middleware
// ---------------------------------------------------------------------------

#[tokio::test]
async fn request_id_is_generated_when_absent() {
    let app = common::build_test_app(common::seeded_pool());
    let response = get(app, "/api/v1/shows").await;

    let id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id should be set")
        .to_str()
        .unwrap();
    // Hyphenated UUID.
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn request_id_from_caller_is_echoed() {
    let app = common::build_test_app(common::seeded_pool());
    let request = Request::builder()
        .uri("/api/v1/shows/4")
        .header("x-request-id", "show-lookup-42")
        .body(Body::empty())
        .unwrap();

    let response = send(app, request).await;

    assert_eq!(response.headers()["x-request-id"], "show-lookup-42");
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin() {
    let app = common::build_test_app(common::seeded_pool());
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/shows/4")
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    assert!(methods.contains("PUT"), "allow-methods was {methods}");
}
