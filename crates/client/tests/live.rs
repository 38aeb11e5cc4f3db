//! Client tests against a real server bound to an ephemeral port.

use std::sync::Arc;

use shows_api::config::{SeedSource, ServerConfig};
use shows_api::router::build_app_router;
use shows_api::state::AppState;
use reqwest::Method;
use serde_json::json;
use shows_client::{
    HttpTransport, NewShow, ShowPatch, ShowsClient, Transport, TransportRequest,
};

/// Start the full application on `127.0.0.1:0` and return its base URL.
async fn spawn_server() -> String {
    let config = ServerConfig::from_lookup(|_| None).unwrap();
    let state = AppState {
        pool: SeedSource::Bundled.create_pool().unwrap(),
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// Transport for a freshly spawned server. Bypasses any proxy configured in
/// the environment.
async fn live_transport() -> HttpTransport {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpTransport::with_client(http, spawn_server().await)
}

async fn live_client() -> ShowsClient {
    ShowsClient::with_transport(live_transport().await)
}

fn family_guy() -> NewShow {
    NewShow {
        name: "Family Guy".to_string(),
        genre: "Comedy".to_string(),
        rating: 8.0,
        explicit: true,
    }
}

#[tokio::test]
async fn list_returns_seeded_shows() {
    let client = live_client().await;

    let shows = client.list().await.unwrap();

    assert_eq!(shows.len(), 3);
    assert_eq!(shows[0].name, "Westworld");
}

#[tokio::test]
async fn get_finds_westworld_and_misses_999() {
    let client = live_client().await;

    let show = client.get(4).await.unwrap();
    assert_eq!(show.name, "Westworld");

    let err = client.get(999).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn full_lifecycle() {
    let client = live_client().await;

    let created = client.create(&family_guy()).await.unwrap();
    assert_eq!(created.name, "Family Guy");
    assert_eq!(created.genre, "Comedy");
    assert_eq!(created.rating, 8.0);
    assert!(created.explicit);

    let patch = ShowPatch {
        rating: Some(9.0),
        ..Default::default()
    };
    let updated = client.update(created.id, &patch).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.rating, 9.0);
    assert_eq!(updated.name, "Family Guy");

    let deleted = client.delete(created.id).await.unwrap();
    assert_eq!(deleted, updated);

    assert!(client.get(created.id).await.unwrap_err().is_not_found());
    assert!(client.delete(created.id).await.unwrap_err().is_not_found());
    assert!(client
        .update(created.id, &patch)
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn blank_name_create_is_rejected() {
    let client = live_client().await;

    let blank = NewShow {
        name: String::new(),
        ..family_guy()
    };
    let err = client.create(&blank).await.unwrap_err();

    assert!(err.is_bad_request());
    assert_eq!(client.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn incomplete_create_is_rejected() {
    // `NewShow` cannot omit fields, so the body goes through the raw transport.
    let client = ShowsClient::with_transport(live_transport().await);
    let request = TransportRequest {
        method: Method::POST,
        path: "/api/v1/shows".to_string(),
        body: Some(json!({"name": "Family Guy"})),
    };

    let response = client.transport().send(&request).await.unwrap();

    assert_eq!(response.status, 400);
    assert!(response
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("application/json")));
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));

    assert_eq!(client.list().await.unwrap().len(), 3);
}
