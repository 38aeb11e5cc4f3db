//! Root-level liveness endpoint.

use std::time::Duration;

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the store lock could not be taken in time.
    pub status: &'static str,
    pub version: &'static str,
    pub store_healthy: bool,
    /// Rows currently stored; `null` when the store did not answer.
    pub shows: Option<usize>,
    /// Where the initial rows came from: `bundled`, `file` or `empty`.
    pub seed: &'static str,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let timeout = Duration::from_millis(state.config.health_timeout_ms);

    let shows = match shows_db::health_check(&state.pool, timeout).await {
        Ok(count) => Some(count),
        Err(err) => {
            tracing::warn!(error = %err, "Store health check failed");
            None
        }
    };

    Json(HealthResponse {
        status: if shows.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        store_healthy: shows.is_some(),
        shows,
        seed: state.config.seed.label(),
    })
}

/// `/health` lives at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
