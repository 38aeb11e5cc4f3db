use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Handle to the in-memory show store.
    pub pool: shows_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
