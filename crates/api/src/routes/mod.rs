pub mod health;
pub mod shows;

use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /shows          list, create
/// /shows/{id}     get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/shows", shows::router())
}

/// Fallback for paths no route matches.
pub async fn fallback() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
