//! Route definitions for the shows resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::shows;
use crate::state::AppState;

/// Show routes mounted at `/shows`.
///
/// ```text
/// GET    /       -> list_shows
/// POST   /       -> create_show
/// GET    /{id}   -> get_show
/// PUT    /{id}   -> update_show
/// DELETE /{id}   -> delete_show
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(shows::list_shows).post(shows::create_show))
        .route(
            "/{id}",
            get(shows::get_show)
                .put(shows::update_show)
                .delete(shows::delete_show),
        )
}
