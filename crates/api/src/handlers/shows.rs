//! Handlers for the shows resource.
//!
//! Every successful response wraps its rows in [`DataResponse`]; single-row
//! operations return a one-element array.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use shows_core::error::CoreError;
use shows_core::show::validate_name;
use shows_db::models::show::{CreateShow, UpdateShow};
use shows_db::repositories::ShowRepo;

use crate::error::AppResult;
use crate::extract::{AppJson, ShowId};
use crate::response::DataResponse;
use crate::state::AppState;

/// Validate a create payload beyond what deserialization enforces.
fn validate_create_input(input: &CreateShow) -> Result<(), CoreError> {
    validate_name(&input.name)
}

/// GET /api/v1/shows
///
/// List every show.
pub async fn list_shows(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let shows = ShowRepo::list(&state.pool).await;

    Ok(Json(DataResponse::success(shows)))
}

/// GET /api/v1/shows/{id}
pub async fn get_show(
    State(state): State<AppState>,
    ShowId(show_id): ShowId,
) -> AppResult<impl IntoResponse> {
    let show = ShowRepo::find_by_id(&state.pool, show_id)
        .await
        .ok_or(CoreError::show_not_found(show_id))?;

    Ok(Json(DataResponse::success(vec![show])))
}

/// POST /api/v1/shows
///
/// Create a show. The id is assigned by the store.
pub async fn create_show(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateShow>,
) -> AppResult<impl IntoResponse> {
    validate_create_input(&input)?;

    let show = ShowRepo::create(&state.pool, &input).await?;

    tracing::info!(show_id = show.id, name = %show.name, "Show created");

    Ok((StatusCode::CREATED, Json(DataResponse::success(vec![show]))))
}

/// PUT /api/v1/shows/{id}
///
/// Partially update a show. An unknown id is a 404 even when the payload
/// would fail validation.
pub async fn update_show(
    State(state): State<AppState>,
    ShowId(show_id): ShowId,
    AppJson(input): AppJson<UpdateShow>,
) -> AppResult<impl IntoResponse> {
    let show = ShowRepo::update(&state.pool, show_id, &input)
        .await?
        .ok_or(CoreError::show_not_found(show_id))?;

    tracing::info!(show_id, "Show updated");

    Ok(Json(DataResponse::success(vec![show])))
}

/// DELETE /api/v1/shows/{id}
///
/// Delete a show and return the removed row.
pub async fn delete_show(
    State(state): State<AppState>,
    ShowId(show_id): ShowId,
) -> AppResult<impl IntoResponse> {
    let show = ShowRepo::delete(&state.pool, show_id)
        .await
        .ok_or(CoreError::show_not_found(show_id))?;

    tracing::info!(show_id, name = %show.name, "Show deleted");

    Ok(Json(DataResponse::success(vec![show])))
}
