//! Extractors that reject with [`AppError`] instead of axum's plain-text
//! rejections, so malformed bodies and paths still get the JSON envelope.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use shows_core::show::{parse_id_segment, IdSegment, ENTITY};
use shows_core::types::DbId;

use crate::error::{not_found_message, AppError};

/// JSON body extractor. Any rejection becomes a 400 `BAD_REQUEST`.
///
/// ```ignore
/// async fn create(AppJson(input): AppJson<CreateShow>) -> AppResult<impl IntoResponse> { .. }
/// ```
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

/// Path parameter extractor. Any rejection becomes a 400 `BAD_REQUEST`.
pub struct AppPath<T>(pub T);

impl<S, T> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(AppPath(value)),
            Err(rejection) => Err(path_rejection(rejection)),
        }
    }
}

/// Show id from the `{id}` path segment.
///
/// A non-integer segment is a 400. An integer that does not fit [`DbId`]
/// names no show, so it is a 404 like any other unknown id.
pub struct ShowId(pub DbId);

impl<S> FromRequestParts<S> for ShowId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AppPath(segment) = AppPath::<String>::from_request_parts(parts, state).await?;

        match parse_id_segment(&segment) {
            IdSegment::Id(id) => Ok(ShowId(id)),
            IdSegment::OutOfRange => {
                tracing::debug!(segment = %segment, "Show id out of range");
                Err(AppError::NotFound(not_found_message(ENTITY)))
            }
            IdSegment::Malformed => Err(AppError::BadRequest(format!(
                "Invalid show id `{segment}`: expected an integer"
            ))),
        }
    }
}

fn path_rejection(rejection: PathRejection) -> AppError {
    match rejection {
        PathRejection::MissingPathParams(_) => AppError::InternalError(rejection.body_text()),
        other => AppError::BadRequest(other.body_text()),
    }
}
