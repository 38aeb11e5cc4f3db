//! Shared response envelope types for API handlers.
//!
//! Successful responses use `{ "status": "success", "data": ... }`; failures
//! use `{ "status": "error", "code": ..., "message": ... }`. Handlers build
//! [`DataResponse`] directly; [`ErrorResponse`] is only produced by
//! [`AppError`](crate::error::AppError).

use serde::Serialize;

/// `status` value on every successful response.
pub const STATUS_SUCCESS: &str = "success";

/// `status` value on every failed response.
pub const STATUS_ERROR: &str = "error";

/// Standard `{ "status": "success", "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::success(vec![show])))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS,
            data,
        }
    }
}

/// Standard `{ "status": "error", "code": ..., "message": ... }` envelope.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub code: &'static str,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: &'static str, message: String) -> Self {
        Self {
            status: STATUS_ERROR,
            code,
            message,
        }
    }
}
