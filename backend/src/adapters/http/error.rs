//! Error bodies shared by every HTTP area.
//!
//! Each area maps its own error enum to a status in one `handle_*_error`
//! function and builds the body here. Infrastructure failures are logged
//! and answered with a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ErrorCode;

const INTERNAL_MESSAGE: &str = "An unexpected error occurred";

/// `{ "code": "...", "message": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized.to_string(), message)
    }

    pub fn internal() -> Self {
        Self::new(ErrorCode::InternalError.to_string(), INTERNAL_MESSAGE)
    }
}

/// Builds an error response for a client-facing failure.
pub fn error_response(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(code.to_string(), message))).into_response()
}

/// Logs `detail` and answers 500 without leaking it.
pub fn internal_error(detail: &str) -> Response {
    tracing::error!(error = %detail, "Request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response()
}
