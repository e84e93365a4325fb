//! Request handlers for the dashboard API.
//!
//! Every failure a handler can produce is converted locally into a
//! `(status, {"error": ...})` pair; nothing propagates as an unhandled
//! fault. Store failures get a generic wire message with the detail
//! kept in server logs.

pub mod health;
pub mod stats;
pub mod tasks;

use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use tracing::error;

use taskdeck::TaskError;

/// JSON error envelope returned by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

/// The error half of every handler's return type.
pub type HandlerError = (StatusCode, Json<ErrorBody>);

/// Converts a [`TaskError`] into the wire response.
///
/// Validation and not-found errors carry their message through; store
/// errors are logged with full detail and surfaced with a generic
/// message only.
pub(crate) fn error_response(err: &TaskError) -> HandlerError {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let message = match err {
        TaskError::Store { message } => {
            error!(detail = %message, "store operation failed");
            "storage error".to_string()
        }
        other => other.to_string(),
    };

    (status, Json(ErrorBody { error: message }))
}
