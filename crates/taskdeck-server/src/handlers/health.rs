//! Health check handler.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;

use crate::server::AppState;

/// Health payload. `responseTime` is present when the store responded,
/// `error` when it did not.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `"healthy"` or `"unhealthy"`.
    pub status: &'static str,
    /// `"connected"` or `"disconnected"`.
    pub store: &'static str,
    /// Store round-trip latency, e.g. `"2ms"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time: Option<String>,
    /// Failure detail when unhealthy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// When the probe ran.
    pub timestamp: DateTime<Utc>,
}

/// `GET /api/health` -- measures a store round-trip.
pub async fn check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    let start = Instant::now();

    match state.store.ping().await {
        Ok(()) => {
            let elapsed = start.elapsed();
            (
                StatusCode::OK,
                Json(HealthResponse {
                    status: "healthy",
                    store: "connected",
                    response_time: Some(format!("{}ms", elapsed.as_millis())),
                    error: None,
                    timestamp: Utc::now(),
                }),
            )
        }
        Err(err) => {
            error!(error = %err, "health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse {
                    status: "unhealthy",
                    store: "disconnected",
                    response_time: None,
                    error: Some(err.to_string()),
                    timestamp: Utc::now(),
                }),
            )
        }
    }
}
