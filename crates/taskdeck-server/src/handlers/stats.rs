//! Dashboard analytics handler.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use chrono::Local;

use taskdeck::{Dashboard, Task};

use super::{error_response, HandlerError};
use crate::server::AppState;

/// `GET /api/stats` -- the full analytics bundle, recomputed from a
/// fresh snapshot on every call.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Result<Json<Dashboard>, HandlerError> {
    let records = state.store.list().await.map_err(|e| error_response(&e))?;
    let tasks: Vec<Task> = records.into_iter().map(|record| record.task).collect();
    let today = Local::now().date_naive();
    Ok(Json(Dashboard::compute(&tasks, today)))
}
