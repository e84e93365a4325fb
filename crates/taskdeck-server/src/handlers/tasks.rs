//! CRUD handlers for the task endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use tracing::info;

use taskdeck::filter::{self, TaskQuery};
use taskdeck::{NewTask, Task, TaskPatch};

use super::{error_response, HandlerError};
use crate::server::AppState;

/// Confirmation body for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Confirmation message.
    pub message: String,
}

/// `GET /api/tasks` -- the full collection, newest first.
///
/// Accepts optional `q`, `status`, and `priority` query parameters;
/// they are applied in-handler over the snapshot already fetched from
/// the store, the same conjunction the dashboard applies client-side.
/// Without parameters this is the full-resynchronization fetch.
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TaskQuery>,
) -> Result<Json<Vec<Task>>, HandlerError> {
    let records = state.store.list().await.map_err(|e| error_response(&e))?;
    let tasks: Vec<Task> = records.into_iter().map(|record| record.task).collect();
    Ok(Json(filter::apply(tasks, &query)))
}

/// `POST /api/tasks` -- create a task.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewTask>,
) -> Result<(StatusCode, Json<Task>), HandlerError> {
    let record = state.store.create(input).await.map_err(|e| error_response(&e))?;
    info!(task_id = %record.task.id, "task created");
    Ok((StatusCode::CREATED, Json(record.task)))
}

/// `PATCH /api/tasks/{id}` -- partial update.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<Task>, HandlerError> {
    let record = state
        .store
        .update(&id, patch)
        .await
        .map_err(|e| error_response(&e))?;
    info!(task_id = %id, "task updated");
    Ok(Json(record.task))
}

/// `DELETE /api/tasks/{id}` -- delete by id.
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, HandlerError> {
    state
        .store
        .delete(&id)
        .await
        .map_err(|e| error_response(&e))?;
    info!(task_id = %id, "task deleted");
    Ok(Json(DeleteResponse {
        message: "Task deleted successfully".to_string(),
    }))
}
