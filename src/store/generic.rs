//! Generic task store: domain logic over any [`StorageBackend`].
//!
//! [`GenericTaskStore`] owns everything a backend must not know about:
//! create validation and defaults (via the lifecycle engine), patch
//! application, the NotFound mapping for unknown ids, canonical JSON
//! serialization of records, and newest-first list ordering. Backends
//! stay dumb KV stores.

use chrono::Utc;
use tracing::debug;

use crate::domain::TaskRecord;
use crate::error::TaskError;
use crate::store::backend::{StorageBackend, StorageError};
use crate::types::params::{NewTask, TaskPatch};

/// Task store with domain logic, parameterized over a storage backend.
///
/// Wrap in `Arc<dyn TaskStore>` (see [`TaskStore`](crate::store::TaskStore))
/// for use by request handlers.
///
/// # Examples
///
/// ```
/// use taskdeck::store::generic::GenericTaskStore;
/// use taskdeck::store::memory::InMemoryBackend;
///
/// let store = GenericTaskStore::new(InMemoryBackend::new());
/// ```
#[derive(Debug)]
pub struct GenericTaskStore<B> {
    backend: B,
}

impl<B: StorageBackend> GenericTaskStore<B> {
    /// Creates a store over the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns a reference to the underlying backend.
    ///
    /// Useful for test code that needs to inspect backend state.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Creates a task from a create request and persists it.
    ///
    /// # Errors
    ///
    /// - [`TaskError::Validation`] when the trimmed title is empty.
    /// - [`TaskError::Store`] on backend failures.
    pub async fn create(&self, input: NewTask) -> Result<TaskRecord, TaskError> {
        let record = TaskRecord::create(input, Utc::now())?;
        self.persist(&record).await?;
        debug!(task_id = %record.task.id, "task created");
        Ok(record)
    }

    /// Retrieves a task by id.
    ///
    /// # Errors
    ///
    /// - [`TaskError::NotFound`] if no task with the given id exists.
    /// - [`TaskError::Store`] on backend failures.
    pub async fn get(&self, task_id: &str) -> Result<TaskRecord, TaskError> {
        let bytes = self.backend.get(task_id).await.map_err(into_task_error)?;
        decode(&bytes)
    }

    /// Applies a partial update to a task and persists the result.
    ///
    /// The patch is resolved by the lifecycle engine
    /// ([`TaskRecord::apply_patch`]); on validation failure nothing is
    /// written.
    ///
    /// # Errors
    ///
    /// - [`TaskError::NotFound`] if no task with the given id exists.
    /// - [`TaskError::Validation`] when the patch carries an empty title.
    /// - [`TaskError::Store`] on backend failures.
    pub async fn update(&self, task_id: &str, patch: TaskPatch) -> Result<TaskRecord, TaskError> {
        let current = self.get(task_id).await?;
        let updated = current.apply_patch(&patch, Utc::now())?;
        self.persist(&updated).await?;
        debug!(task_id = %task_id, "task updated");
        Ok(updated)
    }

    /// Deletes a task by id.
    ///
    /// # Errors
    ///
    /// - [`TaskError::NotFound`] if no task with the given id exists.
    /// - [`TaskError::Store`] on backend failures.
    pub async fn delete(&self, task_id: &str) -> Result<(), TaskError> {
        let removed = self
            .backend
            .delete(task_id)
            .await
            .map_err(into_task_error)?;
        if removed {
            debug!(task_id = %task_id, "task deleted");
            Ok(())
        } else {
            Err(TaskError::NotFound {
                task_id: task_id.to_string(),
            })
        }
    }

    /// Lists all tasks, ordered by creation time, newest first.
    ///
    /// Ties on the creation timestamp fall back to id order so the
    /// result is deterministic.
    ///
    /// # Errors
    ///
    /// - [`TaskError::Store`] on backend failures or corrupt records.
    pub async fn list(&self) -> Result<Vec<TaskRecord>, TaskError> {
        let raw = self.backend.list_all().await.map_err(into_task_error)?;
        let mut records = raw
            .iter()
            .map(|bytes| decode(bytes))
            .collect::<Result<Vec<_>, _>>()?;
        records.sort_by(|a, b| {
            b.task
                .created_at
                .cmp(&a.task.created_at)
                .then_with(|| a.task.id.cmp(&b.task.id))
        });
        Ok(records)
    }

    /// Probes backend connectivity. Used by the health endpoint to
    /// measure a store round-trip.
    ///
    /// # Errors
    ///
    /// - [`TaskError::Store`] if the backend is unreachable.
    pub async fn ping(&self) -> Result<(), TaskError> {
        self.backend.ping().await.map_err(into_task_error)
    }

    async fn persist(&self, record: &TaskRecord) -> Result<(), TaskError> {
        let bytes = serde_json::to_vec(record).map_err(|err| TaskError::Store {
            message: format!("failed to serialize record: {err}"),
        })?;
        self.backend
            .put(&record.task.id, &bytes)
            .await
            .map_err(into_task_error)
    }
}

/// Maps a backend error to the domain taxonomy. A missing key becomes
/// `NotFound` (the backend key is the task id); everything else is a
/// store failure whose detail belongs in logs.
fn into_task_error(err: StorageError) -> TaskError {
    match err {
        StorageError::NotFound { key } => TaskError::NotFound { task_id: key },
        StorageError::Backend { .. } => TaskError::Store {
            message: err.to_string(),
        },
    }
}

fn decode(bytes: &[u8]) -> Result<TaskRecord, TaskError> {
    serde_json::from_slice(bytes).map_err(|err| TaskError::Store {
        message: format!("corrupt task record: {err}"),
    })
}
