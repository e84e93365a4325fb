//! Task store trait, generic implementation, and supporting types.
//!
//! # Architecture
//!
//! The task storage system has three layers:
//!
//! 1. **[`TaskStore`]** -- A type-erasure interface for use as
//!    `Arc<dyn TaskStore>` by request handlers.
//!
//! 2. **[`GenericTaskStore<B>`](generic::GenericTaskStore)** -- All
//!    domain logic (create validation, patch application via the
//!    lifecycle engine, NotFound mapping, newest-first ordering,
//!    canonical serialization). Has a blanket `TaskStore` impl.
//!
//! 3. **[`StorageBackend`]** -- Dumb KV trait that backends implement.
//!    No domain logic.
//!
//! To create a store: `GenericTaskStore::new(backend)` and wrap in
//! `Arc<dyn TaskStore>`, or use
//! [`InMemoryTaskStore`](memory::InMemoryTaskStore) directly.

pub mod backend;
pub mod generic;
pub mod memory;

use async_trait::async_trait;

pub use backend::{StorageBackend, StorageError};

use crate::domain::TaskRecord;
use crate::error::TaskError;
use crate::types::params::{NewTask, TaskPatch};

/// Type-erasure interface for task storage.
///
/// This trait is the dynamic dispatch interface for
/// [`GenericTaskStore<B>`](generic::GenericTaskStore); a blanket
/// implementation is provided for any `GenericTaskStore<B>` where
/// `B: StorageBackend + 'static`. Domain logic lives in
/// `GenericTaskStore`, not in trait implementations.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to support concurrent access
/// from multiple request handlers. Each request performs one logical
/// store operation; no cross-request transactions are layered on top.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Creates a task from a create request.
    ///
    /// # Errors
    ///
    /// - [`TaskError::Validation`] when the trimmed title is empty.
    /// - [`TaskError::Store`] on backend failures.
    async fn create(&self, input: NewTask) -> Result<TaskRecord, TaskError>;

    /// Retrieves a task by id.
    ///
    /// # Errors
    ///
    /// - [`TaskError::NotFound`] if no task with the given id exists.
    /// - [`TaskError::Store`] on backend failures.
    async fn get(&self, task_id: &str) -> Result<TaskRecord, TaskError>;

    /// Applies a partial update and returns the new record.
    ///
    /// # Errors
    ///
    /// - [`TaskError::NotFound`] if no task with the given id exists.
    /// - [`TaskError::Validation`] when the patch carries an empty title.
    /// - [`TaskError::Store`] on backend failures.
    async fn update(&self, task_id: &str, patch: TaskPatch) -> Result<TaskRecord, TaskError>;

    /// Deletes a task by id.
    ///
    /// # Errors
    ///
    /// - [`TaskError::NotFound`] if no task with the given id exists.
    /// - [`TaskError::Store`] on backend failures.
    async fn delete(&self, task_id: &str) -> Result<(), TaskError>;

    /// Lists all tasks, ordered by creation time, newest first.
    ///
    /// Always returns the complete collection -- callers resynchronize
    /// their full snapshot after every mutation; there is no pagination
    /// and no partial result.
    ///
    /// # Errors
    ///
    /// - [`TaskError::Store`] on backend failures.
    async fn list(&self) -> Result<Vec<TaskRecord>, TaskError>;

    /// Probes backend connectivity.
    ///
    /// # Errors
    ///
    /// - [`TaskError::Store`] if the backend is unreachable.
    async fn ping(&self) -> Result<(), TaskError>;
}

// ---- Blanket impl for GenericTaskStore<B> ----

#[async_trait]
impl<B: StorageBackend + 'static> TaskStore for generic::GenericTaskStore<B> {
    async fn create(&self, input: NewTask) -> Result<TaskRecord, TaskError> {
        self.create(input).await
    }

    async fn get(&self, task_id: &str) -> Result<TaskRecord, TaskError> {
        self.get(task_id).await
    }

    async fn update(&self, task_id: &str, patch: TaskPatch) -> Result<TaskRecord, TaskError> {
        self.update(task_id, patch).await
    }

    async fn delete(&self, task_id: &str) -> Result<(), TaskError> {
        self.delete(task_id).await
    }

    async fn list(&self) -> Result<Vec<TaskRecord>, TaskError> {
        self.list().await
    }

    async fn ping(&self) -> Result<(), TaskError> {
        self.ping().await
    }
}
