//! In-memory storage backend and task store.
//!
//! [`InMemoryBackend`] provides a thread-safe [`StorageBackend`]
//! implementation using `DashMap<String, Vec<u8>>` for concurrent
//! key-value storage. It is a dumb KV store with no domain logic.
//!
//! [`InMemoryTaskStore`] is a thin wrapper around
//! [`GenericTaskStore<InMemoryBackend>`](crate::store::generic::GenericTaskStore)
//! that provides a zero-argument `new()` constructor and a `Default`
//! impl. All domain logic (lifecycle rules, validation, ordering) is
//! handled by `GenericTaskStore`.
//!
//! # Examples
//!
//! ```
//! use taskdeck::store::memory::InMemoryTaskStore;
//!
//! let store = InMemoryTaskStore::new();
//! ```

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::TaskRecord;
use crate::error::TaskError;
use crate::store::backend::{StorageBackend, StorageError};
use crate::store::generic::GenericTaskStore;
use crate::types::params::{NewTask, TaskPatch};

use super::TaskStore;

// ---- InMemoryBackend: dumb KV store using DashMap ----

/// Thread-safe in-memory storage backend using [`DashMap`].
///
/// Stores serialized task records keyed by task id. Contains **no
/// domain logic**; all intelligence lives in
/// [`GenericTaskStore`](crate::store::generic::GenericTaskStore).
///
/// # Examples
///
/// ```
/// use taskdeck::store::memory::InMemoryBackend;
///
/// let backend = InMemoryBackend::new();
/// assert!(backend.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    data: DashMap<String, Vec<u8>>,
}

impl InMemoryBackend {
    /// Creates an empty in-memory backend.
    pub fn new() -> Self {
        Self {
            data: DashMap::new(),
        }
    }

    /// Returns the number of records stored.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the backend contains no records.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[async_trait]
impl StorageBackend for InMemoryBackend {
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.data
            .get(key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StorageError::NotFound {
                key: key.to_string(),
            })
    }

    async fn put(&self, key: &str, data: &[u8]) -> Result<(), StorageError> {
        self.data.insert(key.to_string(), data.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.data.remove(key).is_some())
    }

    async fn list_all(&self) -> Result<Vec<Vec<u8>>, StorageError> {
        Ok(self
            .data
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

// ---- InMemoryTaskStore: thin wrapper around GenericTaskStore<InMemoryBackend> ----

/// Thread-safe in-memory task store using
/// [`GenericTaskStore`](crate::store::generic::GenericTaskStore) with
/// [`InMemoryBackend`].
///
/// The default store for the dashboard server; a persistent deployment
/// swaps in a different [`StorageBackend`] behind the same
/// [`TaskStore`] interface.
///
/// # Examples
///
/// ```
/// use taskdeck::store::memory::InMemoryTaskStore;
///
/// let store = InMemoryTaskStore::new();
/// ```
#[derive(Debug)]
pub struct InMemoryTaskStore {
    inner: GenericTaskStore<InMemoryBackend>,
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTaskStore {
    /// Creates a new, empty in-memory task store.
    pub fn new() -> Self {
        Self {
            inner: GenericTaskStore::new(InMemoryBackend::new()),
        }
    }

    /// Returns a reference to the underlying backend.
    ///
    /// Useful for test code that needs to inspect backend state (e.g.
    /// record count).
    pub fn backend(&self) -> &InMemoryBackend {
        self.inner.backend()
    }
}

// ---- TaskStore delegation impl ----

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn create(&self, input: NewTask) -> Result<TaskRecord, TaskError> {
        self.inner.create(input).await
    }

    async fn get(&self, task_id: &str) -> Result<TaskRecord, TaskError> {
        self.inner.get(task_id).await
    }

    async fn update(&self, task_id: &str, patch: TaskPatch) -> Result<TaskRecord, TaskError> {
        self.inner.update(task_id, patch).await
    }

    async fn delete(&self, task_id: &str) -> Result<(), TaskError> {
        self.inner.delete(task_id).await
    }

    async fn list(&self) -> Result<Vec<TaskRecord>, TaskError> {
        self.inner.list().await
    }

    async fn ping(&self) -> Result<(), TaskError> {
        self.inner.ping().await
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::task::{Priority, TaskStatus};

    #[test]
    fn new_creates_empty_store() {
        let store = InMemoryTaskStore::new();
        assert!(store.backend().is_empty());
    }

    #[test]
    fn default_delegates_to_new() {
        let store = InMemoryTaskStore::default();
        assert!(store.backend().is_empty());
    }

    #[tokio::test]
    async fn create_persists_and_returns_record() {
        let store = InMemoryTaskStore::new();
        let record = store.create(NewTask::titled("Buy milk")).await.unwrap();
        assert_eq!(record.task.status, TaskStatus::Todo);
        assert_eq!(store.backend().len(), 1);

        let fetched = store.get(&record.task.id).await.unwrap();
        assert_eq!(fetched.task.title, "Buy milk");
    }

    #[tokio::test]
    async fn create_rejects_empty_title_without_persisting() {
        let store = InMemoryTaskStore::new();
        let result = store.create(NewTask::titled("   ")).await;
        assert!(matches!(result, Err(TaskError::Validation { .. })));
        assert!(store.backend().is_empty());
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let store = InMemoryTaskStore::new();
        let result = store.get("nope").await;
        assert!(matches!(result, Err(TaskError::NotFound { task_id }) if task_id == "nope"));
    }

    #[tokio::test]
    async fn update_applies_lifecycle_rules() {
        let store = InMemoryTaskStore::new();
        let record = store.create(NewTask::titled("Ship it")).await.unwrap();

        let patch = TaskPatch {
            status: Some(TaskStatus::Completed),
            ..TaskPatch::default()
        };
        let updated = store.update(&record.task.id, patch).await.unwrap();
        assert_eq!(updated.task.status, TaskStatus::Completed);
        assert!(updated.task.completed_at.is_some());

        // The persisted state matches the returned record.
        let fetched = store.get(&record.task.id).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let store = InMemoryTaskStore::new();
        let result = store.update("nope", TaskPatch::default()).await;
        assert!(matches!(result, Err(TaskError::NotFound { .. })));
    }

    #[tokio::test]
    async fn update_validation_failure_leaves_record_untouched() {
        let store = InMemoryTaskStore::new();
        let record = store.create(NewTask::titled("Keep me")).await.unwrap();

        let patch = TaskPatch {
            title: Some("   ".to_string()),
            ..TaskPatch::default()
        };
        let result = store.update(&record.task.id, patch).await;
        assert!(matches!(result, Err(TaskError::Validation { .. })));

        let fetched = store.get(&record.task.id).await.unwrap();
        assert_eq!(fetched.task.title, "Keep me");
        assert_eq!(fetched.updated_at, record.updated_at);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = InMemoryTaskStore::new();
        let record = store.create(NewTask::titled("gone soon")).await.unwrap();
        store.delete(&record.task.id).await.unwrap();
        assert!(store.backend().is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found_and_state_unchanged() {
        let store = InMemoryTaskStore::new();
        store.create(NewTask::titled("survivor")).await.unwrap();

        let result = store.delete("nope").await;
        assert!(matches!(result, Err(TaskError::NotFound { .. })));
        assert_eq!(store.backend().len(), 1);
    }

    #[tokio::test]
    async fn list_orders_newest_first() {
        let store = InMemoryTaskStore::new();
        let first = store.create(NewTask::titled("first")).await.unwrap();

        // Ensure the second task has a strictly later timestamp.
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let second = store.create(NewTask::titled("second")).await.unwrap();

        let records = store.list().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].task.id, second.task.id);
        assert_eq!(records[1].task.id, first.task.id);
        assert!(records[0].task.created_at >= records[1].task.created_at);
    }

    #[tokio::test]
    async fn list_empty_store() {
        let store = InMemoryTaskStore::new();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ping_succeeds() {
        let store = InMemoryTaskStore::new();
        assert!(store.ping().await.is_ok());
    }

    #[tokio::test]
    async fn create_respects_priority() {
        let store = InMemoryTaskStore::new();
        let input = NewTask {
            title: "urgent".to_string(),
            description: None,
            priority: Some(Priority::High),
        };
        let record = store.create(input).await.unwrap();
        assert_eq!(record.task.priority, Priority::High);
    }
}
