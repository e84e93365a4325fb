//! Low-level key-value storage backend trait and supporting types.
//!
//! The [`StorageBackend`] trait defines the contract that all storage
//! engines implement: [`get`](StorageBackend::get),
//! [`put`](StorageBackend::put), [`delete`](StorageBackend::delete),
//! [`list_all`](StorageBackend::list_all), and
//! [`ping`](StorageBackend::ping).
//!
//! Domain logic (title validation, the completion-timestamp rule, list
//! ordering, serialization) does **not** belong here. Backends are dumb
//! KV stores keyed by task id; domain logic lives in
//! [`GenericTaskStore`](crate::store::generic::GenericTaskStore).
//!
//! Records are opaque bytes to the backend (canonical JSON produced by
//! the generic store). Keys are the task's UUID string.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during raw storage operations.
///
/// These are low-level errors from the storage backend.
/// `GenericTaskStore` maps them to [`TaskError`](crate::error::TaskError)
/// variants before surfacing to callers.
///
/// # Examples
///
/// ```
/// use taskdeck::store::StorageError;
///
/// let err = StorageError::NotFound { key: "task-123".to_string() };
/// assert!(err.to_string().contains("task-123"));
/// ```
#[derive(Debug, Error)]
pub enum StorageError {
    /// The requested key was not found in storage.
    #[error("record not found: {key}")]
    NotFound {
        /// The key that was not found.
        key: String,
    },

    /// An I/O or backend-specific error occurred (e.g. connectivity
    /// loss, database timeout).
    #[error("backend error: {message}")]
    Backend {
        /// Human-readable description of the error.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Key-value storage backend for task persistence.
///
/// Implementations provide raw storage primitives keyed by task id and
/// must be `Send + Sync` to support concurrent access from multiple
/// request handlers. Backends must **never** validate titles, touch
/// timestamps, or order listings; that is
/// [`GenericTaskStore`](crate::store::generic::GenericTaskStore)'s job.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Retrieves the record bytes stored under `key`.
    ///
    /// # Errors
    ///
    /// - [`StorageError::NotFound`] if no record exists for the key.
    /// - [`StorageError::Backend`] on I/O or backend-specific failures.
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError>;

    /// Stores record bytes under `key`, creating or overwriting.
    ///
    /// # Errors
    ///
    /// - [`StorageError::Backend`] on I/O or backend-specific failures.
    async fn put(&self, key: &str, data: &[u8]) -> Result<(), StorageError>;

    /// Deletes the record under `key`.
    ///
    /// Returns `true` if the key existed and was deleted, `false` if it
    /// did not exist (idempotent delete).
    ///
    /// # Errors
    ///
    /// - [`StorageError::Backend`] on I/O or backend-specific failures.
    async fn delete(&self, key: &str) -> Result<bool, StorageError>;

    /// Returns the record bytes of every stored task, in no particular
    /// order.
    ///
    /// # Errors
    ///
    /// - [`StorageError::Backend`] on I/O or backend-specific failures.
    async fn list_all(&self) -> Result<Vec<Vec<u8>>, StorageError>;

    /// Cheap connectivity probe used by the health endpoint.
    ///
    /// # Errors
    ///
    /// - [`StorageError::Backend`] if the backend is unreachable.
    async fn ping(&self) -> Result<(), StorageError>;
}
