//! Error types for task operations.
//!
//! Provides [`TaskError`], the error taxonomy surfaced by the lifecycle
//! engine and task stores, with HTTP status code mapping for wire
//! responses.

use thiserror::Error;

/// Errors that can occur during task operations.
///
/// Each variant carries the context needed to build a useful wire
/// message. Use [`status_code`](TaskError::status_code) to map to the
/// HTTP status for the response.
///
/// # Examples
///
/// ```
/// use taskdeck::TaskError;
///
/// let err = TaskError::NotFound { task_id: "missing-task".to_string() };
/// assert_eq!(err.status_code(), 404);
/// assert!(err.to_string().contains("missing-task"));
/// ```
#[derive(Debug, Error)]
pub enum TaskError {
    /// A create or patch input failed validation (e.g. empty title).
    #[error("{message}")]
    Validation {
        /// Human-readable description of the rejected input.
        message: String,
    },

    /// Task with the given ID was not found.
    #[error("task not found: {task_id}")]
    NotFound {
        /// The task ID that was not found.
        task_id: String,
    },

    /// Backend storage failure. The wire response carries a generic
    /// message; the detail stays in server logs.
    #[error("storage error: {message}")]
    Store {
        /// Description of the underlying failure.
        message: String,
    },
}

impl TaskError {
    /// Shorthand for a [`TaskError::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Maps this error to the HTTP status code of the wire response.
    ///
    /// - `400` (Bad Request): `Validation`
    /// - `404` (Not Found): `NotFound`
    /// - `500` (Internal Server Error): `Store`
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck::TaskError;
    ///
    /// assert_eq!(TaskError::validation("title is required").status_code(), 400);
    /// assert_eq!(TaskError::Store { message: "db timeout".into() }.status_code(), 500);
    /// ```
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::NotFound { .. } => 404,
            Self::Store { .. } => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = TaskError::NotFound {
            task_id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "task not found: abc");

        let err = TaskError::validation("title is required");
        assert_eq!(err.to_string(), "title is required");

        let err = TaskError::Store {
            message: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "storage error: connection refused");
    }

    #[test]
    fn status_codes() {
        assert_eq!(TaskError::validation("bad").status_code(), 400);
        assert_eq!(
            TaskError::NotFound {
                task_id: "t".to_string()
            }
            .status_code(),
            404
        );
        assert_eq!(
            TaskError::Store {
                message: "fail".to_string()
            }
            .status_code(),
            500
        );
    }
}
