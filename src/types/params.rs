//! Request body types for the task endpoints.
//!
//! [`NewTask`] is the `POST /tasks` body; [`TaskPatch`] is the
//! `PATCH /tasks/{id}` body. Both are inputs to the lifecycle engine
//! (see [`TaskRecord`](crate::domain::TaskRecord)); neither is ever
//! serialized back out.

use serde::{Deserialize, Deserializer};

use crate::types::task::{Priority, TaskStatus};

/// Input for creating a task.
///
/// Only `title` is required. Defaults applied by the lifecycle engine:
/// `description` absent when empty or omitted, `priority` medium when
/// omitted, `status` always starts as `TODO`.
///
/// # Examples
///
/// ```
/// use taskdeck::NewTask;
///
/// let input: NewTask = serde_json::from_str(r#"{"title": "Buy milk"}"#).unwrap();
/// assert_eq!(input.title, "Buy milk");
/// assert!(input.description.is_none());
/// assert!(input.priority.is_none());
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    /// Title text. Must be non-empty after trimming.
    pub title: String,

    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,

    /// Optional priority; defaults to [`Priority::Medium`] when omitted.
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl NewTask {
    /// Convenience constructor for a title-only input.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: None,
        }
    }
}

/// Partial update for a task. Every field is optional; absent fields
/// leave the stored value untouched.
///
/// The `description` field distinguishes *absent* from *explicit null*:
/// `None` means the field was not in the request body, while
/// `Some(None)` means the client sent `"description": null` and wants
/// the description cleared. The outer `Option` is populated by a
/// deserializer that fires only when the key is present.
///
/// # Examples
///
/// ```
/// use taskdeck::{TaskPatch, TaskStatus};
///
/// let patch: TaskPatch = serde_json::from_str(r#"{"status": "COMPLETED"}"#).unwrap();
/// assert_eq!(patch.status, Some(TaskStatus::Completed));
/// assert!(patch.title.is_none());
/// assert!(patch.description.is_none());
///
/// let patch: TaskPatch = serde_json::from_str(r#"{"description": null}"#).unwrap();
/// assert_eq!(patch.description, Some(None));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    /// New status, if present.
    #[serde(default)]
    pub status: Option<TaskStatus>,

    /// New title, if present. Must be non-empty after trimming.
    #[serde(default)]
    pub title: Option<String>,

    /// New description, if present. `Some(None)` clears the field.
    #[serde(default, deserialize_with = "present_or_null")]
    pub description: Option<Option<String>>,

    /// New priority, if present.
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl TaskPatch {
    /// Returns `true` if no field is present.
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
    }
}

/// Deserializes a nullable field whose presence matters: invoked only
/// when the key exists in the body, so `null` becomes `Some(None)`
/// while a missing key stays `None` via `#[serde(default)]`.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
