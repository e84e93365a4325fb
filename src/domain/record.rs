//! Task record -- the store's internal representation of a task, and
//! the lifecycle engine.
//!
//! [`TaskRecord`] wraps the wire-format [`Task`] with the bookkeeping
//! the API never returns (`updated_at`). The two lifecycle operations,
//! [`TaskRecord::create`] and [`TaskRecord::apply_patch`], are pure:
//! they take the current time as a parameter, validate their input, and
//! produce a fully resolved record without touching storage. Stores
//! call them and persist whatever comes back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TaskError;
use crate::types::params::{NewTask, TaskPatch};
use crate::types::task::{Task, TaskStatus};

/// Internal storage representation of a task.
///
/// Holds the wire-format [`Task`] along with `updated_at`, which is
/// refreshed on every mutation but omitted from API responses.
///
/// # Invariants
///
/// Maintained by [`create`](Self::create) and
/// [`apply_patch`](Self::apply_patch):
///
/// - `task.completed_at` is `Some` if and only if `task.status` is
///   [`TaskStatus::Completed`].
/// - `task.title` is never empty or whitespace-only.
/// - `task.created_at <= updated_at`.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use taskdeck::domain::TaskRecord;
/// use taskdeck::{NewTask, TaskStatus};
///
/// let record = TaskRecord::create(NewTask::titled("Buy milk"), Utc::now()).unwrap();
/// assert!(!record.task.id.is_empty());
/// assert_eq!(record.task.status, TaskStatus::Todo);
/// assert!(record.task.completed_at.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// The wire-format task (serialized as-is in API responses).
    pub task: Task,

    /// When any field of this record last changed. Not part of the
    /// response shape.
    pub updated_at: DateTime<Utc>,
}

impl TaskRecord {
    /// Creates a new record from a create request.
    ///
    /// Generates a UUIDv4 id and applies the creation defaults: status
    /// `TODO`, priority medium unless given, no completion timestamp,
    /// `created_at` and `updated_at` both set to `now`. Title and
    /// description are trimmed; an empty description becomes `None`.
    ///
    /// # Errors
    ///
    /// [`TaskError::Validation`] when the trimmed title is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use taskdeck::domain::TaskRecord;
    /// use taskdeck::{NewTask, Priority};
    ///
    /// let input = NewTask {
    ///     title: "  Buy milk  ".to_string(),
    ///     description: Some("   ".to_string()),
    ///     priority: None,
    /// };
    /// let record = TaskRecord::create(input, Utc::now()).unwrap();
    /// assert_eq!(record.task.title, "Buy milk");
    /// assert!(record.task.description.is_none());
    /// assert_eq!(record.task.priority, Priority::Medium);
    /// ```
    pub fn create(input: NewTask, now: DateTime<Utc>) -> Result<Self, TaskError> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(TaskError::validation("title is required"));
        }

        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: normalize_description(input.description),
            status: TaskStatus::Todo,
            priority: input.priority.unwrap_or_default(),
            created_at: now,
            completed_at: None,
        };

        Ok(Self {
            task,
            updated_at: now,
        })
    }

    /// Applies a partial update, returning the fully resolved new record.
    ///
    /// Pure: `self` is not mutated. For each field present in the
    /// patch, the stored value is overwritten (title and description
    /// trimmed, empty description normalized to `None`). The completion
    /// timestamp follows the status field:
    ///
    /// - patch status is `COMPLETED` -> `completed_at = Some(now)`,
    ///   refreshed even when the task was already completed;
    /// - patch status is any other value -> `completed_at = None`;
    /// - patch carries no status -> `completed_at` unchanged.
    ///
    /// `updated_at` becomes `now` on every application, including an
    /// empty patch.
    ///
    /// # Errors
    ///
    /// [`TaskError::Validation`] when the patch carries a title that is
    /// empty after trimming. The record is unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use taskdeck::domain::TaskRecord;
    /// use taskdeck::{NewTask, TaskPatch, TaskStatus};
    ///
    /// let record = TaskRecord::create(NewTask::titled("Ship release"), Utc::now()).unwrap();
    ///
    /// let done = TaskPatch { status: Some(TaskStatus::Completed), ..TaskPatch::default() };
    /// let record = record.apply_patch(&done, Utc::now()).unwrap();
    /// assert!(record.task.completed_at.is_some());
    ///
    /// let reopened = TaskPatch { status: Some(TaskStatus::Todo), ..TaskPatch::default() };
    /// let record = record.apply_patch(&reopened, Utc::now()).unwrap();
    /// assert!(record.task.completed_at.is_none());
    /// ```
    pub fn apply_patch(&self, patch: &TaskPatch, now: DateTime<Utc>) -> Result<Self, TaskError> {
        let mut next = self.clone();

        if let Some(title) = &patch.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(TaskError::validation("title is required"));
            }
            next.task.title = title.to_string();
        }

        if let Some(description) = &patch.description {
            next.task.description = normalize_description(description.clone());
        }

        if let Some(priority) = patch.priority {
            next.task.priority = priority;
        }

        if let Some(status) = patch.status {
            next.task.status = status;
            next.task.completed_at = if status.is_completed() {
                Some(now)
            } else {
                None
            };
        }

        next.updated_at = now;
        Ok(next)
    }
}

/// Trims a description and normalizes empty text to `None`.
fn normalize_description(description: Option<String>) -> Option<String> {
    description.and_then(|text| {
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    })
}
