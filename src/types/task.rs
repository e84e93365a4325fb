//! Core task wire types.
//!
//! This module defines the primary types that appear on the wire:
//! [`Task`], [`TaskStatus`], and [`Priority`].
//!
//! # Serialization
//!
//! `Task` uses `#[serde(rename_all = "camelCase")]` to match the API's
//! JSON field naming. `description` and `completedAt` serialize as
//! `null` (not omitted) when `None`, matching the persisted columns'
//! `string | null` / `timestamp | null` types. Enum values serialize
//! as SCREAMING_SNAKE_CASE strings (`"TODO"`, `"IN_PROGRESS"`, ...).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task lifecycle status.
///
/// Unlike a strict state machine, any status can move to any other:
/// the dashboard lets a user drag a completed task back to the board.
/// The invariant that matters is the completion timestamp: it is set
/// exactly when a task transitions into [`Completed`](Self::Completed)
/// and cleared on any transition out (see
/// [`TaskRecord::apply_patch`](crate::domain::TaskRecord::apply_patch)).
///
/// # Examples
///
/// ```
/// use taskdeck::TaskStatus;
///
/// let status = TaskStatus::default();
/// assert_eq!(status, TaskStatus::Todo);
/// assert!(!status.is_completed());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Task has not been started.
    #[default]
    Todo,
    /// Task is actively being worked on.
    InProgress,
    /// Task is done.
    Completed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Todo => write!(f, "TODO"),
            Self::InProgress => write!(f, "IN_PROGRESS"),
            Self::Completed => write!(f, "COMPLETED"),
        }
    }
}

impl TaskStatus {
    /// All statuses, in board order.
    pub const ALL: [TaskStatus; 3] = [Self::Todo, Self::InProgress, Self::Completed];

    /// Returns `true` if this status is [`Completed`](Self::Completed).
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Task priority.
///
/// # Examples
///
/// ```
/// use taskdeck::Priority;
///
/// assert_eq!(Priority::default(), Priority::Medium);
/// assert_eq!(serde_json::to_value(Priority::High).unwrap(), "HIGH");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Can wait.
    Low,
    /// The default for new tasks.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

impl Priority {
    /// All priorities, lowest first.
    pub const ALL: [Priority; 3] = [Self::Low, Self::Medium, Self::High];
}

/// A task as it appears on the wire.
///
/// This is the JSON shape returned by every task endpoint. The storage
/// layer wraps it in [`TaskRecord`](crate::domain::TaskRecord), which
/// adds bookkeeping fields (`updated_at`) that are not part of the
/// response shape.
///
/// # Serialization
///
/// - Fields use `camelCase` naming.
/// - `description` and `completedAt` are nullable and always present:
///   `None` serializes as `null`, not omitted.
/// - Timestamps serialize as RFC 3339 strings.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use taskdeck::{Priority, Task, TaskStatus};
///
/// let task = Task {
///     id: "0192f3a1".to_string(),
///     title: "Buy milk".to_string(),
///     description: None,
///     status: TaskStatus::Todo,
///     priority: Priority::High,
///     created_at: Utc::now(),
///     completed_at: None,
/// };
///
/// let json = serde_json::to_value(&task).unwrap();
/// assert_eq!(json["title"], "Buy milk");
/// assert_eq!(json["status"], "TODO");
/// assert!(json["completedAt"].is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, generated at creation, immutable.
    pub id: String,

    /// Non-empty title. Trimmed on the way in.
    pub title: String,

    /// Optional free-form description. Empty strings are normalized to
    /// `None` at the lifecycle boundary; serializes as `null` when absent.
    pub description: Option<String>,

    /// Current lifecycle status.
    pub status: TaskStatus,

    /// Current priority.
    pub priority: Priority,

    /// When the task was created. Immutable.
    pub created_at: DateTime<Utc>,

    /// When the task was completed. Present exactly while `status` is
    /// [`TaskStatus::Completed`]; serializes as `null` otherwise.
    pub completed_at: Option<DateTime<Utc>>,
}
