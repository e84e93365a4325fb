//! Search and filtering over an already-fetched task snapshot.
//!
//! These functions mirror what the dashboard does client-side: they
//! operate on the in-memory collection a caller has already fetched and
//! never go back to the store. Text search and the two enum filters
//! compose by conjunction.

use serde::{Deserialize, Serialize};

use crate::types::task::{Priority, Task, TaskStatus};

/// Status filter with an `ALL` pass-through sentinel.
///
/// # Examples
///
/// ```
/// use taskdeck::{StatusFilter, TaskStatus};
///
/// assert!(StatusFilter::All.matches(TaskStatus::Todo));
/// assert!(StatusFilter::Completed.matches(TaskStatus::Completed));
/// assert!(!StatusFilter::Completed.matches(TaskStatus::Todo));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusFilter {
    /// Pass-through: matches every status.
    #[default]
    All,
    /// Only `TODO` tasks.
    Todo,
    /// Only `IN_PROGRESS` tasks.
    InProgress,
    /// Only `COMPLETED` tasks.
    Completed,
}

impl StatusFilter {
    /// Returns `true` if a task with the given status passes this filter.
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Todo => status == TaskStatus::Todo,
            Self::InProgress => status == TaskStatus::InProgress,
            Self::Completed => status == TaskStatus::Completed,
        }
    }
}

/// Priority filter with an `ALL` pass-through sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityFilter {
    /// Pass-through: matches every priority.
    #[default]
    All,
    /// Only `LOW` tasks.
    Low,
    /// Only `MEDIUM` tasks.
    Medium,
    /// Only `HIGH` tasks.
    High,
}

impl PriorityFilter {
    /// Returns `true` if a task with the given priority passes this filter.
    pub fn matches(self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Low => priority == Priority::Low,
            Self::Medium => priority == Priority::Medium,
            Self::High => priority == Priority::High,
        }
    }
}

/// A composed snapshot query: text search plus status/priority filters,
/// combined with AND. Doubles as the query-string shape of
/// `GET /tasks` (`?q=milk&status=TODO&priority=ALL`).
///
/// # Examples
///
/// ```
/// use taskdeck::TaskQuery;
///
/// let query = TaskQuery::default();
/// assert!(query.q.is_none());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskQuery {
    /// Free-text search; empty or absent means no text filtering.
    #[serde(default)]
    pub q: Option<String>,

    /// Status filter; defaults to `ALL`.
    #[serde(default)]
    pub status: StatusFilter,

    /// Priority filter; defaults to `ALL`.
    #[serde(default)]
    pub priority: PriorityFilter,
}

impl TaskQuery {
    /// Returns `true` if the task passes the whole query.
    pub fn matches(&self, task: &Task) -> bool {
        let text_ok = match self.q.as_deref() {
            None => true,
            Some(query) => matches_search(task, query),
        };
        text_ok && self.status.matches(task.status) && self.priority.matches(task.priority)
    }
}

/// Case-insensitive substring match against title or description.
/// An empty or whitespace-only query matches everything.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use taskdeck::filter::matches_search;
/// use taskdeck::{Priority, Task, TaskStatus};
///
/// let task = Task {
///     id: "1".to_string(),
///     title: "Buy Milk".to_string(),
///     description: None,
///     status: TaskStatus::Todo,
///     priority: Priority::Medium,
///     created_at: Utc::now(),
///     completed_at: None,
/// };
/// assert!(matches_search(&task, "milk"));
/// assert!(matches_search(&task, ""));
/// assert!(!matches_search(&task, "bread"));
/// ```
pub fn matches_search(task: &Task, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    task.title.to_lowercase().contains(&query)
        || task
            .description
            .as_deref()
            .is_some_and(|text| text.to_lowercase().contains(&query))
}

/// Applies a [`TaskQuery`] to a fetched snapshot, preserving order.
pub fn apply(tasks: Vec<Task>, query: &TaskQuery) -> Vec<Task> {
    tasks
        .into_iter()
        .filter(|task| query.matches(task))
        .collect()
}
