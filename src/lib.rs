//! Task-tracking dashboard core.
//!
//! This crate implements the domain of a single-user task dashboard:
//! wire types, the task lifecycle engine, a pure analytics aggregator,
//! snapshot search/filtering, and pluggable task storage.
//!
//! # Overview
//!
//! A task moves through three statuses (`TODO` -> `IN_PROGRESS` ->
//! `COMPLETED`, in any order) and carries a completion timestamp that
//! exists exactly while the task is completed. All derived statistics
//! (status/priority distributions, completion rate, daily completion
//! trend, productivity score) are recomputed in full from the current
//! task collection on every call; there is no cached or incremental
//! aggregation state.
//!
//! # Module Organization
//!
//! - [`types`] - Wire types (`Task`, `TaskStatus`, `Priority`, request params)
//! - [`domain`] - `TaskRecord` and the lifecycle engine (`create`, `apply_patch`)
//! - [`analytics`] - Pure derived-statistics functions and the [`Dashboard`] bundle
//! - [`filter`] - Search and status/priority filtering over a fetched snapshot
//! - [`store`] - Storage backend trait, generic store, and in-memory implementation
//! - [`error`] - Error taxonomy with HTTP status mapping

pub mod analytics;
pub mod constants;
pub mod domain;
pub mod error;
pub mod filter;
pub mod store;
pub mod types;

// Re-exports for ergonomic access
pub use analytics::Dashboard;
pub use constants::*;
pub use domain::TaskRecord;
pub use error::TaskError;
pub use filter::{PriorityFilter, StatusFilter, TaskQuery};
pub use store::memory::InMemoryTaskStore;
pub use store::TaskStore;
pub use types::*;
