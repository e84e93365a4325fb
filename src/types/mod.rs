//! Wire types for the dashboard API.
//!
//! Everything in this module serializes to the JSON shapes the HTTP
//! surface speaks: `camelCase` field names, SCREAMING_SNAKE_CASE enum
//! values, RFC 3339 timestamps.

pub mod params;
pub mod task;

pub use params::{NewTask, TaskPatch};
pub use task::{Priority, Task, TaskStatus};
