//! HTTP API server for the taskdeck dashboard.
//!
//! Thin marshalling layer over the [`taskdeck`] core: each handler
//! performs one logical store operation, converts the result to JSON,
//! and maps [`TaskError`](taskdeck::TaskError) to an HTTP status with a
//! `{"error": "..."}` envelope. No domain logic lives here.

pub mod handlers;
pub mod server;

pub use server::{AppState, DashboardServer, ServerConfig};
