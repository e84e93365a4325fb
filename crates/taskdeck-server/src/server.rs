//! Server configuration, shared state, and router assembly.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, patch},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use taskdeck::TaskStore;

use crate::handlers;

/// Configuration for the dashboard server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// The task store every handler operates on.
    pub store: Arc<dyn TaskStore>,
}

/// Builds the API router over the given state.
///
/// Routes (JSON in/out, all under `/api`):
/// - `GET  /api/tasks` - full collection, optional snapshot filters
/// - `POST /api/tasks` - create
/// - `PATCH  /api/tasks/{id}` - partial update
/// - `DELETE /api/tasks/{id}` - delete
/// - `GET  /api/health` - store round-trip probe
/// - `GET  /api/stats` - dashboard analytics over a fresh snapshot
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/tasks",
            get(handlers::tasks::list).post(handlers::tasks::create),
        )
        .route(
            "/api/tasks/{id}",
            patch(handlers::tasks::update).delete(handlers::tasks::remove),
        )
        .route("/api/health", get(handlers::health::check))
        .route("/api/stats", get(handlers::stats::dashboard))
        .layer(cors)
        .with_state(state)
}

/// The dashboard API server.
pub struct DashboardServer;

impl DashboardServer {
    /// Binds the listener and serves requests until shutdown.
    pub async fn start(config: ServerConfig, store: Arc<dyn TaskStore>) -> Result<()> {
        let state = Arc::new(AppState { store });
        let app = router(state);

        let addr = SocketAddr::from((config.host, config.port));
        let listener = TcpListener::bind(addr).await?;
        info!("dashboard API listening on http://{}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
