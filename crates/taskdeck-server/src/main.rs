//! Entry point for the taskdeck dashboard API server.

use std::net::IpAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use taskdeck::{InMemoryTaskStore, TaskStore};
use taskdeck_server::{DashboardServer, ServerConfig};

/// Task-tracking dashboard API server.
#[derive(Debug, Parser)]
#[command(name = "taskdeck-server", version, about)]
struct Args {
    /// Address to bind.
    #[arg(long, env = "TASKDECK_HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "TASKDECK_PORT", default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let store: Arc<dyn TaskStore> = Arc::new(InMemoryTaskStore::new());

    DashboardServer::start(
        ServerConfig {
            host: args.host,
            port: args.port,
        },
        store,
    )
    .await
}
