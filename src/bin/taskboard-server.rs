//! Serves the Taskboard REST API from an in-memory store.
//!
//! Usage:
//!
//! ```text
//! taskboard-server [--bind ADDR] [--log-level FILTER] [--no-seed]
//! ```
//!
//! The store starts with two demo tasks unless `--no-seed` is given. All
//! state is lost when the process exits. The server stops cleanly on
//! Ctrl-C.

use clap::Parser;
use eyre::WrapErr;
use mockable::DefaultClock;
use std::sync::Arc;
use taskboard::config::ServerConfig;
use taskboard::http;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    services::{TaskService, default_tasks},
};
use taskboard::telemetry;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServerConfig::parse();
    telemetry::init(&config.log_level).wrap_err("failed to install log subscriber")?;

    let service = TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    );
    if config.no_seed {
        info!("starting with an empty store");
    } else {
        let seeded = service
            .seed(default_tasks())
            .await
            .wrap_err("failed to seed demo tasks")?;
        info!(count = seeded, "seeded demo tasks");
    }

    let listener = TcpListener::bind(config.bind)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.bind))?;

    http::serve(listener, service, shutdown_signal())
        .await
        .wrap_err("task API server failed")?;

    info!("task API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for Ctrl-C; shutting down");
        return;
    }
    info!("received Ctrl-C, shutting down");
}
