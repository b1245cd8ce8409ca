//! Command-line and environment configuration.
//!
//! Every option can be given as a flag or through the environment variable
//! named in its help text; flags win.

use clap::{Args, Parser};
use reqwest::Url;
use std::net::SocketAddr;
use std::time::Duration;

/// Configuration for `taskboard-server`.
#[derive(Debug, Clone, Parser)]
#[command(name = "taskboard-server")]
#[command(version, about = "Serve the Taskboard task API", long_about = None)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "TASKBOARD_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Log filter (trace, debug, info, warn, error, or a full directive)
    #[arg(long, env = "TASKBOARD_LOG", default_value = "info")]
    pub log_level: String,

    /// Start with an empty store instead of the demo tasks
    #[arg(long)]
    pub no_seed: bool,
}

/// How a client reaches the task API.
#[derive(Debug, Clone, Args)]
pub struct ClientConfig {
    /// Base URL of the task API server
    #[arg(
        long = "server",
        env = "TASKBOARD_URL",
        default_value = "http://127.0.0.1:3000"
    )]
    pub server_url: Url,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
