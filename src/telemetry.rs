//! Logging bootstrap shared by the binaries.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Installs a formatted subscriber writing to standard error.
///
/// `directive` is an `EnvFilter` directive such as `info` or
/// `taskboard=debug,tower=warn`; an unparsable directive falls back to
/// `info`.
///
/// # Errors
///
/// Returns an error when a global subscriber is already installed.
pub fn init(directive: &str) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}
