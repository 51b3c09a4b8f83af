//! Logging setup and the foreign caller's log passthrough.

use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_LOG_FILTER, LOG_FILTER_ENV};

/// Target used for messages forwarded from the foreign caller.
pub const NATIVE_LOG_TARGET: &str = "native_log";

/// Install a global `tracing` subscriber writing to stderr. The filter comes
/// from `FLEX_BRIDGE_LOG`, falling back to `info`. Returns `false` when a
/// subscriber was already installed (by us or by the host).
pub fn init_logging() -> bool {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

pub fn forward(message: &str) {
    tracing::info!(target: NATIVE_LOG_TARGET, "NATIVE_LOG: {message}");
}
