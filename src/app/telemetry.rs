//! Tracing setup for the binary.

use tracing_subscriber::EnvFilter;

use super::config::DEFAULT_LOG_FILTER;

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG`.
///
/// Stdout carries command output, so logs never go there.
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
