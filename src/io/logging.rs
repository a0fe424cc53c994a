//! Diagnostic log setup

use crate::io::configuration::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// Install a stderr log subscriber filtered by `RUST_LOG`
///
/// Falls back to [`DEFAULT_LOG_FILTER`] when `RUST_LOG` is unset or invalid.
/// Returns `false` if a global subscriber was already installed.
pub fn init() -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
