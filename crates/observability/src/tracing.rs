//! Tracing subscriber installation.

use tracing_subscriber::EnvFilter;

/// Installs a compact console subscriber, filtered via `RUST_LOG`
/// (default `info`).
///
/// Only the first install wins; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
