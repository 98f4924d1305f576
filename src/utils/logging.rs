//! Logging bootstrap
//!
//! Installs a `tracing` subscriber with env-filter support. The cache itself
//! only emits `tracing` events; embedding applications that already install
//! their own subscriber should skip this.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG`; falls back to `default_filter` when unset.
/// Safe to call more than once: subsequent calls are no-ops.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
