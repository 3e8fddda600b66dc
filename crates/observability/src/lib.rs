//! Shared tracing/logging setup.
//!
//! Registry operations emit `tracing` events at debug level; this crate wires
//! up the subscriber that makes them visible (`RUST_LOG=debug`).

use tracing_subscriber::EnvFilter;

/// Initialize process-wide logging.
///
/// Safe to call multiple times (subsequent calls are no-ops), so tests and
/// binaries can call it unconditionally.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}
