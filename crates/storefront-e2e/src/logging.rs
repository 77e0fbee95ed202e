//! Tracing subscriber setup for suite runs.
//!
//! Every harness operation emits `tracing` events; this module installs a
//! stderr subscriber so `RUST_LOG=storefront_e2e=debug cargo test` shows
//! the full navigate/click/wait trail for a failing test.

use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber.
///
/// Safe to call from every test; only the first call in a process wins.
/// Defaults to `info` when `RUST_LOG` is unset.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
