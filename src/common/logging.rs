//! Logging and tracing configuration
//!
//! Daemon output lines are re-emitted at debug level, so `RUST_LOG=debug`
//! shows the full marker handshake when a run misbehaves.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the harness binary (stdout logging)
///
/// Logs are controlled by the `RUST_LOG` environment variable.
/// Default level is INFO for this crate, WARN for dependencies.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("index_harness=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
