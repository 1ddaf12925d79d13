//! Logging configuration for sqldeck.
//!
//! Diagnostics go to stderr so that report output on stdout stays clean
//! enough to pipe.

use tracing_subscriber::EnvFilter;

/// Initializes logging to stderr, filtered by `RUST_LOG` (default: info).
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
