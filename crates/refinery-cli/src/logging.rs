//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! `RUST_LOG` takes precedence. Without it, Refinery and HTTP request traces
//! log at `info`, or `debug` with `--verbose`.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let default_directives = format!("refinery={level},refinery_cli={level},tower_http={level}");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
