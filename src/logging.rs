//! Tracing subscriber setup for the binary
//!
//! Logs go to stderr unless a log file is given. The TUI owns the terminal,
//! so `play` is normally combined with `--log-file` when logging is wanted.

use anyhow::{Context, Result};
use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter: an explicit level wins, then `RUST_LOG`, then the default
///
/// # Errors
/// Returns an error if `level` is not a valid filter directive.
pub fn filter(level: Option<&str>) -> Result<EnvFilter> {
    match level {
        Some(level) => {
            EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'"))
        }
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install the global subscriber
///
/// # Errors
/// Returns an error if the filter is invalid, the log file cannot be created,
/// or a subscriber is already installed.
pub fn init(level: Option<&str>, log_file: Option<&Path>) -> Result<()> {
    let filter = filter(level)?;

    let (file_layer, console_layer) = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            (Some(layer), None)
        }
        None => {
            let layer = fmt::layer().with_target(false).with_writer(io::stderr);
            (None, Some(layer))
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("failed to install the tracing subscriber")
}
