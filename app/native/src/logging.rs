//! Logging setup.
//!
//! Log output goes to stderr by default, or to the configured log file when
//! one is set. The level is `info` unless overridden via `RUST_LOG`.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::platform::path::expand;

/// Initializes the global tracing subscriber.
///
/// When `log_file` is non-empty, log lines are appended to that file (tilde
/// expansion supported); if the file cannot be opened, logging falls back to
/// stderr with a warning. Must be called at most once per process.
pub fn init(log_file: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if log_file.is_empty() {
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
        return;
    }

    let path = expand(log_file);
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .init();
        }
        Err(err) => {
            tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
            tracing::warn!(
                error = %err,
                path = %path.display(),
                "failed to open log file, logging to stderr"
            );
        }
    }
}
