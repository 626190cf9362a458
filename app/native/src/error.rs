//! Error types for Wallcycle.
//!
//! This module provides the unified error type returned by the CLI and the
//! daemon entry points. Module-level errors (`ConfigError`, `IndexError`,
//! `SetterError`) convert into it at the boundary.

use thiserror::Error;

/// Errors that can occur during application execution.
#[derive(Debug, Error)]
pub enum WallcycleError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Image index error.
    #[error("Index error: {0}")]
    IndexError(String),
    /// Wallpaper operation failed.
    #[error("Wallpaper error: {0}")]
    WallpaperError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

impl From<std::io::Error> for WallcycleError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for WallcycleError {
    fn from(err: serde_json::Error) -> Self { Self::CommandError(err.to_string()) }
}

impl From<crate::config::ConfigError> for WallcycleError {
    fn from(err: crate::config::ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}

impl From<crate::index::IndexError> for WallcycleError {
    fn from(err: crate::index::IndexError) -> Self { Self::IndexError(err.to_string()) }
}

impl From<crate::desktop::SetterError> for WallcycleError {
    fn from(err: crate::desktop::SetterError) -> Self { Self::WallpaperError(err.to_string()) }
}

impl From<String> for WallcycleError {
    fn from(msg: String) -> Self { Self::CommandError(msg) }
}

impl From<&str> for WallcycleError {
    fn from(msg: &str) -> Self { Self::CommandError(msg.to_string()) }
}
