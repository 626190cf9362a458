//! Configuration module for Wallcycle.
//!
//! This module provides configuration types, loading functionality, and
//! template generation. The configuration file supports JSONC format (JSON
//! with comments).
//!
//! The configuration is loaded once at startup and passed by reference into
//! the components that need it; there is no process-wide configuration state.

pub mod template;
mod types;

use std::path::{Path, PathBuf};

pub use types::{
    ConfigError, WallcycleConfig, config_paths, load_config, load_config_from_path,
};

/// Loads the configuration, preferring an explicit path over the search
/// paths.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists, and the
/// I/O or parse variants for unreadable or invalid content.
pub fn load(custom_path: Option<&Path>) -> Result<(WallcycleConfig, PathBuf), ConfigError> {
    custom_path.map_or_else(load_config, load_config_from_path)
}
