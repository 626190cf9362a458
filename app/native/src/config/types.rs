//! Configuration types and loading for Wallcycle.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_INTERVAL_SECS;

/// Root configuration for Wallcycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct WallcycleConfig {
    /// Directories scanned recursively for wallpaper images, in order.
    /// `~` expands to the home directory.
    pub directories: Vec<String>,

    /// Accepted file extensions, without leading dots (e.g. `["jpg", "png"]`).
    /// An empty list matches no files.
    pub extensions: Vec<String>,

    /// Time in seconds between wallpaper changes.
    /// Zero falls back to the default of 60 seconds.
    pub interval: u64,

    /// Optional log file path. When set, log output is appended to this file
    /// instead of stderr.
    pub log_file: String,
}

impl WallcycleConfig {
    /// Returns whether any directories are configured.
    #[must_use]
    pub const fn has_directories(&self) -> bool { !self.directories.is_empty() }

    /// Returns whether the configured interval needs the documented fallback.
    #[must_use]
    pub const fn interval_is_fallback(&self) -> bool { self.interval == 0 }

    /// Returns the rotation interval, substituting the default for zero.
    #[must_use]
    pub const fn effective_interval(&self) -> Duration {
        if self.interval == 0 {
            Duration::from_secs(DEFAULT_INTERVAL_SECS)
        } else {
            Duration::from_secs(self.interval)
        }
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    NotFound,
    /// The configuration file exists but could not be read.
    IoError(std::io::Error),
    /// The configuration file contains invalid JSON.
    ParseError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(
                f,
                "No configuration file found. Expected at \
                ~/.config/wallcycle/config.json or ~/.wallcycle.json; \
                run `wallcycle config init` to create one"
            ),
            Self::IoError(err) => write!(f, "Failed to read configuration file: {err}"),
            Self::ParseError(err) => write!(f, "Failed to parse configuration file: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError(err) => Some(err),
            Self::ParseError(err) => Some(err),
            Self::NotFound => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err) }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self { Self::ParseError(err) }
}

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Legacy configuration file names in the home directory.
const LEGACY_CONFIG_FILE_NAMES: &[&str] = &[".wallcycle.jsonc", ".wallcycle.json"];

/// Returns the possible configuration file paths in priority order.
///
/// The function checks the following locations (both `.jsonc` and `.json`
/// variants):
/// 1. `~/.config/wallcycle/config.jsonc` or `config.json`
/// 2. the platform config directory, e.g. `~/Library/Application Support`
/// 3. `~/.wallcycle.jsonc` or `~/.wallcycle.json` (legacy/simple location)
///
/// If `$XDG_CONFIG_HOME` is set, it takes priority over `~/.config`.
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // Check XDG_CONFIG_HOME first if explicitly set
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        let config_dir = PathBuf::from(xdg_config).join("wallcycle");
        for filename in CONFIG_FILE_NAMES {
            paths.push(config_dir.join(filename));
        }
    }

    // Always check ~/.config/wallcycle/
    if let Some(home) = dirs::home_dir() {
        let config_dir = home.join(".config").join("wallcycle");
        for filename in CONFIG_FILE_NAMES {
            let path = config_dir.join(filename);
            // Only add if not already in the list (XDG_CONFIG_HOME might be ~/.config)
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    // Platform-native config directory
    if let Some(config_root) = dirs::config_dir() {
        let config_dir = config_root.join("wallcycle");
        for filename in CONFIG_FILE_NAMES {
            let path = config_dir.join(filename);
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    // Legacy: $HOME/.wallcycle.jsonc or $HOME/.wallcycle.json
    if let Some(home) = dirs::home_dir() {
        for filename in LEGACY_CONFIG_FILE_NAMES {
            paths.push(home.join(filename));
        }
    }

    paths
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of
/// the expected locations, `ConfigError::IoError` if a file exists but could
/// not be read, and `ConfigError::ParseError` for invalid JSON.
pub fn load_config() -> Result<(WallcycleConfig, PathBuf), ConfigError> {
    for path in config_paths() {
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    Err(ConfigError::NotFound)
}

/// Loads the configuration from an explicit path.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist, and the I/O or
/// parse variants for unreadable or invalid content.
pub fn load_config_from_path(path: &Path) -> Result<(WallcycleConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let file = fs::File::open(path)?;
    // Strip comments from JSONC before parsing
    let reader = json_comments::StripComments::new(file);
    let config: WallcycleConfig = serde_json::from_reader(reader)?;

    Ok((config, path.to_path_buf()))
}
