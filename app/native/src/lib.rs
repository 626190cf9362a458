//! Wallcycle - a desktop wallpaper rotator.
//!
//! Wallcycle recursively scans a set of configured directories for image
//! files, writes the matching paths into a flat on-disk index, and then
//! periodically sets a randomly selected index entry as the desktop
//! wallpaper. The index is rebuilt wholesale on each run; selection reads a
//! bounded amount of the file regardless of how large the index grows.

// Core modules
pub mod cli;
pub mod config;
pub mod constants;
pub mod desktop;
pub mod error;
pub mod index;
pub mod logging;
pub mod matcher;
pub mod platform;
pub mod rotation;
pub mod schema;

use std::path::PathBuf;

use crate::desktop::DesktopSetter;
use crate::error::WallcycleError;
use crate::rotation::Shutdown;

/// Runs the rotation daemon.
///
/// Loads the configuration (from `config_path` if given, otherwise from the
/// default search paths), initializes logging, builds the image index once,
/// applies the wallpaper display style, and enters the rotation loop. The
/// loop runs until the process is terminated.
///
/// # Errors
///
/// Returns an error if the configuration is missing or malformed, the
/// extension list cannot be compiled, the index file cannot be written, or
/// the wallpaper style cannot be applied.
pub fn run(config_path: Option<PathBuf>) -> Result<(), WallcycleError> {
    let (config, loaded_from) = config::load(config_path.as_deref())?;

    logging::init(&config.log_file);
    tracing::info!(config = %loaded_from.display(), "configuration loaded");

    let index_path = index::default_index_path();
    rotation::start(&config, DesktopSetter, &index_path, &Shutdown::new())
}
