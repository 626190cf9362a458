//! CLI module for Wallcycle.
//!
//! This module provides command-line interface functionality: the rotation
//! daemon (`run`), one-shot index and wallpaper operations (`scan`, `pick`,
//! `set`), and configuration management.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;

use crate::error::WallcycleError;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), WallcycleError> {
    let cli = Cli::parse();
    cli.execute()
}
