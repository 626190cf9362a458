//! CLI command definitions using Clap.
//!
//! This module defines all CLI commands and their arguments:
//!
//! - `run` - rotation daemon
//! - `scan` / `pick` / `set` - one-shot index and wallpaper operations
//! - `config` - configuration file management
//! - `schema` / `completions` - tooling output

use std::io;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use super::output;
use crate::desktop::{DesktopSetter, WallpaperSetter};
use crate::error::WallcycleError;
use crate::matcher::ExtensionMatcher;
use crate::platform::path::expand;
use crate::{config, index, schema};

pub mod config_cmd;

pub use config_cmd::ConfigCommands;

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wallcycle CLI - rotate desktop wallpapers from an on-disk image index.
#[derive(Parser, Debug)]
#[command(name = "wallcycle")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Run the rotation daemon.
    ///
    /// Builds the image index once, applies the wallpaper display style, and
    /// then sets a random wallpaper on the configured interval until the
    /// process is terminated. This is also what running `wallcycle` with no
    /// arguments does.
    Run,

    /// Rebuild the image index.
    ///
    /// Scans the configured directories and rewrites the on-disk index,
    /// printing the number of matched images.
    Scan,

    /// Print one randomly selected entry from the image index.
    ///
    /// Requires an index built by `wallcycle scan` or a previous `run`.
    Pick,

    /// Set the desktop wallpaper once.
    ///
    /// Set a specific image by providing a path, or use --random to scan the
    /// configured directories and pick one at random.
    #[command(
        verbatim_doc_comment,
        after_long_help = r"Examples:
  wallcycle set /path/to/image.jpg   # Specific image
  wallcycle set --random             # Random image from the configured directories"
    )]
    Set {
        /// The path to the image to use as wallpaper.
        #[arg(value_name = "PATH")]
        path: Option<String>,

        /// Pick a random image from the configured directories.
        #[arg(long, short)]
        random: bool,
    },

    /// Configuration file management commands.
    ///
    /// Initialize, view, and manage the configuration file.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Output the configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// Wallcycle configuration file. Can be redirected to a file for use with
    /// editors that support JSON Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    /// Can be used with eval or redirected to a file.
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<PathBuf> { self.config.as_ref().map(PathBuf::from) }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), WallcycleError> {
        let custom = self.config_path();
        if let Some(ref path) = custom
            && !path.exists()
        {
            return Err(WallcycleError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        match &self.command {
            Commands::Run => crate::run(custom),
            Commands::Scan => execute_scan(custom.as_deref()),
            Commands::Pick => execute_pick(),
            Commands::Set { path, random } => execute_set(custom.as_deref(), path.as_deref(), *random),
            Commands::Config(cmd) => config_cmd::execute(cmd, custom.as_deref()),

            Commands::Schema => {
                println!("{}", schema::print_schema());
                Ok(())
            }

            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "wallcycle", &mut io::stdout());
    }
}

/// Compiles the configured extension matcher, mapping failures to a
/// configuration error.
fn build_matcher(config: &config::WallcycleConfig) -> Result<ExtensionMatcher, WallcycleError> {
    ExtensionMatcher::new(&config.extensions)
        .map_err(|err| WallcycleError::ConfigError(format!("invalid extension list: {err}")))
}

/// Execute the scan command.
fn execute_scan(custom: Option<&Path>) -> Result<(), WallcycleError> {
    let (config, _loaded_from) = config::load(custom)?;
    crate::logging::init(&config.log_file);

    let matcher = build_matcher(&config)?;
    let index_path = index::default_index_path();
    let count = index::build_index(&config.directories, &matcher, &index_path)?;

    output::success(&format!("Indexed {count} image(s) into {}", index_path.display()));
    Ok(())
}

/// Execute the pick command.
fn execute_pick() -> Result<(), WallcycleError> {
    let index_path = index::default_index_path();
    let picked = index::pick_entry(&index_path, &mut rand::rng()).map_err(|err| {
        WallcycleError::IndexError(format!("{err}. Run `wallcycle scan` to build the index"))
    })?;

    match picked {
        Some(path) => {
            println!("{path}");
            Ok(())
        }
        None => {
            output::warning("The image index is empty. Run `wallcycle scan` first.");
            Ok(())
        }
    }
}

/// Execute the set command.
fn execute_set(
    custom: Option<&Path>,
    path: Option<&str>,
    random: bool,
) -> Result<(), WallcycleError> {
    if path.is_some() && random {
        return Err(WallcycleError::InvalidArguments(
            "Cannot specify both <path> and --random. Use one or the other.".to_string(),
        ));
    }

    if path.is_none() && !random {
        return Err(WallcycleError::InvalidArguments(
            "Either <path> or --random must be specified.".to_string(),
        ));
    }

    let target = match path {
        Some(file) => expand(file),
        None => pick_from_fresh_index(custom)?,
    };

    let setter = DesktopSetter;
    setter.apply_style()?;
    setter.set_wallpaper(&target)?;

    output::success(&format!("Wallpaper set to {}", target.display()));
    Ok(())
}

/// Builds a fresh index from the configured directories and picks one entry.
fn pick_from_fresh_index(custom: Option<&Path>) -> Result<PathBuf, WallcycleError> {
    let (config, _loaded_from) = config::load(custom)?;
    let matcher = build_matcher(&config)?;
    let index_path = index::default_index_path();
    index::build_index(&config.directories, &matcher, &index_path)?;

    index::pick_entry(&index_path, &mut rand::rng())?.map(PathBuf::from).ok_or_else(|| {
        WallcycleError::WallpaperError(
            "No images matched the configured directories and extensions".to_string(),
        )
    })
}
