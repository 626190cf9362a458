//! Configuration CLI commands.

use std::path::Path;

use clap::Subcommand;

use crate::cli::output;
use crate::config::{self, template};
use crate::error::WallcycleError;

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum ConfigCommands {
    /// Create a template configuration file.
    ///
    /// Writes a commented JSONC template to the preferred configuration
    /// location. Fails if a configuration file already exists there.
    Init,

    /// Print the path of the loaded configuration file.
    Path,

    /// Print the resolved configuration as JSON.
    Show,
}

/// Execute configuration subcommands.
pub fn execute(cmd: &ConfigCommands, custom: Option<&Path>) -> Result<(), WallcycleError> {
    match cmd {
        ConfigCommands::Init => execute_init(),

        ConfigCommands::Path => {
            let (_config, loaded_from) = config::load(custom)?;
            println!("{}", loaded_from.display());
            Ok(())
        }

        ConfigCommands::Show => {
            let (config, _loaded_from) = config::load(custom)?;
            let value = serde_json::to_value(&config)?;
            output::print_json(&value);
            Ok(())
        }
    }
}

/// Execute the config init command.
fn execute_init() -> Result<(), WallcycleError> {
    let Some(path) = config::config_paths().into_iter().next() else {
        return Err(WallcycleError::ConfigError(
            "No configuration directory available".to_string(),
        ));
    };

    template::create_config_file(&path)?;
    output::success(&format!("Created {}", path.display()));
    Ok(())
}
