//! Configuration template generation.
//!
//! Generates a commented configuration template with all available options.

use std::fs;
use std::path::Path;

/// Generates a configuration template with all options documented.
#[must_use]
pub fn generate_config_template() -> String {
    r#"// Wallcycle Configuration File
// ============================
// This file uses JSONC format (JSON with comments).
// Adjust the options below and run `wallcycle` to start rotating.

{
  // Directories scanned recursively for wallpaper images, in order.
  // "~" expands to your home directory.
  "directories": [],

  // Accepted file extensions, without leading dots.
  // An empty list matches no files.
  "extensions": ["jpg", "jpeg", "png", "gif", "bmp"],

  // Time in seconds between wallpaper changes (0 = use the default of 60)
  "interval": 60

  // Optional log file path. When set, log output is appended to this file
  // instead of stderr.
  // "logFile": "~/.local/state/wallcycle.log"
}
"#
    .to_string()
}

/// Writes the configuration template to the given path.
///
/// Parent directories are created as needed. The file is not overwritten if
/// it already exists.
///
/// # Errors
///
/// Returns an error if the file already exists or cannot be written.
pub fn create_config_file(path: &Path) -> std::io::Result<()> {
    if path.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("{} already exists", path.display()),
        ));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, generate_config_template())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::config::WallcycleConfig;

    #[test]
    fn test_template_is_valid_jsonc() {
        let template = generate_config_template();
        let stripped = json_comments::StripComments::new(template.as_bytes());
        let config: WallcycleConfig = serde_json::from_reader(stripped).unwrap();
        assert_eq!(config.interval, 60);
        assert!(config.directories.is_empty());
        assert!(config.extensions.contains(&"jpg".to_string()));
    }

    #[test]
    fn test_create_config_file_writes_template() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/config.jsonc");

        create_config_file(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("directories"));
    }

    #[test]
    fn test_create_config_file_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.jsonc");
        std::fs::write(&path, "{}").unwrap();

        let result = create_config_file(&path);
        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }
}
