//! Shell-like path expansion.
//!
//! Configured directory and file paths may use `~` for the home directory;
//! this module centralizes the expansion.

use std::path::PathBuf;

/// Expands shell-like paths (tilde) to absolute paths.
///
/// Absolute and relative paths are returned as-is after trimming; a leading
/// `~` is expanded to the user's home directory.
#[must_use]
pub fn expand(path: &str) -> PathBuf {
    let path = path.trim();

    if path.is_empty() {
        return PathBuf::new();
    }

    let expanded = shellexpand::tilde(path);
    PathBuf::from(expanded.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_empty() {
        assert_eq!(expand(""), PathBuf::new());
        assert_eq!(expand("   "), PathBuf::new());
    }

    #[test]
    fn test_expand_absolute_path() {
        assert_eq!(expand("/pictures/wallpapers"), PathBuf::from("/pictures/wallpapers"));
    }

    #[test]
    fn test_expand_relative_path() {
        assert_eq!(expand("pictures/wallpapers"), PathBuf::from("pictures/wallpapers"));
    }

    #[test]
    fn test_expand_trims_whitespace() {
        assert_eq!(expand("  /pictures  "), PathBuf::from("/pictures"));
    }

    #[test]
    fn test_expand_tilde_path() {
        let result = expand("~/Pictures/wallpapers");
        assert!(!result.to_string_lossy().starts_with('~'));
        assert!(result.to_string_lossy().ends_with("Pictures/wallpapers"));
    }
}
