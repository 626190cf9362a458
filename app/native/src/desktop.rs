//! Desktop wallpaper collaborator.
//!
//! The rotation engine only talks to the OS wallpaper subsystem through the
//! [`WallpaperSetter`] trait, so the index and selection logic can be tested
//! against a fake. [`DesktopSetter`] is the production implementation, backed
//! by the cross-platform `wallpaper` crate.

use std::path::Path;

/// Errors that can occur when talking to the desktop wallpaper subsystem.
#[derive(Debug)]
pub enum SetterError {
    /// The wallpaper file does not exist.
    FileNotFound(String),
    /// Applying the wallpaper display style failed.
    StyleFailed(String),
    /// Setting the wallpaper failed.
    SetFailed(String),
}

impl std::fmt::Display for SetterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "Wallpaper file not found: {path}"),
            Self::StyleFailed(msg) => write!(f, "Failed to apply wallpaper style: {msg}"),
            Self::SetFailed(msg) => write!(f, "Failed to set wallpaper: {msg}"),
        }
    }
}

impl std::error::Error for SetterError {}

/// Outbound interface to the OS wallpaper subsystem.
///
/// `apply_style` is called once at startup, before the rotation loop begins;
/// `set_wallpaper` is called once per rotation tick.
pub trait WallpaperSetter {
    /// Applies the one-time wallpaper display style (stretch to fill, no
    /// tiling).
    ///
    /// # Errors
    ///
    /// Returns an error if the style cannot be applied. Callers treat this as
    /// fatal at startup.
    fn apply_style(&self) -> Result<(), SetterError>;

    /// Sets the desktop wallpaper to the image at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or the wallpaper call
    /// fails. Callers treat this as recoverable: the tick is skipped.
    fn set_wallpaper(&self, path: &Path) -> Result<(), SetterError>;
}

impl<S: WallpaperSetter + ?Sized> WallpaperSetter for std::sync::Arc<S> {
    fn apply_style(&self) -> Result<(), SetterError> { (**self).apply_style() }

    fn set_wallpaper(&self, path: &Path) -> Result<(), SetterError> { (**self).set_wallpaper(path) }
}

/// Production setter backed by the `wallpaper` crate.
pub struct DesktopSetter;

impl WallpaperSetter for DesktopSetter {
    fn apply_style(&self) -> Result<(), SetterError> {
        wallpaper::set_mode(wallpaper::Mode::Stretch)
            .map_err(|err| SetterError::StyleFailed(err.to_string()))
    }

    fn set_wallpaper(&self, path: &Path) -> Result<(), SetterError> {
        if !path.exists() {
            return Err(SetterError::FileNotFound(path.display().to_string()));
        }

        let path_str = path.display().to_string();
        wallpaper::set_from_path(&path_str).map_err(|err| SetterError::SetFailed(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setter_error_display_file_not_found() {
        let err = SetterError::FileNotFound("/missing.jpg".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Wallpaper file not found"));
        assert!(msg.contains("/missing.jpg"));
    }

    #[test]
    fn test_setter_error_display_style_failed() {
        let err = SetterError::StyleFailed("no desktop session".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Failed to apply wallpaper style"));
    }

    #[test]
    fn test_setter_error_display_set_failed() {
        let err = SetterError::SetFailed("call rejected".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Failed to set wallpaper"));
    }

    #[test]
    fn test_setter_error_is_error_trait() {
        let err = SetterError::SetFailed("x".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_desktop_setter_rejects_missing_file() {
        let result = DesktopSetter.set_wallpaper(Path::new("/no/such/image.jpg"));
        assert!(matches!(result, Err(SetterError::FileNotFound(_))));
    }
}
