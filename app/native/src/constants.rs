//! Application-wide constants.

/// Application name, used for configuration and cache directory names.
pub const APP_NAME: &str = "wallcycle";

/// File name of the on-disk image index inside the cache directory.
pub const INDEX_FILE_NAME: &str = "index.txt";

/// Rotation interval in seconds used when the configured value is zero.
pub const DEFAULT_INTERVAL_SECS: u64 = 60;
