//! The on-disk image index.
//!
//! The index is a flat, newline-delimited list of matched image paths: one
//! path per line, addressed by 0-based ordinal. It is rewritten wholesale on
//! every build (truncate + recreate, never appended across builds) and read
//! back one buffered line at a time, so neither building nor selection holds
//! more than a single entry in memory.
//!
//! Format invariant: an entry never contains a line break. Paths whose string
//! form contains `\n` or `\r` are skipped at build time with a warning, as
//! are paths that are not valid UTF-8.
//!
//! The index lives in a process-private location under the user cache
//! directory and is not a stable format; no other process reads it.

mod picker;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

pub use picker::pick_entry;

use crate::constants::{APP_NAME, INDEX_FILE_NAME};
use crate::matcher::ExtensionMatcher;
use crate::platform::path::expand;

/// Errors that can occur while building or reading the index.
#[derive(Debug)]
pub enum IndexError {
    /// The index file could not be created or truncated.
    Create(std::io::Error),
    /// The index file could not be opened for reading.
    Open(std::io::Error),
    /// Reading or writing index entries failed.
    Io(std::io::Error),
}

impl std::fmt::Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Create(err) => write!(f, "Failed to create index file: {err}"),
            Self::Open(err) => write!(f, "Failed to open index file: {err}"),
            Self::Io(err) => write!(f, "Index I/O failed: {err}"),
        }
    }
}

impl std::error::Error for IndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Create(err) | Self::Open(err) | Self::Io(err) => Some(err),
        }
    }
}

/// Returns the default index file location.
///
/// Uses `{cache_dir}/wallcycle/index.txt`, falling back to the system temp
/// directory when no cache directory is available.
#[must_use]
pub fn default_index_path() -> PathBuf {
    dirs::cache_dir()
        .map_or_else(|| std::env::temp_dir().join(APP_NAME), |cache| cache.join(APP_NAME))
        .join(INDEX_FILE_NAME)
}

/// Builds the image index from the configured directories.
///
/// Each directory is traversed recursively, in configuration order, with a
/// depth-first walk. Symbolic links are not followed, which keeps the walk
/// safe against link cycles. Every visited file whose path matches `matcher`
/// is appended to the index file at `index_path`; any previous index content
/// is discarded before the walk begins.
///
/// Traversal errors on individual entries (permission denied, broken links)
/// are logged and skipped. The index file is flushed and synced to stable
/// storage before the entry count is returned, so a crash after `build_index`
/// never leaves a partially-written index behind as if it were complete.
///
/// # Errors
///
/// Returns an error if the index file itself cannot be created or written.
pub fn build_index(
    directories: &[String],
    matcher: &ExtensionMatcher,
    index_path: &Path,
) -> Result<usize, IndexError> {
    if let Some(parent) = index_path.parent() {
        fs::create_dir_all(parent).map_err(IndexError::Create)?;
    }

    let file = File::create(index_path).map_err(IndexError::Create)?;
    let mut writer = BufWriter::new(file);
    let mut count = 0usize;

    for directory in directories {
        let root = expand(directory);
        tracing::info!(directory = %root.display(), "scanning directory");

        for entry in WalkDir::new(&root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(path_str) = entry.path().to_str() else {
                tracing::warn!(path = %entry.path().display(), "skipping non-UTF-8 path");
                continue;
            };

            if !matcher.matches(path_str) {
                continue;
            }

            if path_str.contains('\n') || path_str.contains('\r') {
                tracing::warn!(
                    path = %entry.path().display(),
                    "skipping path containing a line break"
                );
                continue;
            }

            writer.write_all(path_str.as_bytes()).map_err(IndexError::Io)?;
            writer.write_all(b"\n").map_err(IndexError::Io)?;
            count += 1;
        }
    }

    writer.flush().map_err(IndexError::Io)?;
    writer.get_ref().sync_all().map_err(IndexError::Io)?;

    Ok(count)
}
