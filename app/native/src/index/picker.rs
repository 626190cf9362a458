//! Random selection from the index file.
//!
//! Selection uses a line-count + seek strategy: one pass counts the entries,
//! a uniform draw picks an ordinal, and a second pass scans forward to that
//! ordinal. Two linear passes, one buffered line in memory at a time, so an
//! arbitrarily large index is never loaded wholesale. Each entry is exactly
//! equally likely regardless of its length.
//!
//! The random source is an injected parameter so tests can force determinism
//! with a seeded generator.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::Rng;

use super::IndexError;

/// Picks one index entry uniformly at random.
///
/// Returns `Ok(None)` when the index contains no entries; no random draw is
/// attempted in that case, so the zero-sized range is never touched. Also
/// returns `Ok(None)` if the file shrinks between the counting and seeking
/// passes (the builder and picker never run concurrently in-process, but an
/// external truncation must not panic the loop).
///
/// # Errors
///
/// Returns an error if the index file is missing or unreadable. Callers treat
/// this as recoverable: the rotation loop logs it and skips the tick.
pub fn pick_entry<R: Rng + ?Sized>(
    index_path: &Path,
    rng: &mut R,
) -> Result<Option<String>, IndexError> {
    let file = File::open(index_path).map_err(IndexError::Open)?;
    let mut count = 0usize;
    for line in BufReader::new(file).lines() {
        line.map_err(IndexError::Io)?;
        count += 1;
    }

    if count == 0 {
        return Ok(None);
    }

    let ordinal = rng.random_range(0..count);

    let file = File::open(index_path).map_err(IndexError::Open)?;
    for (position, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(IndexError::Io)?;
        if position == ordinal {
            return Ok(Some(line));
        }
    }

    Ok(None)
}
