//! Rotation scheduling.
//!
//! The scheduler builds the image index once at startup, then loops: pick a
//! random entry, hand it to the wallpaper setter, sleep for the configured
//! interval, repeat. Tick failures (empty index, unreadable index, a failed
//! wallpaper call) are logged and skipped; they never alter the loop's state,
//! so the process self-heals once the condition clears. The index is never
//! rebuilt mid-run.
//!
//! The interval sleep waits on a condvar instead of a plain `thread::sleep`,
//! so a [`Shutdown`] trigger wakes the loop immediately rather than waiting
//! out the remainder of the interval.

use std::path::{Path, PathBuf};
use std::sync::{Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::config::WallcycleConfig;
use crate::constants::DEFAULT_INTERVAL_SECS;
use crate::desktop::WallpaperSetter;
use crate::error::WallcycleError;
use crate::index::{build_index, pick_entry};
use crate::matcher::ExtensionMatcher;

/// Cooperative shutdown signal for the rotation loop.
///
/// In the daemon the loop runs until process termination and the signal is
/// never triggered; embedders and tests use it to stop the loop promptly.
#[derive(Debug, Default)]
pub struct Shutdown {
    triggered: Mutex<bool>,
    condvar: Condvar,
}

impl Shutdown {
    /// Creates an untriggered shutdown signal.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Signals the rotation loop to stop, waking it mid-sleep.
    pub fn trigger(&self) {
        let mut triggered = self.triggered.lock().unwrap_or_else(PoisonError::into_inner);
        *triggered = true;
        self.condvar.notify_all();
    }

    /// Returns whether shutdown has been requested.
    #[must_use]
    pub fn is_triggered(&self) -> bool {
        *self.triggered.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Blocks for up to `timeout`, returning early if shutdown is triggered.
    ///
    /// Returns `true` when shutdown was requested, `false` when the full
    /// timeout elapsed.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut triggered = self.triggered.lock().unwrap_or_else(PoisonError::into_inner);

        // Loop to absorb spurious condvar wakeups
        while !*triggered {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            let (guard, _timed_out) = self
                .condvar
                .wait_timeout(triggered, deadline - now)
                .unwrap_or_else(PoisonError::into_inner);
            triggered = guard;
        }

        true
    }
}

/// Drives the rotation loop: select one entry per tick and apply it.
pub struct Rotator<S: WallpaperSetter> {
    setter: S,
    index_path: PathBuf,
    interval: Duration,
}

impl<S: WallpaperSetter> Rotator<S> {
    /// Creates a rotator over an already-built index.
    pub const fn new(setter: S, index_path: PathBuf, interval: Duration) -> Self {
        Self { setter, index_path, interval }
    }

    /// Runs the rotation loop until `shutdown` is triggered.
    ///
    /// The first tick happens immediately; each subsequent tick follows one
    /// interval sleep.
    pub fn run(&self, shutdown: &Shutdown) {
        loop {
            self.tick();
            if shutdown.wait_timeout(self.interval) {
                tracing::info!("shutdown requested, stopping rotation");
                return;
            }
        }
    }

    /// Performs one rotation tick: pick a random entry and apply it.
    ///
    /// All failures are logged and swallowed; a failed tick leaves the loop
    /// untouched.
    pub fn tick(&self) {
        match pick_entry(&self.index_path, &mut rand::rng()) {
            Ok(Some(path)) => {
                tracing::info!(path = %path, "rotating wallpaper");
                if let Err(err) = self.setter.set_wallpaper(Path::new(&path)) {
                    tracing::warn!(error = %err, "failed to set wallpaper, skipping tick");
                }
            }
            Ok(None) => {
                tracing::warn!("image index is empty, skipping tick");
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to read image index, skipping tick");
            }
        }
    }
}

/// Initializes and runs the rotation scheduler.
///
/// Startup phase: compile the extension matcher, build the index once, and
/// apply the one-time wallpaper display style; any failure here is fatal and
/// propagated to the caller. Rotation phase: run the tick loop until
/// `shutdown` is triggered.
///
/// # Errors
///
/// Returns an error if the extension list cannot be compiled, the index file
/// cannot be written, or the wallpaper style cannot be applied.
pub fn start<S: WallpaperSetter>(
    config: &WallcycleConfig,
    setter: S,
    index_path: &Path,
    shutdown: &Shutdown,
) -> Result<(), WallcycleError> {
    let matcher = ExtensionMatcher::new(&config.extensions)
        .map_err(|err| WallcycleError::ConfigError(format!("invalid extension list: {err}")))?;

    let count = build_index(&config.directories, &matcher, index_path)?;
    tracing::info!(count, index = %index_path.display(), "image index built");

    setter.apply_style()?;

    if config.interval_is_fallback() {
        tracing::warn!(
            fallback = DEFAULT_INTERVAL_SECS,
            "no positive rotation interval configured, using the default"
        );
    }

    Rotator::new(setter, index_path.to_path_buf(), config.effective_interval()).run(shutdown);
    Ok(())
}
