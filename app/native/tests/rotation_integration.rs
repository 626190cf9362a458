//! End-to-end tests for index building, random selection, and rotation.
//!
//! These tests exercise the full pipeline against real temporary directories,
//! with a recording fake standing in for the OS wallpaper subsystem.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

use wallcycle_lib::desktop::{SetterError, WallpaperSetter};
use wallcycle_lib::index::{build_index, default_index_path, pick_entry};
use wallcycle_lib::matcher::ExtensionMatcher;
use wallcycle_lib::rotation::{Rotator, Shutdown};

/// Records every wallpaper it is asked to set; optionally fails each call.
#[derive(Default)]
struct RecordingSetter {
    calls: Mutex<Vec<PathBuf>>,
    fail_set: bool,
}

impl WallpaperSetter for RecordingSetter {
    fn apply_style(&self) -> Result<(), SetterError> { Ok(()) }

    fn set_wallpaper(&self, path: &Path) -> Result<(), SetterError> {
        self.calls.lock().unwrap().push(path.to_path_buf());
        if self.fail_set {
            Err(SetterError::SetFailed("forced failure".to_string()))
        } else {
            Ok(())
        }
    }
}

fn matcher(extensions: &[&str]) -> ExtensionMatcher {
    let extensions: Vec<String> = extensions.iter().map(ToString::to_string).collect();
    ExtensionMatcher::new(&extensions).unwrap()
}

/// Directories `[A, B]`, extensions `[jpg, png]`: `A/photo.JPG` and
/// `B/pic.png` are indexed, `A/note.txt` is not.
#[test]
fn index_contains_exactly_the_matching_paths() {
    let root = TempDir::new().unwrap();
    let dir_a = root.path().join("A");
    let dir_b = root.path().join("B");
    fs::create_dir_all(&dir_a).unwrap();
    fs::create_dir_all(&dir_b).unwrap();
    fs::write(dir_a.join("photo.JPG"), b"x").unwrap();
    fs::write(dir_a.join("note.txt"), b"x").unwrap();
    fs::write(dir_b.join("pic.png"), b"x").unwrap();

    let index_path = root.path().join("index.txt");
    let directories = vec![dir_a.display().to_string(), dir_b.display().to_string()];
    let count = build_index(&directories, &matcher(&["jpg", "png"]), &index_path).unwrap();

    assert_eq!(count, 2);

    let entries: HashSet<String> =
        fs::read_to_string(&index_path).unwrap().lines().map(ToString::to_string).collect();
    let expected: HashSet<String> = [
        dir_a.join("photo.JPG").display().to_string(),
        dir_b.join("pic.png").display().to_string(),
    ]
    .into_iter()
    .collect();

    assert_eq!(entries, expected);
}

#[test]
fn empty_extension_list_builds_an_empty_index() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("photo.jpg"), b"x").unwrap();
    fs::write(root.path().join("pic.png"), b"x").unwrap();

    let index_path = root.path().join("index.txt");
    let directories = vec![root.path().display().to_string()];
    let count = build_index(&directories, &matcher(&[]), &index_path).unwrap();

    assert_eq!(count, 0);

    let mut rng = StdRng::seed_from_u64(1);
    assert!(pick_entry(&index_path, &mut rng).unwrap().is_none());
}

#[test]
fn rebuilding_an_unchanged_tree_yields_the_same_entry_set() {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("sub")).unwrap();
    fs::write(root.path().join("a.jpg"), b"x").unwrap();
    fs::write(root.path().join("sub/b.jpg"), b"x").unwrap();

    let index_path = root.path().join("index.txt");
    let directories = vec![root.path().display().to_string()];

    build_index(&directories, &matcher(&["jpg"]), &index_path).unwrap();
    let first: HashSet<String> =
        fs::read_to_string(&index_path).unwrap().lines().map(ToString::to_string).collect();

    build_index(&directories, &matcher(&["jpg"]), &index_path).unwrap();
    let second: HashSet<String> =
        fs::read_to_string(&index_path).unwrap().lines().map(ToString::to_string).collect();

    assert_eq!(first, second);
}

#[test]
fn pick_always_returns_an_indexed_entry() {
    let root = TempDir::new().unwrap();
    for name in ["one.jpg", "two.jpg", "three.jpg"] {
        fs::write(root.path().join(name), b"x").unwrap();
    }

    let index_path = root.path().join("index.txt");
    let directories = vec![root.path().display().to_string()];
    build_index(&directories, &matcher(&["jpg"]), &index_path).unwrap();

    let entries: HashSet<String> =
        fs::read_to_string(&index_path).unwrap().lines().map(ToString::to_string).collect();

    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let picked = pick_entry(&index_path, &mut rng).unwrap().unwrap();
        assert!(entries.contains(&picked));
    }
}

#[test]
fn rotation_loop_applies_wallpapers_and_survives_failures() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("photo.jpg"), b"x").unwrap();

    let index_path = root.path().join("index.txt");
    let directories = vec![root.path().display().to_string()];
    build_index(&directories, &matcher(&["jpg"]), &index_path).unwrap();

    // Every set_wallpaper call fails; the loop must keep ticking anyway
    let setter = Arc::new(RecordingSetter { fail_set: true, ..Default::default() });
    let rotator = Rotator::new(Arc::clone(&setter), index_path, Duration::from_millis(5));

    let shutdown = Arc::new(Shutdown::new());
    let stopper = Arc::clone(&shutdown);
    let handle = thread::spawn(move || rotator.run(&stopper));

    thread::sleep(Duration::from_millis(80));
    shutdown.trigger();
    handle.join().unwrap();

    let calls = setter.calls.lock().unwrap();
    assert!(calls.len() >= 2, "expected repeated ticks, got {}", calls.len());
    assert!(calls.iter().all(|p| p.to_string_lossy().ends_with("photo.jpg")));
}

#[test]
fn shutdown_interrupts_the_interval_sleep() {
    let root = TempDir::new().unwrap();
    let index_path = root.path().join("index.txt");
    fs::write(&index_path, "").unwrap();

    // An hour-long interval: only an interrupted sleep lets this finish
    let setter = Arc::new(RecordingSetter::default());
    let rotator = Rotator::new(setter, index_path, Duration::from_secs(3600));

    let shutdown = Arc::new(Shutdown::new());
    let stopper = Arc::clone(&shutdown);
    let started = Instant::now();
    let handle = thread::spawn(move || rotator.run(&stopper));

    thread::sleep(Duration::from_millis(50));
    shutdown.trigger();
    handle.join().unwrap();

    assert!(started.elapsed() < Duration::from_secs(60));
}

#[test]
fn default_index_path_is_stable_within_a_process() {
    assert_eq!(default_index_path(), default_index_path());
}
