//! Wallcycle - desktop wallpaper rotation from an on-disk image index.
//!
//! This binary serves as both the rotation daemon and the CLI:
//! - When called with no arguments: runs the rotation daemon with the default
//!   configuration search paths
//! - When called with subcommands (e.g., `wallcycle scan`): runs CLI commands

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Run as the rotation daemon when invoked with no arguments; everything
    // else goes through the CLI, including the explicit `run` subcommand.
    let result = if args.len() == 1 { wallcycle_lib::run(None) } else { wallcycle_lib::cli::run() };

    if let Err(err) = result {
        eprintln!("wallcycle: {err}");
        std::process::exit(1);
    }
}
