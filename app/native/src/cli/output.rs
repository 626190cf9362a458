//! CLI output formatting helpers.

use colored::Colorize;

/// Prints a success line with a green check mark.
pub fn success(message: &str) { println!("{} {message}", "✓".green()); }

/// Prints a warning line to stderr with a yellow marker.
pub fn warning(message: &str) { eprintln!("{} {message}", "!".yellow().bold()); }

/// Prints a JSON value, pretty-printed.
pub fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(_) => println!("{{}}"),
    }
}
