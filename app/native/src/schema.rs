//! JSON Schema generation for the configuration file.
//!
//! The schema can be written to a file and wired into editors that support
//! JSON Schema validation for JSONC files.

use schemars::schema_for;

use crate::config::WallcycleConfig;

/// Returns the configuration JSON Schema as a pretty-printed string.
#[must_use]
pub fn print_schema() -> String {
    let schema = schema_for!(WallcycleConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_else(|_| "{}".to_string())
}
