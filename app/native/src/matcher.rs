//! File-extension matching for image paths.
//!
//! The configured extensions are compiled once into a single case-insensitive
//! suffix pattern, equivalent to `(?i)\.(ext1|ext2|...)$`, and applied to
//! every path visited during an index build.

use regex::Regex;

/// A compiled, case-insensitive file-extension predicate.
///
/// Extensions are supplied without leading dots. An empty extension list
/// produces a matcher that matches nothing: matching everything instead would
/// silently index entire directory trees, so the empty case is explicit.
#[derive(Debug, Clone)]
pub struct ExtensionMatcher {
    pattern: Option<Regex>,
}

impl ExtensionMatcher {
    /// Compiles a matcher from the configured extension list.
    ///
    /// Each extension is escaped before being joined into the alternation, so
    /// extensions containing pattern metacharacters are matched literally.
    ///
    /// # Errors
    ///
    /// Returns the underlying `regex` error if the combined pattern fails to
    /// compile. Callers treat this as a fatal startup error.
    pub fn new(extensions: &[String]) -> Result<Self, regex::Error> {
        if extensions.is_empty() {
            return Ok(Self { pattern: None });
        }

        let escaped: Vec<String> = extensions.iter().map(|ext| regex::escape(ext)).collect();
        let pattern = Regex::new(&format!(r"(?i)\.({})$", escaped.join("|")))?;

        Ok(Self { pattern: Some(pattern) })
    }

    /// Returns whether the path ends with one of the configured extensions.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.pattern.as_ref().is_some_and(|pattern| pattern.is_match(path))
    }
}
