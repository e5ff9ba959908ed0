//! Search Query Value Object
//!
//! Normalized text query used by the search filter. Matching is a
//! case-insensitive substring test against the trimmed query.

use std::fmt;

/// Normalized search query
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.trim().to_lowercase();
        Self { raw, needle }
    }

    /// Text as typed by the user
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Trimmed, lowercased form used for matching
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Returns true if the query filters nothing (empty after trim)
    pub fn is_blank(&self) -> bool {
        self.needle.is_empty()
    }

    /// Case-insensitive substring test. A blank query matches everything.
    pub fn matches(&self, text: &str) -> bool {
        self.is_blank() || text.to_lowercase().contains(&self.needle)
    }

    /// Match a category by name, and by description when `include_description` is set
    pub fn matches_entry(
        &self,
        name: &str,
        description: Option<&str>,
        include_description: bool,
    ) -> bool {
        self.matches(name) || (include_description && description.is_some_and(|d| self.matches(d)))
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.needle)
    }
}

impl From<&str> for SearchQuery {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for SearchQuery {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
