//! Exclusion Filter Value Object
//!
//! A path is excluded iff it starts with any configured prefix.
//! Applied to tree-driven writes and deletes only; additional files and
//! CMS config uploads never consult it.

use std::collections::BTreeSet;

/// Order-independent prefix filter over relative paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludeFilter {
    prefixes: BTreeSet<String>,
}

impl ExcludeFilter {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix))
    }

    /// The prefix that excludes `path`, if any (shortest first)
    pub fn matching_prefix(&self, path: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .find(|prefix| path.starts_with(prefix.as_str()))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }
}
