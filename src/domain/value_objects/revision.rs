//! Revision Value Object
//!
//! An opaque identifier for one immutable snapshot of the source tree.
//! Produced by the repository collaborators and by decoding the remote marker.

use std::fmt;

/// Revision identifier (a full commit id for git repositories)
///
/// Two revisions are equal iff their identifiers are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Revision(String);

impl Revision {
    /// Number of characters shown by [`Revision::short`]
    pub const SHORT_LEN: usize = 8;

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Decode a revision marker as stored on the remote.
    ///
    /// Trailing whitespace is stripped. An empty marker yields `None`.
    pub fn from_marker(bytes: &[u8]) -> Option<Self> {
        let text = String::from_utf8_lossy(bytes);
        let trimmed = text.trim_end();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Bytes written to the remote marker file
    pub fn to_marker(&self) -> Vec<u8> {
        self.0.as_bytes().to_vec()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form for display
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(Self::SHORT_LEN) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Revision {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Revision {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Revision {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
