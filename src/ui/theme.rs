//! Colors and glyphs for deploy output
//!
//! Each glyph carries an ASCII form for terminals without unicode; CI logs
//! and the snapshot tests only ever see the ASCII side.

use crossterm::style::Color;

/// One status marker in both renderings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub unicode: &'static str,
    pub ascii: &'static str,
}

impl Glyph {
    pub const fn pick(&self, unicode: bool) -> &'static str {
        if unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

pub mod colors {
    use super::Color;

    /// Uploaded files, finished runs, up-to-date remotes
    pub const SUCCESS: Color = Color::Green;
    /// Failed runs, remote revisions the repository does not know
    pub const ERROR: Color = Color::Red;
    /// Deletions and config warnings
    pub const WARNING: Color = Color::Yellow;
    /// Run headers: revision, destination, selected plan
    pub const INFO: Color = Color::Cyan;
    /// Skipped paths, cleanup attempts, unchanged markers
    pub const DIM: Color = Color::DarkGrey;
}

pub mod glyphs {
    use super::Glyph;

    pub const SUCCESS: Glyph = Glyph {
        unicode: "✓",
        ascii: "[OK]",
    };
    pub const ERROR: Glyph = Glyph {
        unicode: "✗",
        ascii: "[FAIL]",
    };
    pub const WARNING: Glyph = Glyph {
        unicode: "⚠",
        ascii: "[WARN]",
    };
    /// Skipped by an exclusion, or a dry-run note
    pub const PENDING: Glyph = Glyph {
        unicode: "○",
        ascii: "[ ]",
    };
    /// Marker left alone, or the revision an init replaced
    pub const ARROW: Glyph = Glyph {
        unicode: "↳",
        ascii: "[>]",
    };
    pub const UPLOAD: Glyph = Glyph {
        unicode: "↑",
        ascii: "[+]",
    };
    pub const DELETE: Glyph = Glyph {
        unicode: "🗑",
        ascii: "[DEL]",
    };

    // Run headers
    pub const DEPLOY: Glyph = Glyph {
        unicode: "📦",
        ascii: "[DEPLOY]",
    };
    /// Full upload, or a status destination line
    pub const REMOTE: Glyph = Glyph {
        unicode: "📡",
        ascii: "[REMOTE]",
    };
    /// Incremental plan, or pending changes in status
    pub const DIFF: Glyph = Glyph {
        unicode: "Δ",
        ascii: "[DIFF]",
    };
}
