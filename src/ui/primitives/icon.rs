use crossterm::style::{Color, Stylize};

use crate::ui::theme::{colors, glyphs, Glyph};

/// Status markers printed in front of deploy, status and init lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Pending,
    Arrow,
    Upload,
    Deploy,
    Remote,
    Diff,
    Trash,
}

impl Icon {
    fn glyph(&self) -> Glyph {
        match self {
            Icon::Success => glyphs::SUCCESS,
            Icon::Error => glyphs::ERROR,
            Icon::Warning => glyphs::WARNING,
            Icon::Pending => glyphs::PENDING,
            Icon::Arrow => glyphs::ARROW,
            Icon::Upload => glyphs::UPLOAD,
            Icon::Deploy => glyphs::DEPLOY,
            Icon::Remote => glyphs::REMOTE,
            Icon::Diff => glyphs::DIFF,
            Icon::Trash => glyphs::DELETE,
        }
    }

    /// Writes read as success, deletions as warnings, headers as info
    fn color(&self) -> Color {
        match self {
            Icon::Success | Icon::Upload => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning | Icon::Trash => colors::WARNING,
            Icon::Pending | Icon::Arrow => colors::DIM,
            Icon::Deploy | Icon::Remote | Icon::Diff => colors::INFO,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        self.glyph().pick(supports_unicode)
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if supports_color {
            format!("{}", s.with(self.color()))
        } else {
            s.to_string()
        }
    }
}
