//! Terminal presentation primitives
//!
//! - `theme` - semantic colors and glyphs
//! - `primitives` - icons and colored text
//! - `terminal` - capability detection
//! - `context` - resolved color/unicode/verbosity for one run

pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;

pub use context::UiContext;
pub use terminal::{detect_capabilities, TerminalCapabilities};
