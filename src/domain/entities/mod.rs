//! Domain Entities
//!
//! - `Diff` - changed/deleted paths between two revisions

mod diff;

pub use diff::Diff;
