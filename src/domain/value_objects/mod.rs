//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod additional_file;
mod exclude_filter;
mod revision;

pub use additional_file::{to_remote_path, AdditionalFile};
pub use exclude_filter::ExcludeFilter;
pub use revision::Revision;
