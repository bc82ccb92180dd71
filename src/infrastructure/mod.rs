//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `git/` - Repository ports on top of libgit2
//! - `stores/` - Remote stores (local directory, ssh) and target parsing
//! - `events/` - Deploy event sinks (console, JSON)

pub mod events;
pub mod git;
pub mod stores;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use git::{GitRepository, GitTree};
pub use stores::{LocalDirStore, RemoteTarget, SshStore};
