//! Remote store adapters
//!
//! - `LocalDirStore` - directory on this machine
//! - `SshStore` - directory on an ssh host
//! - `RemoteTarget` - parses a target string and opens the matching store

mod local;
mod ssh;
mod target;

pub use local::LocalDirStore;
pub use ssh::SshStore;
pub use target::RemoteTarget;
