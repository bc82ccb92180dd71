//! Revship - deploy a git revision to a remote file store
//!
//! Revship keeps a remote directory (over ssh, or on a local path) in step
//! with a revision of a git repository. The remote records the revision it
//! holds in a small marker file; the next deploy uploads only what changed
//! since then, or everything when no marker is found.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{
    DeployOptions, DeployResult, DeployUseCase, InitUseCase, StatusReport, StatusUseCase,
};
pub use config::Config;
pub use domain::ports::{DeployEvent, DeployEventSink, RemoteStore, RevisionTree};
pub use domain::value_objects::{AdditionalFile, ExcludeFilter, Revision};
pub use error::{RevshipError, RevshipResult};
pub use infrastructure::{GitRepository, LocalDirStore, RemoteTarget, SshStore};
