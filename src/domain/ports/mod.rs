//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deploy_events;
pub mod remote_store;
pub mod revision_tree;

pub use deploy_events::{DeployEvent, DeployEventSink, FileOrigin, NoopEventSink};
pub use remote_store::{DryRunStore, RemoteStore, StoreError, StoreResult, SuppressedOp};
pub use revision_tree::{DiffSource, HistoryInspector, RepoError, RepoResult, RevisionTree};
