//! Repository Ports
//!
//! Versioned source tree collaborators: a snapshot at one revision, the
//! path-level diff between two revisions, and history inspection for the
//! pre-flight fast-forward check.

use thiserror::Error;

use crate::domain::entities::Diff;
use crate::domain::value_objects::Revision;

/// Repository operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Path is absent at this revision
    #[error("{path} not found at revision {revision}")]
    NotFound { path: String, revision: String },

    /// Revision cannot be resolved
    #[error("unknown revision '{0}'")]
    UnknownRevision(String),

    /// Upstream tracking branch is not configured
    #[error("no upstream configured for {0}")]
    NoUpstream(String),

    /// Underlying version-control failure
    #[error("repository error: {0}")]
    Backend(String),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Snapshot of the source tree at one revision
pub trait RevisionTree {
    /// Revision this tree represents
    fn revision(&self) -> &Revision;

    /// Every file path in the tree, sorted
    fn files(&self) -> RepoResult<Vec<String>>;

    /// Content of `path`. Fails with [`RepoError::NotFound`] when absent.
    fn show(&self, path: &str) -> RepoResult<Vec<u8>>;

    fn contains(&self, path: &str) -> bool {
        self.show(path).is_ok()
    }
}

/// Computes path-level diffs between revisions
pub trait DiffSource {
    /// Both revisions must be resolvable.
    fn diff(&self, from: &Revision, to: &Revision) -> RepoResult<Diff>;
}

/// Inspects local history against its upstream
pub trait HistoryInspector {
    /// Number of local commits not yet incorporated upstream.
    ///
    /// `Err` means the inspection itself could not run.
    fn outstanding_commits(&self) -> RepoResult<usize>;
}

impl<T: DiffSource + ?Sized> DiffSource for &T {
    fn diff(&self, from: &Revision, to: &Revision) -> RepoResult<Diff> {
        (**self).diff(from, to)
    }
}

impl<T: HistoryInspector + ?Sized> HistoryInspector for &T {
    fn outstanding_commits(&self) -> RepoResult<usize> {
        (**self).outstanding_commits()
    }
}
