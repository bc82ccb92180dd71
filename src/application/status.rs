//! Status Use Case
//!
//! Compares the revision recorded on the remote with a local target
//! revision. Read-only.

use crate::domain::entities::Diff;
use crate::domain::ports::{DiffSource, RemoteStore, RepoError};
use crate::domain::services::read_remote_revision;
use crate::domain::value_objects::Revision;
use crate::error::RevshipResult;

/// Remote vs. local revision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Revision recorded on the remote, if any
    pub remote: Option<Revision>,
    /// Local revision a deploy would ship
    pub target: Revision,
    /// Pending changes when the remote revision is known locally
    pub pending: Option<Diff>,
}

impl StatusReport {
    pub fn is_up_to_date(&self) -> bool {
        self.remote.as_ref() == Some(&self.target)
    }

    /// Remote holds a revision this repository does not know
    pub fn remote_is_unknown(&self) -> bool {
        self.remote.is_some() && self.pending.is_none()
    }
}

/// Status use case
pub struct StatusUseCase<D: DiffSource> {
    diff_source: D,
}

impl<D: DiffSource> StatusUseCase<D> {
    pub fn new(diff_source: D) -> Self {
        Self { diff_source }
    }

    pub fn execute(
        &self,
        target: &Revision,
        store: &dyn RemoteStore,
        marker_path: &str,
    ) -> RevshipResult<StatusReport> {
        let remote = read_remote_revision(store, marker_path)?;
        let pending = match &remote {
            Some(remote) => match self.diff_source.diff(remote, target) {
                Ok(diff) => Some(diff),
                Err(RepoError::UnknownRevision(_)) => None,
                Err(err) => return Err(err.into()),
            },
            None => None,
        };

        Ok(StatusReport {
            remote,
            target: target.clone(),
            pending,
        })
    }
}
