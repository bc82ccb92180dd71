//! Init Use Case
//!
//! Records a revision on the remote without uploading anything. Used to
//! adopt a target that already holds the right files.

use std::sync::Arc;

use crate::domain::ports::{DeployEvent, DeployEventSink, DryRunStore, NoopEventSink, RemoteStore};
use crate::domain::services::{read_remote_revision, write_remote_revision};
use crate::domain::value_objects::Revision;
use crate::error::RevshipResult;

/// Result of recording a revision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitResult {
    /// Revision the marker held before
    pub previous: Option<Revision>,
    pub revision: Revision,
    pub dry_run: bool,
}

/// Init use case
pub struct InitUseCase {
    events: Arc<dyn DeployEventSink>,
}

impl InitUseCase {
    pub fn new() -> Self {
        Self {
            events: Arc::new(NoopEventSink),
        }
    }

    pub fn with_events(mut self, events: Arc<dyn DeployEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn execute(
        &self,
        revision: &Revision,
        store: &dyn RemoteStore,
        marker_path: &str,
        dry_run: bool,
    ) -> RevshipResult<InitResult> {
        let previous = read_remote_revision(store, marker_path)?;

        let dry_run_store;
        let store: &dyn RemoteStore = if dry_run {
            dry_run_store = DryRunStore::new(store);
            &dry_run_store
        } else {
            store
        };

        write_remote_revision(store, marker_path, revision)?;
        self.events.on_event(DeployEvent::MarkerWritten {
            path: marker_path.to_string(),
            revision: revision.clone(),
        });

        Ok(InitResult {
            previous,
            revision: revision.clone(),
            dry_run,
        })
    }
}

impl Default for InitUseCase {
    fn default() -> Self {
        Self::new()
    }
}
