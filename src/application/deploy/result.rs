//! Deploy Result
//!
//! Result types for deploy operations.

use crate::domain::services::Strategy;
use crate::domain::value_objects::Revision;

/// Result of a deploy operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployResult {
    /// Plan that ran
    pub strategy: Strategy,
    /// Revision the remote held before the run
    pub remote_revision: Option<Revision>,
    /// Revision deployed
    pub target_revision: Revision,
    /// Tree files uploaded
    pub written: Vec<String>,
    /// Files removed from the remote
    pub deleted: Vec<String>,
    /// Files left alone because of exclusions
    pub skipped: Vec<String>,
    /// CMS config and additional files uploaded (remote paths)
    pub extra: Vec<String>,
    /// Whether the revision marker was (or, in a dry run, would be) rewritten
    pub marker_written: bool,
    pub dry_run: bool,
}

impl DeployResult {
    pub fn new(strategy: Strategy, target_revision: Revision) -> Self {
        Self {
            strategy,
            remote_revision: None,
            target_revision,
            written: Vec::new(),
            deleted: Vec::new(),
            skipped: Vec::new(),
            extra: Vec::new(),
            marker_written: false,
            dry_run: false,
        }
    }

    /// Tree-driven part of the run changed something
    pub fn has_changes(&self) -> bool {
        !self.written.is_empty() || !self.deleted.is_empty()
    }

    /// Every upload, tree and extra
    pub fn upload_count(&self) -> usize {
        self.written.len() + self.extra.len()
    }
}
