//! Deploy Event Port
//!
//! The engine reports everything it does through an injected sink instead
//! of a process-wide logger. Console output, NDJSON streams and test
//! recorders are all sinks.

use crate::domain::services::Strategy;
use crate::domain::value_objects::Revision;

/// Where an uploaded file came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOrigin {
    /// Tracked file at the target revision
    Tree,
    /// Production CMS config renamed on upload
    CmsConfig,
    /// Untracked local file from the `additional` list
    Additional,
}

impl FileOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileOrigin::Tree => "tree",
            FileOrigin::CmsConfig => "cms_config",
            FileOrigin::Additional => "additional",
        }
    }
}

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Deploy started
    Started {
        target: Revision,
        destination: String,
        dry_run: bool,
    },

    /// Strategy chosen from the remote marker
    PlanSelected {
        strategy: Strategy,
        remote: Option<Revision>,
    },

    /// Remote already at the target revision with nothing to change
    UpToDate { revision: Revision },

    /// Best-effort removal of a host junk file was attempted
    CleanupAttempted { path: String },

    /// File uploaded
    FileWritten {
        path: String,
        origin: FileOrigin,
        /// Local or tree path when it differs from `path`
        source: Option<String>,
    },

    /// File removed from the remote
    FileDeleted { path: String },

    /// File left alone
    FileSkipped { path: String, reason: String },

    /// Revision marker written
    MarkerWritten { path: String, revision: Revision },

    /// Revision marker left as it was
    MarkerUnchanged { path: String, revision: Revision },

    /// Deploy completed
    Completed {
        written_count: usize,
        deleted_count: usize,
        skipped_count: usize,
        marker_written: bool,
        dry_run: bool,
    },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: human-readable lines
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Check if this sink wants per-file events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
