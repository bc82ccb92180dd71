//! Deploy Options
//!
//! Immutable configuration resolved once per run.

use std::path::PathBuf;

use crate::domain::services::DEFAULT_MARKER_PATH;
use crate::domain::value_objects::{AdditionalFile, ExcludeFilter};

/// Default target revision reference
pub const DEFAULT_REVISION: &str = "HEAD";

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Path prefixes skipped by tree-driven writes and deletes
    pub exclude: ExcludeFilter,
    /// Untracked local files uploaded on every run
    pub additional: Vec<AdditionalFile>,
    /// Reference the caller resolved into the deployed tree.
    ///
    /// Informational only: the engine always deploys and records
    /// `tree.revision()`, never this string.
    pub revision: String,
    /// Remote path of the revision marker
    pub revision_marker_path: String,
    /// Directory `additional` paths are relative to
    pub local_root: PathBuf,
    /// Dry run (reads happen, mutations don't)
    pub dry_run: bool,
    /// Ignore the remote marker and upload the whole tree
    pub force_full: bool,
}

impl DeployOptions {
    pub fn new(local_root: impl Into<PathBuf>) -> Self {
        Self {
            exclude: ExcludeFilter::default(),
            additional: Vec::new(),
            revision: DEFAULT_REVISION.to_string(),
            revision_marker_path: DEFAULT_MARKER_PATH.to_string(),
            local_root: local_root.into(),
            dry_run: false,
            force_full: false,
        }
    }

    pub fn with_exclude<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = ExcludeFilter::new(prefixes);
        self
    }

    pub fn with_additional(mut self, additional: Vec<AdditionalFile>) -> Self {
        self.additional = additional;
        self
    }

    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = revision.into();
        self
    }

    pub fn with_revision_marker_path(mut self, path: impl Into<String>) -> Self {
        self.revision_marker_path = path.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_force_full(mut self, force_full: bool) -> Self {
        self.force_full = force_full;
        self
    }
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self::new(".")
    }
}
