//! Deployment Plans
//!
//! A plan is selected once per run and executed once. `Incremental` replays
//! the diff between the remote revision and the target; `Full` uploads the
//! whole tree because there is no prior remote state to compare against.

use crate::domain::entities::Diff;
use crate::domain::ports::{DeployEvent, DeployEventSink, FileOrigin, RemoteStore, RevisionTree};
use crate::domain::value_objects::{ExcludeFilter, Revision};
use crate::error::RevshipResult;

/// Files some hosting providers drop into a fresh document root
pub const HOST_JUNK_FILES: &[&str] = &[
    "default.html",
    "default.htm",
    "formmail.php",
    "cgi-bin/formmail.pl",
];

/// Which plan was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Incremental,
    Full,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Incremental => "incremental",
            Strategy::Full => "full",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a plan touches while executing
pub struct PlanContext<'a> {
    pub tree: &'a dyn RevisionTree,
    pub store: &'a dyn RemoteStore,
    pub exclude: &'a ExcludeFilter,
    pub events: &'a dyn DeployEventSink,
}

impl PlanContext<'_> {
    /// Per-file events go only to sinks that want them
    fn detail(&self, event: DeployEvent) {
        if self.events.wants_detailed_events() {
            self.events.on_event(event);
        }
    }

    /// Emit a skip event when `path` is excluded
    fn skip_if_excluded(&self, path: &str, outcome: &mut PlanOutcome) -> bool {
        match self.exclude.matching_prefix(path) {
            Some(prefix) => {
                self.detail(DeployEvent::FileSkipped {
                    path: path.to_string(),
                    reason: format!("excluded by '{}'", prefix),
                });
                outcome.skipped.push(path.to_string());
                true
            }
            None => false,
        }
    }

    fn upload(&self, path: &str, outcome: &mut PlanOutcome) -> RevshipResult<()> {
        let content = self.tree.show(path)?;
        self.store.write(path, &content)?;
        self.detail(DeployEvent::FileWritten {
            path: path.to_string(),
            origin: FileOrigin::Tree,
            source: None,
        });
        outcome.written.push(path.to_string());
        Ok(())
    }
}

/// What a plan did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanOutcome {
    pub written: Vec<String>,
    pub deleted: Vec<String>,
    pub skipped: Vec<String>,
    /// Whether the revision marker must be rewritten afterwards
    pub write_marker: bool,
}

/// Replays a diff against a remote that already holds `diff.from_revision()`
#[derive(Debug, Clone)]
pub struct IncrementalPlan {
    diff: Diff,
}

impl IncrementalPlan {
    pub fn new(diff: Diff) -> Self {
        Self { diff }
    }

    pub fn diff(&self) -> &Diff {
        &self.diff
    }

    pub fn remote_revision(&self) -> &Revision {
        self.diff.from_revision()
    }

    fn is_noop(&self) -> bool {
        self.diff.is_same_revision() && self.diff.is_empty()
    }

    pub fn execute(&self, ctx: &PlanContext<'_>) -> RevshipResult<PlanOutcome> {
        let mut outcome = PlanOutcome::default();

        if self.is_noop() {
            ctx.events.on_event(DeployEvent::UpToDate {
                revision: self.diff.to_revision().clone(),
            });
            return Ok(outcome);
        }

        self.clean_host_junk(ctx);

        for path in self.diff.changed() {
            if ctx.skip_if_excluded(path, &mut outcome) {
                continue;
            }
            ctx.upload(path, &mut outcome)?;
        }

        for path in self.diff.deleted() {
            if ctx.skip_if_excluded(path, &mut outcome) {
                continue;
            }
            ctx.store.delete(path)?;
            ctx.detail(DeployEvent::FileDeleted { path: path.clone() });
            outcome.deleted.push(path.clone());
        }

        outcome.write_marker = !self.diff.is_same_revision();
        Ok(outcome)
    }

    fn clean_host_junk(&self, ctx: &PlanContext<'_>) {
        for junk in HOST_JUNK_FILES {
            // Never remove a file the project itself tracks.
            if ctx.exclude.is_excluded(junk) || ctx.tree.contains(junk) {
                continue;
            }
            ctx.detail(DeployEvent::CleanupAttempted {
                path: junk.to_string(),
            });
            ctx.store.delete_best_effort(junk);
        }
    }
}

/// Uploads every file of the target tree
#[derive(Debug, Clone)]
pub struct FullPlan {
    revision: Revision,
    /// Marker found on the remote when a full upload was forced
    replaced: Option<Revision>,
}

impl FullPlan {
    pub fn new(revision: Revision) -> Self {
        Self {
            revision,
            replaced: None,
        }
    }

    /// Record the revision the remote held before this run; reporting only
    pub fn replacing(mut self, remote: Option<Revision>) -> Self {
        self.replaced = remote;
        self
    }

    pub fn revision(&self) -> &Revision {
        &self.revision
    }

    pub fn replaced(&self) -> Option<&Revision> {
        self.replaced.as_ref()
    }

    pub fn execute(&self, ctx: &PlanContext<'_>) -> RevshipResult<PlanOutcome> {
        let mut outcome = PlanOutcome::default();

        for path in ctx.tree.files()? {
            if ctx.skip_if_excluded(&path, &mut outcome) {
                continue;
            }
            ctx.upload(&path, &mut outcome)?;
        }

        outcome.write_marker = true;
        Ok(outcome)
    }
}

/// The strategy selected for one run
#[derive(Debug, Clone)]
pub enum DeploymentPlan {
    Incremental(IncrementalPlan),
    Full(FullPlan),
}

impl DeploymentPlan {
    pub fn strategy(&self) -> Strategy {
        match self {
            DeploymentPlan::Incremental(_) => Strategy::Incremental,
            DeploymentPlan::Full(_) => Strategy::Full,
        }
    }

    /// Revision currently recorded on the remote, if known
    pub fn remote_revision(&self) -> Option<&Revision> {
        match self {
            DeploymentPlan::Incremental(plan) => Some(plan.remote_revision()),
            DeploymentPlan::Full(plan) => plan.replaced(),
        }
    }

    pub fn execute(&self, ctx: &PlanContext<'_>) -> RevshipResult<PlanOutcome> {
        match self {
            DeploymentPlan::Incremental(plan) => plan.execute(ctx),
            DeploymentPlan::Full(plan) => plan.execute(ctx),
        }
    }
}
