//! Deploy Use Case
//!
//! Orchestrates one deployment run:
//! 1. Read the remote revision marker and select a plan
//! 2. Wrap the store for dry runs
//! 3. Execute the plan
//! 4. Upload production CMS config files
//! 5. Upload additional (untracked) files
//! 6. Record the new revision marker
//!
//! The marker write is always last, so any fatal error leaves the remote
//! marker at its pre-run value.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ignore::WalkBuilder;

use crate::domain::ports::{
    DeployEvent, DeployEventSink, DiffSource, DryRunStore, FileOrigin, HistoryInspector,
    NoopEventSink, RemoteStore, RepoError, RevisionTree,
};
use crate::domain::services::{
    read_remote_revision, write_remote_revision, DeploymentPlan, FullPlan, IncrementalPlan,
    PlanContext,
};
use crate::domain::value_objects::AdditionalFile;
use crate::error::{RevshipError, RevshipResult};

use super::options::DeployOptions;
use super::result::DeployResult;

/// Production CMS config files and the name they are uploaded under
pub const CMS_CONFIG_FILES: &[(&str, &str)] = &[
    ("wp-config.prod.php", "wp-config.php"),
    ("configuration.prod.php", "configuration.php"),
];

/// Deploy use case - the reconciliation engine
///
/// Parameterized by its repository ports so tests can swap in fakes.
pub struct DeployUseCase<D, H>
where
    D: DiffSource,
    H: HistoryInspector,
{
    diff_source: D,
    history: H,
    events: Arc<dyn DeployEventSink>,
}

impl<D, H> DeployUseCase<D, H>
where
    D: DiffSource,
    H: HistoryInspector,
{
    pub fn new(diff_source: D, history: H) -> Self {
        Self {
            diff_source,
            history,
            events: Arc::new(NoopEventSink),
        }
    }

    /// Report progress to `events` instead of discarding it
    pub fn with_events(mut self, events: Arc<dyn DeployEventSink>) -> Self {
        self.events = events;
        self
    }

    /// Pre-flight fast-forward check
    ///
    /// Fails when local history holds commits not yet incorporated
    /// upstream. If the inspection itself cannot run (no upstream, detached
    /// HEAD, ...) the check passes: validation is optimistic.
    pub fn validate(&self) -> RevshipResult<()> {
        match self.history.outstanding_commits() {
            Ok(0) => Ok(()),
            Ok(outstanding) => Err(RevshipError::FastForward { outstanding }),
            Err(_) => Ok(()),
        }
    }

    /// Choose between incremental and full deployment
    pub fn select_plan(
        &self,
        tree: &dyn RevisionTree,
        store: &dyn RemoteStore,
        options: &DeployOptions,
    ) -> RevshipResult<DeploymentPlan> {
        let target = tree.revision();
        let remote = read_remote_revision(store, &options.revision_marker_path)?;
        if options.force_full {
            return Ok(DeploymentPlan::Full(
                FullPlan::new(target.clone()).replacing(remote),
            ));
        }

        match remote {
            Some(remote) => {
                let diff = self.diff_source.diff(&remote, target)?;
                Ok(DeploymentPlan::Incremental(IncrementalPlan::new(diff)))
            }
            None => Ok(DeploymentPlan::Full(FullPlan::new(target.clone()))),
        }
    }

    /// Execute the deploy use case
    pub fn execute(
        &self,
        tree: &dyn RevisionTree,
        store: &dyn RemoteStore,
        options: &DeployOptions,
    ) -> RevshipResult<DeployResult> {
        let target = tree.revision().clone();
        self.events.on_event(DeployEvent::Started {
            target: target.clone(),
            destination: store.describe(),
            dry_run: options.dry_run,
        });

        // Step 1: Plan selection reads the real store
        let plan = self.select_plan(tree, store, options)?;
        self.events.on_event(DeployEvent::PlanSelected {
            strategy: plan.strategy(),
            remote: plan.remote_revision().cloned(),
        });

        // Step 2: Dry runs swap in a store that drops mutations
        let dry_run_store;
        let store: &dyn RemoteStore = if options.dry_run {
            dry_run_store = DryRunStore::new(store);
            &dry_run_store
        } else {
            store
        };

        // Step 3: Execute the plan
        let ctx = PlanContext {
            tree,
            store,
            exclude: &options.exclude,
            events: self.events.as_ref(),
        };
        let outcome = plan.execute(&ctx)?;

        let mut result = DeployResult::new(plan.strategy(), target.clone());
        result.remote_revision = plan.remote_revision().cloned();
        result.dry_run = options.dry_run;
        result.written = outcome.written;
        result.deleted = outcome.deleted;
        result.skipped = outcome.skipped;

        // Step 4 + 5: Out-of-band uploads, regardless of the plan outcome
        result.extra.extend(self.deploy_cms_config(tree, store)?);
        result
            .extra
            .extend(self.deploy_additional(store, &options.local_root, &options.additional)?);

        // Step 6: Marker
        if outcome.write_marker {
            write_remote_revision(store, &options.revision_marker_path, &target)?;
            self.events.on_event(DeployEvent::MarkerWritten {
                path: options.revision_marker_path.clone(),
                revision: target.clone(),
            });
            result.marker_written = true;
        } else {
            self.events.on_event(DeployEvent::MarkerUnchanged {
                path: options.revision_marker_path.clone(),
                revision: target.clone(),
            });
        }

        self.events.on_event(DeployEvent::Completed {
            written_count: result.upload_count(),
            deleted_count: result.deleted.len(),
            skipped_count: result.skipped.len(),
            marker_written: result.marker_written,
            dry_run: result.dry_run,
        });

        Ok(result)
    }

    fn detail(&self, event: DeployEvent) {
        if self.events.wants_detailed_events() {
            self.events.on_event(event);
        }
    }

    /// Upload `*.prod.php` CMS configs under their live names
    fn deploy_cms_config(
        &self,
        tree: &dyn RevisionTree,
        store: &dyn RemoteStore,
    ) -> RevshipResult<Vec<String>> {
        let mut uploaded = Vec::new();
        for (source, destination) in CMS_CONFIG_FILES {
            let content = match tree.show(source) {
                Ok(content) => content,
                Err(RepoError::NotFound { .. }) => continue,
                Err(err) => return Err(err.into()),
            };
            store.write(destination, &content)?;
            self.detail(DeployEvent::FileWritten {
                path: destination.to_string(),
                origin: FileOrigin::CmsConfig,
                source: Some(source.to_string()),
            });
            uploaded.push(destination.to_string());
        }
        Ok(uploaded)
    }

    /// Upload untracked local files verbatim
    fn deploy_additional(
        &self,
        store: &dyn RemoteStore,
        local_root: &Path,
        additional: &[AdditionalFile],
    ) -> RevshipResult<Vec<String>> {
        let mut uploaded = Vec::new();
        for file in additional {
            for (local, remote) in collect_additional(local_root, file)? {
                let content =
                    std::fs::read(&local).map_err(|source| RevshipError::AdditionalFile {
                        path: local.clone(),
                        source,
                    })?;
                store.write(&remote, &content)?;
                self.detail(DeployEvent::FileWritten {
                    path: remote.clone(),
                    origin: FileOrigin::Additional,
                    source: Some(local.display().to_string()),
                });
                uploaded.push(remote);
            }
        }
        Ok(uploaded)
    }
}

/// Expand one additional entry into `(local file, remote path)` pairs
///
/// Directories are walked recursively without gitignore filtering.
fn collect_additional(
    local_root: &Path,
    file: &AdditionalFile,
) -> RevshipResult<Vec<(PathBuf, String)>> {
    let local = local_root.join(&file.local);
    let metadata = std::fs::metadata(&local).map_err(|source| RevshipError::AdditionalFile {
        path: local.clone(),
        source,
    })?;

    if !metadata.is_dir() {
        return Ok(vec![(local, file.remote_path_for(&file.local))]);
    }

    let mut found = Vec::new();
    for entry in WalkBuilder::new(&local).standard_filters(false).build() {
        let entry = entry.map_err(|err| RevshipError::AdditionalFile {
            path: local.clone(),
            source: std::io::Error::other(err.to_string()),
        })?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let relative = entry.path().strip_prefix(&local).unwrap_or(entry.path());
        let remote = file.remote_path_for(&file.local.join(relative));
        found.push((entry.path().to_path_buf(), remote));
    }
    found.sort();
    Ok(found)
}
