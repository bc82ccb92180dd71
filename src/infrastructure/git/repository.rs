//! Git Repository
//!
//! Implements the repository ports on top of libgit2. An optional
//! `local_path` scopes every tree and diff to one subdirectory, with paths
//! reported relative to it.

use std::path::{Path, PathBuf};

use git2::{Branch, Delta, DiffFile, ErrorCode, FileMode, ObjectType, Repository, Tree};

use crate::domain::entities::Diff;
use crate::domain::ports::{DiffSource, HistoryInspector, RepoError, RepoResult};
use crate::domain::value_objects::{to_remote_path, Revision};

use super::tree::GitTree;

pub(super) fn backend(err: git2::Error) -> RepoError {
    RepoError::Backend(err.message().to_string())
}

/// Deployable side of a delta: present and not a submodule commit
fn deployable_path(file: &DiffFile<'_>) -> Option<String> {
    if file.mode() == FileMode::Commit {
        return None;
    }
    file.path().map(to_remote_path)
}

/// A git repository on local disk
pub struct GitRepository {
    repo: Repository,
    local_path: Option<PathBuf>,
}

impl GitRepository {
    /// Open the repository containing `path`
    pub fn discover(path: &Path) -> RepoResult<Self> {
        let repo = Repository::discover(path).map_err(backend)?;
        Ok(Self {
            repo,
            local_path: None,
        })
    }

    /// Deploy only the contents of `local_path` (relative to the repo root)
    pub fn with_local_path(mut self, local_path: Option<PathBuf>) -> Self {
        self.local_path = local_path.filter(|p| !p.as_os_str().is_empty());
        self
    }

    /// Working directory, `None` for bare repositories
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Resolve a reference (branch, tag, `HEAD~2`, short id) to a full commit id
    pub fn resolve(&self, reference: &str) -> RepoResult<Revision> {
        let commit = self
            .repo
            .revparse_single(reference)
            .and_then(|object| object.peel_to_commit())
            .map_err(|_| RepoError::UnknownRevision(reference.to_string()))?;
        Ok(Revision::new(commit.id().to_string()))
    }

    /// Snapshot of the (scoped) tree at `revision`
    pub fn tree(&self, revision: &Revision) -> RepoResult<GitTree<'_>> {
        match self.scoped_tree(revision)? {
            Some(tree) => Ok(GitTree::new(&self.repo, tree, revision.clone())),
            None => Err(RepoError::NotFound {
                path: self
                    .local_path
                    .as_deref()
                    .map(to_remote_path)
                    .unwrap_or_default(),
                revision: revision.to_string(),
            }),
        }
    }

    /// Root tree of `revision`, narrowed to `local_path` when set.
    ///
    /// `Ok(None)` when `local_path` does not exist at that revision.
    fn scoped_tree(&self, revision: &Revision) -> RepoResult<Option<Tree<'_>>> {
        let root = self
            .repo
            .revparse_single(revision.as_str())
            .and_then(|object| object.peel_to_tree())
            .map_err(|_| RepoError::UnknownRevision(revision.to_string()))?;

        let Some(local_path) = &self.local_path else {
            return Ok(Some(root));
        };

        match root.get_path(local_path) {
            Ok(entry) if entry.kind() == Some(ObjectType::Tree) => {
                let object = entry.to_object(&self.repo).map_err(backend)?;
                object.peel_to_tree().map(Some).map_err(backend)
            }
            Ok(_) => Ok(None),
            Err(err) if err.code() == ErrorCode::NotFound => Ok(None),
            Err(err) => Err(backend(err)),
        }
    }
}

impl DiffSource for GitRepository {
    fn diff(&self, from: &Revision, to: &Revision) -> RepoResult<Diff> {
        let old = self.scoped_tree(from)?;
        let new = self.scoped_tree(to)?;
        let diff = self
            .repo
            .diff_tree_to_tree(old.as_ref(), new.as_ref(), None)
            .map_err(backend)?;

        let mut changed = Vec::new();
        let mut deleted = Vec::new();
        for delta in diff.deltas() {
            // Submodules are never uploaded, so they are never deleted either
            let old_path = deployable_path(&delta.old_file());
            let new_path = deployable_path(&delta.new_file());
            match delta.status() {
                Delta::Added | Delta::Modified | Delta::Copied => changed.extend(new_path),
                Delta::Typechange => match new_path {
                    Some(path) => changed.push(path),
                    // A file replaced by a submodule leaves the deployable set
                    None => deleted.extend(old_path),
                },
                Delta::Deleted => deleted.extend(old_path),
                Delta::Renamed => {
                    deleted.extend(old_path);
                    changed.extend(new_path);
                }
                _ => {}
            }
        }

        Ok(Diff::new(from.clone(), to.clone(), changed, deleted))
    }
}

impl HistoryInspector for GitRepository {
    /// Commits on the current branch that its upstream does not have
    fn outstanding_commits(&self) -> RepoResult<usize> {
        let head = self.repo.head().map_err(backend)?;
        if !head.is_branch() {
            return Err(RepoError::NoUpstream("detached HEAD".to_string()));
        }
        let name = head.shorthand().unwrap_or("HEAD").to_string();
        let branch = Branch::wrap(head);
        let upstream = branch
            .upstream()
            .map_err(|_| RepoError::NoUpstream(name.clone()))?;

        let local = branch
            .get()
            .target()
            .ok_or_else(|| RepoError::NoUpstream(name.clone()))?;
        let remote = upstream
            .get()
            .target()
            .ok_or_else(|| RepoError::NoUpstream(name.clone()))?;

        let (ahead, _behind) = self
            .repo
            .graph_ahead_behind(local, remote)
            .map_err(backend)?;
        Ok(ahead)
    }
}
