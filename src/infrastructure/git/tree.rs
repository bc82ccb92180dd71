//! Git Tree Snapshot

use std::path::Path;

use git2::{ErrorCode, ObjectType, Repository, Tree, TreeWalkMode, TreeWalkResult};

use crate::domain::ports::{RepoError, RepoResult, RevisionTree};
use crate::domain::value_objects::Revision;

use super::repository::backend;

/// Files of one commit, read straight from the object database
pub struct GitTree<'r> {
    repo: &'r Repository,
    tree: Tree<'r>,
    revision: Revision,
}

impl<'r> GitTree<'r> {
    pub(super) fn new(repo: &'r Repository, tree: Tree<'r>, revision: Revision) -> Self {
        Self {
            repo,
            tree,
            revision,
        }
    }

    fn not_found(&self, path: &str) -> RepoError {
        RepoError::NotFound {
            path: path.to_string(),
            revision: self.revision.to_string(),
        }
    }
}

impl RevisionTree for GitTree<'_> {
    fn revision(&self) -> &Revision {
        &self.revision
    }

    fn files(&self) -> RepoResult<Vec<String>> {
        let mut files = Vec::new();
        self.tree
            .walk(TreeWalkMode::PreOrder, |root, entry| {
                // Submodules show up as commits and are not deployable
                if entry.kind() == Some(ObjectType::Blob) {
                    if let Some(name) = entry.name() {
                        files.push(format!("{}{}", root, name));
                    }
                }
                TreeWalkResult::Ok
            })
            .map_err(backend)?;
        files.sort();
        Ok(files)
    }

    fn show(&self, path: &str) -> RepoResult<Vec<u8>> {
        let entry = match self.tree.get_path(Path::new(path)) {
            Ok(entry) => entry,
            Err(err) if err.code() == ErrorCode::NotFound => return Err(self.not_found(path)),
            Err(err) => return Err(backend(err)),
        };
        if entry.kind() != Some(ObjectType::Blob) {
            return Err(self.not_found(path));
        }
        let object = entry.to_object(self.repo).map_err(backend)?;
        let blob = object.peel_to_blob().map_err(backend)?;
        Ok(blob.content().to_vec())
    }

    fn contains(&self, path: &str) -> bool {
        self.tree
            .get_path(Path::new(path))
            .map(|entry| entry.kind() == Some(ObjectType::Blob))
            .unwrap_or(false)
    }
}
