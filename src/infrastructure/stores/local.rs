//! Local Directory Store
//!
//! A remote store backed by a directory on this machine: a mounted share,
//! a web root on the same host, or a scratch directory in tests.

use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::ports::{RemoteStore, StoreError, StoreResult};

/// Directory-backed remote store
///
/// Writes are atomic (temp file in the same directory, then rename).
/// Deleting a file prunes directories it leaves empty, up to the root.
#[derive(Debug, Clone)]
pub struct LocalDirStore {
    root: PathBuf,
}

impl LocalDirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> StoreResult<PathBuf> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if path.is_empty() || escapes {
            return Err(StoreError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(relative))
    }

    fn prune_empty_parents(&self, file: &Path) {
        let mut dir = file.parent();
        while let Some(current) = dir {
            if current == self.root || !current.starts_with(&self.root) {
                break;
            }
            // Fails on non-empty directories, which ends the walk
            if fs::remove_dir(current).is_err() {
                break;
            }
            dir = current.parent();
        }
    }
}

impl RemoteStore for LocalDirStore {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn read(&self, path: &str) -> StoreResult<Vec<u8>> {
        let full = self.resolve(path)?;
        if full.is_dir() {
            return Err(StoreError::Missing(path.to_string()));
        }
        fs::read(&full).map_err(|e| StoreError::from_io(path, e))
    }

    fn write(&self, path: &str, content: &[u8]) -> StoreResult<()> {
        let full = self.resolve(path)?;
        let parent = full.parent().unwrap_or(&self.root);
        let io_err = |source: std::io::Error| StoreError::Io {
            path: path.to_string(),
            source,
        };

        fs::create_dir_all(parent).map_err(io_err)?;
        let mut tmp = NamedTempFile::new_in(parent).map_err(io_err)?;
        tmp.write_all(content).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&full).map_err(|e| io_err(e.error))?;
        Ok(())
    }

    fn delete(&self, path: &str) -> StoreResult<()> {
        let full = self.resolve(path)?;
        fs::remove_file(&full).map_err(|e| StoreError::from_io(path, e))?;
        self.prune_empty_parents(&full);
        Ok(())
    }
}
