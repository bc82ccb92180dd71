//! Remote Store Port
//!
//! The hosting target, reachable only through read/write/delete primitives.
//! Paths are relative, forward-slash separated, and resolved by the store
//! against its own root.

use std::cell::RefCell;

use thiserror::Error;

/// Remote store operation errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// The remote file does not exist
    #[error("remote file not found: {0}")]
    Missing(String),

    /// I/O failure on the store side
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Could not reach the store
    #[error("connection error: {0}")]
    Connection(String),

    /// A remote command ran but failed
    #[error("command failed: {0}")]
    CommandFailed(String),

    /// Path would resolve outside the store root
    #[error("path escapes store root: {0}")]
    InvalidPath(String),
}

impl StoreError {
    /// The distinguishable "missing file" condition
    pub fn is_missing(&self) -> bool {
        matches!(self, StoreError::Missing(_))
    }

    pub(crate) fn from_io(path: &str, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            StoreError::Missing(path.to_string())
        } else {
            StoreError::Io {
                path: path.to_string(),
                source: err,
            }
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Abstract remote store
///
/// Implementations:
/// - `LocalDirStore` - a directory on this machine
/// - `SshStore` - a directory on a host reachable over ssh
/// - `DryRunStore` - read-through decorator that drops mutations
pub trait RemoteStore {
    /// Human-readable location of the store
    fn describe(&self) -> String;

    /// Read a file. Fails with [`StoreError::Missing`] when absent.
    fn read(&self, path: &str) -> StoreResult<Vec<u8>>;

    /// Create or overwrite a file, creating parent directories as needed
    fn write(&self, path: &str, content: &[u8]) -> StoreResult<()>;

    /// Remove a file. Any failure, including absence, is reported.
    fn delete(&self, path: &str) -> StoreResult<()>;

    /// Remove a file, ignoring every failure
    fn delete_best_effort(&self, path: &str) {
        let _ = self.delete(path);
    }
}

impl<S: RemoteStore + ?Sized> RemoteStore for &S {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn read(&self, path: &str) -> StoreResult<Vec<u8>> {
        (**self).read(path)
    }

    fn write(&self, path: &str, content: &[u8]) -> StoreResult<()> {
        (**self).write(path, content)
    }

    fn delete(&self, path: &str) -> StoreResult<()> {
        (**self).delete(path)
    }

    fn delete_best_effort(&self, path: &str) {
        (**self).delete_best_effort(path)
    }
}

impl<S: RemoteStore + ?Sized> RemoteStore for Box<S> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn read(&self, path: &str) -> StoreResult<Vec<u8>> {
        (**self).read(path)
    }

    fn write(&self, path: &str, content: &[u8]) -> StoreResult<()> {
        (**self).write(path, content)
    }

    fn delete(&self, path: &str) -> StoreResult<()> {
        (**self).delete(path)
    }

    fn delete_best_effort(&self, path: &str) {
        (**self).delete_best_effort(path)
    }
}

/// Mutation recorded by [`DryRunStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuppressedOp {
    Write(String),
    Delete(String),
}

/// Read-through decorator that turns every mutation into a no-op
///
/// Reads still hit the wrapped store so plan selection sees the real
/// remote revision.
pub struct DryRunStore<'a> {
    inner: &'a dyn RemoteStore,
    suppressed: RefCell<Vec<SuppressedOp>>,
}

impl<'a> DryRunStore<'a> {
    pub fn new(inner: &'a dyn RemoteStore) -> Self {
        Self {
            inner,
            suppressed: RefCell::new(Vec::new()),
        }
    }

    /// Mutations that would have happened, in order
    pub fn suppressed(&self) -> Vec<SuppressedOp> {
        self.suppressed.borrow().clone()
    }
}

impl RemoteStore for DryRunStore<'_> {
    fn describe(&self) -> String {
        format!("{} (dry run)", self.inner.describe())
    }

    fn read(&self, path: &str) -> StoreResult<Vec<u8>> {
        self.inner.read(path)
    }

    fn write(&self, path: &str, _content: &[u8]) -> StoreResult<()> {
        self.suppressed
            .borrow_mut()
            .push(SuppressedOp::Write(path.to_string()));
        Ok(())
    }

    fn delete(&self, path: &str) -> StoreResult<()> {
        self.suppressed
            .borrow_mut()
            .push(SuppressedOp::Delete(path.to_string()));
        Ok(())
    }

    fn delete_best_effort(&self, path: &str) {
        let _ = self.delete(path);
    }
}
