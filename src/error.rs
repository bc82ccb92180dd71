//! Error types for Revship
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{RepoError, StoreError};

/// Result type alias for Revship operations
pub type RevshipResult<T> = Result<T, RevshipError>;

/// Main error type for Revship operations
#[derive(Error, Debug)]
pub enum RevshipError {
    /// Remote store failure during a required operation
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Repository failure (unknown revision, unreadable blob, ...)
    #[error(transparent)]
    Repo(#[from] RepoError),

    /// Local history contains commits that are not incorporated upstream
    #[error("{outstanding} local commit(s) not yet pushed upstream - push or pull before deploying")]
    FastForward { outstanding: usize },

    /// An additional (untracked) file could not be read locally
    #[error("cannot read additional file {path}: {source}")]
    AdditionalFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Remote target spec could not be parsed
    #[error("invalid remote target {0}")]
    InvalidTarget(String),

    /// No remote target configured anywhere
    #[error("no remote target configured - pass --target or set [remote] target in revship.toml")]
    MissingTarget,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
