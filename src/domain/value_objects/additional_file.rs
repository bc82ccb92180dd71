//! Additional File Value Object
//!
//! A local file (or directory) uploaded verbatim, outside version control.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// An out-of-band file uploaded on every deploy
///
/// Accepts both a plain string and a table in config:
///
/// ```toml
/// additional = ["config/secrets.php", { local = "dist/app.js", remote = "js/app.js" }]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdditionalFile {
    pub local: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum AdditionalFileDe {
    Path(PathBuf),
    Table {
        local: PathBuf,
        #[serde(default)]
        remote: Option<String>,
    },
}

impl<'de> Deserialize<'de> for AdditionalFile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match AdditionalFileDe::deserialize(deserializer)? {
            AdditionalFileDe::Path(local) => Ok(Self {
                local,
                remote: None,
            }),
            AdditionalFileDe::Table { local, remote } => Ok(Self { local, remote }),
        }
    }
}

impl AdditionalFile {
    pub fn new(local: impl Into<PathBuf>) -> Self {
        Self {
            local: local.into(),
            remote: None,
        }
    }

    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = Some(remote.into());
        self
    }

    /// Remote path for a file found at `local_file`.
    ///
    /// `local_file` is either `self.local` itself or a file beneath it
    /// when `self.local` names a directory.
    pub fn remote_path_for(&self, local_file: &Path) -> String {
        let base = self
            .remote
            .clone()
            .unwrap_or_else(|| to_remote_path(&self.local));
        match local_file.strip_prefix(&self.local) {
            Ok(rest) if !rest.as_os_str().is_empty() => {
                let rest = to_remote_path(rest);
                if base.is_empty() {
                    rest
                } else {
                    format!("{}/{}", base.trim_end_matches('/'), rest)
                }
            }
            _ => base,
        }
    }
}

/// Convert a relative local path to the forward-slash form used remotely
pub fn to_remote_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            std::path::Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
