//! Remote Target Parsing
//!
//! Accepted forms:
//!
//! - `file:///srv/www` or a bare path (`/srv/www`, `./out`, `C:\site`)
//! - `ssh://[user@]host[:port]/path`
//! - `[user@]host:path` (scp style)

use std::path::PathBuf;

use crate::domain::ports::RemoteStore;
use crate::error::{RevshipError, RevshipResult};

use super::{LocalDirStore, SshStore};

/// Where a deploy goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteTarget {
    /// Directory on this machine
    Local(PathBuf),
    /// Directory on an ssh host
    Ssh {
        host: String,
        port: Option<u16>,
        path: String,
    },
}

impl RemoteTarget {
    pub fn parse(spec: &str) -> RevshipResult<Self> {
        let spec = spec.trim();
        let invalid = |why: &str| RevshipError::InvalidTarget(format!("'{}': {}", spec, why));

        if spec.is_empty() {
            return Err(invalid("empty target"));
        }

        if let Some(rest) = spec.strip_prefix("file://") {
            if rest.is_empty() {
                return Err(invalid("missing path"));
            }
            return Ok(RemoteTarget::Local(PathBuf::from(rest)));
        }

        if let Some(rest) = spec.strip_prefix("ssh://") {
            let (authority, path) = match rest.split_once('/') {
                Some((authority, path)) => (authority, format!("/{}", path)),
                None => (rest, ".".to_string()),
            };
            let (host, port) = split_port(authority).map_err(|why| invalid(why.as_str()))?;
            if host.is_empty() || host.ends_with('@') {
                return Err(invalid("missing host"));
            }
            // ssh://host/~/site means the login directory
            let path = match path.strip_prefix("/~/") {
                Some(relative) => relative.to_string(),
                None if path == "/~" => ".".to_string(),
                None => path,
            };
            return Ok(RemoteTarget::Ssh {
                host: host.to_string(),
                port,
                path,
            });
        }

        if spec.contains("://") {
            return Err(invalid("unsupported scheme"));
        }

        if let Some((host, path)) = spec.split_once(':') {
            if is_scp_host(host) {
                if host.ends_with('@') {
                    return Err(invalid("missing host"));
                }
                let path = if path.is_empty() { "." } else { path };
                return Ok(RemoteTarget::Ssh {
                    host: host.to_string(),
                    port: None,
                    path: path.to_string(),
                });
            }
        }

        Ok(RemoteTarget::Local(PathBuf::from(spec)))
    }

    /// Open a store for this target
    pub fn open(&self) -> Box<dyn RemoteStore> {
        match self {
            RemoteTarget::Local(root) => Box::new(LocalDirStore::new(root.clone())),
            RemoteTarget::Ssh { host, port, path } => {
                Box::new(SshStore::new(host.clone(), *port, path.clone()))
            }
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, RemoteTarget::Local(_))
    }
}

/// `host` or `host:port`
fn split_port(authority: &str) -> Result<(&str, Option<u16>), String> {
    match authority.rsplit_once(':') {
        Some((host, port)) => port
            .parse::<u16>()
            .map(|p| (host, Some(p)))
            .map_err(|_| format!("invalid port '{}'", port)),
        None => Ok((authority, None)),
    }
}

/// The part before ':' looks like a host, not a path or a drive letter
fn is_scp_host(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate.len() > 1
        && !candidate.contains('/')
        && !candidate.contains('\\')
}
