//! SSH Store
//!
//! A remote store on a host reachable with the system `ssh` client. Each
//! primitive is one `ssh` invocation running a short POSIX shell script.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use crate::domain::ports::{RemoteStore, StoreError, StoreResult};

/// Exit code the remote scripts use for "no such file"
const MISSING_EXIT: i32 = 44;

/// Exit code `ssh` itself reports for connection failures
const SSH_FAILURE_EXIT: i32 = 255;

/// Remote store over ssh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshStore {
    /// `host` or `user@host`
    host: String,
    port: Option<u16>,
    /// Base directory on the host; relative paths are relative to the login dir
    root: String,
}

impl SshStore {
    pub fn new(host: impl Into<String>, port: Option<u16>, root: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            root: root.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    fn shell_quote(s: &str) -> String {
        format!("'{}'", s.replace('\'', "'\\''"))
    }

    fn remote_path(&self, path: &str) -> StoreResult<String> {
        if path.is_empty()
            || path.starts_with('/')
            || path.split('/').any(|segment| segment == "..")
        {
            return Err(StoreError::InvalidPath(path.to_string()));
        }
        Ok(match self.root.trim_end_matches('/') {
            "" if self.root.starts_with('/') => format!("/{}", path),
            "" | "." => path.to_string(),
            root => format!("{}/{}", root, path),
        })
    }

    /// `ssh` argument list, without the script
    pub(crate) fn ssh_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(port) = self.port {
            args.push("-p".to_string());
            args.push(port.to_string());
        }
        args.push(self.host.clone());
        args
    }

    fn run(&self, script: &str, input: Option<&[u8]>) -> StoreResult<Output> {
        let mut child = Command::new("ssh")
            .args(self.ssh_args())
            .arg(script)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| StoreError::Connection(format!("cannot run ssh: {}", e)))?;

        if let Some(bytes) = input {
            if let Some(mut stdin) = child.stdin.take() {
                stdin
                    .write_all(bytes)
                    .map_err(|e| StoreError::Connection(e.to_string()))?;
            }
        }

        child
            .wait_with_output()
            .map_err(|e| StoreError::Connection(e.to_string()))
    }

    /// Map a finished script to a result, `path` naming the file for errors
    fn check(output: Output, path: &str) -> StoreResult<Output> {
        match output.status.code() {
            Some(0) => Ok(output),
            Some(MISSING_EXIT) => Err(StoreError::Missing(path.to_string())),
            Some(SSH_FAILURE_EXIT) | None => Err(StoreError::Connection(stderr_of(&output))),
            Some(code) => Err(StoreError::CommandFailed(format!(
                "{} (exit {}): {}",
                path,
                code,
                stderr_of(&output)
            ))),
        }
    }

    fn read_script(file: &str) -> String {
        let f = Self::shell_quote(file);
        format!(
            "if [ -f {f} ]; then cat {f}; else exit {code}; fi",
            f = f,
            code = MISSING_EXIT
        )
    }

    fn write_script(file: &str) -> String {
        let dir = match file.rsplit_once('/') {
            Some((dir, _)) if !dir.is_empty() => dir,
            _ => ".",
        };
        let f = Self::shell_quote(file);
        let tmp = Self::shell_quote(&format!("{}.revship-tmp", file));
        format!(
            "mkdir -p {dir} && cat > {tmp} && mv -f {tmp} {f}",
            dir = Self::shell_quote(dir),
            tmp = tmp,
            f = f
        )
    }

    fn delete_script(&self, path: &str, file: &str) -> String {
        let f = Self::shell_quote(file);
        let mut script = format!(
            "if [ -e {f} ]; then rm {f}; else exit {code}; fi",
            f = f,
            code = MISSING_EXIT
        );
        // Prune directories left empty, never above the root
        if let Some((dir, _)) = path.rsplit_once('/') {
            let root = if self.root.is_empty() { "." } else { &self.root };
            script.push_str(&format!(
                " && (cd {} && rmdir -p {} 2>/dev/null; true)",
                Self::shell_quote(root),
                Self::shell_quote(dir)
            ));
        }
        script
    }
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}

impl RemoteStore for SshStore {
    fn describe(&self) -> String {
        match self.port {
            Some(port) => {
                let sep = if self.root.starts_with('/') { "" } else { "/" };
                format!("ssh://{}:{}{}{}", self.host, port, sep, self.root)
            }
            None => format!("{}:{}", self.host, self.root),
        }
    }

    fn read(&self, path: &str) -> StoreResult<Vec<u8>> {
        let file = self.remote_path(path)?;
        let output = self.run(&Self::read_script(&file), None)?;
        Ok(Self::check(output, path)?.stdout)
    }

    fn write(&self, path: &str, content: &[u8]) -> StoreResult<()> {
        let file = self.remote_path(path)?;
        let output = self.run(&Self::write_script(&file), Some(content))?;
        Self::check(output, path).map(|_| ())
    }

    fn delete(&self, path: &str) -> StoreResult<()> {
        let file = self.remote_path(path)?;
        let output = self.run(&self.delete_script(path, &file), None)?;
        Self::check(output, path).map(|_| ())
    }

    fn delete_best_effort(&self, path: &str) {
        if let Ok(file) = self.remote_path(path) {
            let _ = self.run(&format!("rm -f {}", Self::shell_quote(&file)), None);
        }
    }
}
