//! Test environment builder for isolated revship runs.
//!
//! `TestEnv` owns three temp directories: a git work tree, a local
//! directory used as the deploy target, and a config home so the
//! developer's own `~/.config/revship` never leaks into a test.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use git2::Repository;
use tempfile::TempDir;

use super::git::{commit_all, init_repo};

const REVSHIP_ENV_VARS: &[&str] = &[
    "REVSHIP_TARGET",
    "REVSHIP_REVISION_FILE",
    "REVSHIP_EXCLUDE",
    "REVSHIP_VERBOSITY",
];

/// Result of running a revship CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every non-empty stdout line as JSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("not JSON: {l} ({e})"))
            })
            .collect()
    }
}

pub struct TestEnv {
    pub project_root: TempDir,
    pub target_root: TempDir,
    pub home_dir: TempDir,
    pub repo: Repository,
    revship_bin: PathBuf,
}

impl TestEnv {
    /// Fresh repository with no commits and an empty target
    pub fn new() -> Self {
        let project_root = TempDir::new().expect("Failed to create project dir");
        let target_root = TempDir::new().expect("Failed to create target dir");
        let home_dir = TempDir::new().expect("Failed to create home dir");
        let repo = init_repo(project_root.path());
        Self {
            project_root,
            target_root,
            home_dir,
            repo,
            revship_bin: PathBuf::from(env!("CARGO_BIN_EXE_revship")),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn target_path(&self, relative: &str) -> PathBuf {
        self.target_root.path().join(relative)
    }

    /// Deploy target spec pointing at `target_root`
    pub fn target_spec(&self) -> String {
        self.target_root.path().display().to_string()
    }

    /// Write a file into the work tree
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    pub fn remove(&self, relative: &str) {
        std::fs::remove_file(self.project_path(relative)).expect("Failed to remove file");
    }

    /// Commit the whole work tree, returning the commit id
    pub fn commit(&self, message: &str) -> String {
        commit_all(&self.repo, message)
    }

    /// Content of a deployed file, `None` when it does not exist
    pub fn deployed(&self, relative: &str) -> Option<String> {
        std::fs::read_to_string(self.target_path(relative)).ok()
    }

    /// Revision recorded in the default marker
    pub fn deployed_revision(&self) -> Option<String> {
        self.deployed(".revision").map(|m| m.trim_end().to_string())
    }

    /// Run revship from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from(self.project_root.path(), args, env_vars)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.revship_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1");
        for key in REVSHIP_ENV_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute revship");
        output_to_result(output)
    }

    /// `revship deploy --target <target_root>` plus `extra`
    pub fn deploy(&self, extra: &[&str]) -> TestResult {
        let target = self.target_spec();
        let mut args = vec!["deploy", "--target", target.as_str()];
        args.extend_from_slice(extra);
        self.run(&args)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
