//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--config, --repo, --json, --color, -v/-q) are inherited by
//! all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Revship - deploy a git revision to a remote file store
#[derive(Parser, Debug)]
#[command(name = "revship")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: revship.toml at the repository root)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Repository to deploy from
    #[arg(long, global = true, value_name = "PATH", default_value = ".")]
    pub repo: PathBuf,

    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// More output (skipped files, cleanup attempts)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only print the summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload the changes between the deployed revision and REVISION
    Deploy {
        /// Revision to deploy (branch, tag, commit)
        revision: Option<String>,

        /// Remote target (host:path, ssh://host/path, or a local directory)
        #[arg(long, value_name = "SPEC")]
        target: Option<String>,

        /// Show what would be done without touching the remote
        #[arg(long)]
        dry_run: bool,

        /// Upload every file, ignoring the recorded revision
        #[arg(long)]
        full: bool,

        /// Path prefix to leave alone (repeatable)
        #[arg(long = "exclude", value_name = "PREFIX")]
        exclude: Vec<String>,

        /// Untracked local file or directory to upload (repeatable)
        #[arg(long = "additional", value_name = "PATH")]
        additional: Vec<PathBuf>,

        /// Remote path of the revision marker
        #[arg(long, value_name = "PATH")]
        revision_file: Option<String>,

        /// Deploy only this repository subdirectory
        #[arg(long, value_name = "DIR")]
        local_path: Option<PathBuf>,

        /// Skip the fast-forward check against upstream
        #[arg(long)]
        no_validate: bool,
    },

    /// Compare the deployed revision with REVISION
    Status {
        /// Revision to compare against (default: HEAD)
        revision: Option<String>,

        /// Remote target
        #[arg(long, value_name = "SPEC")]
        target: Option<String>,

        /// Remote path of the revision marker
        #[arg(long, value_name = "PATH")]
        revision_file: Option<String>,

        /// Compare only this repository subdirectory
        #[arg(long, value_name = "DIR")]
        local_path: Option<PathBuf>,
    },

    /// Record REVISION as deployed without uploading anything
    Init {
        /// Revision to record (default: HEAD)
        revision: Option<String>,

        /// Remote target
        #[arg(long, value_name = "SPEC")]
        target: Option<String>,

        /// Remote path of the revision marker
        #[arg(long, value_name = "PATH")]
        revision_file: Option<String>,

        /// Show what would be recorded without writing it
        #[arg(long)]
        dry_run: bool,
    },
}
