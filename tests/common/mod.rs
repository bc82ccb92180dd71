//! Common test utilities for revship integration and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: a git repository, a local deploy target and an isolated
//!   config home, plus helpers to run the CLI against them
//! - `commit_all`: stage the work tree and commit it with git2
//! - `commit_with_submodule` and `set_upstream`: repository shapes the CLI
//!   cannot produce on its own

#![allow(dead_code)]

pub mod env;
pub mod git;

pub use env::*;
pub use git::*;
