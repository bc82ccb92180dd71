//! Deploy Module
//!
//! Orchestrates the deployment flow for Revship.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`)
//! - `result` - Result types (`DeployResult`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use revship::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(&repo, &repo).with_events(sink);
//! use_case.validate()?;
//! let result = use_case.execute(&tree, &store, &DeployOptions::new(workdir))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{DeployOptions, DEFAULT_REVISION};
pub use result::DeployResult;
pub use use_case::{DeployUseCase, CMS_CONFIG_FILES};
