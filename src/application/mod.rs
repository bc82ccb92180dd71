//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Select a plan, execute it, upload extras, record the marker
//! - `StatusUseCase` - Compare the remote marker with a local revision
//! - `InitUseCase` - Record a revision on the remote without uploading

pub mod deploy;
pub mod init;
pub mod status;

pub use deploy::{DeployOptions, DeployResult, DeployUseCase, CMS_CONFIG_FILES, DEFAULT_REVISION};
pub use init::{InitResult, InitUseCase};
pub use status::{StatusReport, StatusUseCase};
