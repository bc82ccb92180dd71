//! Domain Services
//!
//! Deployment plans, their execution against the ports, and revision
//! marker bookkeeping.

mod marker;
mod plan;

pub use marker::{read_remote_revision, write_remote_revision, DEFAULT_MARKER_PATH};
pub use plan::{
    DeploymentPlan, FullPlan, IncrementalPlan, PlanContext, PlanOutcome, Strategy,
    HOST_JUNK_FILES,
};
