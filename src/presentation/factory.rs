//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::{DeployUseCase, InitUseCase, StatusUseCase};
use crate::domain::ports::{DeployEventSink, RemoteStore};
use crate::error::{RevshipError, RevshipResult};
use crate::infrastructure::{ConsoleEventSink, GitRepository, JsonEventSink, RemoteTarget};
use crate::ui::UiContext;

/// Deploy use case backed by a git repository
pub type GitDeployUseCase<'r> = DeployUseCase<&'r GitRepository, &'r GitRepository>;

/// Status use case backed by a git repository
pub type GitStatusUseCase<'r> = StatusUseCase<&'r GitRepository>;

/// Create a deploy use case reading history and diffs from `repo`
pub fn create_deploy_use_case(
    repo: &GitRepository,
    events: Arc<dyn DeployEventSink>,
) -> GitDeployUseCase<'_> {
    DeployUseCase::new(repo, repo).with_events(events)
}

pub fn create_status_use_case(repo: &GitRepository) -> GitStatusUseCase<'_> {
    StatusUseCase::new(repo)
}

pub fn create_init_use_case(events: Arc<dyn DeployEventSink>) -> InitUseCase {
    InitUseCase::new().with_events(events)
}

/// Parse a target spec and open the matching store.
///
/// `None` (nothing on the command line, in the environment or in config)
/// is an error.
pub fn open_store(spec: Option<&str>) -> RevshipResult<Box<dyn RemoteStore>> {
    let spec = spec.ok_or(RevshipError::MissingTarget)?;
    Ok(RemoteTarget::parse(spec)?.open())
}

/// JSON sink in `--json` mode, console sink otherwise
pub fn create_event_sink(ui: &UiContext, command: &'static str) -> Arc<dyn DeployEventSink> {
    if ui.json {
        Arc::new(JsonEventSink::stdout(command))
    } else {
        Arc::new(ConsoleEventSink::stdout(ui))
    }
}
