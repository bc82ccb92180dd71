//! `revship deploy`

use std::path::PathBuf;

use anyhow::Result;

use revship::application::DeployOptions;
use revship::domain::value_objects::AdditionalFile;
use revship::presentation::factory::{create_deploy_use_case, create_event_sink, open_store};

use super::Session;

/// Arguments of the deploy subcommand
#[derive(Debug, Default)]
pub struct DeployArgs {
    pub revision: Option<String>,
    pub target: Option<String>,
    pub dry_run: bool,
    pub full: bool,
    pub exclude: Vec<String>,
    pub additional: Vec<PathBuf>,
    pub revision_file: Option<String>,
    pub no_validate: bool,
}

pub fn cmd_deploy(session: &Session, args: DeployArgs) -> Result<()> {
    let reference = session.revision_ref(args.revision.as_deref());
    let target_revision = session.repo.resolve(&reference)?;
    let tree = session.repo.tree(&target_revision)?;
    let store = open_store(session.target_spec(args.target.as_deref()))?;

    let events = create_event_sink(&session.ui, "deploy");
    let use_case = create_deploy_use_case(&session.repo, events);

    if !args.no_validate {
        use_case.validate()?;
    }

    let exclude = session
        .config
        .deploy
        .exclude
        .iter()
        .cloned()
        .chain(args.exclude);
    let additional = session
        .config
        .deploy
        .additional
        .iter()
        .cloned()
        .chain(args.additional.into_iter().map(AdditionalFile::new))
        .collect();

    let options = DeployOptions::new(session.workdir.clone())
        .with_exclude(exclude)
        .with_additional(additional)
        .with_revision(reference)
        .with_revision_marker_path(session.marker_path(args.revision_file.as_deref()))
        .with_dry_run(args.dry_run)
        .with_force_full(args.full);

    use_case.execute(&tree, store.as_ref(), &options)?;
    Ok(())
}
