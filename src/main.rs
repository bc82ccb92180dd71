//! Revship CLI - deploy a git revision to a remote file store
//!
//! Usage: revship <COMMAND>
//!
//! Commands:
//!   deploy  Upload the changes between the deployed revision and REVISION
//!   status  Compare the deployed revision with REVISION
//!   init    Record REVISION as deployed without uploading anything

mod commands;

use anyhow::Result;
use clap::Parser;

use revship::presentation::{Cli, Commands};

use commands::deploy::{cmd_deploy, DeployArgs};
use commands::init::cmd_init;
use commands::status::cmd_status;
use commands::Session;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        if json {
            let output = serde_json::json!({
                "event": "error",
                "message": format!("{:#}", err),
            });
            println!("{}", output);
        } else {
            eprintln!("Error: {:#}", err);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Deploy {
            revision,
            target,
            dry_run,
            full,
            exclude,
            additional,
            revision_file,
            local_path,
            no_validate,
        } => {
            let session = Session::open(&cli, local_path.as_deref())?;
            cmd_deploy(
                &session,
                DeployArgs {
                    revision: revision.clone(),
                    target: target.clone(),
                    dry_run: *dry_run,
                    full: *full,
                    exclude: exclude.clone(),
                    additional: additional.clone(),
                    revision_file: revision_file.clone(),
                    no_validate: *no_validate,
                },
            )
        }
        Commands::Status {
            revision,
            target,
            revision_file,
            local_path,
        } => {
            let session = Session::open(&cli, local_path.as_deref())?;
            cmd_status(
                &session,
                revision.as_deref(),
                target.as_deref(),
                revision_file.as_deref(),
            )
        }
        Commands::Init {
            revision,
            target,
            revision_file,
            dry_run,
        } => {
            let session = Session::open(&cli, None)?;
            cmd_init(
                &session,
                revision.as_deref(),
                target.as_deref(),
                revision_file.as_deref(),
                *dry_run,
            )
        }
    }
}
