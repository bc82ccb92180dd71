//! `revship status`

use anyhow::Result;
use serde_json::json;

use revship::application::StatusReport;
use revship::config::Verbosity;
use revship::presentation::factory::{create_status_use_case, open_store};
use revship::ui::primitives::{ColoredText, Icon};
use revship::ui::UiContext;

use super::Session;

pub fn cmd_status(
    session: &Session,
    revision: Option<&str>,
    target: Option<&str>,
    revision_file: Option<&str>,
) -> Result<()> {
    let target_revision = session.repo.resolve(&session.revision_ref(revision))?;
    let store = open_store(session.target_spec(target))?;
    let marker_path = session.marker_path(revision_file);

    let report = create_status_use_case(&session.repo).execute(
        &target_revision,
        store.as_ref(),
        &marker_path,
    )?;

    if session.ui.json {
        println!("{}", status_json(&report, &store.describe()));
    } else {
        print_report(&session.ui, &report, &store.describe());
    }
    Ok(())
}

fn state(report: &StatusReport) -> &'static str {
    if report.remote.is_none() {
        "never_deployed"
    } else if report.is_up_to_date() {
        "up_to_date"
    } else if report.remote_is_unknown() {
        "unknown_remote"
    } else {
        "behind"
    }
}

fn status_json(report: &StatusReport, destination: &str) -> serde_json::Value {
    let pending = report.pending.as_ref().map(|diff| {
        json!({
            "changed": diff.changed(),
            "deleted": diff.deleted(),
        })
    });
    json!({
        "event": "status",
        "command": "status",
        "destination": destination,
        "state": state(report),
        "remote": report.remote.as_ref().map(|r| r.as_str()),
        "target": report.target.as_str(),
        "pending": pending,
    })
}

fn print_report(ui: &UiContext, report: &StatusReport, destination: &str) {
    println!(
        "{} {}",
        Icon::Remote.colored(ui.color, ui.unicode),
        ColoredText::plain(destination).bold().render(ui.color)
    );

    let Some(remote) = &report.remote else {
        println!(
            "{} {}",
            Icon::Warning.colored(ui.color, ui.unicode),
            ColoredText::warning(format!(
                "No revision recorded; the next deploy uploads all of {}",
                report.target.short()
            ))
            .render(ui.color)
        );
        return;
    };

    if report.is_up_to_date() {
        println!(
            "{} {}",
            Icon::Success.colored(ui.color, ui.unicode),
            ColoredText::success(format!("Up to date at {}", remote.short())).render(ui.color)
        );
        return;
    }

    match &report.pending {
        Some(diff) => {
            println!(
                "{} {} {} {}: {} changed, {} deleted",
                Icon::Diff.colored(ui.color, ui.unicode),
                remote.short(),
                Icon::Arrow.render(ui.unicode),
                report.target.short(),
                diff.changed().len(),
                diff.deleted().len()
            );
            if ui.verbosity >= Verbosity::Verbose {
                for path in diff.changed() {
                    println!("  {} {}", Icon::Upload.colored(ui.color, ui.unicode), path);
                }
                for path in diff.deleted() {
                    println!("  {} {}", Icon::Trash.colored(ui.color, ui.unicode), path);
                }
            }
        }
        None => println!(
            "{} {}",
            Icon::Error.colored(ui.color, ui.unicode),
            ColoredText::error(format!(
                "Remote holds {}, which this repository does not know",
                remote.short()
            ))
            .render(ui.color)
        ),
    }
}
