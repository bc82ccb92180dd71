//! `revship init` - record a revision on a remote populated by other means

use anyhow::Result;

use revship::presentation::factory::{create_event_sink, create_init_use_case, open_store};
use revship::ui::primitives::{ColoredText, Icon};

use super::Session;

pub fn cmd_init(
    session: &Session,
    revision: Option<&str>,
    target: Option<&str>,
    revision_file: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    let revision = session.repo.resolve(&session.revision_ref(revision))?;
    let store = open_store(session.target_spec(target))?;
    let marker_path = session.marker_path(revision_file);

    let events = create_event_sink(&session.ui, "init");
    let result =
        create_init_use_case(events).execute(&revision, store.as_ref(), &marker_path, dry_run)?;

    let ui = &session.ui;
    if ui.json {
        return Ok(());
    }
    if let Some(previous) = result.previous.as_ref().filter(|p| **p != result.revision) {
        println!(
            "{} {}",
            Icon::Arrow.colored(ui.color, ui.unicode),
            ColoredText::dim(format!("replaced {}", previous.short())).render(ui.color)
        );
    }
    if result.dry_run {
        println!(
            "{} {}",
            Icon::Pending.colored(ui.color, ui.unicode),
            ColoredText::dim("dry run: marker not written").render(ui.color)
        );
    }
    Ok(())
}
