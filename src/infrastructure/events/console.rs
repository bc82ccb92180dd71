//! Console Event Sink
//!
//! Human-readable progress lines. Quiet mode prints only the summary,
//! verbose mode adds skipped files, pre-clean attempts and marker details.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::config::Verbosity;
use crate::domain::ports::{DeployEvent, DeployEventSink};
use crate::domain::services::Strategy;
use crate::ui::primitives::{ColoredText, Icon};
use crate::ui::UiContext;

pub struct ConsoleEventSink {
    color: bool,
    unicode: bool,
    verbosity: Verbosity,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    /// Console sink on stdout, styled per `ui`
    pub fn stdout(ui: &UiContext) -> Self {
        Self::with_writer(io::stdout(), ui.color, ui.unicode, ui.verbosity)
    }

    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        color: bool,
        unicode: bool,
        verbosity: Verbosity,
    ) -> Self {
        Self {
            color,
            unicode,
            verbosity,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.color, self.unicode)
    }

    fn dim(&self, text: impl Into<String>) -> String {
        ColoredText::dim(text).render(self.color)
    }

    /// Text for one event, `None` when this verbosity hides it
    pub fn render(&self, event: &DeployEvent) -> Option<String> {
        let normal = self.verbosity >= Verbosity::Normal;
        let verbose = self.verbosity >= Verbosity::Verbose;

        let line = match event {
            DeployEvent::Started {
                target,
                destination,
                dry_run,
            } if normal => {
                let suffix = if *dry_run {
                    format!(" {}", self.dim("(dry run)"))
                } else {
                    String::new()
                };
                format!(
                    "{} Deploying {} to {}{}",
                    self.icon(Icon::Deploy),
                    ColoredText::info(target.short()).bold().render(self.color),
                    destination,
                    suffix
                )
            }

            DeployEvent::PlanSelected { strategy, remote } if normal => match (strategy, remote) {
                (Strategy::Incremental, Some(remote)) => format!(
                    "{} Incremental deploy from {}",
                    self.icon(Icon::Diff),
                    remote.short()
                ),
                (Strategy::Full, Some(remote)) => format!(
                    "{} Full upload requested (remote at {})",
                    self.icon(Icon::Remote),
                    remote.short()
                ),
                _ => format!(
                    "{} Full upload {}",
                    self.icon(Icon::Remote),
                    self.dim("(no revision recorded on remote)")
                ),
            },

            DeployEvent::UpToDate { revision } if normal => format!(
                "{} Remote already at {}",
                self.icon(Icon::Success),
                revision.short()
            ),

            DeployEvent::CleanupAttempted { path } if verbose => {
                format!("  {} {}", self.icon(Icon::Trash), self.dim(format!("cleanup {}", path)))
            }

            DeployEvent::FileWritten { path, source, .. } if normal => match source {
                Some(source) => format!(
                    "  {} {} {}",
                    self.icon(Icon::Upload),
                    path,
                    self.dim(format!("(from {})", source))
                ),
                None => format!("  {} {}", self.icon(Icon::Upload), path),
            },

            DeployEvent::FileDeleted { path } if normal => {
                format!("  {} {}", self.icon(Icon::Trash), path)
            }

            DeployEvent::FileSkipped { path, reason } if verbose => format!(
                "  {} {} {}",
                self.icon(Icon::Pending),
                self.dim(path.as_str()),
                self.dim(format!("({})", reason))
            ),

            DeployEvent::MarkerWritten { path, revision } if normal => format!(
                "{} Recorded {} in {}",
                self.icon(Icon::Success),
                revision.short(),
                path
            ),

            DeployEvent::MarkerUnchanged { path, revision } if verbose => format!(
                "{} {} unchanged at {}",
                self.icon(Icon::Arrow),
                path,
                revision.short()
            ),

            DeployEvent::Completed {
                written_count,
                deleted_count,
                skipped_count,
                dry_run,
                ..
            } => {
                let summary = if *dry_run {
                    format!(
                        "Dry run: would upload {}, delete {}, skip {}",
                        written_count, deleted_count, skipped_count
                    )
                } else {
                    format!(
                        "Deployed: {} uploaded, {} deleted, {} skipped",
                        written_count, deleted_count, skipped_count
                    )
                };
                format!(
                    "{} {}",
                    self.icon(Icon::Success),
                    ColoredText::success(summary).render(self.color)
                )
            }

            _ => return None,
        };
        Some(line)
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        if let Some(line) = self.render(&event) {
            if let Ok(mut writer) = self.writer.lock() {
                let _ = writeln!(writer, "{}", line);
                let _ = writer.flush();
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbosity >= Verbosity::Normal
    }
}
