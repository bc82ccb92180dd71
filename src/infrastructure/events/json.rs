//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Command name stamped on every event
    command: &'static str,
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }

    fn to_json(&self, event: DeployEvent) -> serde_json::Value {
        let command = self.command;
        match event {
            DeployEvent::Started {
                target,
                destination,
                dry_run,
            } => serde_json::json!({
                "event": "start",
                "command": command,
                "revision": target.as_str(),
                "destination": destination,
                "dry_run": dry_run,
            }),

            DeployEvent::PlanSelected { strategy, remote } => serde_json::json!({
                "event": "plan",
                "command": command,
                "strategy": strategy.as_str(),
                "remote_revision": remote.as_ref().map(|r| r.as_str()),
            }),

            DeployEvent::UpToDate { revision } => serde_json::json!({
                "event": "up_to_date",
                "command": command,
                "revision": revision.as_str(),
            }),

            DeployEvent::CleanupAttempted { path } => serde_json::json!({
                "event": "cleanup",
                "command": command,
                "path": path,
            }),

            DeployEvent::FileWritten {
                path,
                origin,
                source,
            } => serde_json::json!({
                "event": "item_written",
                "command": command,
                "path": path,
                "origin": origin.as_str(),
                "source": source,
            }),

            DeployEvent::FileDeleted { path } => serde_json::json!({
                "event": "item_deleted",
                "command": command,
                "path": path,
            }),

            DeployEvent::FileSkipped { path, reason } => serde_json::json!({
                "event": "item_skipped",
                "command": command,
                "path": path,
                "reason": reason,
            }),

            DeployEvent::MarkerWritten { path, revision } => serde_json::json!({
                "event": "marker_written",
                "command": command,
                "path": path,
                "revision": revision.as_str(),
            }),

            DeployEvent::MarkerUnchanged { path, revision } => serde_json::json!({
                "event": "marker_unchanged",
                "command": command,
                "path": path,
                "revision": revision.as_str(),
            }),

            DeployEvent::Completed {
                written_count,
                deleted_count,
                skipped_count,
                marker_written,
                dry_run,
            } => serde_json::json!({
                "event": "complete",
                "command": command,
                "status": "success",
                "written": written_count,
                "deleted": deleted_count,
                "skipped": skipped_count,
                "marker_written": marker_written,
                "dry_run": dry_run,
            }),
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = self.to_json(event);
        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
