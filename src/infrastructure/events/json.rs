//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for scripting.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started {
                script,
                destination,
                fallback,
                library_count,
                dry_run,
            } => {
                serde_json::json!({
                    "event": "start",
                    "script": script.display().to_string(),
                    "destination": destination.display().to_string(),
                    "fallback": fallback,
                    "library_count": library_count,
                    "dry_run": dry_run,
                })
            }

            DeployEvent::ScriptDeployed { source, target } => {
                serde_json::json!({
                    "event": "script",
                    "source": source.display().to_string(),
                    "target": target.display().to_string(),
                })
            }

            DeployEvent::LibraryDeployed {
                name,
                kind,
                source,
                target,
            } => {
                serde_json::json!({
                    "event": "library",
                    "name": name,
                    "kind": kind.as_str(),
                    "source": source.display().to_string(),
                    "target": target.display().to_string(),
                })
            }

            DeployEvent::LibrarySkipped { name } => {
                serde_json::json!({
                    "event": "library_skipped",
                    "name": name,
                    "reason": "not found",
                })
            }

            DeployEvent::RemovalFailed { path, error } => {
                serde_json::json!({
                    "event": "removal_failed",
                    "path": path.display().to_string(),
                    "error": error,
                })
            }

            DeployEvent::Completed {
                scripts,
                directories,
                files,
                skipped,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "status": "success",
                    "scripts": scripts,
                    "directories": directories,
                    "files": files,
                    "skipped": skipped,
                })
            }

            DeployEvent::Failed { error } => {
                serde_json::json!({
                    "event": "complete",
                    "status": "error",
                    "error": error,
                })
            }
        };

        self.write_event(json);
    }
}
