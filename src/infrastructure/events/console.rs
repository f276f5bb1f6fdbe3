//! Console Event Sink
//!
//! One human-readable line per deployed or skipped item, written as the
//! deploy progresses so a failure shows how far it got.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{DeployEvent, DeployEventSink};

#[derive(Default)]
struct ConsoleState {
    dry_run: bool,
    library_header_written: bool,
}

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    state: Mutex<ConsoleState>,
}

impl ConsoleEventSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            state: Mutex::new(ConsoleState::default()),
        }
    }

    fn write_lines(&self, lines: &[String]) {
        if let Ok(mut writer) = self.writer.lock() {
            for line in lines {
                let _ = writeln!(writer, "{}", line);
            }
            let _ = writer.flush();
        }
    }

    fn library_header(&self) -> Option<String> {
        let mut state = self.state.lock().ok()?;
        if state.library_header_written {
            return None;
        }
        state.library_header_written = true;
        Some("  - Library files:".to_string())
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        let mut lines = Vec::new();

        match event {
            DeployEvent::Started {
                script,
                destination,
                fallback,
                dry_run,
                ..
            } => {
                if let Ok(mut state) = self.state.lock() {
                    state.dry_run = dry_run;
                    state.library_header_written = false;
                }
                let mut header = format!(
                    "* Deploying script {} to {}",
                    script.display(),
                    destination.display()
                );
                if fallback {
                    header.push_str(" (device not found, using fallback)");
                }
                if dry_run {
                    header.push_str(" [dry run]");
                }
                lines.push(header);
            }

            DeployEvent::ScriptDeployed { source, target } => {
                lines.push("  - Script files:".to_string());
                lines.push(format!("    - {} => {}", source.display(), target.display()));
            }

            DeployEvent::LibraryDeployed {
                name,
                kind,
                source,
                target,
            } => {
                lines.extend(self.library_header());
                lines.push(format!(
                    "    - {} ({}): {} => {}",
                    name,
                    kind,
                    source.display(),
                    target.display()
                ));
            }

            DeployEvent::LibrarySkipped { name } => {
                lines.extend(self.library_header());
                lines.push(format!("    - {}: skipped (not found)", name));
            }

            DeployEvent::RemovalFailed { path, error } => {
                lines.extend(self.library_header());
                lines.push(format!(
                    "    ! could not fully remove {}: {}",
                    path.display(),
                    error
                ));
            }

            DeployEvent::Completed {
                scripts,
                directories,
                files,
                skipped,
            } => {
                let dry_run = self.state.lock().map(|s| s.dry_run).unwrap_or(false);
                let verb = if dry_run { "Would deploy" } else { "Deployed" };
                lines.push(format!(
                    "{} {} script(s), {} library director{}, {} library file(s); {} skipped",
                    verb,
                    scripts,
                    directories,
                    if directories == 1 { "y" } else { "ies" },
                    files,
                    skipped
                ));
            }

            DeployEvent::Failed { error } => {
                lines.push(format!("Stopped: {}", error));
            }
        }

        self.write_lines(&lines);
    }
}
