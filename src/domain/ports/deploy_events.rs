//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Console progress lines and the NDJSON stream are both built on it.

use std::path::PathBuf;

use crate::domain::value_objects::LibraryKind;

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Destination resolved, deploy about to start
    Started {
        script: PathBuf,
        destination: PathBuf,
        fallback: bool,
        library_count: usize,
        dry_run: bool,
    },

    /// Script copied to the destination
    ScriptDeployed { source: PathBuf, target: PathBuf },

    /// A library was copied
    LibraryDeployed {
        name: String,
        kind: LibraryKind,
        source: PathBuf,
        target: PathBuf,
    },

    /// A declared library was not found under the library root
    LibrarySkipped { name: String },

    /// An existing destination directory could not be fully removed
    RemovalFailed { path: PathBuf, error: String },

    /// Deploy completed
    Completed {
        scripts: usize,
        directories: usize,
        files: usize,
        skipped: usize,
    },

    /// Deploy stopped on an error; no `Completed` follows
    Failed { error: String },
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - `ConsoleEventSink`: progress lines in the terminal
/// - `JsonEventSink`: NDJSON event stream
/// - `NoopEventSink`: silent operation
pub trait DeployEventSink {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
