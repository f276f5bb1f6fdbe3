//! Event Sink Implementations
//!
//! Provides concrete implementations of DeployEventSink:
//! - ConsoleEventSink: human-readable progress lines
//! - JsonEventSink: NDJSON output for scripting

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
