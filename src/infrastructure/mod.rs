//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - local file system
//! - `events/` - console and NDJSON event sinks

pub mod events;
pub mod fs;

pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
