//! Mount strategy port
//!
//! Maps a device identifier to the place the OS would mount it. The path
//! resolver takes one of these instead of branching on the host platform.

use std::path::PathBuf;

pub trait MountStrategy {
    /// Where `device` is expected to be mounted. Must not touch the disk.
    fn locate(&self, device: &str) -> PathBuf;

    /// Short label used in log lines.
    fn label(&self) -> &'static str;
}
