//! Resolved deployment destination

use std::path::{Path, PathBuf};

/// Where the destination path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationOrigin {
    /// The device mount point exists
    Device,
    /// The device was not found; the local scratch directory stands in
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    path: PathBuf,
    origin: DestinationOrigin,
}

impl Destination {
    pub fn device(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            origin: DestinationOrigin::Device,
        }
    }

    pub fn fallback(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            origin: DestinationOrigin::Fallback,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn origin(&self) -> DestinationOrigin {
        self.origin
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == DestinationOrigin::Fallback
    }

    /// `<destination>/lib`, where libraries are placed on the device.
    pub fn lib_dir(&self) -> PathBuf {
        self.path.join("lib")
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}
