//! Deploy Result

use std::path::PathBuf;

use crate::domain::value_objects::{Destination, LibraryKind};

/// What happened to one declared library
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryOutcome {
    Deployed {
        name: String,
        kind: LibraryKind,
        source: PathBuf,
        target: PathBuf,
    },
    Skipped {
        name: String,
    },
}

impl LibraryOutcome {
    pub fn name(&self) -> &str {
        match self {
            LibraryOutcome::Deployed { name, .. } | LibraryOutcome::Skipped { name } => name,
        }
    }

    pub fn kind(&self) -> Option<LibraryKind> {
        match self {
            LibraryOutcome::Deployed { kind, .. } => Some(*kind),
            LibraryOutcome::Skipped { .. } => None,
        }
    }
}

/// Result of a completed deploy run
#[derive(Debug, Clone)]
pub struct DeployReport {
    pub destination: Destination,
    /// Where the script was (or would be) copied
    pub script_target: PathBuf,
    pub libraries: Vec<LibraryOutcome>,
    /// Destination directories that could not be fully removed before copying
    pub removal_failures: Vec<PathBuf>,
    pub dry_run: bool,
}

impl DeployReport {
    pub fn directory_count(&self) -> usize {
        self.count_kind(LibraryKind::Directory)
    }

    pub fn file_count(&self) -> usize {
        self.count_kind(LibraryKind::PackedFile)
    }

    pub fn skipped(&self) -> Vec<&str> {
        self.libraries
            .iter()
            .filter(|o| o.kind().is_none())
            .map(LibraryOutcome::name)
            .collect()
    }

    fn count_kind(&self, kind: LibraryKind) -> usize {
        self.libraries
            .iter()
            .filter(|o| o.kind() == Some(kind))
            .count()
    }
}
