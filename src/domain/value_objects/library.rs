//! Library reference value objects

use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Default extension of single-file compiled libraries.
pub const DEFAULT_PACKED_EXTENSION: &str = "mpy";

/// Shape of a library on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LibraryKind {
    /// Multi-file library directory
    Directory,
    /// Single packed file (`<name>.mpy`)
    PackedFile,
}

impl LibraryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LibraryKind::Directory => "directory",
            LibraryKind::PackedFile => "file",
        }
    }
}

impl fmt::Display for LibraryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of looking a library name up under the library root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibrarySource {
    Directory(PathBuf),
    PackedFile(PathBuf),
    Unresolved,
}

impl LibrarySource {
    pub fn kind(&self) -> Option<LibraryKind> {
        match self {
            LibrarySource::Directory(_) => Some(LibraryKind::Directory),
            LibrarySource::PackedFile(_) => Some(LibraryKind::PackedFile),
            LibrarySource::Unresolved => None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            LibrarySource::Directory(path) | LibrarySource::PackedFile(path) => {
                Some(path.as_path())
            }
            LibrarySource::Unresolved => None,
        }
    }

    /// Split into kind and path; `None` when unresolved.
    pub fn into_parts(self) -> Option<(LibraryKind, PathBuf)> {
        match self {
            LibrarySource::Directory(path) => Some((LibraryKind::Directory, path)),
            LibrarySource::PackedFile(path) => Some((LibraryKind::PackedFile, path)),
            LibrarySource::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, LibrarySource::Unresolved)
    }
}

/// File name of the packed form of `name`, e.g. `neopixel.mpy`.
pub fn packed_file_name(name: &str, extension: &str) -> String {
    format!("{}.{}", name, extension.trim_start_matches('.'))
}

/// A single normal path component: no separators, `..`, or roots.
pub fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
