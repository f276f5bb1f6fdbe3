//! Library resolver
//!
//! Looks a declared library name up under `<library_root>/lib`. A directory
//! wins over a packed file of the same name; anything else is unresolved.

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{
    is_plain_name, packed_file_name, Destination, LibraryKind, LibrarySource,
};

#[derive(Debug, Clone)]
pub struct LibraryResolver {
    lib_dir: PathBuf,
    packed_extension: String,
}

impl LibraryResolver {
    /// `library_root` is the bundle root; libraries live in its `lib/` child.
    pub fn new(library_root: &Path, packed_extension: impl Into<String>) -> Self {
        Self {
            lib_dir: library_root.join("lib"),
            packed_extension: packed_extension.into(),
        }
    }

    pub fn lib_dir(&self) -> &Path {
        &self.lib_dir
    }

    pub fn packed_extension(&self) -> &str {
        &self.packed_extension
    }

    pub fn resolve<FS: FileSystem + ?Sized>(&self, fs: &FS, name: &str) -> LibrarySource {
        if !is_plain_name(name) {
            tracing::warn!(library = name, "library name is not a plain name, skipping");
            return LibrarySource::Unresolved;
        }

        let dir = self.lib_dir.join(name);
        if fs.is_dir(&dir) {
            return LibrarySource::Directory(dir);
        }

        let file = self
            .lib_dir
            .join(packed_file_name(name, &self.packed_extension));
        if fs.is_file(&file) {
            return LibrarySource::PackedFile(file);
        }

        LibrarySource::Unresolved
    }

    /// Where a library of `kind` lands on the device.
    pub fn target_for(&self, name: &str, kind: LibraryKind, destination: &Destination) -> PathBuf {
        match kind {
            LibraryKind::Directory => destination.lib_dir().join(name),
            LibraryKind::PackedFile => destination
                .lib_dir()
                .join(packed_file_name(name, &self.packed_extension)),
        }
    }
}
