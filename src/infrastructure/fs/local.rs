//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs;
use std::path::Path;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use crate::domain::value_objects::ExcludePatterns;

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::create_dir_all(path).map_err(|e| FsError::at(path, e))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<u64> {
        if !from.is_file() {
            return Err(FsError::NotFound(from.to_path_buf()));
        }

        // Ensure parent directories exist
        if let Some(parent) = to.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;
            }
        }

        fs::copy(from, to).map_err(|e| FsError::at(to, e))
    }

    fn copy_dir(&self, from: &Path, to: &Path, exclude: &ExcludePatterns) -> FsResult<usize> {
        if !from.is_dir() {
            return Err(FsError::NotFound(from.to_path_buf()));
        }
        copy_tree(from, to, Path::new(""), exclude)
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::remove_dir_all(path).map_err(|e| FsError::at(path, e))
    }
}

/// Copy `root/rel` into `dest/rel`, recursing into subdirectories.
fn copy_tree(root: &Path, dest: &Path, rel: &Path, exclude: &ExcludePatterns) -> FsResult<usize> {
    let src_dir = root.join(rel);
    let dest_dir = dest.join(rel);
    fs::create_dir_all(&dest_dir).map_err(|e| FsError::at(&dest_dir, e))?;

    let mut entries = fs::read_dir(&src_dir)
        .map_err(|e| FsError::at(&src_dir, e))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| FsError::at(&src_dir, e))?;
    // Stable order keeps partial copies predictable.
    entries.sort_by_key(|entry| entry.file_name());

    let mut copied = 0;
    for entry in entries {
        let entry_rel = rel.join(entry.file_name());
        let src = root.join(&entry_rel);
        let is_dir = src.is_dir();

        if exclude.is_excluded(&entry_rel, is_dir) {
            tracing::trace!(path = %entry_rel.display(), "excluded from copy");
            continue;
        }

        if is_dir {
            copied += copy_tree(root, dest, &entry_rel, exclude)?;
        } else {
            let target = dest.join(&entry_rel);
            fs::copy(&src, &target).map_err(|e| FsError::at(&target, e))?;
            copied += 1;
        }
    }

    Ok(copied)
}
