//! FileSystem port - abstraction over the copy operations a deployment needs
//!
//! The deploy use case only talks to this trait, so tests can swap in a
//! recording or failing implementation without touching real disks.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ExcludePatterns;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io(std::io::Error),
    /// Other error
    Other(String),
}

impl FsError {
    /// Convert an I/O error, attaching the path it happened on.
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(PathBuf::new()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(PathBuf::new()),
            _ => FsError::Io(err),
        }
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io(err) => write!(f, "I/O error: {}", err),
            FsError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test doubles in `application::deploy::tests`
pub trait FileSystem {
    /// Check if anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Check if `path` is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if `path` is a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Copy a single file, overwriting `to` if present. Returns bytes copied.
    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<u64>;

    /// Recursively copy `from` into `to`, skipping anything `exclude` matches.
    /// Returns the number of files copied.
    fn copy_dir(&self, from: &Path, to: &Path, exclude: &ExcludePatterns) -> FsResult<usize>;

    /// Remove a directory tree
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;
}
