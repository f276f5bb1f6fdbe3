//! Exclude patterns value object
//!
//! Decides which entries of a library directory are left behind when it is
//! copied to the device. Patterns use gitignore semantics.

use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// Version-control metadata directories excluded by default.
pub const DEFAULT_EXCLUDES: &[&str] = &[".git", ".svn", ".hg"];

/// Compiled set of exclude patterns.
///
/// Uses the `ignore` crate for gitignore-compatible pattern matching.
#[derive(Debug, Clone)]
pub struct ExcludePatterns {
    matcher: Gitignore,
    patterns: Vec<String>,
}

impl Default for ExcludePatterns {
    fn default() -> Self {
        Self::version_control()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExcludeError {
    #[error("invalid exclude pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("failed to build exclude matcher: {0}")]
    BuildFailed(String),
}

impl ExcludePatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            patterns: Vec::new(),
        }
    }

    /// The default set: `.git`, `.svn`, `.hg`.
    pub fn version_control() -> Self {
        let patterns: Vec<String> = DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect();
        Self::from_patterns(&patterns).unwrap_or_else(|_| Self::empty())
    }

    /// Compile patterns. Blank lines and `#` comments are ignored.
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ExcludeError> {
        let mut builder = GitignoreBuilder::new(PathBuf::new());
        let mut kept = Vec::new();

        for pattern in patterns {
            let trimmed = pattern.as_ref().trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            builder
                .add_line(None, trimmed)
                .map_err(|e| ExcludeError::InvalidPattern {
                    pattern: trimmed.to_string(),
                    message: e.to_string(),
                })?;
            kept.push(trimmed.to_string());
        }

        let matcher = builder
            .build()
            .map_err(|e| ExcludeError::BuildFailed(e.to_string()))?;

        Ok(Self {
            matcher,
            patterns: kept,
        })
    }

    /// Check if an entry should be skipped.
    ///
    /// `rel_path` is relative to the library directory being copied.
    pub fn is_excluded(&self, rel_path: &Path, is_dir: bool) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        self.matcher.matched(rel_path, is_dir).is_ignore()
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
