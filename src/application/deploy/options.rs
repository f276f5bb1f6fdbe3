//! Deploy Options
//!
//! Everything the deploy use case needs besides the resolved destination.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::value_objects::ExcludePatterns;
use crate::error::DeployResult;

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Script to copy
    pub script: PathBuf,
    /// File name of the script on the device
    pub deploy_as: String,
    /// Library names, in declaration order
    pub libraries: Vec<String>,
    /// Library bundle root (contains `lib/`)
    pub library_root: PathBuf,
    /// Extension of single-file libraries
    pub packed_extension: String,
    /// Entries left out of library directory copies
    pub exclude: ExcludePatterns,
    /// Resolve and report without copying
    pub dry_run: bool,
}

impl DeployOptions {
    pub fn new(script: impl Into<PathBuf>, deploy_as: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            deploy_as: deploy_as.into(),
            libraries: Vec::new(),
            library_root: PathBuf::from("."),
            packed_extension: crate::domain::value_objects::DEFAULT_PACKED_EXTENSION.to_string(),
            exclude: ExcludePatterns::default(),
            dry_run: false,
        }
    }

    /// Build options for `script` from a merged configuration.
    pub fn from_config(script: impl Into<PathBuf>, config: &Config) -> DeployResult<Self> {
        let script = script.into();
        let deploy_as = config.deploy_name(&script)?;
        Ok(Self::new(script, deploy_as)
            .with_libraries(config.libraries.clone())
            .with_library_root(config.libdir.clone())
            .with_packed_extension(config.packed_ext.clone())
            .with_exclude(config.exclude_patterns()?))
    }

    pub fn with_libraries(mut self, libraries: Vec<String>) -> Self {
        self.libraries = libraries;
        self
    }

    pub fn with_library_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.library_root = root.into();
        self
    }

    pub fn with_packed_extension(mut self, extension: impl Into<String>) -> Self {
        self.packed_extension = extension.into();
        self
    }

    pub fn with_exclude(mut self, exclude: ExcludePatterns) -> Self {
        self.exclude = exclude;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
