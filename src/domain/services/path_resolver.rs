//! Path resolver
//!
//! Finds the directory to deploy into: the device mount point when it exists,
//! otherwise the local fallback directory (created on demand).

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::ports::{FileSystem, MountStrategy};
use crate::domain::value_objects::{is_plain_name, Destination};

/// A device name that cannot name a mount point.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("device '{device}' must be a plain volume name")]
    InvalidDevice { device: String },
}

pub struct PathResolver {
    strategy: Box<dyn MountStrategy>,
    fallback: Option<PathBuf>,
}

impl PathResolver {
    /// A resolver with fallback disabled.
    pub fn new(strategy: impl MountStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
            fallback: None,
        }
    }

    /// Use `path` when the device mount point does not exist.
    pub fn with_fallback(mut self, path: impl Into<PathBuf>) -> Self {
        self.fallback = Some(path.into());
        self
    }

    pub fn with_fallback_opt(mut self, path: Option<PathBuf>) -> Self {
        self.fallback = path;
        self
    }

    pub fn fallback(&self) -> Option<&Path> {
        self.fallback.as_deref()
    }

    /// Resolve the destination for `device`.
    ///
    /// `device` must be a single plain path component; `""`, `.`, `..` and
    /// anything containing a separator are rejected. If the fallback
    /// directory cannot be created the problem is logged and the path is
    /// returned anyway; the first copy reports it.
    pub fn resolve<FS: FileSystem + ?Sized>(
        &self,
        fs: &FS,
        device: &str,
    ) -> Result<Destination, ResolveError> {
        if !is_plain_name(device) {
            return Err(ResolveError::InvalidDevice {
                device: device.to_string(),
            });
        }

        let located = self.strategy.locate(device);
        tracing::debug!(
            strategy = self.strategy.label(),
            device,
            path = %located.display(),
            "located device mount point"
        );

        if fs.exists(&located) {
            return Ok(Destination::device(located));
        }

        let Some(fallback) = &self.fallback else {
            tracing::warn!(
                path = %located.display(),
                "device not found and fallback disabled"
            );
            return Ok(Destination::device(located));
        };

        tracing::info!(
            device,
            missing = %located.display(),
            fallback = %fallback.display(),
            "device not found, using fallback directory"
        );
        if !fs.exists(fallback) {
            if let Err(e) = fs.create_dir_all(fallback) {
                tracing::warn!(
                    path = %fallback.display(),
                    error = %e,
                    "failed to create fallback directory"
                );
            }
        }
        Ok(Destination::fallback(fallback.clone()))
    }
}
