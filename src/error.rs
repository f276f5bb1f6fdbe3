//! Error types for cpy-deploy
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;
use crate::domain::services::ResolveError;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for deploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// The script to deploy does not exist
    #[error("script not found: {path}")]
    ScriptNotFound { path: PathBuf },

    /// A required descriptor file is missing
    #[error("descriptor not found: {path}")]
    DescriptorNotFound { path: PathBuf },

    /// Descriptor exists but could not be parsed
    #[error("invalid descriptor {file}: {message}")]
    InvalidDescriptor { file: PathBuf, message: String },

    /// A merged configuration value is unusable
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidConfig { key: String, message: String },

    /// A copy failed part way through the deployment
    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: FsError,
    },

    /// The run was interrupted between items
    #[error("deployment interrupted after {completed} item(s)")]
    Interrupted { completed: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ResolveError> for DeployError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::InvalidDevice { device } => DeployError::InvalidConfig {
                key: "device".to_string(),
                message: format!("'{}' must be a plain volume name", device),
            },
        }
    }
}
