//! cpy-deploy - deploy CircuitPython scripts and libraries to a board
//!
//! A script is copied to the board under its deploy name, followed by each
//! declared library from a local bundle: a directory under `lib/` or a single
//! packed `.mpy` file. When the board is not mounted, a local fallback
//! directory stands in for it.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOptions, DeployReport, DeployUseCase, LibraryOutcome};
pub use config::{Config, Descriptor};
pub use domain::services::{LibraryResolver, PathResolver, ResolveError};
pub use domain::value_objects::{Destination, LibraryKind, LibrarySource, Platform};
pub use error::{DeployError, DeployResult};
