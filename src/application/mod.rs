//! Application Layer
//!
//! Use cases that orchestrate domain services through ports.

pub mod deploy;

pub use deploy::{DeployOptions, DeployReport, DeployUseCase, LibraryOutcome};
