//! Deploy application service

mod options;
mod result;
mod use_case;


pub use options::DeployOptions;
pub use result::{DeployReport, LibraryOutcome};
pub use use_case::DeployUseCase;
