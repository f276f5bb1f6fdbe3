//! Presentation Layer
//!
//! - `cli` - argument parsing (via clap)
//! - `banner` - startup banner
//! - `factory` - wires use cases to infrastructure

pub mod banner;
pub mod cli;
pub mod factory;

pub use banner::render_banner;
pub use cli::Cli;
pub use factory::{create_deploy_use_case, create_event_sink, create_path_resolver};
