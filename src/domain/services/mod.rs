//! Domain Services
//!
//! The decision-making parts of a deployment: where to deploy, and what each
//! declared library name refers to.

mod library_resolver;
mod path_resolver;

pub use library_resolver::LibraryResolver;
pub use path_resolver::{PathResolver, ResolveError};
