//! Value Objects
//!
//! Immutable types identified by their value rather than identity.

mod destination;
mod exclude_patterns;
mod library;
mod platform;

pub use destination::{Destination, DestinationOrigin};
pub use exclude_patterns::{ExcludeError, ExcludePatterns, DEFAULT_EXCLUDES};
pub use library::{
    is_plain_name, packed_file_name, LibraryKind, LibrarySource, DEFAULT_PACKED_EXTENSION,
};
pub use platform::{Platform, PlatformKind};
