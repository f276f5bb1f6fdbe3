//! Domain Layer
//!
//! Types and rules of a deployment, independent of the real filesystem:
//!
//! - `value_objects` - destinations, library references, platforms, excludes
//! - `ports` - traits implemented by the infrastructure layer
//! - `services` - path and library resolution

pub mod ports;
pub mod services;
pub mod value_objects;
