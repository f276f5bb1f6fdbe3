//! Common test utilities for cpy-deploy integration and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated environment with a library bundle, a media root and a fallback dir
//! - Assertion macros: `assert_deployed!`, `assert_output_contains!`, etc.
//! - Fixtures: Reusable descriptor and library content

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
