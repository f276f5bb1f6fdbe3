//! Custom assertion macros for integration and scenario tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

use std::path::Path;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files
}

/// Assert that a path exists under the deploy target (board or fallback).
///
/// # Example
/// ```ignore
/// assert_deployed!(env, "lib/adafruit_foo/__init__.mpy");
/// ```
#[macro_export]
macro_rules! assert_deployed {
    ($env:expr, $path:expr) => {
        let full_path = $env.target_dir().join($path);
        assert!(
            full_path.exists(),
            "Expected '{}' under {:?}, but it doesn't exist.\n\
             Files found:\n  {}",
            $path,
            $env.target_dir(),
            $crate::common::list_all_files(&$env.target_dir()).join("\n  ")
        );
    };
}

/// Assert that a path does NOT exist under the deploy target.
#[macro_export]
macro_rules! assert_not_deployed {
    ($env:expr, $path:expr) => {
        let full_path = $env.target_dir().join($path);
        assert!(
            !full_path.exists(),
            "Expected '{}' to NOT exist under {:?}, but it does.",
            $path,
            $env.target_dir()
        );
    };
}

/// Assert that output (stdout or stderr) contains expected pattern.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that the command succeeded, printing its output otherwise.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.is_success(),
            "Expected success, got exit code {}\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $result.exit_code,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that the command failed.
#[macro_export]
macro_rules! assert_failure {
    ($result:expr) => {
        assert!(
            !$result.is_success(),
            "Expected failure, but command succeeded\n\
             stdout:\n{}",
            $result.stdout
        );
    };
}
