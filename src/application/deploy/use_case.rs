//! Deploy Use Case
//!
//! Orchestrates one deployment into an already-resolved destination:
//! 1. Copy the script as `deploy_as`
//! 2. For each declared library, in order: directory, packed file, or skip
//!
//! Items are copied strictly one after another. The `running` flag is checked
//! before each item so Ctrl-C stops the run between copies.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::ports::{DeployEvent, DeployEventSink, FileSystem, FsError, NoopEventSink};
use crate::domain::services::LibraryResolver;
use crate::domain::value_objects::{Destination, ExcludePatterns, LibraryKind};
use crate::error::{DeployError, DeployResult};

use super::options::DeployOptions;
use super::result::{DeployReport, LibraryOutcome};

/// Deploy use case, parameterized by the file system port.
pub struct DeployUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
    running: Arc<AtomicBool>,
}

impl<FS> DeployUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS) -> Self {
        Self {
            file_system,
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Share a flag that is cleared when the run should stop.
    pub fn with_running_flag(mut self, running: Arc<AtomicBool>) -> Self {
        self.running = running;
        self
    }

    pub fn file_system(&self) -> &FS {
        &self.file_system
    }

    /// Execute without reporting progress.
    pub fn execute(
        &self,
        options: &DeployOptions,
        destination: &Destination,
    ) -> DeployResult<DeployReport> {
        self.execute_with_events(options, destination, &NoopEventSink)
    }

    /// Execute, reporting each item to `events` as it completes.
    ///
    /// The first copy failure ends the run; items already copied stay.
    /// Once `Started` has been emitted, the run ends with either
    /// `Completed` or `Failed`.
    pub fn execute_with_events(
        &self,
        options: &DeployOptions,
        destination: &Destination,
        events: &dyn DeployEventSink,
    ) -> DeployResult<DeployReport> {
        if !self.file_system.is_file(&options.script) {
            return Err(DeployError::ScriptNotFound {
                path: options.script.clone(),
            });
        }

        let result = self.run(options, destination, events);
        if let Err(e) = &result {
            events.on_event(DeployEvent::Failed {
                error: e.to_string(),
            });
        }
        result
    }

    fn run(
        &self,
        options: &DeployOptions,
        destination: &Destination,
        events: &dyn DeployEventSink,
    ) -> DeployResult<DeployReport> {
        events.on_event(DeployEvent::Started {
            script: options.script.clone(),
            destination: destination.path().to_path_buf(),
            fallback: destination.is_fallback(),
            library_count: options.libraries.len(),
            dry_run: options.dry_run,
        });

        let mut completed = 0;
        self.check_running(completed)?;

        let script_target = destination.path().join(&options.deploy_as);
        if !options.dry_run {
            self.deploy_script(&options.script, destination.path(), &options.deploy_as)?;
        }
        events.on_event(DeployEvent::ScriptDeployed {
            source: options.script.clone(),
            target: script_target.clone(),
        });
        completed += 1;

        let resolver = LibraryResolver::new(&options.library_root, &options.packed_extension);
        let mut libraries = Vec::with_capacity(options.libraries.len());
        let mut removal_failures = Vec::new();

        for name in &options.libraries {
            self.check_running(completed)?;

            let Some((kind, source)) = resolver.resolve(&self.file_system, name).into_parts()
            else {
                tracing::info!(library = %name, "library not found, skipping");
                events.on_event(DeployEvent::LibrarySkipped { name: name.clone() });
                libraries.push(LibraryOutcome::Skipped { name: name.clone() });
                completed += 1;
                continue;
            };
            let target = resolver.target_for(name, kind, destination);

            if !options.dry_run {
                match kind {
                    LibraryKind::Directory => {
                        if let Some(failure) = self.deploy_library_directory(
                            name,
                            &source,
                            &target,
                            &options.exclude,
                        )? {
                            events.on_event(DeployEvent::RemovalFailed {
                                path: target.clone(),
                                error: failure,
                            });
                            removal_failures.push(target.clone());
                        }
                    }
                    LibraryKind::PackedFile => {
                        self.deploy_library_file(name, &source, &target)?;
                    }
                }
            }

            events.on_event(DeployEvent::LibraryDeployed {
                name: name.clone(),
                kind,
                source: source.clone(),
                target: target.clone(),
            });
            let outcome = LibraryOutcome::Deployed {
                name: name.clone(),
                kind,
                source,
                target,
            };
            libraries.push(outcome);
            completed += 1;
        }

        let report = DeployReport {
            destination: destination.clone(),
            script_target,
            libraries,
            removal_failures,
            dry_run: options.dry_run,
        };

        events.on_event(DeployEvent::Completed {
            scripts: 1,
            directories: report.directory_count(),
            files: report.file_count(),
            skipped: report.skipped().len(),
        });

        Ok(report)
    }

    /// Copy the script to `destination_dir/destination_filename`, overwriting.
    ///
    /// `destination_dir` must already exist; it is never created here.
    pub fn deploy_script(
        &self,
        script: &Path,
        destination_dir: &Path,
        destination_filename: &str,
    ) -> DeployResult<PathBuf> {
        let target = destination_dir.join(destination_filename);
        if !self.file_system.is_dir(destination_dir) {
            return Err(DeployError::Copy {
                from: script.to_path_buf(),
                to: target,
                source: FsError::NotFound(destination_dir.to_path_buf()),
            });
        }
        tracing::debug!(from = %script.display(), to = %target.display(), "copying script");
        self.file_system
            .copy_file(script, &target)
            .map_err(|source| DeployError::Copy {
                from: script.to_path_buf(),
                to: target.clone(),
                source,
            })?;
        Ok(target)
    }

    /// Replace `destination_dir` with a fresh copy of `source_dir`.
    ///
    /// Returns `Ok(Some(message))` when the old directory could not be fully
    /// removed; the copy still runs, but stale files may remain.
    pub fn deploy_library_directory(
        &self,
        name: &str,
        source_dir: &Path,
        destination_dir: &Path,
        exclude: &ExcludePatterns,
    ) -> DeployResult<Option<String>> {
        let mut removal_failure = None;

        if self.file_system.exists(destination_dir) {
            if let Err(e) = self.file_system.remove_dir_all(destination_dir) {
                tracing::warn!(
                    library = name,
                    path = %destination_dir.display(),
                    error = %e,
                    "failed to remove previous library copy"
                );
                removal_failure = Some(e.to_string());
            }
        }

        let copied = self
            .file_system
            .copy_dir(source_dir, destination_dir, exclude)
            .map_err(|source| DeployError::Copy {
                from: source_dir.to_path_buf(),
                to: destination_dir.to_path_buf(),
                source,
            })?;
        tracing::debug!(library = name, files = copied, "copied library directory");

        Ok(removal_failure)
    }

    /// Copy a single packed library file, overwriting.
    pub fn deploy_library_file(
        &self,
        name: &str,
        source_file: &Path,
        destination_file: &Path,
    ) -> DeployResult<u64> {
        let bytes = self
            .file_system
            .copy_file(source_file, destination_file)
            .map_err(|source| DeployError::Copy {
                from: source_file.to_path_buf(),
                to: destination_file.to_path_buf(),
                source,
            })?;
        tracing::debug!(library = name, bytes, "copied packed library");
        Ok(bytes)
    }

    fn check_running(&self, completed: usize) -> DeployResult<()> {
        if self.running.load(Ordering::SeqCst) {
            Ok(())
        } else {
            tracing::warn!(completed, "deployment interrupted");
            Err(DeployError::Interrupted { completed })
        }
    }
}
