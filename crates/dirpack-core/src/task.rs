//! Top-level packaging task.
//!
//! [`PackTask::execute`] is the single boundary where errors stop: every
//! failure below it is a [`PackError`] propagated with `?`, and here it is
//! logged and turned into `false` for the build host.

use crate::NoopProgress;
use crate::PackConfig;
use crate::PackError;
use crate::PackReport;
use crate::ProgressCallback;
use crate::Result;
use crate::builder::select_strategy;
use crate::destination::clear_destination;
use crate::destination::ensure_parent_directory;
use std::error::Error as _;
use std::fmt::Write as _;
use tracing::debug;
use tracing::error;
use tracing::info;

/// Packages a source directory into a ZIP archive.
///
/// # Examples
///
/// ```no_run
/// use dirpack_core::PackConfig;
/// use dirpack_core::PackTask;
///
/// let config = PackConfig::new("bin/Release", "artifacts/app.zip")
///     .with_overwrite_destination(true)
///     .with_exclude_patterns(vec![r"\.pdb$".to_string()]);
///
/// if !PackTask::new(config).execute() {
///     std::process::exit(1);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PackTask {
    config: PackConfig,
}

impl PackTask {
    /// Creates a task for `config`.
    #[must_use]
    pub fn new(config: PackConfig) -> Self {
        Self { config }
    }

    /// The task parameters.
    #[must_use]
    pub fn config(&self) -> &PackConfig {
        &self.config
    }

    /// Runs the task, logging any failure, and reports success.
    #[must_use]
    pub fn execute(&self) -> bool {
        self.execute_with_progress(&mut NoopProgress).is_some()
    }

    /// Runs the task with progress reporting, logging any failure.
    ///
    /// Returns `None` if the task failed.
    pub fn execute_with_progress(
        &self,
        progress: &mut dyn ProgressCallback,
    ) -> Option<PackReport> {
        match self.run_with_progress(progress) {
            Ok(report) => Some(report),
            Err(err) => {
                self.log_failure(&err);
                None
            }
        }
    }

    /// Runs the task and returns the error instead of logging it.
    pub fn run(&self) -> Result<PackReport> {
        self.run_with_progress(&mut NoopProgress)
    }

    /// Runs the task with progress reporting.
    ///
    /// Order: validate parameters and compile patterns, clear the old
    /// destination, announce the run, create the parent directory, then
    /// write the archive. Nothing on disk changes when the
    /// parameters are invalid.
    ///
    /// # Errors
    ///
    /// Returns configuration errors (missing parameters, bad patterns, bad
    /// compression level) and every I/O, walk or ZIP error hit on the way.
    /// A partially written archive is left in place.
    pub fn run_with_progress(&self, progress: &mut dyn ProgressCallback) -> Result<PackReport> {
        let config = &self.config;
        config.validate()?;

        let strategy = select_strategy(config)?;
        let destination = &config.destination_archive;

        clear_destination(destination, config.overwrite_destination)?;

        info!(
            "Compressing {} into {}...",
            config.source_directory.display(),
            destination.display()
        );

        ensure_parent_directory(destination)?;

        // Patterns are matched against full paths, so enumerate from an
        // absolute root. Symlinks in the root are kept as written.
        let source = std::path::absolute(&config.source_directory)?;
        debug!(
            strategy = strategy.name(),
            source = %source.display(),
            "writing archive"
        );

        let report = strategy.write(&source, destination, progress)?;

        debug!(
            files = report.files_added,
            directories = report.directories_added,
            excluded = report.files_excluded,
            bytes = report.bytes_read,
            archive_size = report.archive_size,
            "archive written in {:?}",
            report.duration
        );

        Ok(report)
    }

    /// Logs `err` as the task's failure: one readable error line followed by
    /// the full cause chain at debug level.
    pub fn log_failure(&self, err: &PackError) {
        error!(
            "An error occurred while trying to compress '{}' into '{}'.",
            self.config.source_directory.display(),
            self.config.destination_archive.display()
        );
        debug!("{}", describe_error(err));
    }
}

/// Formats an error and all of its sources, one per line.
pub fn describe_error(err: &PackError) -> String {
    let mut text = format!("{err}");
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(text, "\n  caused by: {cause}");
        source = cause.source();
    }
    text
}
