//! Packaging operation reporting.

use std::path::Path;
use std::time::Duration;

/// Report of a packaging run.
///
/// # Examples
///
/// ```
/// use dirpack_core::PackReport;
///
/// let mut report = PackReport::default();
/// report.bytes_read = 1000;
/// report.archive_size = 250;
///
/// assert_eq!(report.compression_ratio(), 4.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PackReport {
    /// Name of the strategy that wrote the archive.
    pub strategy: &'static str,

    /// Number of file entries written.
    pub files_added: usize,

    /// Number of explicit directory entries written.
    pub directories_added: usize,

    /// Number of files left out by the exclusion filter.
    pub files_excluded: usize,

    /// Number of symlinks skipped because symlink following is disabled.
    pub symlinks_skipped: usize,

    /// Total uncompressed bytes read from source files.
    pub bytes_read: u64,

    /// Size of the finished archive on disk.
    pub archive_size: u64,

    /// Duration of the packaging run.
    pub duration: Duration,
}

impl PackReport {
    /// Creates an empty report for the named strategy.
    #[must_use]
    pub fn new(strategy: &'static str) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Returns the compression ratio (uncompressed / archive size).
    ///
    /// Returns 0.0 if either side is 0.
    #[must_use]
    pub fn compression_ratio(&self) -> f64 {
        if self.archive_size == 0 || self.bytes_read == 0 {
            return 0.0;
        }
        self.bytes_read as f64 / self.archive_size as f64
    }

    /// Returns total number of entries written.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.files_added + self.directories_added
    }
}

/// Callback trait for progress reporting while an archive is written.
///
/// # Examples
///
/// ```
/// use dirpack_core::ProgressCallback;
/// use std::path::Path;
///
/// struct Printer;
///
/// impl ProgressCallback for Printer {
///     fn on_entry_start(&mut self, path: &Path, current: usize) {
///         println!("[{current}] {}", path.display());
///     }
///
///     fn on_bytes_read(&mut self, _bytes: u64) {}
///
///     fn on_entry_complete(&mut self, _path: &Path) {}
///
///     fn on_complete(&mut self) {
///         println!("done");
///     }
/// }
/// ```
pub trait ProgressCallback: Send {
    /// Called before an entry is written.
    ///
    /// `current` is the 1-indexed number of the entry. Enumeration is lazy,
    /// so no total is known up front.
    fn on_entry_start(&mut self, path: &Path, current: usize);

    /// Called for every chunk copied from a source file.
    fn on_bytes_read(&mut self, bytes: u64);

    /// Called after an entry has been written.
    fn on_entry_complete(&mut self, path: &Path);

    /// Called once the archive is finished.
    fn on_complete(&mut self);
}

/// Progress callback that ignores every event.
#[derive(Debug, Default)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _path: &Path, _current: usize) {}

    fn on_bytes_read(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}
