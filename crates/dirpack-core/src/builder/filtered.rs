//! Archiving with per-file exclusion.

use crate::ExclusionFilter;
use crate::PackReport;
use crate::ProgressCallback;
use crate::Result;
use crate::builder::entry::entry_name;
use crate::builder::strategy::ArchiveStrategy;
use crate::builder::walker::ArchiveGuard;
use crate::builder::walker::EntryKind;
use crate::builder::walker::SourceWalker;
use crate::builder::zip::ZipSink;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Archives the files under the source directory that no exclusion pattern
/// matches. Only files produce entries; directories are implied by names.
#[derive(Debug, Clone)]
pub struct Filtered {
    filter: ExclusionFilter,
    compression_level: u8,
    follow_symlinks: bool,
}

impl Filtered {
    /// Creates the strategy around an already compiled filter.
    #[must_use]
    pub fn new(filter: ExclusionFilter, compression_level: u8, follow_symlinks: bool) -> Self {
        Self {
            filter,
            compression_level,
            follow_symlinks,
        }
    }

    /// The filter applied to every candidate file.
    #[must_use]
    pub fn filter(&self) -> &ExclusionFilter {
        &self.filter
    }
}

impl ArchiveStrategy for Filtered {
    fn name(&self) -> &'static str {
        "filtered"
    }

    fn write(
        &self,
        source: &Path,
        destination: &Path,
        progress: &mut dyn ProgressCallback,
    ) -> Result<PackReport> {
        let start = Instant::now();
        let mut report = PackReport::new(self.name());
        let mut sink = ZipSink::create(destination, self.compression_level)?;
        let guard = ArchiveGuard::new(destination)?;
        let mut current = 0;

        for entry in SourceWalker::new(source, self.follow_symlinks).walk() {
            let entry = entry?;

            match entry.kind {
                EntryKind::Directory => continue,
                EntryKind::Symlink => {
                    debug!("Skipping symlink {}", entry.path.display());
                    report.symlinks_skipped += 1;
                    continue;
                }
                EntryKind::File => {}
            }

            if guard.is_archive(&entry.path)? {
                debug!(
                    "Skipping {}, it is the archive being written.",
                    entry.path.display()
                );
                continue;
            }

            if self.filter.is_excluded(&entry.path) {
                debug!("Excluding {} from archive.", entry.path.display());
                report.files_excluded += 1;
                continue;
            }

            let name = entry_name(source, &entry.path)?;
            current += 1;
            progress.on_entry_start(&entry.path, current);
            report.bytes_read += sink.add_file(&entry.path, &name, progress)?;
            report.files_added += 1;
            progress.on_entry_complete(&entry.path);
        }

        let file = sink.finish()?;
        report.archive_size = file.metadata()?.len();
        report.duration = start.elapsed();
        progress.on_complete();

        Ok(report)
    }
}
