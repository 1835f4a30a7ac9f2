//! Archiving of a complete directory tree.

use crate::PackError;
use crate::PackReport;
use crate::ProgressCallback;
use crate::Result;
use crate::builder::entry::entry_name;
use crate::builder::entry::prefixed;
use crate::builder::strategy::ArchiveStrategy;
use crate::builder::walker::ArchiveGuard;
use crate::builder::walker::EntryKind;
use crate::builder::walker::SourceWalker;
use crate::builder::zip::ZipSink;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

/// Archives every file under the source directory.
///
/// Directories with nothing written beneath them get explicit `name/`
/// entries so that extraction recreates them.
#[derive(Debug, Clone)]
pub struct WholeDirectory {
    include_base_directory: bool,
    compression_level: u8,
    follow_symlinks: bool,
}

impl WholeDirectory {
    /// Creates the strategy.
    ///
    /// With `include_base_directory`, entries are nested under the source
    /// directory's own name.
    #[must_use]
    pub fn new(include_base_directory: bool, compression_level: u8, follow_symlinks: bool) -> Self {
        Self {
            include_base_directory,
            compression_level,
            follow_symlinks,
        }
    }
}

impl ArchiveStrategy for WholeDirectory {
    fn name(&self) -> &'static str {
        "whole-directory"
    }

    fn write(
        &self,
        source: &Path,
        destination: &Path,
        progress: &mut dyn ProgressCallback,
    ) -> Result<PackReport> {
        let start = Instant::now();
        let mut report = PackReport::new(self.name());

        let base = if self.include_base_directory {
            base_directory_name(source)?
        } else {
            None
        };

        let mut sink = ZipSink::create(destination, self.compression_level)?;
        let guard = ArchiveGuard::new(destination)?;
        let mut covered = CoveredDirs::default();
        let mut directories = Vec::new();
        let mut current = 0;

        for entry in SourceWalker::new(source, self.follow_symlinks).walk() {
            let entry = entry?;

            match entry.kind {
                EntryKind::File => {
                    if guard.is_archive(&entry.path)? {
                        debug!(
                            "Skipping {}, it is the archive being written.",
                            entry.path.display()
                        );
                        continue;
                    }
                    let name = prefixed(base.as_deref(), &entry_name(source, &entry.path)?);
                    current += 1;
                    progress.on_entry_start(&entry.path, current);
                    report.bytes_read += sink.add_file(&entry.path, &name, progress)?;
                    report.files_added += 1;
                    covered.mark_parents(&entry.path, source);
                    progress.on_entry_complete(&entry.path);
                }
                EntryKind::Directory => directories.push(entry.path),
                EntryKind::Symlink => {
                    debug!("Skipping symlink {}", entry.path.display());
                    report.symlinks_skipped += 1;
                }
            }
        }

        // Children precede their parents in reverse walk order, so a
        // directory holding only empty subdirectories is implied by theirs.
        for dir in directories.iter().rev() {
            if covered.contains(dir) {
                continue;
            }
            let name = prefixed(base.as_deref(), &entry_name(source, dir)?);
            sink.add_directory(&name)?;
            report.directories_added += 1;
            covered.mark_parents(dir, source);
        }

        if report.total_entries() == 0
            && let Some(base) = base.as_deref()
        {
            sink.add_directory(base)?;
            report.directories_added += 1;
        }

        let file = sink.finish()?;
        report.archive_size = file.metadata()?.len();
        report.duration = start.elapsed();
        progress.on_complete();

        Ok(report)
    }
}

/// Directories that already have an entry written somewhere beneath them.
#[derive(Debug, Default)]
struct CoveredDirs {
    dirs: HashSet<PathBuf>,
}

impl CoveredDirs {
    /// Marks every ancestor of `path` below `root`.
    fn mark_parents(&mut self, path: &Path, root: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor == root || !self.dirs.insert(ancestor.to_path_buf()) {
                break;
            }
        }
    }

    fn contains(&self, dir: &Path) -> bool {
        self.dirs.contains(dir)
    }
}

/// Name of the source directory itself, resolved so that `.` or `..` yield
/// the real directory name. `None` for a filesystem root.
fn base_directory_name(source: &Path) -> Result<Option<String>> {
    let canonical = std::fs::canonicalize(source)?;
    canonical
        .file_name()
        .map(|name| {
            name.to_str()
                .map(str::to_string)
                .ok_or_else(|| PackError::InvalidEntryName {
                    path: canonical.clone(),
                })
        })
        .transpose()
}
