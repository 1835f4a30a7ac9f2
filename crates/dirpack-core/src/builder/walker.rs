//! Recursive enumeration of the source directory.

use crate::PackError;
use crate::Result;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Kind of an enumerated path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file (or a symlink to one, when following symlinks).
    File,
    /// Directory (or a symlink to one, when following symlinks).
    Directory,
    /// Symlink that is not followed.
    Symlink,
}

/// A path found under the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Path as enumerated: the source directory joined with the relative
    /// location, never a resolved symlink target.
    pub path: PathBuf,

    /// What the path refers to.
    pub kind: EntryKind,
}

/// Walks a source tree in a stable, name-sorted order.
///
/// The root itself is not yielded. Enumeration is lazy, one directory at a
/// time.
///
/// # Examples
///
/// ```no_run
/// use dirpack_core::builder::walker::EntryKind;
/// use dirpack_core::builder::walker::SourceWalker;
/// use std::path::Path;
///
/// for entry in SourceWalker::new(Path::new("bin"), true).walk() {
///     let entry = entry?;
///     if entry.kind == EntryKind::File {
///         println!("{}", entry.path.display());
///     }
/// }
/// # Ok::<(), dirpack_core::PackError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SourceWalker<'a> {
    root: &'a Path,
    follow_symlinks: bool,
}

impl<'a> SourceWalker<'a> {
    /// Creates a walker rooted at `root`.
    #[must_use]
    pub fn new(root: &'a Path, follow_symlinks: bool) -> Self {
        Self {
            root,
            follow_symlinks,
        }
    }

    /// Returns an iterator over every path below the root.
    ///
    /// # Errors
    ///
    /// Items are [`PackError::Walk`] when a directory cannot be read, the root
    /// does not exist, a followed symlink is dangling, or a symlink loop is
    /// found.
    pub fn walk(&self) -> impl Iterator<Item = Result<SourceEntry>> + '_ {
        WalkDir::new(self.root)
            .min_depth(1)
            .follow_links(self.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .map(move |entry| {
                let entry = entry.map_err(|source| PackError::Walk {
                    path: source
                        .path()
                        .map_or_else(|| self.root.to_path_buf(), Path::to_path_buf),
                    source,
                })?;

                let file_type = entry.file_type();
                let kind = if file_type.is_dir() {
                    EntryKind::Directory
                } else if file_type.is_symlink() {
                    EntryKind::Symlink
                } else {
                    EntryKind::File
                };

                Ok(SourceEntry {
                    path: entry.into_path(),
                    kind,
                })
            })
    }
}

/// Recognizes the archive being written when it lies inside the source tree.
///
/// The archive file exists (and grows) while the walk runs, so it would
/// otherwise be picked up as a source file and stored truncated inside itself.
#[derive(Debug, Clone)]
pub(crate) struct ArchiveGuard {
    canonical: PathBuf,
}

impl ArchiveGuard {
    /// Resolves `destination`, which must already exist.
    pub(crate) fn new(destination: &Path) -> Result<Self> {
        Ok(Self {
            canonical: fs::canonicalize(destination)?,
        })
    }

    /// Returns `true` if `path` is the archive itself, under any spelling.
    pub(crate) fn is_archive(&self, path: &Path) -> Result<bool> {
        if path.file_name() != self.canonical.file_name() {
            return Ok(false);
        }
        Ok(fs::canonicalize(path)? == self.canonical)
    }
}
