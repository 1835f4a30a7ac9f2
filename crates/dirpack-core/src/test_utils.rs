//! Test utilities for building source trees and reading archives back.
//!
//! # Panics
//!
//! All functions in this module panic on I/O errors since they are designed
//! for test use only.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::collections::BTreeMap;
use std::fs;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Writes `files` under `root`, creating parent directories as needed.
///
/// Each entry is a (relative path, content) pair using `/` separators.
///
/// # Examples
///
/// ```
/// use dirpack_core::test_utils::write_tree;
///
/// let temp = tempfile::TempDir::new().unwrap();
/// write_tree(temp.path(), &[("a.txt", b"a"), ("sub/b.txt", b"b")]);
/// assert!(temp.path().join("sub/b.txt").exists());
/// ```
pub fn write_tree(root: &Path, files: &[(&str, &[u8])]) {
    fs::create_dir_all(root).unwrap();
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

/// Reads every entry of a ZIP archive into a name-sorted map.
///
/// Directory entries map to empty content.
#[must_use]
pub fn read_zip_entries(archive: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut archive = zip::ZipArchive::new(File::open(archive).unwrap()).unwrap();
    let mut entries = BTreeMap::new();

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).unwrap();
        let mut content = Vec::new();
        entry.read_to_end(&mut content).unwrap();
        entries.insert(entry.name().to_string(), content);
    }

    entries
}
