//! Mapping of source file paths to archive entry names.

use crate::PackError;
use crate::Result;
use std::path::Component;
use std::path::Path;

/// Computes the archive entry name of `file` relative to `root`.
///
/// The prefix is stripped component by component, so `/a/b` is never treated
/// as a prefix of `/a/bc/file`. The returned name has no leading separator and
/// joins components with `/` on every platform, as ZIP requires.
///
/// Returns an empty string when `file` is `root` itself.
///
/// # Errors
///
/// Returns [`PackError::OutsideSource`] if `file` is not under `root`, and
/// [`PackError::InvalidEntryName`] if a component is not valid UTF-8.
///
/// # Examples
///
/// ```
/// use dirpack_core::builder::entry_name;
/// use std::path::Path;
///
/// let name = entry_name(Path::new("/a/b"), Path::new("/a/b/c/d.txt"))?;
/// assert_eq!(name, "c/d.txt");
///
/// assert!(entry_name(Path::new("/a/b"), Path::new("/a/bc/d.txt")).is_err());
/// # Ok::<(), dirpack_core::PackError>(())
/// ```
pub fn entry_name(root: &Path, file: &Path) -> Result<String> {
    let outside = || PackError::OutsideSource {
        path: file.to_path_buf(),
        root: root.to_path_buf(),
    };

    let relative = file.strip_prefix(root).map_err(|_| outside())?;

    let mut name = String::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                let part = part.to_str().ok_or_else(|| PackError::InvalidEntryName {
                    path: relative.to_path_buf(),
                })?;
                if !name.is_empty() {
                    name.push('/');
                }
                name.push_str(part);
            }
            Component::CurDir => {}
            // `..` or a second root would place the entry outside the tree
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(outside());
            }
        }
    }

    Ok(name)
}

/// Joins an optional top-level prefix with an entry name.
pub(crate) fn prefixed(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(prefix) if name.is_empty() => prefix.to_string(),
        Some(prefix) => format!("{prefix}/{name}"),
        None => name.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_name_nested() {
        let name = entry_name(Path::new("/a/b"), Path::new("/a/b/c/d.txt")).unwrap();
        assert_eq!(name, "c/d.txt");
    }

    #[test]
    fn test_entry_name_top_level() {
        let name = entry_name(Path::new("/a/b"), Path::new("/a/b/x.txt")).unwrap();
        assert_eq!(name, "x.txt");
    }

    #[test]
    fn test_entry_name_trailing_separator_on_root() {
        let name = entry_name(Path::new("/a/b/"), Path::new("/a/b/c/d.txt")).unwrap();
        assert_eq!(name, "c/d.txt");
    }

    #[test]
    fn test_entry_name_relative_root() {
        let name = entry_name(Path::new("out"), Path::new("out/sub/z.txt")).unwrap();
        assert_eq!(name, "sub/z.txt");

        let name = entry_name(Path::new("./out"), Path::new("./out/z.txt")).unwrap();
        assert_eq!(name, "z.txt");
    }

    #[test]
    fn test_entry_name_partial_prefix_rejected() {
        let err = entry_name(Path::new("/a/b"), Path::new("/a/bc/d.txt")).unwrap_err();
        assert!(matches!(err, PackError::OutsideSource { .. }));
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_entry_name_unrelated_path() {
        let err = entry_name(Path::new("/a/b"), Path::new("/x/y.txt")).unwrap_err();
        assert!(err.to_string().contains("is not a subdirectory of"));
    }

    #[test]
    fn test_entry_name_parent_component_rejected() {
        let err = entry_name(Path::new("/a/b"), Path::new("/a/b/../c.txt")).unwrap_err();
        assert!(matches!(err, PackError::OutsideSource { .. }));
    }

    #[test]
    fn test_entry_name_root_itself() {
        let name = entry_name(Path::new("/a/b"), Path::new("/a/b")).unwrap();
        assert_eq!(name, "");
    }

    #[test]
    fn test_entry_name_never_starts_with_separator() {
        for file in ["/r/a", "/r/a/b", "/r/a/b/c.txt"] {
            let name = entry_name(Path::new("/r"), Path::new(file)).unwrap();
            assert!(!name.starts_with('/'), "{name}");
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_entry_name_non_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let root = Path::new("/r");
        let file = root.join(OsStr::from_bytes(b"bad\xff.txt"));
        let err = entry_name(root, &file).unwrap_err();
        assert!(matches!(err, PackError::InvalidEntryName { .. }));
    }

    #[test]
    fn test_prefixed() {
        assert_eq!(prefixed(Some("base"), "a/b.txt"), "base/a/b.txt");
        assert_eq!(prefixed(Some("base"), ""), "base");
        assert_eq!(prefixed(None, "a/b.txt"), "a/b.txt");
    }
}
