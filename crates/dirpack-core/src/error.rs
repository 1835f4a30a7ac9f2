//! Error types for directory packaging operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `PackError`.
pub type Result<T> = std::result::Result<T, PackError>;

/// Errors that can occur while packaging a directory into an archive.
#[derive(Error, Debug)]
pub enum PackError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory enumeration failed.
    #[error("failed to enumerate {path}: {source}")]
    Walk {
        /// Path being enumerated when the failure happened.
        path: PathBuf,
        /// Underlying walker error.
        #[source]
        source: walkdir::Error,
    },

    /// The ZIP writer rejected an operation.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// An exclusion pattern is not a valid regular expression.
    #[error("invalid exclusion pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// Compilation error reported by the regex engine.
        #[source]
        source: regex::Error,
    },

    /// An enumerated file does not live under the source directory.
    #[error("'{}' is not a subdirectory of '{}'", path.display(), root.display())]
    OutsideSource {
        /// The offending file path.
        path: PathBuf,
        /// The source directory it was expected under.
        root: PathBuf,
    },

    /// A relative path cannot be expressed as a ZIP entry name.
    #[error("path is not valid UTF-8: {}", path.display())]
    InvalidEntryName {
        /// The relative path that failed conversion.
        path: PathBuf,
    },

    /// Compression level is outside the supported range.
    #[error("invalid compression level {level}, must be 1-9")]
    InvalidCompressionLevel {
        /// The rejected level.
        level: u8,
    },

    /// Task parameters are missing or inconsistent.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What is wrong with the configuration.
        reason: String,
    },
}

impl PackError {
    /// Returns `true` if this error comes from the task's inputs rather than
    /// from the filesystem.
    ///
    /// Configuration errors are reported with the offending value and are
    /// never worth retrying with the same parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirpack_core::PackError;
    ///
    /// let err = PackError::InvalidCompressionLevel { level: 12 };
    /// assert!(err.is_configuration_error());
    ///
    /// let err = PackError::Io(std::io::Error::other("disk full"));
    /// assert!(!err.is_configuration_error());
    /// ```
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidPattern { .. }
                | Self::OutsideSource { .. }
                | Self::InvalidEntryName { .. }
                | Self::InvalidCompressionLevel { .. }
                | Self::InvalidConfiguration { .. }
        )
    }

    /// Returns the path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Walk { path, .. }
            | Self::OutsideSource { path, .. }
            | Self::InvalidEntryName { path } => Some(path),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_outside_source_message() {
        let err = PackError::OutsideSource {
            path: PathBuf::from("/a/bc/file.txt"),
            root: PathBuf::from("/a/b"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/a/bc/file.txt"));
        assert!(msg.contains("is not a subdirectory of"));
        assert!(msg.contains("/a/b"));
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let err = PackError::InvalidPattern {
            pattern: "(unclosed".to_string(),
            source,
        };
        assert!(err.to_string().contains("(unclosed"));
        assert!(err.source().is_some());
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_io_is_not_configuration_error() {
        let err: PackError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(!err.is_configuration_error());
        assert!(err.path().is_none());
    }

    #[test]
    fn test_zip_error_conversion() {
        let err: PackError = zip::result::ZipError::FileNotFound.into();
        assert!(matches!(err, PackError::Zip(_)));
        assert!(!err.is_configuration_error());
    }

    #[test]
    fn test_error_path() {
        let err = PackError::InvalidEntryName {
            path: PathBuf::from("bad"),
        };
        assert_eq!(err.path(), Some(std::path::Path::new("bad")));
    }
}
