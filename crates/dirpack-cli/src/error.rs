//! Error conversion utilities for CLI.
//!
//! Converts dirpack-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use dirpack_core::PackConfig;
use dirpack_core::PackError;
use std::io::ErrorKind;

/// Converts `PackError` to a user-friendly anyhow error for the task `config`.
pub fn convert_pack_error(err: PackError, config: &PackConfig) -> anyhow::Error {
    let source = config.source_directory.display();
    let destination = config.destination_archive.display();

    match err {
        PackError::InvalidPattern {
            pattern,
            source: regex_err,
        } => {
            anyhow!(
                "Invalid exclusion pattern '{pattern}': {regex_err}\n\
                 HINT: Patterns are regular expressions matched against the full path. \
                 Escape literal dots as '\\.'."
            )
        }
        PackError::Io(io_err) if io_err.kind() == ErrorKind::AlreadyExists => {
            anyhow!(
                "Destination '{destination}' already exists\n\
                 HINT: Use --overwrite to replace it."
            )
        }
        PackError::Walk { path, source: walk_err } => {
            anyhow!(
                "Cannot read '{}' while packaging '{source}': {walk_err}\n\
                 HINT: Check that the source directory exists and is readable.",
                path.display()
            )
        }
        PackError::InvalidCompressionLevel { level } => {
            anyhow!("Invalid compression level {level}\nHINT: Use a level between 1 and 9.")
        }
        PackError::InvalidConfiguration { reason } => {
            anyhow!(
                "Invalid task parameters: {reason}\n\
                 HINT: Pass SOURCE_DIR and DESTINATION, or a --params file that sets them."
            )
        }
        _ => anyhow::Error::from(err)
            .context(format!("Failed to compress '{source}' into '{destination}'")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use dirpack_core::ExclusionFilter;
    use std::io;
    use std::path::PathBuf;

    fn config() -> PackConfig {
        PackConfig::new("bin/Release", "dist/app.zip")
    }

    #[test]
    fn test_convert_existing_destination() {
        let err = PackError::Io(io::Error::new(ErrorKind::AlreadyExists, "exists"));
        let msg = format!("{:?}", convert_pack_error(err, &config()));
        assert!(msg.contains("dist/app.zip"));
        assert!(msg.contains("--overwrite"));
    }

    #[test]
    fn test_convert_invalid_pattern() {
        let err = ExclusionFilter::new(&["("]).unwrap_err();
        let msg = format!("{:?}", convert_pack_error(err, &config()));
        assert!(msg.contains("Invalid exclusion pattern '('"));
        assert!(msg.contains("HINT"));
    }

    #[test]
    fn test_convert_other_error_keeps_cause() {
        let err = PackError::OutsideSource {
            path: PathBuf::from("/elsewhere/a.txt"),
            root: PathBuf::from("/build"),
        };
        let msg = format!("{:?}", convert_pack_error(err, &config()));
        assert!(msg.contains("Failed to compress 'bin/Release' into 'dist/app.zip'"));
        assert!(msg.contains("is not a subdirectory of"));
    }

    #[test]
    fn test_convert_plain_io_error() {
        let err = PackError::Io(io::Error::new(ErrorKind::PermissionDenied, "denied"));
        let msg = format!("{:?}", convert_pack_error(err, &config()));
        assert!(msg.contains("I/O error"));
        assert!(!msg.contains("--overwrite"));
    }
}
