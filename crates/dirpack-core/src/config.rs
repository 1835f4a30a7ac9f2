//! Task parameters for packaging a directory.

use crate::PackError;
use crate::Result;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// Highest DEFLATE level, used unless the caller asks for something faster.
pub const MAX_COMPRESSION_LEVEL: u8 = 9;

/// Parameters of a single packaging run.
///
/// Field names serialize in PascalCase so a build host can hand over its
/// parameter bag unchanged (`SourceDirectory`, `DestinationArchive`, ...).
///
/// # Examples
///
/// ```
/// use dirpack_core::PackConfig;
///
/// let config = PackConfig::new("bin/Release", "artifacts/app.zip")
///     .with_overwrite_destination(true)
///     .with_exclude_patterns(vec![r"\.pdb$".to_string()]);
///
/// assert!(config.has_exclusions());
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default, deny_unknown_fields)]
pub struct PackConfig {
    /// Root of the tree to archive.
    pub source_directory: PathBuf,

    /// Path of the archive to create.
    pub destination_archive: PathBuf,

    /// Delete a pre-existing destination before writing.
    ///
    /// Default: `false` (warn and let the create fail).
    pub overwrite_destination: bool,

    /// Prefix entries with the source directory's own name.
    ///
    /// Only honored when no exclusion patterns are set.
    ///
    /// Default: `false`.
    pub include_base_directory: bool,

    /// Case-insensitive regular expressions matched against full file paths.
    ///
    /// `None` and an empty list both disable filtering.
    pub exclude_patterns: Option<Vec<String>>,

    /// DEFLATE level (1-9).
    ///
    /// Default: `9`.
    pub compression_level: u8,

    /// Descend into symlinked directories and archive symlinked files.
    ///
    /// Default: `true`.
    pub follow_symlinks: bool,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            source_directory: PathBuf::new(),
            destination_archive: PathBuf::new(),
            overwrite_destination: false,
            include_base_directory: false,
            exclude_patterns: None,
            compression_level: MAX_COMPRESSION_LEVEL,
            follow_symlinks: true,
        }
    }
}

impl PackConfig {
    /// Creates a configuration for the two required parameters.
    #[must_use]
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> Self {
        Self {
            source_directory: source.as_ref().to_path_buf(),
            destination_archive: destination.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Sets whether an existing destination is deleted first.
    #[must_use]
    pub fn with_overwrite_destination(mut self, overwrite: bool) -> Self {
        self.overwrite_destination = overwrite;
        self
    }

    /// Sets whether the source directory name prefixes every entry.
    #[must_use]
    pub fn with_include_base_directory(mut self, include: bool) -> Self {
        self.include_base_directory = include;
        self
    }

    /// Sets the exclusion patterns.
    #[must_use]
    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = Some(patterns);
        self
    }

    /// Sets the compression level.
    ///
    /// Out-of-range values are rejected by [`PackConfig::validate`].
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        self.compression_level = level;
        self
    }

    /// Sets whether symlinks are followed during enumeration.
    #[must_use]
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Returns `true` when at least one exclusion pattern is configured.
    #[must_use]
    pub fn has_exclusions(&self) -> bool {
        self.exclude_patterns
            .as_ref()
            .is_some_and(|patterns| !patterns.is_empty())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `SourceDirectory` or `DestinationArchive` is empty
    /// - Compression level is not in range 1-9
    pub fn validate(&self) -> Result<()> {
        if self.source_directory.as_os_str().is_empty() {
            return Err(PackError::InvalidConfiguration {
                reason: "SourceDirectory is required".to_string(),
            });
        }
        if self.destination_archive.as_os_str().is_empty() {
            return Err(PackError::InvalidConfiguration {
                reason: "DestinationArchive is required".to_string(),
            });
        }
        if !(1..=MAX_COMPRESSION_LEVEL).contains(&self.compression_level) {
            return Err(PackError::InvalidCompressionLevel {
                level: self.compression_level,
            });
        }
        Ok(())
    }

    /// Parses task parameters from a JSON document.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirpack_core::PackConfig;
    ///
    /// let config = PackConfig::from_json_str(
    ///     r#"{"SourceDirectory": "out", "DestinationArchive": "out.zip", "ExcludePatterns": ["\\.log$"]}"#,
    /// )?;
    /// assert_eq!(config.exclude_patterns, Some(vec![r"\.log$".to_string()]));
    /// assert!(!config.overwrite_destination);
    /// # Ok::<(), dirpack_core::PackError>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PackError::InvalidConfiguration {
            reason: format!("cannot parse task parameters: {e}"),
        })
    }

    /// Reads task parameters from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_config_default() {
        let config = PackConfig::default();
        assert!(!config.overwrite_destination);
        assert!(!config.include_base_directory);
        assert_eq!(config.exclude_patterns, None);
        assert_eq!(config.compression_level, 9);
        assert!(config.follow_symlinks);
        assert!(!config.has_exclusions());
    }

    #[test]
    fn test_pack_config_builder() {
        let config = PackConfig::new("src", "out/a.zip")
            .with_overwrite_destination(true)
            .with_include_base_directory(true)
            .with_exclude_patterns(vec!["obj".to_string()])
            .with_compression_level(3)
            .with_follow_symlinks(false);

        assert_eq!(config.source_directory, PathBuf::from("src"));
        assert_eq!(config.destination_archive, PathBuf::from("out/a.zip"));
        assert!(config.overwrite_destination);
        assert!(config.include_base_directory);
        assert_eq!(config.exclude_patterns, Some(vec!["obj".to_string()]));
        assert_eq!(config.compression_level, 3);
        assert!(!config.follow_symlinks);
    }

    #[test]
    fn test_has_exclusions_empty_list() {
        let config = PackConfig::new("a", "b.zip").with_exclude_patterns(vec![]);
        assert!(!config.has_exclusions());
    }

    #[test]
    fn test_validate_missing_source() {
        let config = PackConfig::new("", "b.zip");
        assert!(matches!(
            config.validate().unwrap_err(),
            PackError::InvalidConfiguration { .. }
        ));
    }

    #[test]
    fn test_validate_missing_destination() {
        let config = PackConfig::new("a", "");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("DestinationArchive"));
    }

    #[test]
    fn test_validate_compression_level() {
        for level in [0, 10, 255] {
            let config = PackConfig::new("a", "b.zip").with_compression_level(level);
            assert!(matches!(
                config.validate().unwrap_err(),
                PackError::InvalidCompressionLevel { level: l } if l == level
            ));
        }
        for level in 1..=9 {
            let config = PackConfig::new("a", "b.zip").with_compression_level(level);
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_from_json_pascal_case() {
        let config = PackConfig::from_json_str(
            r#"{
                "SourceDirectory": "bin",
                "DestinationArchive": "pkg/bin.zip",
                "OverwriteDestination": true,
                "IncludeBaseDirectory": true
            }"#,
        )
        .unwrap();

        assert_eq!(config.source_directory, PathBuf::from("bin"));
        assert_eq!(config.destination_archive, PathBuf::from("pkg/bin.zip"));
        assert!(config.overwrite_destination);
        assert!(config.include_base_directory);
        assert_eq!(config.exclude_patterns, None);
        assert_eq!(config.compression_level, 9);
    }

    #[test]
    fn test_from_json_rejects_unknown_field() {
        let result = PackConfig::from_json_str(r#"{"SourceDir": "bin"}"#);
        assert!(matches!(
            result.unwrap_err(),
            PackError::InvalidConfiguration { .. }
        ));
    }

    #[test]
    fn test_from_json_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let params = temp.path().join("params.json");
        std::fs::write(
            &params,
            r#"{"SourceDirectory": "a", "DestinationArchive": "b.zip", "ExcludePatterns": []}"#,
        )
        .unwrap();

        let config = PackConfig::from_json_file(&params).unwrap();
        assert_eq!(config.exclude_patterns, Some(vec![]));
        assert!(!config.has_exclusions());
    }

    #[test]
    fn test_from_json_file_missing() {
        let result = PackConfig::from_json_file("/nonexistent/params.json");
        assert!(matches!(result.unwrap_err(), PackError::Io(_)));
    }
}
