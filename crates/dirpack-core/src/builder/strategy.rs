//! Selection between whole-directory and filtered archiving.

use crate::ExclusionFilter;
use crate::PackConfig;
use crate::PackReport;
use crate::ProgressCallback;
use crate::Result;
use crate::builder::filtered::Filtered;
use crate::builder::whole::WholeDirectory;
use std::path::Path;

/// A way of turning a source directory into an archive.
pub trait ArchiveStrategy {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Writes the archive for `source` at `destination`.
    ///
    /// `destination` must not exist; its parent must.
    fn write(
        &self,
        source: &Path,
        destination: &Path,
        progress: &mut dyn ProgressCallback,
    ) -> Result<PackReport>;
}

/// Picks the strategy for `config`.
///
/// Without exclusion patterns (unset or empty) the whole tree is archived;
/// otherwise every pattern is compiled here, before any file is touched.
///
/// # Errors
///
/// Returns [`crate::PackError::InvalidPattern`] if a pattern does not compile.
///
/// # Examples
///
/// ```
/// use dirpack_core::PackConfig;
/// use dirpack_core::builder::select_strategy;
///
/// let config = PackConfig::new("bin", "bin.zip");
/// assert_eq!(select_strategy(&config)?.name(), "whole-directory");
///
/// let config = config.with_exclude_patterns(vec![r"\.pdb$".to_string()]);
/// assert_eq!(select_strategy(&config)?.name(), "filtered");
/// # Ok::<(), dirpack_core::PackError>(())
/// ```
pub fn select_strategy(config: &PackConfig) -> Result<Box<dyn ArchiveStrategy>> {
    match config.exclude_patterns.as_deref() {
        Some(patterns) if !patterns.is_empty() => {
            let filter = ExclusionFilter::new(patterns)?;
            Ok(Box::new(Filtered::new(
                filter,
                config.compression_level,
                config.follow_symlinks,
            )))
        }
        _ => Ok(Box::new(WholeDirectory::new(
            config.include_base_directory,
            config.compression_level,
            config.follow_symlinks,
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::PackError;

    #[test]
    fn test_no_patterns_selects_whole_directory() {
        let config = PackConfig::new("a", "b.zip");
        assert_eq!(select_strategy(&config).unwrap().name(), "whole-directory");
    }

    #[test]
    fn test_empty_patterns_selects_whole_directory() {
        let config = PackConfig::new("a", "b.zip").with_exclude_patterns(vec![]);
        assert_eq!(select_strategy(&config).unwrap().name(), "whole-directory");
    }

    #[test]
    fn test_patterns_select_filtered() {
        let config = PackConfig::new("a", "b.zip").with_exclude_patterns(vec!["x".to_string()]);
        assert_eq!(select_strategy(&config).unwrap().name(), "filtered");
    }

    #[test]
    fn test_invalid_pattern_rejected_at_selection() {
        let config =
            PackConfig::new("a", "b.zip").with_exclude_patterns(vec!["(".to_string()]);
        let Err(err) = select_strategy(&config) else {
            panic!("expected invalid pattern");
        };
        assert!(matches!(err, PackError::InvalidPattern { .. }));
    }
}
