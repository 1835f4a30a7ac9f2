//! Regex-based exclusion of files from the archive.
//!
//! Patterns are matched against the full path of each candidate file as it was
//! enumerated, not against its entry name. A pattern only needs to occur
//! somewhere in the path; anchor it with `^`/`$` to match more strictly.

use crate::PackError;
use crate::Result;
use regex::Regex;
use regex::RegexBuilder;
use std::path::Path;

/// A compiled set of case-insensitive exclusion patterns.
///
/// # Examples
///
/// ```
/// use dirpack_core::ExclusionFilter;
/// use std::path::Path;
///
/// let filter = ExclusionFilter::new(&[r"\.log$", "/obj/"])?;
///
/// assert!(filter.is_excluded(Path::new("/build/out/trace.LOG")));
/// assert!(filter.is_excluded(Path::new("/build/out/obj/a.dll")));
/// assert!(!filter.is_excluded(Path::new("/build/out/app.dll")));
/// # Ok::<(), dirpack_core::PackError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExclusionFilter {
    regexes: Vec<Regex>,
}

impl ExclusionFilter {
    /// Compiles every pattern once.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::InvalidPattern`] for the first pattern that is not
    /// a valid regular expression.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let regexes = patterns
            .iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| PackError::InvalidPattern {
                        pattern: pattern.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { regexes })
    }

    /// Returns `true` if any pattern occurs in the full path.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.regexes.is_empty() {
            return false;
        }
        let path = path.to_string_lossy();
        self.regexes.iter().any(|regex| regex.is_match(&path))
    }

    /// Returns `true` when no patterns are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regexes.is_empty()
    }

    /// Returns the number of compiled patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regexes.len()
    }

    /// Returns the patterns as they were supplied.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.regexes.iter().map(Regex::as_str)
    }
}
