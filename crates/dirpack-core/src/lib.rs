//! Directory-to-ZIP packaging for build pipelines.
//!
//! `dirpack-core` archives a directory tree into a single ZIP file, optionally
//! leaving out files whose full path matches one of a set of case-insensitive
//! regular expressions. It is meant to run as a build step: one call, one
//! archive, success or failure.
//!
//! # Examples
//!
//! ```no_run
//! use dirpack_core::PackConfig;
//! use dirpack_core::PackTask;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PackConfig::new("target/release/bundle", "dist/bundle.zip")
//!     .with_overwrite_destination(true)
//!     .with_exclude_patterns(vec![r"\.pdb$".to_string(), r"[/\\]obj[/\\]".to_string()]);
//!
//! let report = PackTask::new(config).run()?;
//! println!("Packed {} files", report.files_added);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod destination;
pub mod error;
pub mod filter;
pub mod report;
pub mod task;
#[doc(hidden)]
pub mod test_utils;

// Re-export main API types
pub use builder::ArchiveStrategy;
pub use builder::entry_name;
pub use builder::select_strategy;
pub use config::PackConfig;
pub use destination::DestinationState;
pub use destination::prepare_destination;
pub use error::PackError;
pub use error::Result;
pub use filter::ExclusionFilter;
pub use report::NoopProgress;
pub use report::PackReport;
pub use report::ProgressCallback;
pub use task::PackTask;
pub use task::describe_error;
