//! Archive building.
//!
//! Two strategies share the same walker and ZIP writer:
//! [`WholeDirectory`] when no exclusion patterns are configured and
//! [`Filtered`] otherwise. [`select_strategy`] chooses between them.

pub mod entry;
pub mod filtered;
pub mod strategy;
pub mod walker;
pub mod whole;
pub mod zip;

pub use entry::entry_name;
pub use filtered::Filtered;
pub use strategy::ArchiveStrategy;
pub use strategy::select_strategy;
pub use whole::WholeDirectory;
