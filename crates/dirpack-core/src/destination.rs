//! Preparation of the destination archive path.

use crate::Result;
use std::fs;
use std::path::Path;
use tracing::debug;
use tracing::warn;

/// What the destination looked like before the archive is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationState {
    /// Nothing existed at the destination.
    Fresh,
    /// A previous file was deleted because overwriting is enabled.
    Replaced,
    /// A previous file exists and was kept; creating the archive will fail.
    Conflict,
}

/// Readies `destination` for a new archive.
///
/// Deletes an existing file when `overwrite` is set, otherwise warns and
/// leaves it in place. Then makes sure the parent directory exists.
///
/// # Errors
///
/// Returns an error if the existing file cannot be deleted or the parent
/// directory cannot be created.
///
/// # Examples
///
/// ```no_run
/// use dirpack_core::destination::DestinationState;
/// use dirpack_core::destination::prepare_destination;
/// use std::path::Path;
///
/// let state = prepare_destination(Path::new("artifacts/app.zip"), true)?;
/// assert_ne!(state, DestinationState::Conflict);
/// # Ok::<(), dirpack_core::PackError>(())
/// ```
pub fn prepare_destination(destination: &Path, overwrite: bool) -> Result<DestinationState> {
    let state = clear_destination(destination, overwrite)?;
    ensure_parent_directory(destination)?;
    Ok(state)
}

/// Deletes an existing destination when `overwrite` is set, otherwise warns.
///
/// Touches nothing but the destination file itself.
///
/// # Errors
///
/// Returns an error if the existing file cannot be deleted.
pub fn clear_destination(destination: &Path, overwrite: bool) -> Result<DestinationState> {
    if !destination.is_file() {
        return Ok(DestinationState::Fresh);
    }

    if overwrite {
        debug!(
            "{} already existed, deleting before zipping...",
            destination.display()
        );
        fs::remove_file(destination)?;
        Ok(DestinationState::Replaced)
    } else {
        warn!(
            "'{}' already exists. Did you forget to set 'overwrite_destination' to true?",
            destination.display()
        );
        Ok(DestinationState::Conflict)
    }
}

/// Creates the destination's parent directory and any missing ancestors.
///
/// # Errors
///
/// Returns an error if a directory cannot be created.
pub fn ensure_parent_directory(destination: &Path) -> Result<()> {
    // A bare file name has an empty parent, meaning the working directory.
    if let Some(parent) = destination.parent()
        && !parent.as_os_str().is_empty()
        && !parent.is_dir()
    {
        debug!("creating directory {}", parent.display());
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
