//! Create command implementation.

use crate::cli::CreateArgs;
use crate::error::convert_pack_error;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Result;
use dirpack_core::PackTask;

/// Packages the source directory described by `args`.
///
/// Failures are logged by the task the same way a build host would see them,
/// then returned as a hinted error for the formatter.
pub fn execute(
    args: &CreateArgs,
    formatter: &dyn OutputFormatter,
    hide_progress: bool,
) -> Result<()> {
    let task = PackTask::new(args.to_config()?);

    let result = if !hide_progress && CliProgress::should_show() {
        let mut progress = CliProgress::new("Compressing");
        task.run_with_progress(&mut progress)
    } else {
        task.run()
    };

    match result {
        Ok(report) => formatter.format_pack_result(&task.config().destination_archive, &report),
        Err(err) => {
            task.log_failure(&err);
            Err(convert_pack_error(err, task.config()))
        }
    }
}
