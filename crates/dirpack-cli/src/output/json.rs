//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use dirpack_core::PackReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

#[derive(Serialize)]
struct PackOutput<'a> {
    archive: &'a Path,
    strategy: &'a str,
    files_added: usize,
    directories_added: usize,
    files_excluded: usize,
    symlinks_skipped: usize,
    bytes_read: u64,
    archive_size: u64,
    duration_ms: u128,
}

impl<'a> PackOutput<'a> {
    fn new(archive: &'a Path, report: &'a PackReport) -> Self {
        Self {
            archive,
            strategy: report.strategy,
            files_added: report.files_added,
            directories_added: report.directories_added,
            files_excluded: report.files_excluded,
            symlinks_skipped: report.symlinks_skipped,
            bytes_read: report.bytes_read,
            archive_size: report.archive_size,
            duration_ms: report.duration.as_millis(),
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_pack_result(&self, archive: &Path, report: &PackReport) -> Result<()> {
        Self::output(&JsonOutput::success("create", PackOutput::new(archive, report)))
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::error("create", format!("{error:#}"));
        let _ = Self::output(&output);
    }
}
