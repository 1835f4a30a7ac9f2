//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use dirpack_core::PackReport;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn summary_lines(&self, report: &PackReport) -> Vec<String> {
        let mut lines = vec![
            format!("  Files added:      {}", report.files_added),
            format!("  Directories:      {}", report.directories_added),
        ];

        if report.files_excluded > 0 {
            lines.push(format!("  Files excluded:   {}", report.files_excluded));
        }
        if report.symlinks_skipped > 0 {
            lines.push(format!("  Symlinks skipped: {}", report.symlinks_skipped));
        }

        lines.push(format!(
            "  Source size:      {}",
            Self::format_size(report.bytes_read)
        ));
        lines.push(format!(
            "  Archive size:     {}",
            Self::format_size(report.archive_size)
        ));

        if self.verbose {
            if report.archive_size > 0 && report.bytes_read > 0 {
                lines.push(format!(
                    "  Ratio:            {:.2}:1",
                    report.compression_ratio()
                ));
            }
            lines.push(format!("  Strategy:         {}", report.strategy));
            lines.push(format!("  Duration:         {:?}", report.duration));
        }

        lines
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_pack_result(&self, archive: &Path, report: &PackReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "{} Archive created: {}",
                style("✓").green().bold(),
                archive.display()
            ));
        } else {
            let _ = self
                .term
                .write_line(&format!("Archive created: {}", archive.display()));
        }

        for line in self.summary_lines(report) {
            let _ = self.term.write_line(&line);
        }

        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        let term = Term::stderr();
        if self.use_colors {
            let _ = term.write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = term.write_line(&format!("ERROR: {error:?}"));
        }
    }
}
