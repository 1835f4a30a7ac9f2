//! Progress spinner for CLI packaging runs.

use console::Term;
use dirpack_core::ProgressCallback;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use std::path::Path;
use std::time::Duration;

/// CLI spinner implementing `ProgressCallback`.
///
/// The number of files is not known before the walk finishes, so this shows
/// a running count with bytes read and throughput instead of a bar. The bar
/// position tracks bytes read. Cleans up on drop.
pub struct CliProgress {
    bar: ProgressBar,
    message: String,
    files: usize,
    bytes_read: u64,
}

impl CliProgress {
    /// Creates a spinner labeled with `message` (e.g. "Compressing").
    #[must_use]
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();

        // Template: "⠋ Compressing 42 files (15.2 MiB, 5.1 MiB/s, 3s)"
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg} ({binary_bytes}, {binary_bytes_per_sec}, {elapsed})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self {
            bar,
            message: message.to_string(),
            files: 0,
            bytes_read: 0,
        }
    }

    /// Checks if we should show progress (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stderr().is_term()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressCallback for CliProgress {
    fn on_entry_start(&mut self, _path: &Path, current: usize) {
        self.files = current;
        self.bar
            .set_message(format!("{} {} files", self.message, self.files));
    }

    fn on_bytes_read(&mut self, bytes: u64) {
        self.bytes_read += bytes;
        self.bar.set_position(self.bytes_read);
    }

    fn on_entry_complete(&mut self, _path: &Path) {
        self.bar.tick();
    }

    fn on_complete(&mut self) {
        self.bar.finish_and_clear();
    }
}
