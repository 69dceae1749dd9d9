//! Byte-based progress display for download operations
//!
//! A single indicatif bar tracks aggregate bytes across the whole run:
//! the total is declared up front from the manifest's known sizes and the
//! bar advances once per completed file. When stderr is not a terminal
//! the bar is hidden and progress is logged instead.

use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress;

/// Aggregate download progress indicator
///
/// Tolerates a degenerate zero-byte total (empty manifest, or all sizes
/// unknown) without panicking: indicatif renders a full-width empty bar
/// and `finish` still clears it.
pub struct DownloadProgress {
    bar: ProgressBar,
}

impl DownloadProgress {
    /// Create a progress bar declaring `total_bytes` of expected transfer
    pub fn new(total_bytes: u64) -> Self {
        let bar = if atty::is(atty::Stream::Stderr) {
            ProgressBar::new(total_bytes)
        } else {
            ProgressBar::hidden()
        };

        bar.set_style(
            ProgressStyle::with_template(progress::BAR_TEMPLATE)
                .expect("progress template should be valid")
                .progress_chars(progress::BAR_CHARS),
        );
        bar.set_message(progress::BAR_MESSAGE);

        Self { bar }
    }

    /// Advance the bar by the given number of bytes
    pub fn advance(&self, bytes: u64) {
        self.bar.inc(bytes);
        if self.bar.is_hidden() {
            tracing::info!(
                "Progress: {}/{} bytes",
                self.bar.position(),
                self.bar.length().unwrap_or(0)
            );
        }
    }

    /// Current position in bytes
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Declared total in bytes
    pub fn total(&self) -> u64 {
        self.bar.length().unwrap_or(0)
    }

    /// Whether the bar has been finalized
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }

    /// Finalize and clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
