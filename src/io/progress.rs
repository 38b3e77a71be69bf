//! Batch progress display

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Single batch bar over all input files
///
/// The message slot carries the file currently being generated; per-step
/// detail is deliberately omitted since attempts restart on contradiction
/// and a per-cell position would run backwards.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with a hidden bar
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Size the bar to the batch and start drawing
    pub fn initialize(&mut self, file_count: usize) {
        self.bar = ProgressBar::new(file_count as u64);
        self.bar.set_style(BATCH_STYLE.clone());
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    /// Announce the file being processed
    pub fn start_file(&self, path: &Path) {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string());
        self.bar.set_message(name);
    }

    /// Record a finished file
    pub fn complete_file(&self) {
        self.bar.inc(1);
    }

    /// Clear the message and stop drawing
    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }
}
