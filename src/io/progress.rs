//! Multi-pattern progress tracking with automatic batching for large runs

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display while patterns grow
///
/// Shows one bar per pattern for small runs and adds a batch bar once more
/// patterns are requested than there are individual bars.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    pattern_bars: Vec<ProgressBar>,
    pattern_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static LEVEL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.green/black}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Patterns: [{bar:40.green/black}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            pattern_bars: Vec::new(),
            pattern_count: 0,
        }
    }

    /// Initialize progress bars for `pattern_count` patterns
    pub fn initialize(&mut self, pattern_count: usize) {
        self.pattern_count = pattern_count;

        if pattern_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(pattern_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..pattern_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(LEVEL_STYLE.clone());
            self.pattern_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Number of patterns the manager was initialized for
    pub const fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    // Bars are reused round-robin once the run exceeds the individual bar limit
    fn bar_for(&self, index: usize) -> Option<&ProgressBar> {
        self.pattern_bars
            .get(index % MAX_INDIVIDUAL_PROGRESS_BARS.max(1))
    }

    /// Reset the bar for a new pattern
    pub fn start_pattern(&self, index: usize, name: &str, max_levels: u32) {
        if let Some(bar) = self.bar_for(index) {
            bar.set_length(u64::from(max_levels));
            bar.set_position(0);
            bar.set_prefix(name.to_string());
            bar.set_message(String::new());
        }
    }

    /// Report a completed level
    pub fn update_level(&self, index: usize, level: u32, frontier_size: usize) {
        if let Some(bar) = self.bar_for(index) {
            bar.set_position(u64::from(level));
            bar.set_message(format!("level {level}, {frontier_size} growing"));
        }
    }

    /// Mark a pattern as finished after `levels` levels
    pub fn complete_pattern(&self, index: usize, levels: u32) {
        if let Some(bar) = self.bar_for(index) {
            bar.set_length(u64::from(levels));
            bar.set_position(u64::from(levels));
            bar.set_message(format!("✓ {levels} levels"));
        }

        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All patterns generated");
        }
        let _ = self.multi_progress.clear();
    }
}
