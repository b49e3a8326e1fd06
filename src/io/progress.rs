//! Terminal progress display across the decode and compose stages

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{prefix:>9}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar shared by every per-image step of a run
///
/// Each source image counts twice: once when decoded and once when composited.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a bar covering both stages for `image_count` images
    pub fn new(image_count: usize) -> Self {
        let bar = ProgressBar::new(image_count as u64 * 2);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Create a bar that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Label the bar with the stage now running
    pub fn start_stage(&self, stage: &'static str) {
        self.bar.set_prefix(stage);
    }

    /// Record one finished step, showing `detail` next to the bar
    pub fn advance(&self, detail: &str) {
        self.bar.set_message(detail.to_string());
        self.bar.inc(1);
    }

    /// Steps completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
