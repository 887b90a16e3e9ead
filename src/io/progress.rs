//! Row-level progress display for long renders

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ROW_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} rows {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar tracking tile rows of a single render
pub struct RenderProgress {
    bar: ProgressBar,
}

impl RenderProgress {
    /// Create a bar labelled with the output name
    pub fn new(label: &str) -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(ROW_STYLE.clone());
        bar.set_prefix(label.to_string());
        Self { bar }
    }

    /// Record that `done` of `total` tile rows are finished
    pub fn update(&self, done: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(done as u64);
    }

    /// Rows reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish the bar with a closing message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    /// Stop the bar where it is, e.g. after a failed render
    pub fn abandon(&self) {
        self.bar.abandon();
    }
}
