//! Step progress for long-running commands

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress over a fixed number of named steps
///
/// Draws to stderr only when it is a terminal, so piped output and test
/// runs stay clean.
pub struct ProgressTracker {
    bar: ProgressBar,
}

impl ProgressTracker {
    pub fn new(steps: u64, description: &str) -> Self {
        let bar = ProgressBar::with_draw_target(Some(steps), ProgressDrawTarget::stderr());
        let style = ProgressStyle::default_bar()
            .template("{prefix} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        bar.set_prefix(description.to_string());

        ProgressTracker { bar }
    }

    /// Show the step about to run
    pub fn start_step(&self, name: &str) {
        self.bar.set_message(name.to_string());
    }

    pub fn complete_step(&self) {
        self.bar.inc(1);
    }

    /// Complete the last step and leave `summary` on screen
    pub fn finish(&self, summary: &str) {
        self.bar.inc(1);
        self.bar.finish_with_message(summary.to_string());
    }

    /// Steps completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}
