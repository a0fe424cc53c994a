//! Terminal spinner reporting rendered steps while sorting without a window

use crate::algorithm::executor::Algorithm;
use crate::io::configuration::PROGRESS_UPDATE_INTERVAL;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {prefix}: {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner showing how many steps the running algorithm has rendered
///
/// The total step count isn't known ahead of time, so this is a spinner
/// rather than a bar. Redraws are throttled to every
/// [`PROGRESS_UPDATE_INTERVAL`] steps.
pub struct StepProgress {
    bar: ProgressBar,
}

impl StepProgress {
    /// Create a visible spinner labelled with the algorithm name
    pub fn new(algorithm: Algorithm) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_prefix(algorithm.name());
        bar.set_message("0 steps");
        Self { bar }
    }

    /// Create a spinner that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden()),
        }
    }

    /// Report the current step count
    pub fn update(&self, steps: u64) {
        if steps % PROGRESS_UPDATE_INTERVAL == 0 {
            self.bar.set_position(steps);
            self.bar.set_message(format!("{steps} steps"));
        }
    }

    /// Record the final count and clear the spinner
    pub fn finish(&self, steps: u64) {
        self.bar.set_position(steps);
        self.bar.finish_and_clear();
    }

    /// Last reported step count
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}
