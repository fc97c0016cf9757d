//! Terminal progress display for running searches

use crate::io::configuration::{PROGRESS_TICK_INTERVAL_MS, PROGRESS_UPDATE_STEPS};
use crate::solver::backtrack::{SearchStats, SolveOutcome, Step, StepKind, StepObserver};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {prefix} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Word used in the final spinner line for how a search ended
pub const fn outcome_label(outcome: &SolveOutcome) -> &'static str {
    match outcome {
        SolveOutcome::Solved(_) => "solved",
        SolveOutcome::Unsatisfiable => "no coloring",
        SolveOutcome::Interrupted => "interrupted",
    }
}

/// Spinner showing step, backtrack and depth counters of one search
///
/// Redraws are throttled to every `PROGRESS_UPDATE_STEPS` steps so that observing a long
/// search stays cheap.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    region_count: usize,
    steps: usize,
    backtracks: usize,
    depth: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no active display
    pub const fn new() -> Self {
        Self {
            bar: None,
            region_count: 0,
            steps: 0,
            backtracks: 0,
            depth: 0,
        }
    }

    /// Start the spinner for a map with `region_count` regions
    pub fn start(&mut self, label: &str, region_count: usize) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_prefix(label.to_string());
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_INTERVAL_MS));

        self.bar = Some(bar);
        self.region_count = region_count;
        self.steps = 0;
        self.backtracks = 0;
        self.depth = 0;
        self.refresh();
    }

    /// Stop the spinner and leave a final summary line
    pub fn finish(&mut self, outcome: &SolveOutcome, stats: &SearchStats) {
        if let Some(bar) = self.bar.take() {
            bar.finish_with_message(format!(
                "{} after {} steps ({} backtracks)",
                outcome_label(outcome),
                stats.steps,
                stats.backtracks
            ));
        }
    }

    /// Steps observed since the last start
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Reversions observed since the last start
    pub const fn backtracks(&self) -> usize {
        self.backtracks
    }

    fn refresh(&self) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!(
                "steps {} | backtracks {} | depth {}/{}",
                self.steps, self.backtracks, self.depth, self.region_count
            ));
        }
    }
}

impl StepObserver for ProgressManager {
    fn on_step(&mut self, step: &Step<'_>) {
        self.steps = step.number;
        match step.kind {
            StepKind::Assign => self.depth = step.depth + 1,
            StepKind::Backtrack => {
                self.backtracks += 1;
                self.depth = step.depth;
            }
        }
        if self.steps % PROGRESS_UPDATE_STEPS == 0 {
            self.refresh();
        }
    }
}
