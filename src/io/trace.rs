//! Human-readable step log of a search
//!
//! Lines are written to the sink as each step happens. Owned step records are only kept
//! when asked for with [`StepLog::with_records`], since a search can take exponentially
//! many steps.

use crate::solver::backtrack::{SolveOutcome, Step, StepKind, StepObserver};
use std::fmt;
use std::io::{self, Write};

/// Owned copy of one search step
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepRecord {
    /// 1-based step number
    pub number: usize,
    /// Assignment or reversion
    pub kind: StepKind,
    /// Region touched
    pub region_id: String,
    /// Color value assigned or reverted
    pub color: String,
}

impl StepRecord {
    fn from_step(step: &Step<'_>) -> Self {
        Self {
            number: step.number,
            kind: step.kind,
            region_id: step.region_id().to_string(),
            color: step.color_value().to_string(),
        }
    }
}

/// Writes one line per observed step to `out`
///
/// Observers cannot fail, so the first write error is held back and returned by
/// [`StepLog::finish`]; nothing more is written after it.
#[derive(Debug)]
pub struct StepLog<W: Write> {
    out: W,
    records: Option<Vec<StepRecord>>,
    last: Option<StepRecord>,
    steps: usize,
    backtracks: usize,
    write_error: Option<io::Error>,
}

impl<W: Write> StepLog<W> {
    /// Create a log writing to `out`, starting with the opening line
    pub fn new(out: W) -> Self {
        let mut log = Self {
            out,
            records: None,
            last: None,
            steps: 0,
            backtracks: 0,
            write_error: None,
        };
        log.write_line(format_args!("Starting map coloring algorithm..."));
        log
    }

    /// Also keep an owned record of every step
    #[must_use]
    pub fn with_records(mut self) -> Self {
        self.records = Some(Vec::new());
        self
    }

    /// Write the closing line for a finished search and flush the sink
    ///
    /// # Errors
    ///
    /// Returns the first error the sink reported, during the search or now
    pub fn finish(&mut self, outcome: &SolveOutcome, max_colors: usize) -> io::Result<()> {
        match outcome {
            SolveOutcome::Solved(_) => self.write_line(format_args!(
                "Success! Map colored with {max_colors} colors."
            )),
            SolveOutcome::Unsatisfiable => self.write_line(format_args!(
                "Failed to color the map with {max_colors} colors."
            )),
            SolveOutcome::Interrupted => self.write_line(format_args!("Search interrupted.")),
        }
        if self.write_error.is_none()
            && let Err(error) = self.out.flush()
        {
            self.write_error = Some(error);
        }
        self.write_error.take().map_or(Ok(()), Err)
    }

    /// Recorded steps, empty unless [`StepLog::with_records`] was used
    pub fn records(&self) -> &[StepRecord] {
        self.records.as_deref().unwrap_or_default()
    }

    /// Number of steps observed
    pub const fn step_count(&self) -> usize {
        self.steps
    }

    /// Number of reversions observed
    pub const fn backtrack_count(&self) -> usize {
        self.backtracks
    }

    /// Most recent step
    pub const fn last(&self) -> Option<&StepRecord> {
        self.last.as_ref()
    }

    /// Borrow the sink
    pub const fn get_ref(&self) -> &W {
        &self.out
    }

    /// Give back the sink
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: fmt::Arguments<'_>) {
        if self.write_error.is_some() {
            return;
        }
        if let Err(error) = writeln!(self.out, "{line}") {
            self.write_error = Some(error);
        }
    }
}

impl<W: Write> StepObserver for StepLog<W> {
    fn on_step(&mut self, step: &Step<'_>) {
        self.steps += 1;
        match step.kind {
            StepKind::Assign => self.write_line(format_args!(
                "Step {}: Trying {} for region \"{}\"",
                step.number,
                step.color_value(),
                step.region_name()
            )),
            StepKind::Backtrack => {
                self.backtracks += 1;
                self.write_line(format_args!(
                    "Step {}: Backtracking from region \"{}\" - no valid color found",
                    step.number,
                    step.region_name()
                ));
            }
        }

        let record = StepRecord::from_step(step);
        if let Some(ref mut records) = self.records {
            records.push(record.clone());
        }
        self.last = Some(record);
    }
}
