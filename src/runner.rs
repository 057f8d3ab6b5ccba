//! Running registered solutions against a day's real input.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::error::Error;
use crate::puzzle::{Day, Puzzle};
use crate::registry::Registry;
use crate::solution::Solution;
use crate::workspace::Workspace;

/// One part's answer and how long it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartReport {
    pub answer: String,
    pub elapsed: Duration,
}

/// Result of parsing once and running both parts once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub parse: Duration,
    pub part_one: PartReport,
    pub part_two: PartReport,
}

impl SolveReport {
    /// Time spent in the two parts, excluding parsing.
    pub fn parts_elapsed(&self) -> Duration {
        self.part_one.elapsed + self.part_two.elapsed
    }
}

/// Parse `input` with `S`, then run each part once, timing every call.
pub fn execute<S: Solution>(input: &str) -> Result<SolveReport> {
    let start = Instant::now();
    let data = S::parse(input).context("failed to parse input")?;
    let parse = start.elapsed();

    let start = Instant::now();
    let answer = S::part_one(&data).context("part one failed")?;
    let part_one = PartReport {
        answer: answer.to_string(),
        elapsed: start.elapsed(),
    };

    let start = Instant::now();
    let answer = S::part_two(&data).context("part two failed")?;
    let part_two = PartReport {
        answer: answer.to_string(),
        elapsed: start.elapsed(),
    };

    Ok(SolveReport {
        parse,
        part_one,
        part_two,
    })
}

/// Run a single day. Errors from the solution propagate; panics are not caught.
pub fn solve(registry: &Registry, workspace: &Workspace, puzzle: Puzzle) -> Result<SolveReport> {
    let entry = registry.get(puzzle).ok_or(Error::UnknownSolution(puzzle))?;
    let input = workspace.read_input(puzzle)?;
    log::debug!("running {puzzle} on {} bytes of input", input.len());
    (entry.run)(&input)
}

/// How a day fared in a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(SolveReport),
    /// Nothing to run against, typically a missing input file.
    Skipped(String),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOutcome {
    pub puzzle: Puzzle,
    pub outcome: Outcome,
}

/// Per-day outcomes of [`run_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub outcomes: Vec<DayOutcome>,
}

impl BatchSummary {
    pub fn solved(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Solved(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    pub fn failed_days(&self) -> Vec<Day> {
        self.outcomes
            .iter()
            .filter(|d| matches!(d.outcome, Outcome::Failed(_)))
            .map(|d| d.puzzle.day)
            .collect()
    }

    /// Sum of part timings over solved days.
    pub fn total_elapsed(&self) -> Duration {
        self.outcomes
            .iter()
            .filter_map(|d| match &d.outcome {
                Outcome::Solved(report) => Some(report.parts_elapsed()),
                _ => None,
            })
            .sum()
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|d| pred(&d.outcome)).count()
    }
}

/// Days a batch run covers: registered ones plus any scaffolded on disk.
pub fn batch_days(registry: &Registry, workspace: &Workspace, year: u16) -> Result<Vec<Day>> {
    let mut days = registry.days(year);
    days.extend(workspace.scaffolded_days(year)?);
    days.sort();
    days.dedup();
    Ok(days)
}

/// Run one day, turning every failure (including panics) into an [`Outcome`].
pub fn run_isolated(registry: &Registry, workspace: &Workspace, puzzle: Puzzle) -> DayOutcome {
    let outcome = match registry.get(puzzle) {
        None => Outcome::Failed("solution is not compiled into this binary; rebuild".to_string()),
        Some(entry) => match workspace.read_input(puzzle) {
            Err(err) => match err.downcast_ref::<Error>() {
                Some(Error::MissingArtifact { .. }) => {
                    Outcome::Skipped("input file not found".to_string())
                }
                _ => Outcome::Failed(format!("{err:#}")),
            },
            Ok(input) => match panic::catch_unwind(AssertUnwindSafe(|| (entry.run)(&input))) {
                Ok(Ok(report)) => Outcome::Solved(report),
                Ok(Err(err)) => Outcome::Failed(format!("{err:#}")),
                Err(payload) => Outcome::Failed(format!("panicked: {}", panic_message(&*payload))),
            },
        },
    };
    if let Outcome::Failed(reason) = &outcome {
        log::warn!("{puzzle} failed: {reason}");
    }
    DayOutcome { puzzle, outcome }
}

/// Run every day of `year`, continuing past failures. `on_day` sees each outcome as it lands.
pub fn run_all(
    registry: &Registry,
    workspace: &Workspace,
    year: u16,
    mut on_day: impl FnMut(&DayOutcome),
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    for day in batch_days(registry, workspace, year)? {
        let outcome = run_isolated(registry, workspace, Puzzle::from_day(year, day));
        on_day(&outcome);
        summary.outcomes.push(outcome);
    }
    Ok(summary)
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Milliseconds with two decimals, e.g. `1.25ms`.
pub fn format_millis(elapsed: Duration) -> String {
    format!("{:.2}ms", elapsed.as_secs_f64() * 1000.0)
}
