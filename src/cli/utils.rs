//! Formatting helpers shared across command handlers.

use std::path::Path;

use advent::{DayOutcome, FileOutcome, Outcome, SolveReport, Stats, format_millis};

pub const RULE_WIDTH: usize = 40;

/// Horizontal separator line.
pub fn rule(ch: char) -> String {
    ch.to_string().repeat(RULE_WIDTH)
}

/// `Part 1: 42 (0.12ms)`, without the timing when `timed` is false.
pub fn part_line(part: u8, answer: &str, elapsed: std::time::Duration, timed: bool) -> String {
    if timed {
        format!("Part {part}: {answer} ({})", format_millis(elapsed))
    } else {
        format!("Part {part}: {answer}")
    }
}

/// Both parts of a single-day run, one per line.
pub fn report_lines(report: &SolveReport, timed: bool) -> Vec<String> {
    vec![
        part_line(1, &report.part_one.answer, report.part_one.elapsed, timed),
        part_line(2, &report.part_two.answer, report.part_two.elapsed, timed),
    ]
}

/// One summary line for a day of a batch run.
pub fn outcome_line(day: &DayOutcome, timed: bool) -> String {
    let label = format!("Day {}", day.puzzle.day);
    match &day.outcome {
        Outcome::Solved(report) if timed => format!(
            "{label}: {}, {} ({})",
            report.part_one.answer,
            report.part_two.answer,
            format_millis(report.parts_elapsed())
        ),
        Outcome::Solved(report) => format!(
            "{label}: {}, {}",
            report.part_one.answer, report.part_two.answer
        ),
        Outcome::Skipped(reason) => format!("{label}: skipped ({reason})"),
        Outcome::Failed(reason) => format!("{label}: FAILED {reason}"),
    }
}

/// `created` or `exists, left unchanged` next to a scaffolded path.
pub fn file_line(label: &str, path: &Path, outcome: FileOutcome) -> String {
    let note = match outcome {
        FileOutcome::Created => "created",
        FileOutcome::Skipped => "exists, left unchanged",
    };
    format!("  {label:<9}{} ({note})", path.display())
}

pub fn stats_line(label: &str, stats: &Stats) -> String {
    format!(
        "{label:<8}median {} (min {}, mean {}, max {})",
        format_millis(stats.median),
        format_millis(stats.min),
        format_millis(stats.mean),
        format_millis(stats.max)
    )
}
