//! Running and timing solutions (`advent solve`, `advent all`, `advent time`).

use std::time::Duration;

use anyhow::{Result, anyhow};
use clap::{ArgGroup, Args};

use advent::{BenchOptions, BenchReport, Day, Puzzle, format_millis};

use crate::cli::common::Session;
use crate::cli::utils::{outcome_line, report_lines, rule, stats_line};

/// Arguments for `advent solve`.
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Day number (1-25).
    pub day: Day,
    /// Hide timings.
    #[arg(long)]
    pub no_time: bool,
}

/// Arguments for `advent all`.
#[derive(Args, Debug)]
pub struct AllArgs {
    /// Hide timings.
    #[arg(long)]
    pub no_time: bool,
}

/// Arguments for `advent time`.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("target").required(true).args(["day", "all"])))]
pub struct TimeArgs {
    /// Day number (1-25).
    pub day: Option<Day>,
    /// Benchmark every solution of the year.
    #[arg(long)]
    pub all: bool,
    /// Number of timed samples per part.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u16).range(1..))]
    pub samples: u16,
    /// Warm-up budget per part, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    pub warmup_ms: u64,
}

pub fn solve(args: SolveArgs, session: &Session) -> Result<()> {
    let puzzle = session.puzzle(args.day);
    let report = advent::solve(&session.registry, &session.workspace, puzzle)?;
    println!("Day {}", puzzle.day);
    println!("{}", rule('-'));
    for line in report_lines(&report, !args.no_time) {
        println!("{line}");
    }
    Ok(())
}

pub fn all(args: AllArgs, session: &Session) -> Result<()> {
    let days = advent::batch_days(&session.registry, &session.workspace, session.year)?;
    if days.is_empty() {
        println!("No solutions found for {}", session.year);
        return Ok(());
    }

    let timed = !args.no_time;
    println!("Running {} days of {}...", days.len(), session.year);
    println!("{}", rule('='));
    let summary = advent::run_all(&session.registry, &session.workspace, session.year, |day| {
        println!("{}", outcome_line(day, timed));
    })?;
    println!("{}", rule('='));
    if timed {
        println!("Total time: {}", format_millis(summary.total_elapsed()));
    }
    println!(
        "Solved {}, skipped {}, failed {}",
        summary.solved(),
        summary.skipped(),
        summary.failed()
    );

    let failed = summary.failed_days();
    if !failed.is_empty() {
        return Err(anyhow!("{} failed: day {}", plural_days(failed.len()), join_days(&failed)));
    }
    Ok(())
}

pub fn time(args: TimeArgs, session: &Session) -> Result<()> {
    let options = BenchOptions {
        samples: usize::from(args.samples),
        warmup: Duration::from_millis(args.warmup_ms),
    };

    match args.day {
        Some(day) if !args.all => time_day(session, session.puzzle(day), &options),
        _ => time_all(session, &options),
    }
}

fn time_all(session: &Session, options: &BenchOptions) -> Result<()> {
    if session.registry.days(session.year).is_empty() {
        println!("No solutions found for {}", session.year);
        return Ok(());
    }
    let results = advent::bench_all(
        &session.registry,
        &session.workspace,
        session.year,
        options,
        |timed| {
            match &timed.result {
                Ok(report) => print_bench(timed.puzzle, options, report),
                Err(reason) => eprintln!("Day {}: FAILED {reason}", timed.puzzle.day),
            }
            println!();
        },
    );
    let failed: Vec<Day> = results
        .iter()
        .filter(|timed| timed.result.is_err())
        .map(|timed| timed.puzzle.day)
        .collect();
    if !failed.is_empty() {
        return Err(anyhow!("{} failed: day {}", plural_days(failed.len()), join_days(&failed)));
    }
    Ok(())
}

fn time_day(session: &Session, puzzle: Puzzle, options: &BenchOptions) -> Result<()> {
    let report = advent::bench(&session.registry, &session.workspace, puzzle, options)?;
    print_bench(puzzle, options, &report);
    Ok(())
}

fn print_bench(puzzle: Puzzle, options: &BenchOptions, report: &BenchReport) {
    println!(
        "Day {} ({} samples x {} calls)",
        puzzle.day, options.samples, report.part_one.stats.iterations
    );
    println!("{}", rule('-'));
    println!("{}", stats_line("Parse", &report.parse));
    println!("{}", stats_line("Part 1", &report.part_one.stats));
    println!("{}", stats_line("Part 2", &report.part_two.stats));
    println!("Answers: {}, {}", report.part_one.answer, report.part_two.answer);
}

fn plural_days(count: usize) -> String {
    if count == 1 {
        "1 day".to_string()
    } else {
        format!("{count} days")
    }
}

fn join_days(days: &[Day]) -> String {
    days.iter()
        .map(Day::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
