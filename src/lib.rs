//! Scaffolding, input download and a runner for Advent of Code solutions.
//!
//! Each day's solution implements [`Solution`] and is registered in a
//! [`Registry`] by the generated `solutions` module.

mod bench;
mod config;
mod error;
mod fetch;
mod puzzle;
mod registry;
mod runner;
mod scaffold;
mod solution;
mod templates;
mod workspace;

pub mod solutions;

pub use bench::{
    BenchOptions, BenchReport, DayBench, PartBench, Stats, bench, bench_all, bench_isolated,
    bench_solution, measure,
};
pub use config::{Config, DEFAULT_AOC_COMMAND, current_event_year};
pub use error::{Artifact, Error};
pub use fetch::{AocCli, FetchError, FetchMode, Fetched};
pub use puzzle::{Day, FIRST_YEAR, MAX_DAY, Puzzle};
pub use registry::{Entry, Registry};
pub use runner::{
    BatchSummary, DayOutcome, Outcome, PartReport, SolveReport, batch_days, execute,
    format_millis, run_all, run_isolated, solve,
};
pub use scaffold::{FileOutcome, ScaffoldReport, scaffold, write_indexes};
pub use solution::Solution;
pub use templates::{Template, TemplateKind, TemplateRegistry};
pub use workspace::Workspace;

use anyhow::Result;

/// Registry holding every solution compiled into this crate.
pub fn compiled_solutions() -> Result<Registry> {
    let mut registry = Registry::new();
    solutions::register_all(&mut registry)?;
    log::debug!("{} solutions compiled in", registry.len());
    Ok(registry)
}
