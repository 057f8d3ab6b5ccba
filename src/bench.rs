//! Repeated timing of a solution's parts.
//!
//! Each part is warmed up for a fixed budget, then measured in batches: the
//! warm-up iteration count decides how many calls go into each sample so that
//! fast parts are not dominated by timer resolution.

use std::hint::black_box;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};

use crate::error::Error;
use crate::puzzle::Puzzle;
use crate::registry::Registry;
use crate::runner::panic_message;
use crate::solution::Solution;
use crate::workspace::Workspace;

/// How long and how often to measure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchOptions {
    pub samples: usize,
    pub warmup: Duration,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            samples: 100,
            warmup: Duration::from_secs(1),
        }
    }
}

/// Summary of per-call durations across samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub min: Duration,
    pub median: Duration,
    pub mean: Duration,
    pub max: Duration,
    /// Calls timed together in each sample.
    pub iterations: u32,
}

impl Stats {
    fn from_samples(mut times: Vec<Duration>, iterations: u32) -> Self {
        times.sort();
        let n = times.len().max(1) as u32;
        Self {
            min: times.first().copied().unwrap_or_default(),
            median: times.get(times.len() / 2).copied().unwrap_or_default(),
            mean: times.iter().sum::<Duration>() / n,
            max: times.last().copied().unwrap_or_default(),
            iterations,
        }
    }
}

/// Timing of one part together with the answer it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartBench {
    pub answer: String,
    pub stats: Stats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchReport {
    pub parse: Stats,
    pub part_one: PartBench,
    pub part_two: PartBench,
}

/// Call `f` repeatedly and summarize how long one call takes.
pub fn measure<T>(options: &BenchOptions, mut f: impl FnMut() -> T) -> Stats {
    let samples = options.samples.max(1);

    let mut warmup_iters: u32 = 1;
    black_box(f());
    let warmup_start = Instant::now();
    while warmup_start.elapsed() < options.warmup {
        black_box(f());
        warmup_iters = warmup_iters.saturating_add(1);
    }

    let iters = calls_per_sample(warmup_iters, samples);
    let mut times = Vec::with_capacity(samples);
    let mut start = Instant::now();
    for _ in 0..samples {
        for _ in 0..iters {
            black_box(f());
        }
        let elapsed = start.elapsed();
        times.push(elapsed / iters);
        start += elapsed;
    }
    Stats::from_samples(times, iters)
}

fn calls_per_sample(warmup_iters: u32, samples: usize) -> u32 {
    (warmup_iters / u32::try_from(samples).unwrap_or(u32::MAX)).max(1)
}

/// Benchmark parsing and both parts of `S` on `input`.
///
/// Fails if a part errors, or returns a different answer after being measured.
pub fn bench_solution<S: Solution>(input: &str, options: &BenchOptions) -> Result<BenchReport> {
    let data = S::parse(input).context("failed to parse input")?;
    let parse = measure(options, || S::parse(black_box(input)));

    let part_one = bench_part("part one", options, &data, S::part_one)?;
    let part_two = bench_part("part two", options, &data, S::part_two)?;
    Ok(BenchReport {
        parse,
        part_one,
        part_two,
    })
}

fn bench_part<I, A: std::fmt::Display>(
    name: &str,
    options: &BenchOptions,
    data: &I,
    part: fn(&I) -> Result<A>,
) -> Result<PartBench> {
    let answer = part(data)
        .with_context(|| format!("{name} failed"))?
        .to_string();
    let stats = measure(options, || part(black_box(data)));
    let again = part(data)
        .with_context(|| format!("{name} failed"))?
        .to_string();
    if again != answer {
        bail!("{name} returned two different answers on the same input ({answer} then {again})");
    }
    Ok(PartBench { answer, stats })
}

/// Benchmark a single day. Errors from the solution propagate; panics are not caught.
pub fn bench(
    registry: &Registry,
    workspace: &Workspace,
    puzzle: Puzzle,
    options: &BenchOptions,
) -> Result<BenchReport> {
    let entry = registry.get(puzzle).ok_or(Error::UnknownSolution(puzzle))?;
    let input = workspace.read_input(puzzle)?;
    log::debug!("timing {puzzle} with {} samples", options.samples);
    (entry.bench)(&input, options)
}

/// A day's benchmark, or the reason it could not be timed.
#[derive(Debug)]
pub struct DayBench {
    pub puzzle: Puzzle,
    pub result: Result<BenchReport, String>,
}

/// Benchmark one day, turning errors and panics into a failed [`DayBench`].
pub fn bench_isolated(
    registry: &Registry,
    workspace: &Workspace,
    puzzle: Puzzle,
    options: &BenchOptions,
) -> DayBench {
    let result = match panic::catch_unwind(AssertUnwindSafe(|| {
        bench(registry, workspace, puzzle, options)
    })) {
        Ok(Ok(report)) => Ok(report),
        Ok(Err(err)) => Err(format!("{err:#}")),
        Err(payload) => Err(format!("panicked: {}", panic_message(&*payload))),
    };
    if let Err(reason) = &result {
        log::warn!("{puzzle} failed: {reason}");
    }
    DayBench { puzzle, result }
}

/// Benchmark every registered day of `year`, continuing past failures.
pub fn bench_all(
    registry: &Registry,
    workspace: &Workspace,
    year: u16,
    options: &BenchOptions,
    mut on_day: impl FnMut(&DayBench),
) -> Vec<DayBench> {
    registry
        .days(year)
        .into_iter()
        .map(|day| {
            let timed = bench_isolated(registry, workspace, Puzzle::from_day(year, day), options);
            on_day(&timed);
            timed
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::fs;
    use tempfile::TempDir;

    fn quick() -> BenchOptions {
        BenchOptions {
            samples: 10,
            warmup: Duration::ZERO,
        }
    }

    #[test]
    fn stats_are_ordered() {
        let times = [5, 1, 3, 2, 4].map(Duration::from_millis).to_vec();
        let stats = Stats::from_samples(times, 2);
        assert_eq!(stats.min, Duration::from_millis(1));
        assert_eq!(stats.median, Duration::from_millis(3));
        assert_eq!(stats.mean, Duration::from_millis(3));
        assert_eq!(stats.max, Duration::from_millis(5));
        assert_eq!(stats.iterations, 2);
    }

    #[test]
    fn measure_calls_once_per_sample_without_warmup() {
        let calls = Cell::new(0u32);
        let stats = measure(&quick(), || calls.set(calls.get() + 1));
        // one priming call, then ten samples of one call each
        assert_eq!(calls.get(), 11);
        assert_eq!(stats.iterations, 1);
        assert!(stats.min <= stats.median && stats.median <= stats.max);
    }

    struct Words;

    impl Solution for Words {
        type Input = Vec<String>;
        type Answer = usize;

        fn parse(input: &str) -> Result<Self::Input> {
            Ok(input.split_whitespace().map(str::to_string).collect())
        }

        fn part_one(input: &Self::Input) -> Result<Self::Answer> {
            Ok(input.len())
        }

        fn part_two(input: &Self::Input) -> Result<Self::Answer> {
            Ok(input.iter().map(String::len).sum())
        }
    }

    #[test]
    fn bench_solution_reports_answers() {
        let report = bench_solution::<Words>("ab cde f", &quick()).unwrap();
        assert_eq!(report.part_one.answer, "3");
        assert_eq!(report.part_two.answer, "6");
    }

    thread_local! {
        static CALLS: Cell<u64> = const { Cell::new(0) };
    }

    struct Drifting;

    impl Solution for Drifting {
        type Input = ();
        type Answer = u64;

        fn parse(_input: &str) -> Result<Self::Input> {
            Ok(())
        }

        fn part_one(_input: &Self::Input) -> Result<Self::Answer> {
            Ok(CALLS.with(|c| {
                c.set(c.get() + 1);
                c.get()
            }))
        }

        fn part_two(_input: &Self::Input) -> Result<Self::Answer> {
            Ok(0)
        }
    }

    #[test]
    fn unstable_answers_are_rejected() {
        let err = bench_solution::<Drifting>("", &quick()).unwrap_err();
        assert!(err.to_string().contains("two different answers"));
    }

    #[test]
    fn sample_batches_never_divide_by_zero() {
        assert_eq!(calls_per_sample(1000, 100), 10);
        assert_eq!(calls_per_sample(5, 100), 1);
        assert_eq!(calls_per_sample(u32::MAX, usize::MAX), 1);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(calls_per_sample(7, 1usize << 32), 1);
    }

    struct Panics;

    impl Solution for Panics {
        type Input = ();
        type Answer = u8;

        fn parse(_input: &str) -> Result<Self::Input> {
            Ok(())
        }

        fn part_one(_input: &Self::Input) -> Result<Self::Answer> {
            panic!("attempt to subtract with overflow")
        }

        fn part_two(_input: &Self::Input) -> Result<Self::Answer> {
            Ok(0)
        }
    }

    struct Failing;

    impl Solution for Failing {
        type Input = ();
        type Answer = u8;

        fn parse(_input: &str) -> Result<Self::Input> {
            Ok(())
        }

        fn part_one(_input: &Self::Input) -> Result<Self::Answer> {
            Ok(1)
        }

        fn part_two(_input: &Self::Input) -> Result<Self::Answer> {
            bail!("not implemented yet")
        }
    }

    fn p(day: u32) -> Puzzle {
        Puzzle::new(2025, day).unwrap()
    }

    fn write_input(ws: &Workspace, puzzle: Puzzle, text: &str) {
        let path = ws.input_path(puzzle);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    #[test]
    fn registered_bench_fn_times_a_day() {
        let tmp = TempDir::new().unwrap();
        let ws = Workspace::new(tmp.path());
        let mut registry = Registry::new();
        registry.register::<Words>(2025, 6).unwrap();
        write_input(&ws, p(6), "one two\nthree\n");

        let entry = registry.get(p(6)).unwrap();
        let report = (entry.bench)("one two three", &quick()).unwrap();
        assert_eq!(report.part_one.answer, "3");

        let report = bench(&registry, &ws, p(6), &quick()).unwrap();
        assert_eq!(report.part_one.answer, "3");
        assert_eq!(report.part_two.answer, "11");
        assert!(report.part_one.stats.iterations >= 1);
    }

    #[test]
    fn bench_all_continues_past_failing_days() {
        let tmp = TempDir::new().unwrap();
        let ws = Workspace::new(tmp.path());
        let mut registry = Registry::new();
        registry.register::<Panics>(2025, 1).unwrap();
        registry.register::<Words>(2025, 2).unwrap();
        registry.register::<Failing>(2025, 3).unwrap();
        registry.register::<Words>(2025, 4).unwrap();
        for day in [1, 2, 3] {
            write_input(&ws, p(day), "a bb");
        }

        let mut seen = Vec::new();
        let results = bench_all(&registry, &ws, 2025, &quick(), |d| seen.push(d.puzzle.day.get()));

        assert_eq!(seen, vec![1, 2, 3, 4]);
        assert_eq!(
            results[0].result.as_ref().unwrap_err(),
            "panicked: attempt to subtract with overflow"
        );
        assert_eq!(results[1].result.as_ref().unwrap().part_two.answer, "3");
        assert_eq!(
            results[2].result.as_ref().unwrap_err(),
            "part two failed: not implemented yet"
        );
        assert!(results[3].result.as_ref().unwrap_err().contains("file not found"));
    }

    #[test]
    fn bench_propagates_unknown_days() {
        let tmp = TempDir::new().unwrap();
        let ws = Workspace::new(tmp.path());
        let err = bench(&Registry::new(), &ws, p(9), &quick()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::UnknownSolution(puzzle)) if *puzzle == p(9)
        ));
    }
}
