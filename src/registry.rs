use std::collections::BTreeMap;

use anyhow::Result;

use crate::bench::{self, BenchOptions, BenchReport};
use crate::error::Error;
use crate::puzzle::{Day, Puzzle};
use crate::runner::{self, SolveReport};
use crate::solution::Solution;

pub type RunFn = fn(&str) -> Result<SolveReport>;
pub type BenchFn = fn(&str, &BenchOptions) -> Result<BenchReport>;

/// Entry points of one registered solution, monomorphized at registration.
#[derive(Clone, Copy)]
pub struct Entry {
    pub run: RunFn,
    pub bench: BenchFn,
}

/// Solutions compiled into the binary, keyed by puzzle.
#[derive(Default)]
pub struct Registry {
    entries: BTreeMap<Puzzle, Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `S` as the solution for `day` of `year`, replacing any earlier one.
    pub fn register<S: Solution>(&mut self, year: u16, day: u32) -> Result<(), Error> {
        let puzzle = Puzzle::new(year, day)?;
        let entry = Entry {
            run: runner::execute::<S>,
            bench: bench::bench_solution::<S>,
        };
        if self.entries.insert(puzzle, entry).is_some() {
            log::warn!("solution for {puzzle} registered twice; keeping the last one");
        }
        Ok(())
    }

    pub fn get(&self, puzzle: Puzzle) -> Option<Entry> {
        self.entries.get(&puzzle).copied()
    }

    pub fn contains(&self, puzzle: Puzzle) -> bool {
        self.entries.contains_key(&puzzle)
    }

    /// Registered days of `year`, ascending.
    pub fn days(&self, year: u16) -> Vec<Day> {
        self.entries
            .keys()
            .filter(|puzzle| puzzle.year == year)
            .map(|puzzle| puzzle.day)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
