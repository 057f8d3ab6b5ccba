//! On-disk layout of a solutions workspace.
//!
//! ```text
//! <root>/.advent.json
//! <root>/src/solutions/mod.rs
//! <root>/src/solutions/y<year>/mod.rs
//! <root>/src/solutions/y<year>/day<NN>.rs
//! <root>/src/solutions/y<year>/tests/test_day<NN>.rs
//! <root>/data/<year>/{inputs,examples}/<NN>.txt
//! <root>/data/<year>/puzzles/<NN>.md
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::{Artifact, Error};
use crate::puzzle::{Day, Puzzle};

const CONFIG_FILE: &str = ".advent.json";

/// Resolves every path the tool reads or writes from a single root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Workspace of the crate these solutions are compiled into. Used by generated tests.
    pub fn from_manifest_dir() -> Self {
        Self::new(env!("CARGO_MANIFEST_DIR"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn solutions_root(&self) -> PathBuf {
        self.root.join("src").join("solutions")
    }

    pub fn root_index_path(&self) -> PathBuf {
        self.solutions_root().join("mod.rs")
    }

    pub fn solutions_dir(&self, year: u16) -> PathBuf {
        self.solutions_root().join(format!("y{year}"))
    }

    pub fn year_index_path(&self, year: u16) -> PathBuf {
        self.solutions_dir(year).join("mod.rs")
    }

    pub fn tests_dir(&self, year: u16) -> PathBuf {
        self.solutions_dir(year).join("tests")
    }

    pub fn solution_path(&self, puzzle: Puzzle) -> PathBuf {
        self.solutions_dir(puzzle.year)
            .join(format!("day{}.rs", puzzle.day))
    }

    pub fn test_path(&self, puzzle: Puzzle) -> PathBuf {
        self.tests_dir(puzzle.year)
            .join(format!("test_day{}.rs", puzzle.day))
    }

    pub fn data_dir(&self, year: u16) -> PathBuf {
        self.root.join("data").join(year.to_string())
    }

    pub fn artifact_dir(&self, year: u16, kind: Artifact) -> PathBuf {
        let sub = match kind {
            Artifact::Input => "inputs",
            Artifact::Puzzle => "puzzles",
            Artifact::Example => "examples",
        };
        self.data_dir(year).join(sub)
    }

    pub fn artifact_path(&self, puzzle: Puzzle, kind: Artifact) -> PathBuf {
        let ext = match kind {
            Artifact::Puzzle => "md",
            Artifact::Input | Artifact::Example => "txt",
        };
        self.artifact_dir(puzzle.year, kind)
            .join(format!("{}.{ext}", puzzle.day))
    }

    pub fn input_path(&self, puzzle: Puzzle) -> PathBuf {
        self.artifact_path(puzzle, Artifact::Input)
    }

    pub fn puzzle_path(&self, puzzle: Puzzle) -> PathBuf {
        self.artifact_path(puzzle, Artifact::Puzzle)
    }

    pub fn example_path(&self, puzzle: Puzzle) -> PathBuf {
        self.artifact_path(puzzle, Artifact::Example)
    }

    pub fn read_input(&self, puzzle: Puzzle) -> Result<String> {
        self.read_artifact(puzzle, Artifact::Input)
    }

    pub fn read_puzzle(&self, puzzle: Puzzle) -> Result<String> {
        self.read_artifact(puzzle, Artifact::Puzzle)
    }

    pub fn read_example(&self, puzzle: Puzzle) -> Result<String> {
        self.read_artifact(puzzle, Artifact::Example)
    }

    fn read_artifact(&self, puzzle: Puzzle, kind: Artifact) -> Result<String> {
        let path = self.artifact_path(puzzle, kind);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(Error::MissingArtifact {
                kind,
                path,
                day: puzzle.day,
            }
            .into()),
            Err(err) => {
                Err(err).with_context(|| format!("failed to read {}", path.display()))
            }
        }
    }

    /// Days of `year` that have a solution file, ascending.
    pub fn scaffolded_days(&self, year: u16) -> Result<Vec<Day>> {
        let mut days: Vec<Day> = list_names(&self.solutions_dir(year))?
            .iter()
            .filter_map(|name| name.strip_prefix("day")?.strip_suffix(".rs")?.parse().ok())
            .collect();
        days.sort();
        days.dedup();
        Ok(days)
    }

    /// Years that have a solutions directory, ascending.
    pub fn scaffolded_years(&self) -> Result<Vec<u16>> {
        let mut years: Vec<u16> = list_names(&self.solutions_root())?
            .iter()
            .filter(|name| !name.ends_with(".rs"))
            .filter_map(|name| name.strip_prefix('y')?.parse().ok())
            .collect();
        years.sort_unstable();
        Ok(years)
    }
}

fn list_names(dir: &Path) -> Result<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to list {}", dir.display()));
        }
    };
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to list {}", dir.display()))?;
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}
