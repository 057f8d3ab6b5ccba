use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::puzzle::{Day, Puzzle};

/// Errors the library reports to callers that need to tell them apart.
#[derive(Debug, Error)]
pub enum Error {
    #[error("day must be between 1 and 25 (got {0})")]
    InvalidDay(u32),
    #[error("'{0}' is not a day number")]
    NotADay(String),
    #[error(
        "{kind} file not found: {path}\n{hint}",
        path = .path.display(),
        hint = .kind.guidance(.day)
    )]
    MissingArtifact {
        kind: Artifact,
        path: PathBuf,
        day: Day,
    },
    #[error(
        "no solution compiled for {0}. Run `advent scaffold {day}` and rebuild",
        day = .0.day.get()
    )]
    UnknownSolution(Puzzle),
}

/// Files that live under a year's data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Input,
    Puzzle,
    Example,
}

impl Artifact {
    fn guidance(self, day: &Day) -> String {
        match self {
            Artifact::Input => format!(
                "Download it with: advent download {} --input-only",
                day.get()
            ),
            Artifact::Puzzle => format!(
                "Download it with: advent download {} --puzzle-only",
                day.get()
            ),
            Artifact::Example => {
                "Paste the example from the puzzle text into this file".to_string()
            }
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::Input => write!(f, "Input"),
            Artifact::Puzzle => write!(f, "Puzzle"),
            Artifact::Example => write!(f, "Example"),
        }
    }
}
