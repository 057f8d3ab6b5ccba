use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::puzzle::FIRST_YEAR;

/// Executable used to fetch puzzles unless configured otherwise.
pub const DEFAULT_AOC_COMMAND: &str = "aoc";

/// Persisted settings, stored as `.advent.json` in the workspace root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Year used when `--year` is not given.
    pub year: u16,
    /// The aoc-cli executable, looked up on `PATH` when not a path.
    pub aoc_command: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            year: current_event_year(Local::now().date_naive()),
            aoc_command: DEFAULT_AOC_COMMAND.to_string(),
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()));
            }
        };
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to write config file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).context("failed to serialize config")?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// An explicit year wins over the configured one.
    pub fn resolve_year(&self, explicit: Option<u16>) -> u16 {
        explicit.unwrap_or(self.year)
    }
}

/// Latest event that has started by `today`: puzzles unlock in December.
pub fn current_event_year(today: NaiveDate) -> u16 {
    let year = if today.month() == 12 {
        today.year()
    } else {
        today.year() - 1
    };
    u16::try_from(year).unwrap_or(FIRST_YEAR).max(FIRST_YEAR)
}
