//! Options and state shared by every command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use advent::{AocCli, Config, Day, FIRST_YEAR, Puzzle, Registry, Workspace};

/// Flags accepted before or after any subcommand.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Event year (default: from .advent.json, else the latest event).
    #[arg(long, global = true, value_parser = clap::value_parser!(u16).range(i64::from(FIRST_YEAR)..))]
    pub year: Option<u16>,
    /// Workspace root holding src/solutions and data.
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,
}

/// Everything a command needs, resolved once at startup.
pub struct Session {
    pub workspace: Workspace,
    pub config: Config,
    pub year: u16,
    pub registry: Registry,
}

impl Session {
    pub fn open(global: &GlobalArgs) -> Result<Self> {
        let workspace = Workspace::new(&global.root);
        let config = Config::load(&workspace.config_path())?;
        let year = config.resolve_year(global.year);
        let registry = advent::compiled_solutions()?;
        log::debug!("workspace {} year {year}", workspace.root().display());
        Ok(Self {
            workspace,
            config,
            year,
            registry,
        })
    }

    pub fn puzzle(&self, day: Day) -> Puzzle {
        Puzzle::from_day(self.year, day)
    }

    pub fn aoc(&self) -> AocCli {
        AocCli::new(&self.config.aoc_command, self.workspace.root())
    }
}
