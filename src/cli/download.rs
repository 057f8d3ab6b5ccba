//! `advent download <day>`.

use anyhow::Result;
use clap::Args;

use advent::{Artifact, Day, FetchMode};

use crate::cli::common::Session;

/// Arguments for `advent download`.
#[derive(Args, Debug)]
pub struct DownloadArgs {
    /// Day number (1-25).
    pub day: Day,
    /// Only download the puzzle input.
    #[arg(long, conflicts_with = "puzzle_only")]
    pub input_only: bool,
    /// Only download the puzzle description.
    #[arg(long)]
    pub puzzle_only: bool,
}

pub fn handle(args: DownloadArgs, session: &Session) -> Result<()> {
    let puzzle = session.puzzle(args.day);
    let mode = FetchMode::from_flags(args.input_only, args.puzzle_only);
    let fetched = session.aoc().download(&session.workspace, puzzle, mode)?;
    for item in fetched {
        let what = match item.artifact {
            Artifact::Puzzle => "puzzle",
            _ => "input",
        };
        println!(
            "Downloaded {what} for day {} to {}",
            puzzle.day,
            item.path.display()
        );
    }
    Ok(())
}
