//! `advent scaffold <day>`.

use anyhow::Result;
use clap::Args;

use advent::{Day, FetchMode};

use crate::cli::common::Session;
use crate::cli::utils::file_line;

/// Arguments for `advent scaffold`.
#[derive(Args, Debug)]
pub struct ScaffoldArgs {
    /// Day number (1-25).
    pub day: Day,
    /// Also download input and puzzle text.
    #[arg(short = 'd', long)]
    pub download: bool,
}

pub fn handle(args: ScaffoldArgs, session: &Session) -> Result<()> {
    let puzzle = session.puzzle(args.day);
    let report = advent::scaffold(&session.workspace, puzzle)?;

    if report.nothing_created() {
        println!("Day {} of {} is already scaffolded; nothing created", puzzle.day, puzzle.year);
    } else {
        println!("Scaffolded day {} of {}", puzzle.day, puzzle.year);
    }
    println!("{}", file_line("Solution", &report.solution.0, report.solution.1));
    println!("{}", file_line("Tests", &report.test.0, report.test.1));
    println!("{}", file_line("Example", &report.example.0, report.example.1));

    if args.download {
        // A failed download must not undo the scaffold; report it and move on.
        match session
            .aoc()
            .download(&session.workspace, puzzle, FetchMode::Both)
        {
            Ok(_) => println!("  Input and puzzle downloaded"),
            Err(err) => {
                log::warn!("download for {puzzle} failed: {err}");
                eprintln!("Warning: could not download data: {err}");
            }
        }
    }
    Ok(())
}
