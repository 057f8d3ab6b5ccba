//! Command-line interface wiring for the `advent` binary.
//!
//! This module owns the clap definitions and delegates execution to
//! one submodule per command family.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod common;
pub mod config;
pub mod download;
pub mod read;
pub mod scaffold;
pub mod solve;
pub mod template;
pub mod utils;

use common::{GlobalArgs, Session};

/// Parsed CLI entrypoint for the `advent` binary.
#[derive(Parser, Debug)]
#[command(
    name = "advent",
    version,
    about = "Scaffold, download and run Advent of Code solutions"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create solution and test files for a day.
    Scaffold(scaffold::ScaffoldArgs),
    /// Download a day's input and puzzle text with aoc-cli.
    Download(download::DownloadArgs),
    /// Print a downloaded puzzle description.
    Read(read::ReadArgs),
    /// Run one day's solution against its input.
    Solve(solve::SolveArgs),
    /// Run every solution of the year.
    All(solve::AllArgs),
    /// Benchmark one day or every day of the year.
    Time(solve::TimeArgs),
    /// Inspect the built-in file templates.
    #[command(subcommand)]
    Template(template::TemplateCommand),
    /// Show or change persisted settings.
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    let session = Session::open(&cli.global)?;
    match cli.command {
        Command::Scaffold(args) => scaffold::handle(args, &session),
        Command::Download(args) => download::handle(args, &session),
        Command::Read(args) => read::handle(args, &session),
        Command::Solve(args) => solve::solve(args, &session),
        Command::All(args) => solve::all(args, &session),
        Command::Time(args) => solve::time(args, &session),
        Command::Template(cmd) => template::handle(cmd, &session),
        Command::Config(cmd) => config::handle(cmd, &session),
    }
}
