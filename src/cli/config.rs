//! Persisted settings (`advent config ...`).

use anyhow::Result;
use clap::{Args, Subcommand};

use advent::{Config, FIRST_YEAR};

use crate::cli::common::Session;

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective settings.
    Show,
    /// Store the default year in .advent.json.
    SetYear(SetYearArgs),
}

/// Arguments for `advent config set-year`.
#[derive(Args, Debug)]
pub struct SetYearArgs {
    /// Year to use when --year is not given.
    #[arg(
        value_name = "YEAR",
        value_parser = clap::value_parser!(u16).range(i64::from(FIRST_YEAR)..)
    )]
    pub value: u16,
}

pub fn handle(command: ConfigCommand, session: &Session) -> Result<()> {
    match command {
        ConfigCommand::Show => show(session),
        ConfigCommand::SetYear(args) => set_year(args, session),
    }
}

fn show(session: &Session) -> Result<()> {
    let path = session.workspace.config_path();
    println!("Config: {}", path.display());
    if !path.exists() {
        println!("  (not written yet; showing defaults)");
    }
    println!("Default year: {}", session.config.year);
    println!("Active year: {}", session.year);
    println!("aoc command: {}", session.config.aoc_command);
    Ok(())
}

fn set_year(args: SetYearArgs, session: &Session) -> Result<()> {
    let path = session.workspace.config_path();
    let config = Config {
        year: args.value,
        ..session.config.clone()
    };
    config.save(&path)?;
    println!("Default year set to {} in {}", config.year, path.display());
    Ok(())
}
