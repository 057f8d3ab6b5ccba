//! Template discovery commands (`advent template ...`).

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use advent::{Day, TemplateRegistry};

use crate::cli::common::Session;

/// Template subcommands.
#[derive(Subcommand, Debug)]
pub enum TemplateCommand {
    /// List all known templates.
    List,
    /// Print a template, rendered for a day when one is given.
    Show(TemplateShowArgs),
}

/// Arguments for `advent template show`.
#[derive(Args, Debug)]
pub struct TemplateShowArgs {
    /// Template name to display.
    pub name: String,
    /// Render for this day of the active year instead of showing placeholders.
    #[arg(long)]
    pub day: Option<Day>,
}

/// Execute a template command.
pub fn handle(command: TemplateCommand, session: &Session) -> Result<()> {
    match command {
        TemplateCommand::List => list(session),
        TemplateCommand::Show(args) => show(args, session),
    }
}

fn list(session: &Session) -> Result<()> {
    println!("Available templates:");
    for tpl in TemplateRegistry::list() {
        println!("  - {}: {}", tpl.name, tpl.description);
    }
    println!("Files are written under {}", session.workspace.solutions_root().display());
    Ok(())
}

fn show(args: TemplateShowArgs, session: &Session) -> Result<()> {
    let tpl = TemplateRegistry::get(&args.name)
        .with_context(|| format!("template '{}' not found", args.name))?;
    match args.day {
        Some(day) => {
            let puzzle = session.puzzle(day);
            println!("// {}", tpl.target(&session.workspace, puzzle).display());
            print!("{}", tpl.render(puzzle));
        }
        None => print!("{}", tpl.body),
    }
    Ok(())
}
