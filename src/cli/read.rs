//! `advent read <day>`.

use anyhow::Result;
use clap::Args;

use advent::Day;

use crate::cli::common::Session;

/// Arguments for `advent read`.
#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Day number (1-25).
    pub day: Day,
}

pub fn handle(args: ReadArgs, session: &Session) -> Result<()> {
    let text = session.workspace.read_puzzle(session.puzzle(args.day))?;
    println!("{text}");
    Ok(())
}
