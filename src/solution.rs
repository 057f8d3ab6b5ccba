use std::fmt;

use anyhow::Result;

/// The interface between a day's hand-written code and the runner.
///
/// `parse` is called once per run and both parts borrow its output.
pub trait Solution {
    type Input;
    type Answer: fmt::Display;

    fn parse(input: &str) -> Result<Self::Input>;
    fn part_one(input: &Self::Input) -> Result<Self::Answer>;
    fn part_two(input: &Self::Input) -> Result<Self::Answer>;
}
