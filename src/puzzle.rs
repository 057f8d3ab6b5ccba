use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Last day of an event.
pub const MAX_DAY: u8 = 25;

/// First year the event ran.
pub const FIRST_YEAR: u16 = 2015;

/// Day of an event, always within `1..=25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(u8);

impl Day {
    pub fn new(value: u32) -> Result<Self, Error> {
        if value == 0 || value > u32::from(MAX_DAY) {
            return Err(Error::InvalidDay(value));
        }
        Ok(Self(value as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Every day of an event in ascending order.
    pub fn all() -> impl Iterator<Item = Day> {
        (1..=MAX_DAY).map(Day)
    }
}

/// Zero-padded to two digits, the form used in file names.
impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl FromStr for Day {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| Error::NotADay(s.to_string()))?;
        Day::new(value)
    }
}

/// A single puzzle: one day of one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Puzzle {
    pub year: u16,
    pub day: Day,
}

impl Puzzle {
    pub fn new(year: u16, day: u32) -> Result<Self, Error> {
        Ok(Self {
            year,
            day: Day::new(day)?,
        })
    }

    pub fn from_day(year: u16, day: Day) -> Self {
        Self { year, day }
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} day {}", self.year, self.day)
    }
}
