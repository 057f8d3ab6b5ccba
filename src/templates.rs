use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Result, anyhow};

use crate::puzzle::{Day, Puzzle};
use crate::workspace::Workspace;

/// Marker placed at the top of files that `scaffold` rewrites on every run.
pub const GENERATED_HEADER: &str = "// @generated by `advent scaffold`. Edits are overwritten.";

/// Which per-day file a [`Template`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Solution,
    Test,
}

/// A fixed file body with `{{day}}`, `{{day_padded}}` and `{{year}}` placeholders.
#[derive(Debug, Clone)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: TemplateKind,
    pub body: &'static str,
}

impl Template {
    /// Substitute the puzzle into the template body.
    pub fn render(&self, puzzle: Puzzle) -> String {
        self.body
            .replace("{{day_padded}}", &puzzle.day.to_string())
            .replace("{{day}}", &puzzle.day.get().to_string())
            .replace("{{year}}", &puzzle.year.to_string())
    }

    /// Where the rendered file lives in `workspace`.
    pub fn target(&self, workspace: &Workspace, puzzle: Puzzle) -> PathBuf {
        match self.kind {
            TemplateKind::Solution => workspace.solution_path(puzzle),
            TemplateKind::Test => workspace.test_path(puzzle),
        }
    }
}

/// Registry of the built-in per-day templates.
pub struct TemplateRegistry;

impl TemplateRegistry {
    pub fn list() -> Vec<&'static Template> {
        vec![&SOLUTION, &TEST]
    }

    /// Resolve a template by name (case-insensitive).
    pub fn get(name: &str) -> Result<&'static Template> {
        Self::list()
            .into_iter()
            .find(|tpl| tpl.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| anyhow!("unknown template '{}'", name))
    }
}

pub static SOLUTION: Template = Template {
    name: "solution",
    description: "Solution module with a parser and both parts.",
    kind: TemplateKind::Solution,
    body: SOLUTION_BODY,
};

pub static TEST: Template = Template {
    name: "test",
    description: "Example-driven tests for a solution module.",
    kind: TemplateKind::Test,
    body: TEST_BODY,
};

const SOLUTION_BODY: &str = r#"//! Advent of Code {{year}}, day {{day}}.

use anyhow::Result;

use crate::Solution;

pub struct Day{{day_padded}};

impl Solution for Day{{day_padded}} {
    type Input = Vec<String>;
    type Answer = u64;

    fn parse(input: &str) -> Result<Self::Input> {
        Ok(input.lines().map(str::to_string).collect())
    }

    fn part_one(_input: &Self::Input) -> Result<Self::Answer> {
        Ok(0)
    }

    fn part_two(_input: &Self::Input) -> Result<Self::Answer> {
        Ok(0)
    }
}

#[cfg(test)]
#[path = "tests/test_day{{day_padded}}.rs"]
mod tests;
"#;

const TEST_BODY: &str = r#"use pretty_assertions::assert_eq;

use super::Day{{day_padded}};
use crate::{Puzzle, Solution, Workspace};

fn example() -> <Day{{day_padded}} as Solution>::Input {
    let puzzle = Puzzle::new({{year}}, {{day}}).unwrap();
    let text = Workspace::from_manifest_dir().read_example(puzzle).unwrap();
    Day{{day_padded}}::parse(&text).unwrap()
}

#[test]
fn parses_example() {
    example();
}

#[test]
fn part_one_example() {
    // Replace 0 with the answer from the puzzle text.
    assert_eq!(Day{{day_padded}}::part_one(&example()).unwrap(), 0);
}

#[test]
fn part_two_example() {
    assert_eq!(Day{{day_padded}}::part_two(&example()).unwrap(), 0);
}
"#;

/// `src/solutions/y<year>/mod.rs`: declares each day and registers it.
pub fn render_year_index(year: u16, days: &[Day]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{GENERATED_HEADER}\n");
    let _ = writeln!(out, "use crate::{{Error, Registry}};\n");
    for day in days {
        let _ = writeln!(out, "pub mod day{day};");
    }
    if !days.is_empty() {
        out.push('\n');
    }
    let param = if days.is_empty() { "_registry" } else { "registry" };
    let _ = writeln!(
        out,
        "pub fn register({param}: &mut Registry) -> Result<(), Error> {{"
    );
    for day in days {
        let _ = writeln!(
            out,
            "    registry.register::<day{day}::Day{day}>({year}, {})?;",
            day.get()
        );
    }
    out.push_str("    Ok(())\n}\n");
    out
}

/// `src/solutions/mod.rs`: declares each year and chains their registration.
pub fn render_root_index(years: &[u16]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{GENERATED_HEADER}\n");
    let _ = writeln!(out, "use crate::{{Error, Registry}};\n");
    for year in years {
        let _ = writeln!(out, "pub mod y{year};");
    }
    if !years.is_empty() {
        out.push('\n');
    }
    let param = if years.is_empty() { "_registry" } else { "registry" };
    let _ = writeln!(
        out,
        "pub fn register_all({param}: &mut Registry) -> Result<(), Error> {{"
    );
    for year in years {
        let _ = writeln!(out, "    y{year}::register(registry)?;");
    }
    out.push_str("    Ok(())\n}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn solution_template_substitutes_day_and_year() {
        let puzzle = Puzzle::new(2025, 7).unwrap();
        let text = SOLUTION.render(puzzle);
        assert!(text.starts_with("//! Advent of Code 2025, day 7.\n"));
        assert!(text.contains("pub struct Day07;"));
        assert!(text.contains("impl Solution for Day07 {"));
        assert!(text.contains(r#"#[path = "tests/test_day07.rs"]"#));
        assert!(!text.contains("{{"));
    }

    #[test]
    fn test_template_substitutes_day_and_year() {
        let puzzle = Puzzle::new(2019, 12).unwrap();
        let text = TEST.render(puzzle);
        assert!(text.contains("use super::Day12;"));
        assert!(text.contains("Puzzle::new(2019, 12)"));
        assert!(!text.contains("{{"));
    }

    #[test]
    fn registry_lookup_is_case_insensitive() {
        assert_eq!(TemplateRegistry::get("Solution").unwrap().kind, TemplateKind::Solution);
        assert_eq!(TemplateRegistry::get("test").unwrap().kind, TemplateKind::Test);
        assert!(TemplateRegistry::get("bench").is_err());
    }

    #[test]
    fn targets_follow_workspace_layout() {
        let ws = Workspace::new("/aoc");
        let puzzle = Puzzle::new(2025, 1).unwrap();
        assert_eq!(SOLUTION.target(&ws, puzzle), ws.solution_path(puzzle));
        assert_eq!(TEST.target(&ws, puzzle), ws.test_path(puzzle));
    }

    #[test]
    fn year_index_lists_days() {
        let days = [Day::new(1).unwrap(), Day::new(3).unwrap()];
        let expected = format!(
            "{GENERATED_HEADER}\n\n\
             use crate::{{Error, Registry}};\n\n\
             pub mod day01;\n\
             pub mod day03;\n\n\
             pub fn register(registry: &mut Registry) -> Result<(), Error> {{\n\
             \x20   registry.register::<day01::Day01>(2025, 1)?;\n\
             \x20   registry.register::<day03::Day03>(2025, 3)?;\n\
             \x20   Ok(())\n\
             }}\n"
        );
        assert_eq!(render_year_index(2025, &days), expected);
    }

    #[test]
    fn empty_root_index_compiles_without_years() {
        let text = render_root_index(&[]);
        assert!(text.contains("pub fn register_all(_registry: &mut Registry)"));
        assert!(!text.contains("pub mod"));
    }

    #[test]
    fn root_index_chains_years() {
        let text = render_root_index(&[2023, 2025]);
        assert!(text.contains("pub mod y2023;\npub mod y2025;\n"));
        assert!(text.contains("    y2023::register(registry)?;\n    y2025::register(registry)?;\n"));
    }
}
