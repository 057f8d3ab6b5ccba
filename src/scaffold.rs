use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::Artifact;
use crate::puzzle::Puzzle;
use crate::templates::{self, TemplateKind, TemplateRegistry};
use crate::workspace::Workspace;

/// What happened to a single file during scaffolding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Created,
    /// A file was already there and was left untouched.
    Skipped,
}

/// Files touched by [`scaffold`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub solution: (PathBuf, FileOutcome),
    pub test: (PathBuf, FileOutcome),
    pub example: (PathBuf, FileOutcome),
}

impl ScaffoldReport {
    /// True when neither the solution nor the test file was written.
    pub fn nothing_created(&self) -> bool {
        self.solution.1 == FileOutcome::Skipped && self.test.1 == FileOutcome::Skipped
    }
}

/// Create the solution, test and example files for `puzzle`.
///
/// Existing files are never overwritten. The solution index files are rebuilt
/// from the days on disk so the new module is compiled on the next build.
pub fn scaffold(workspace: &Workspace, puzzle: Puzzle) -> Result<ScaffoldReport> {
    for kind in [Artifact::Input, Artifact::Puzzle, Artifact::Example] {
        let dir = workspace.artifact_dir(puzzle.year, kind);
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let mut solution = None;
    let mut test = None;
    for tpl in TemplateRegistry::list() {
        let path = tpl.target(workspace, puzzle);
        let outcome = write_new(&path, &tpl.render(puzzle))?;
        match tpl.kind {
            TemplateKind::Solution => solution = Some((path, outcome)),
            TemplateKind::Test => test = Some((path, outcome)),
        }
    }
    let example_path = workspace.example_path(puzzle);
    let example = write_new(&example_path, "")?;

    write_indexes(workspace)?;

    Ok(ScaffoldReport {
        solution: solution.context("solution template missing from registry")?,
        test: test.context("test template missing from registry")?,
        example: (example_path, example),
    })
}

/// Regenerate `src/solutions/mod.rs` and each year's `mod.rs`.
pub fn write_indexes(workspace: &Workspace) -> Result<()> {
    let years = workspace.scaffolded_years()?;
    for &year in &years {
        let days = workspace.scaffolded_days(year)?;
        write_derived(
            &workspace.year_index_path(year),
            &templates::render_year_index(year, &days),
        )?;
    }
    write_derived(
        &workspace.root_index_path(),
        &templates::render_root_index(&years),
    )
}

/// Write `contents` to `path` unless something already exists there.
fn write_new(path: &Path, contents: &str) -> Result<FileOutcome> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            log::info!("{} already exists, leaving it alone", path.display());
            return Ok(FileOutcome::Skipped);
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to create {}", path.display()));
        }
    };
    file.write_all(contents.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::debug!("created {}", path.display());
    Ok(FileOutcome::Created)
}

/// Overwrite a generated file, skipping the write when it is already current.
fn write_derived(path: &Path, contents: &str) -> Result<()> {
    if fs::read_to_string(path).is_ok_and(|current| current == contents) {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    log::debug!("regenerated {}", path.display());
    Ok(())
}
