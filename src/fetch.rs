//! Puzzle and input download through the external `aoc` command (aoc-cli).
//!
//! The tool owns HTTP and session handling; this module only decides where
//! files go and turns the tool's failures into [`FetchError`]s.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Output};

use thiserror::Error;

use crate::error::Artifact;
use crate::puzzle::Puzzle;
use crate::workspace::Workspace;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(
        "`{command}` not found. Install it with: cargo install aoc-cli\n\
         Then configure with: aoc credentials -s <session_cookie>"
    )]
    ToolMissing { command: String },
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("`{command}` {what} failed ({status}): {stderr}")]
    ToolFailed {
        command: String,
        what: &'static str,
        status: ExitStatus,
        stderr: String,
    },
    #[error(
        "download succeeded but file not found at {path}\nstdout: {stdout}\nstderr: {stderr}",
        path = .path.display()
    )]
    MissingOutput {
        path: PathBuf,
        stdout: String,
        stderr: String,
    },
    #[error("failed to prepare {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Which artifacts a download should fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    #[default]
    Both,
    InputOnly,
    PuzzleOnly,
}

impl FetchMode {
    pub fn from_flags(input_only: bool, puzzle_only: bool) -> Self {
        match (input_only, puzzle_only) {
            (true, false) => FetchMode::InputOnly,
            (false, true) => FetchMode::PuzzleOnly,
            _ => FetchMode::Both,
        }
    }

    pub fn artifacts(self) -> &'static [Artifact] {
        match self {
            FetchMode::Both => &[Artifact::Input, Artifact::Puzzle],
            FetchMode::InputOnly => &[Artifact::Input],
            FetchMode::PuzzleOnly => &[Artifact::Puzzle],
        }
    }
}

/// A file written by a successful download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub artifact: Artifact,
    pub path: PathBuf,
}

/// Handle on the aoc-cli executable.
#[derive(Debug, Clone)]
pub struct AocCli {
    command: String,
    cwd: PathBuf,
}

impl AocCli {
    /// `command` is run from `cwd` so aoc-cli picks up any project-local config.
    pub fn new<S: Into<String>, P: Into<PathBuf>>(command: S, cwd: P) -> Self {
        Self {
            command: command.into(),
            cwd: cwd.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Confirm the tool can be started, returning its version line.
    pub fn check(&self) -> Result<String, FetchError> {
        let output = self.run(&["--version"])?;
        if !output.status.success() {
            return Err(FetchError::ToolFailed {
                command: self.command.clone(),
                what: "version check",
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Fetch the artifacts selected by `mode` into the workspace data directory.
    ///
    /// Stops at the first failure; files fetched before it stay on disk.
    pub fn download(
        &self,
        workspace: &Workspace,
        puzzle: Puzzle,
        mode: FetchMode,
    ) -> Result<Vec<Fetched>, FetchError> {
        self.check()?;
        let mut fetched = Vec::new();
        for &artifact in mode.artifacts() {
            let path = workspace.artifact_path(puzzle, artifact);
            self.download_one(puzzle, artifact, &path)?;
            fetched.push(Fetched { artifact, path });
        }
        Ok(fetched)
    }

    fn download_one(&self, puzzle: Puzzle, artifact: Artifact, path: &Path) -> Result<(), FetchError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| FetchError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let (what, only_flag, file_flag) = match artifact {
            Artifact::Puzzle => ("puzzle download", "--puzzle-only", "--puzzle-file"),
            _ => ("input download", "--input-only", "--input-file"),
        };
        let year = puzzle.year.to_string();
        let day = puzzle.day.get().to_string();
        let target = path.to_string_lossy();
        let output = self.run(&[
            "download",
            "--year",
            &year,
            "--day",
            &day,
            only_flag,
            file_flag,
            &target,
            "--overwrite",
        ])?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(FetchError::ToolFailed {
                command: self.command.clone(),
                what,
                status: output.status,
                stderr,
            });
        }
        if !path.exists() {
            return Err(FetchError::MissingOutput {
                path: path.to_path_buf(),
                stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
                stderr,
            });
        }
        log::info!("{what} for {puzzle} saved to {}", path.display());
        Ok(())
    }

    fn run(&self, args: &[&str]) -> Result<Output, FetchError> {
        log::debug!("running {} {}", self.command, args.join(" "));
        Command::new(&self.command)
            .args(args)
            .current_dir(&self.cwd)
            .output()
            .map_err(|source| {
                if source.kind() == io::ErrorKind::NotFound {
                    FetchError::ToolMissing {
                        command: self.command.clone(),
                    }
                } else {
                    FetchError::Spawn {
                        command: self.command.clone(),
                        source,
                    }
                }
            })
    }
}
