//! Existing-file reconciliation
//!
//! Compares the expected file set of a module against what is on disk and
//! turns that into a [`Plan`]. Every operator decision is taken before the
//! plan is returned, so an ambiguous answer can never leave a module half
//! written.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use super::FileRole;
use crate::error::{Result, ScaffoldError};
use crate::prompt::Prompter;

/// What was found at a module directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleState {
    /// The module directory does not exist
    NotFound,
    /// All expected files are present
    Complete,
    /// Some files are present, the rest are listed in `missing`
    Partial {
        /// Roles that have no file yet
        missing: Vec<FileRole>,
    },
    /// Directory exists but holds none of the expected files
    Empty,
}

impl ModuleState {
    /// Inspect `dir` for the files of resource `identifier`
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` exists but is not a directory, or if its
    /// metadata cannot be read.
    pub fn inspect(dir: &Path, identifier: &str) -> Result<Self> {
        match fs::metadata(dir) {
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::NotFound),
            Err(e) => return Err(ScaffoldError::io(dir, e)),
            Ok(meta) if !meta.is_dir() => {
                return Err(ScaffoldError::InvalidPath {
                    path: dir.display().to_string(),
                    reason: "exists but is not a directory".to_string(),
                });
            }
            Ok(_) => {}
        }

        let missing: Vec<FileRole> = FileRole::ALL
            .into_iter()
            .filter(|role| !dir.join(role.file_name(identifier)).is_file())
            .collect();

        let state = match missing.len() {
            0 => Self::Complete,
            n if n == FileRole::ALL.len() => Self::Empty,
            _ => Self::Partial { missing },
        };
        debug!(dir = %dir.display(), ?state, "inspected module directory");

        Ok(state)
    }
}

/// How the operator wants missing files of a partial module handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionMode {
    /// Confirm each missing file separately
    EachFile,
    /// Create every missing file
    AllMissing,
}

impl ResolutionMode {
    /// Interpret an answer to the mode question
    #[must_use]
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim().to_ascii_lowercase().as_str() {
            "1" | "one" | "each" => Some(Self::EachFile),
            "2" | "all" => Some(Self::AllMissing),
            _ => None,
        }
    }
}

/// Interpret a yes/no answer
#[must_use]
pub fn parse_confirmation(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Outcome of reconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// Module directory is missing; nothing is written
    NotFound,
    /// Module already has every file; nothing is written
    AlreadyExists,
    /// Operator gave an answer that is not understood; nothing is written
    Aborted {
        /// The answer as typed
        response: String,
    },
    /// Write these roles, in order
    Write(Vec<FileRole>),
}

/// Turns a [`ModuleState`] into a [`Plan`], asking the operator when needed
#[derive(Debug, Clone, Copy, Default)]
pub struct Reconciler {
    assume_all: bool,
}

impl Reconciler {
    /// Reconciler that asks the operator about partial modules
    #[must_use]
    pub const fn interactive() -> Self {
        Self { assume_all: false }
    }

    /// Reconciler that creates every missing file without asking
    #[must_use]
    pub const fn assume_all() -> Self {
        Self { assume_all: true }
    }

    /// Decide what to write for a module in `state`
    ///
    /// `identifier` names the files in prompts.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompter cannot read an answer.
    pub fn plan(
        &self,
        state: &ModuleState,
        identifier: &str,
        prompter: &mut dyn Prompter,
    ) -> Result<Plan> {
        let missing = match state {
            ModuleState::NotFound => return Ok(Plan::NotFound),
            ModuleState::Complete => return Ok(Plan::AlreadyExists),
            ModuleState::Empty => return Ok(Plan::Write(FileRole::ALL.to_vec())),
            ModuleState::Partial { missing } => missing,
        };

        if self.assume_all {
            return Ok(Plan::Write(missing.clone()));
        }

        let names: Vec<String> = missing.iter().map(|r| r.file_name(identifier)).collect();
        let question = format!(
            "Module '{identifier}' is missing {} of {} files ({}). Create them [1] one by one or [2] all at once?",
            missing.len(),
            FileRole::ALL.len(),
            names.join(", ")
        );

        let answer = prompter.ask(&question)?;
        let Some(mode) = ResolutionMode::parse(&answer) else {
            return Ok(Plan::Aborted { response: answer });
        };
        debug!(?mode, "resolution mode chosen");

        match mode {
            ResolutionMode::AllMissing => Ok(Plan::Write(missing.clone())),
            ResolutionMode::EachFile => {
                let mut selected = Vec::with_capacity(missing.len());
                for (role, name) in missing.iter().zip(&names) {
                    let answer = prompter.ask(&format!("Create {name}? (y/n)"))?;
                    match parse_confirmation(&answer) {
                        Some(true) => selected.push(*role),
                        Some(false) => {}
                        None => return Ok(Plan::Aborted { response: answer }),
                    }
                }
                Ok(Plan::Write(selected))
            }
        }
    }
}
