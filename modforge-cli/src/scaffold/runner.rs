//! End-to-end scaffolding of one resource module
//!
//! inspect → plan → render → write. Rendering finishes before the first write,
//! so a template error never leaves a half-written module. Write errors are
//! not rolled back: files written before the failure stay on disk.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use super::generator::ScaffoldGenerator;
use super::reconcile::{ModuleState, Plan, Reconciler};
use super::{FileRole, ModulePath};
use crate::config::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use crate::output::Printer;
use crate::prompt::Prompter;
use crate::templates::TemplateRegistry;

/// Whether a missing module directory is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateMode {
    /// Create the module directory when absent
    #[default]
    CreateMissing,
    /// Only fill in files of modules that already exist
    ExistingOnly,
}

/// A file that was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// Module file role
    pub role: FileRole,
    /// Path relative to the project root
    pub path: PathBuf,
    /// Bytes written
    pub bytes: usize,
}

/// Result of one scaffolding run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Module directory does not exist (update-only runs)
    NotFound {
        /// Directory that was looked up, relative to the project root
        dir: PathBuf,
    },
    /// Every file already exists
    AlreadyExists {
        /// Module directory, relative to the project root
        dir: PathBuf,
    },
    /// Operator answer was not understood
    Aborted {
        /// The answer as typed
        response: String,
    },
    /// Files written, possibly none if the operator declined each one
    Written(Vec<WrittenFile>),
}

impl Outcome {
    /// Files written by this run
    #[must_use]
    pub fn written(&self) -> &[WrittenFile] {
        match self {
            Self::Written(files) => files,
            _ => &[],
        }
    }
}

/// Runs the scaffolding pipeline against a project directory
#[derive(Debug, Clone)]
pub struct Scaffolder {
    project_root: PathBuf,
    modules_root: PathBuf,
    templates_dir: Option<PathBuf>,
    create_mode: CreateMode,
    reconciler: Reconciler,
    printer: Printer,
}

impl Scaffolder {
    /// Scaffolder for the project at `project_root` using `config`
    pub fn new(project_root: impl Into<PathBuf>, config: &ScaffoldConfig) -> Self {
        let project_root = project_root.into();
        let templates_dir = config.templates_dir(&project_root);

        Self {
            modules_root: config.modules_root.clone(),
            templates_dir,
            project_root,
            create_mode: CreateMode::default(),
            reconciler: Reconciler::interactive(),
            printer: Printer::new(config.color),
        }
    }

    /// Set how a missing module directory is handled
    #[must_use]
    pub fn with_create_mode(mut self, create_mode: CreateMode) -> Self {
        self.create_mode = create_mode;
        self
    }

    /// Set the reconciler used for partial modules
    #[must_use]
    pub fn with_reconciler(mut self, reconciler: Reconciler) -> Self {
        self.reconciler = reconciler;
        self
    }

    /// Set the printer used for per-file reports
    #[must_use]
    pub fn with_printer(mut self, printer: Printer) -> Self {
        self.printer = printer;
        self
    }

    /// Scaffold `module`, asking `prompter` when the module is partial
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Template overrides cannot be read or compiled
    /// - The module directory cannot be inspected or created
    /// - The prompter fails
    /// - A file cannot be written
    pub fn run(&self, module: ModulePath, prompter: &mut dyn Prompter) -> Result<Outcome> {
        let templates = TemplateRegistry::with_overrides(self.templates_dir.as_deref())?;
        let generator = ScaffoldGenerator::new(module, &self.modules_root, templates);
        let identifier = generator.module().resource().identifier().to_string();
        let relative_dir = generator.target_dir();
        let dir = self.project_root.join(&relative_dir);

        if self.create_mode == CreateMode::CreateMissing && !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| ScaffoldError::io(&dir, e))?;
            info!(dir = %relative_dir.display(), "created module directory");
        }

        let state = ModuleState::inspect(&dir, &identifier)?;
        let plan = self.reconciler.plan(&state, &identifier, prompter)?;
        debug!(?plan, "reconciled module");

        let roles = match plan {
            Plan::NotFound => return Ok(Outcome::NotFound { dir: relative_dir }),
            Plan::AlreadyExists => return Ok(Outcome::AlreadyExists { dir: relative_dir }),
            Plan::Aborted { response } => return Ok(Outcome::Aborted { response }),
            Plan::Write(roles) => roles,
        };

        let files = generator.generate(&roles)?;
        let mut written = Vec::with_capacity(files.len());

        for file in files {
            let full_path = file.full_path(&self.project_root);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
            }
            fs::write(&full_path, &file.content).map_err(|e| ScaffoldError::io(&full_path, e))?;

            self.printer.created(&file.path, file.size());
            debug!(role = %file.role, bytes = file.size(), "wrote module file");

            written.push(WrittenFile {
                role: file.role,
                bytes: file.size(),
                path: file.path,
            });
        }

        Ok(Outcome::Written(written))
    }
}
