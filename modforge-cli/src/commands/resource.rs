//! `resource` and `nested-resource` commands
//!
//! # Example
//!
//! ```bash
//! modforge resource user
//! modforge nested-resource admin/billing/invoice
//! modforge resource order --existing --yes
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::ScaffoldConfig;
use crate::output::Printer;
use crate::prompt::{Prompter, TerminalPrompter};
use crate::scaffold::reconcile::Reconciler;
use crate::scaffold::{CreateMode, ModulePath, Outcome, ResourceName, Scaffolder};

/// How the command argument is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// A single resource name directly under the modules root
    Flat,
    /// `folder/.../name`
    Nested,
}

/// Flags shared by both commands
#[derive(Debug, Clone, Default)]
pub struct ResourceOptions {
    /// Project root; the modules root is resolved against it
    pub project_root: PathBuf,
    /// Config file replacing `<project_root>/modforge.toml`
    pub config_file: Option<PathBuf>,
    /// Only complete modules that already exist
    pub existing_only: bool,
    /// Create all missing files without asking
    pub assume_yes: bool,
    /// Disable colored output regardless of configuration
    pub no_color: bool,
}

/// Scaffold one resource module
pub struct ResourceCommand {
    /// Name or path as given on the command line
    target: Option<String>,
    kind: TargetKind,
    options: ResourceOptions,
}

impl ResourceCommand {
    /// Create a command for `target`; `None` means the argument was omitted
    #[must_use]
    pub const fn new(target: Option<String>, kind: TargetKind, options: ResourceOptions) -> Self {
        Self {
            target,
            kind,
            options,
        }
    }

    /// Execute against the terminal
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration cannot be loaded
    /// - The resource name or path is invalid
    /// - Reading operator input or writing files fails
    pub fn execute(&self) -> Result<()> {
        let config = self.load_config()?;
        let mut prompter = TerminalPrompter::new(self.colors(&config));
        self.execute_with(&config, &mut prompter)?;
        Ok(())
    }

    /// Execute with an explicit configuration and prompter
    ///
    /// Returns `None` when no resource name was supplied.
    ///
    /// # Errors
    ///
    /// See [`Self::execute`].
    pub fn execute_with(
        &self,
        config: &ScaffoldConfig,
        prompter: &mut dyn Prompter,
    ) -> Result<Option<Outcome>> {
        let printer = Printer::new(self.colors(config));

        let Some(target) = self.target.as_deref().filter(|t| !t.trim().is_empty()) else {
            printer.error("Please provide a resource name, e.g. `modforge resource user`.");
            return Ok(None);
        };

        let module = match self.kind {
            TargetKind::Flat => ModulePath::flat(
                ResourceName::parse(target).context("Failed to normalize resource name")?,
            ),
            TargetKind::Nested => {
                ModulePath::parse(target).context("Failed to resolve resource path")?
            }
        };

        let raw = module.resource().raw();
        if raw == module.resource().identifier() {
            printer.heading(&format!(
                "Scaffolding module {}...",
                printer.highlight(&module.display_name())
            ));
        } else {
            printer.heading(&format!(
                "Scaffolding module {} (from '{raw}')...",
                printer.highlight(&module.display_name())
            ));
        }

        let reconciler = if self.options.assume_yes {
            Reconciler::assume_all()
        } else {
            Reconciler::interactive()
        };
        let create_mode = if self.options.existing_only {
            CreateMode::ExistingOnly
        } else {
            CreateMode::CreateMissing
        };

        let scaffolder = Scaffolder::new(&self.options.project_root, config)
            .with_create_mode(create_mode)
            .with_reconciler(reconciler)
            .with_printer(printer);

        let outcome = scaffolder
            .run(module.clone(), prompter)
            .with_context(|| format!("Failed to scaffold module '{}'", module.display_name()))?;

        Self::report(&printer, &module, &outcome);

        Ok(Some(outcome))
    }

    fn load_config(&self) -> Result<ScaffoldConfig> {
        ScaffoldConfig::load(&self.options.project_root, self.options.config_file.as_deref())
            .context("Failed to load configuration")
    }

    const fn colors(&self, config: &ScaffoldConfig) -> bool {
        config.color && !self.options.no_color
    }

    fn report(printer: &Printer, module: &ModulePath, outcome: &Outcome) {
        let name = module.display_name();

        match outcome {
            Outcome::NotFound { dir } => {
                printer.warn(&format!(
                    "Module '{name}' not found at {}. Nothing was written.",
                    dir.display()
                ));
            }
            Outcome::AlreadyExists { dir } => {
                printer.warn(&format!(
                    "Module '{name}' already exists at {}. Nothing was written.",
                    dir.display()
                ));
            }
            Outcome::Aborted { response } => {
                printer.error(&format!(
                    "Unrecognized response '{}'. Aborted, no files were written.",
                    response.trim()
                ));
            }
            Outcome::Written(files) if files.is_empty() => {
                printer.warn("No files selected. Nothing was written.");
            }
            Outcome::Written(files) => {
                let resource = module.resource();
                let route_file = format!("./modules/{name}/{}.route", resource.identifier());

                printer.success(&format!("Created {} file(s) for module '{name}'", files.len()));
                printer.heading("Next steps:");
                printer.line(&format!(
                    "  1. Import the router: {}",
                    printer.highlight(&format!(
                        "import {{ {}Routes }} from '{route_file}';",
                        resource.capitalized()
                    ))
                ));
                printer.line(&format!(
                    "  2. Mount it: {}",
                    printer.highlight(&format!(
                        "app.use('{}', {}Routes);",
                        resource.route_path(),
                        resource.capitalized()
                    ))
                ));
                printer.line(&format!(
                    "  3. Add a {} model to your Prisma schema",
                    printer.highlight(resource.capitalized())
                ));
                printer.line(&format!(
                    "  To update this module later: {}",
                    printer.highlight(&rerun_command(module))
                ));
            }
        }
    }
}

/// Command line that resolves to the same module directory again
///
/// Uses the kebab form, since a camelCase name would be lowercased.
fn rerun_command(module: &ModulePath) -> String {
    let kebab = module.resource().kebab();
    if module.is_nested() {
        format!(
            "modforge nested-resource {}/{kebab}",
            module.folders().join("/")
        )
    } else {
        format!("modforge resource {kebab}")
    }
}
