//! Module file generator
//!
//! Binds a [`ModulePath`] to the template registry and renders the files
//! selected by the reconciler. Nothing here touches the file system.

use std::path::{Path, PathBuf};

use super::{FileRole, ModulePath};
use crate::error::Result;
use crate::templates::TemplateRegistry;

/// Renders module files for one resource
pub struct ScaffoldGenerator {
    /// Module being generated
    module: ModulePath,
    /// Modules root relative to the project root
    modules_root: PathBuf,
    /// Template registry
    templates: TemplateRegistry,
}

impl ScaffoldGenerator {
    /// Create a generator for `module` under `modules_root`
    #[must_use]
    pub fn new(module: ModulePath, modules_root: impl Into<PathBuf>, templates: TemplateRegistry) -> Self {
        Self {
            module,
            modules_root: modules_root.into(),
            templates,
        }
    }

    /// The module being generated
    #[must_use]
    pub const fn module(&self) -> &ModulePath {
        &self.module
    }

    /// Module directory relative to the project root
    #[must_use]
    pub fn target_dir(&self) -> PathBuf {
        self.module.target_dir(&self.modules_root)
    }

    /// Template variables for this module
    #[must_use]
    pub fn metadata(&self) -> serde_json::Value {
        let resource = self.module.resource();

        serde_json::json!({
            "name": resource.identifier(),
            "Name": resource.capitalized(),
            "names": resource.plural(),
            "Names": resource.plural_capitalized(),
            "kebab": resource.kebab(),
            "route_path": resource.route_path(),
            "import_prefix": self.module.import_prefix(),
        })
    }

    /// Render the file for a single role
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn generate_file(&self, role: FileRole) -> Result<GeneratedFile> {
        let content = self.templates.render(role, &self.metadata())?;

        Ok(GeneratedFile {
            role,
            path: self.module.file_path(&self.modules_root, role),
            content,
        })
    }

    /// Render every role in `roles`, in order
    ///
    /// # Errors
    ///
    /// Returns an error if any template fails to render; no partial list is
    /// returned in that case.
    pub fn generate(&self, roles: &[FileRole]) -> Result<Vec<GeneratedFile>> {
        roles.iter().map(|&role| self.generate_file(role)).collect()
    }
}

/// A rendered file ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Which module file this is
    pub role: FileRole,
    /// Path relative to the project root
    pub path: PathBuf,
    /// File content
    pub content: String,
}

impl GeneratedFile {
    /// Content size in bytes
    #[must_use]
    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// Absolute location under `project_root`
    #[must_use]
    pub fn full_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.path)
    }
}
