//! Template registry for module files
//!
//! Template bodies are data: the embedded defaults live in [`files`], and a
//! project may override any of them with `<role>.ts.hbs` files in a templates
//! directory. Rendering is a pure `render(role, bindings)` call.

use std::fs;
use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, ScaffoldError};
use crate::scaffold::FileRole;

pub mod files;
pub use files::*;

/// Embedded body for `role`
#[must_use]
pub const fn embedded(role: FileRole) -> &'static str {
    match role {
        FileRole::Controller => CONTROLLER_TS,
        FileRole::Route => ROUTE_TS,
        FileRole::Service => SERVICE_TS,
        FileRole::Validation => VALIDATION_TS,
    }
}

/// File name of the override template for `role`
#[must_use]
pub fn override_file_name(role: FileRole) -> String {
    format!("{}.ts.hbs", role.as_str())
}

/// Compiled templates, one per [`FileRole`]
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Registry with the embedded templates only
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template fails to compile.
    pub fn new() -> Result<Self> {
        Self::with_overrides(None)
    }

    /// Registry where files in `overrides_dir` replace embedded templates
    ///
    /// Roles without an override file keep the embedded body.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An override file exists but cannot be read
    /// - Any template fails to compile
    pub fn with_overrides(overrides_dir: Option<&Path>) -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Generating code, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        for role in FileRole::ALL {
            let body = match overrides_dir.map(|dir| dir.join(override_file_name(role))) {
                Some(path) if path.is_file() => {
                    debug!(%role, path = %path.display(), "using template override");
                    fs::read_to_string(&path).map_err(|e| ScaffoldError::io(&path, e))?
                }
                _ => embedded(role).to_string(),
            };

            handlebars
                .register_template_string(role.as_str(), body)
                .map_err(|e| ScaffoldError::Template {
                    name: role.as_str().to_string(),
                    message: e.to_string(),
                })?;
        }

        Ok(Self { handlebars })
    }

    /// Render the template for `role`, trimmed of surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns an error if a binding referenced by the template is missing.
    pub fn render<T: Serialize>(&self, role: FileRole, bindings: &T) -> Result<String> {
        let rendered = self
            .handlebars
            .render(role.as_str(), bindings)
            .map_err(|e| ScaffoldError::Render {
                name: role.as_str().to_string(),
                message: e.to_string(),
            })?;

        Ok(rendered.trim().to_string())
    }
}
