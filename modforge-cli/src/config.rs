//! Scaffolder configuration
//!
//! Loaded from several sources, later ones winning:
//!
//! 1. Hardcoded defaults
//! 2. `~/.config/modforge/config.toml` (user config)
//! 3. `<project>/modforge.toml`, or the file passed with `--config`
//! 4. Environment variables with the `MODFORGE_` prefix
//!
//! # Example Configuration
//!
//! ```toml
//! # modforge.toml
//! modules_root = "src/app/modules"
//! templates_dir = ".modforge/templates"
//! color = true
//! ```

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

/// Project-local configuration file name
pub const PROJECT_CONFIG_FILE: &str = "modforge.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "MODFORGE_";

/// Scaffolder settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Directory holding one subdirectory per resource, relative to the project root
    pub modules_root: PathBuf,

    /// Directory with `<role>.ts.hbs` template overrides
    pub templates_dir: Option<PathBuf>,

    /// Colored terminal output
    pub color: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            modules_root: PathBuf::from("src/modules"),
            templates_dir: None,
            color: true,
        }
    }
}

impl ScaffoldConfig {
    /// Load configuration for the project at `project_root`
    ///
    /// `explicit` replaces the project-local `modforge.toml` and must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `explicit` is given but does not exist
    /// - A configuration file contains invalid TOML
    /// - A value has the wrong type
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let defaults = toml::to_string(&Self::default())
            .map_err(|e| ScaffoldError::Config(e.to_string()))?;
        let mut figment = Figment::new().merge(Toml::string(&defaults));

        if let Some(user_config) = Self::user_config_path() {
            if user_config.is_file() {
                figment = figment.merge(Toml::file(&user_config));
            }
        }

        match explicit {
            Some(path) if !path.is_file() => {
                return Err(ScaffoldError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => {
                let local = project_root.join(PROJECT_CONFIG_FILE);
                if local.is_file() {
                    figment = figment.merge(Toml::file(&local));
                }
            }
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        Ok(figment.extract()?)
    }

    /// `~/.config/modforge/config.toml`, if a config directory is known
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("modforge").join("config.toml"))
    }

    /// Template override directory anchored at `project_root`
    #[must_use]
    pub fn templates_dir(&self, project_root: &Path) -> Option<PathBuf> {
        self.templates_dir.as_ref().map(|dir| project_root.join(dir))
    }
}
