//! Error types for the scaffolder

use std::path::PathBuf;
use thiserror::Error;

/// Scaffolder error type
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Resource name normalizes to nothing usable
    #[error("Invalid resource name '{0}': it must contain at least one letter")]
    InvalidResourceName(String),

    /// Nested path is malformed
    #[error("Invalid resource path '{path}': {reason}")]
    InvalidPath {
        /// Path as supplied by the operator
        path: String,
        /// What is wrong with it
        reason: String,
    },

    /// Template body failed to register
    #[error("Template '{name}' is invalid: {message}")]
    Template {
        /// Template name
        name: String,
        /// Parser message
        message: String,
    },

    /// Template failed to render
    #[error("Failed to render template '{name}': {message}")]
    Render {
        /// Template name
        name: String,
        /// Renderer message
        message: String,
    },

    /// Reading operator input failed
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// File system error
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScaffoldError {
    /// Wrap an I/O error with the path it happened at
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<figment::Error> for ScaffoldError {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result alias used across the library
pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
