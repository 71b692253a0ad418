//! modforge CLI library
//!
//! Generates Express/Prisma resource modules: a controller, route, service
//! and validation file per resource, under `src/modules`.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod observability;
pub mod output;
pub mod prompt;
pub mod scaffold;
pub mod templates;

pub use config::ScaffoldConfig;
pub use error::{Result, ScaffoldError};
pub use output::Printer;
pub use prompt::{Prompter, ScriptedPrompter, TerminalPrompter};
pub use scaffold::{FileRole, ModulePath, Outcome, ResourceName, Scaffolder};
