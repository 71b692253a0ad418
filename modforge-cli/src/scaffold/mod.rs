//! Resource module scaffolding
//!
//! Normalizes a resource name, locates its module directory, reconciles the
//! expected file set against what is on disk and writes the missing files.

pub mod file_role;
pub mod generator;
pub mod module_path;
pub mod naming;
pub mod reconcile;
pub mod runner;

pub use file_role::FileRole;
pub use generator::{GeneratedFile, ScaffoldGenerator};
pub use module_path::ModulePath;
pub use naming::ResourceName;
pub use reconcile::{ModuleState, Plan, Reconciler, ResolutionMode};
pub use runner::{CreateMode, Outcome, Scaffolder, WrittenFile};
