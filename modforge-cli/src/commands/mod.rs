//! CLI command implementations

pub mod resource;

pub use resource::{ResourceCommand, ResourceOptions, TargetKind};
