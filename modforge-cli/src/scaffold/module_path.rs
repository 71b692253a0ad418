//! Module location resolution
//!
//! A resource argument may be a plain name (`user`) or a slash-delimited path
//! (`admin/billing/invoice`). The last segment is the resource, everything
//! before it is a folder under the modules root.

use std::path::{Path, PathBuf};

use super::naming::ResourceName;
use super::FileRole;
use crate::error::{Result, ScaffoldError};

/// Parent steps from a flat module directory back to the shared helpers
const BASE_IMPORT_DEPTH: usize = 2;

/// Where a resource module lives relative to the modules root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePath {
    folders: Vec<String>,
    resource: ResourceName,
}

impl ModulePath {
    /// Flat module directly under the modules root
    #[must_use]
    pub const fn flat(resource: ResourceName) -> Self {
        Self {
            folders: Vec::new(),
            resource,
        }
    }

    /// Parse a slash-delimited path into folders and resource name
    ///
    /// Empty segments are ignored, so `a//b/` equals `a/b`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No segments remain after dropping empty ones
    /// - A segment is `.` or `..`
    /// - The final segment is not a usable resource name
    ///
    /// # Examples
    ///
    /// ```
    /// # use modforge_cli_lib::scaffold::ModulePath;
    /// let path = ModulePath::parse("a/b/widget").unwrap();
    /// assert_eq!(path.folders(), ["a", "b"]);
    /// assert_eq!(path.resource().identifier(), "widget");
    /// assert_eq!(path.import_depth(), 4);
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let mut segments: Vec<&str> = input
            .split(['/', '\\'])
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect();

        if let Some(bad) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(ScaffoldError::InvalidPath {
                path: input.to_string(),
                reason: format!("segment '{bad}' is not allowed"),
            });
        }

        let Some(name) = segments.pop() else {
            return Err(ScaffoldError::InvalidPath {
                path: input.to_string(),
                reason: "no resource name given".to_string(),
            });
        };

        Ok(Self {
            folders: segments.into_iter().map(str::to_string).collect(),
            resource: ResourceName::parse(name)?,
        })
    }

    /// Nested folder segments, outermost first
    #[must_use]
    pub fn folders(&self) -> &[String] {
        &self.folders
    }

    /// The resource this module holds
    #[must_use]
    pub const fn resource(&self) -> &ResourceName {
        &self.resource
    }

    /// Whether the module sits below at least one folder
    #[must_use]
    pub fn is_nested(&self) -> bool {
        !self.folders.is_empty()
    }

    /// Module directory relative to wherever `modules_root` is anchored
    #[must_use]
    pub fn target_dir(&self, modules_root: &Path) -> PathBuf {
        let mut dir = modules_root.to_path_buf();
        dir.extend(&self.folders);
        dir.push(self.resource.identifier());
        dir
    }

    /// File for `role` under `modules_root`
    #[must_use]
    pub fn file_path(&self, modules_root: &Path, role: FileRole) -> PathBuf {
        self.target_dir(modules_root)
            .join(role.file_name(self.resource.identifier()))
    }

    /// Parent-directory steps from the module directory to the shared helpers
    #[must_use]
    pub fn import_depth(&self) -> usize {
        self.folders.len() + BASE_IMPORT_DEPTH
    }

    /// Relative import prefix (`../../`) matching [`Self::import_depth`]
    #[must_use]
    pub fn import_prefix(&self) -> String {
        "../".repeat(self.import_depth())
    }

    /// Display form, `folder/.../identifier`
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut parts: Vec<&str> = self.folders.iter().map(String::as_str).collect();
        parts.push(self.resource.identifier());
        parts.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_path() {
        let path = ModulePath::parse("user").unwrap();
        assert!(!path.is_nested());
        assert_eq!(path.import_depth(), 2);
        assert_eq!(path.import_prefix(), "../../");
        assert_eq!(
            path.target_dir(Path::new("src/modules")),
            PathBuf::from("src/modules/user")
        );
    }

    #[test]
    fn test_nested_path() {
        let path = ModulePath::parse("a/b/widget").unwrap();
        assert!(path.is_nested());
        assert_eq!(path.folders(), ["a", "b"]);
        assert_eq!(path.import_depth(), 4);
        assert_eq!(path.import_prefix(), "../../../../");
        assert_eq!(
            path.target_dir(Path::new("src/modules")),
            PathBuf::from("src/modules/a/b/widget")
        );
    }

    #[test]
    fn test_resource_segment_is_normalized() {
        let path = ModulePath::parse("admin/Blog Post").unwrap();
        assert_eq!(path.folders(), ["admin"]);
        assert_eq!(path.resource().identifier(), "blogPost");
        assert_eq!(path.display_name(), "admin/blogPost");
        assert_eq!(
            path.file_path(Path::new("src/modules"), FileRole::Service),
            PathBuf::from("src/modules/admin/blogPost/blogPost.service.ts")
        );
    }

    #[test]
    fn test_empty_segments_are_ignored() {
        let path = ModulePath::parse("/a//b/widget/").unwrap();
        assert_eq!(path.folders(), ["a", "b"]);
        assert_eq!(path.import_depth(), 4);
    }

    #[test]
    fn test_backslash_separator() {
        let path = ModulePath::parse("shop\\order").unwrap();
        assert_eq!(path.folders(), ["shop"]);
        assert_eq!(path.resource().identifier(), "order");
    }

    #[test]
    fn test_rejects_relative_segments() {
        assert!(matches!(
            ModulePath::parse("../escape"),
            Err(ScaffoldError::InvalidPath { .. })
        ));
        assert!(matches!(
            ModulePath::parse("a/./b"),
            Err(ScaffoldError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(matches!(
            ModulePath::parse("///"),
            Err(ScaffoldError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_flat_constructor_matches_parse() {
        let name = ResourceName::parse("order").unwrap();
        assert_eq!(ModulePath::flat(name), ModulePath::parse("order").unwrap());
    }
}
