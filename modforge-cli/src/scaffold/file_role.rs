//! The four files every resource module consists of

use std::fmt;

/// Role of a generated file within a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileRole {
    /// Request handlers
    Controller,
    /// Router registration
    Route,
    /// Data access through the ORM client
    Service,
    /// Request body schemas
    Validation,
}

impl FileRole {
    /// Every role, in generation order
    pub const ALL: [Self; 4] = [Self::Controller, Self::Route, Self::Service, Self::Validation];

    /// Role suffix used in file names
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::Route => "route",
            Self::Service => "service",
            Self::Validation => "validation",
        }
    }

    /// `<identifier>.<role>.ts`
    #[must_use]
    pub fn file_name(self, identifier: &str) -> String {
        format!("{identifier}.{}.ts", self.as_str())
    }
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
