//! Manifest entries

use super::Version;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dependency identified by module path and resolved version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Module {
    /// Module path (e.g., `github.com/gin-gonic/gin`)
    pub path: String,
    /// Resolved version
    pub version: Version,
}

impl Module {
    /// Creates a new module
    pub fn new(path: impl Into<String>, version: Version) -> Self {
        Self {
            path: path.into(),
            version,
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.version)
    }
}
