//! Module version values
//!
//! Versions are written as `v<major>.<minor>.<patch>`, the way they appear in
//! go.mod `require` lines. Pre-release and build metadata are not supported.

use crate::error::PolicyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A three-component module version, ordered lexicographically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Creates a new Version
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parses a `v<int>.<int>.<int>` token
    pub fn parse(token: &str) -> Result<Self, PolicyError> {
        let malformed = || PolicyError::malformed_version(token);

        let rest = token.strip_prefix('v').ok_or_else(malformed)?;
        let parts: Vec<&str> = rest.split('.').collect();
        if parts.len() != 3 {
            return Err(malformed());
        }

        let major = parse_component(parts[0]).ok_or_else(malformed)?;
        let minor = parse_component(parts[1]).ok_or_else(malformed)?;
        let patch = parse_component(parts[2]).ok_or_else(malformed)?;

        Ok(Self::new(major, minor, patch))
    }
}

/// Parses one numeric component: ASCII digits only, no leading zeros
fn parse_component(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.len() > 1 && s.starts_with('0') {
        return None;
    }
    s.parse().ok()
}

impl FromStr for Version {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = PolicyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Version> for String {
    fn from(value: Version) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}
