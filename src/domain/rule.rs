//! Per-module policy rules and the rule set built from rule text

use super::{Range, Version};
use std::collections::HashMap;

/// Which list a directive contributes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleSide {
    /// Versions explicitly permitted (the allow gate)
    Allow,
    /// Versions explicitly forbidden
    Deny,
}

/// Policy for a single module path
///
/// An empty allow list means "no allow restriction", not "allow nothing".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rule {
    pub allow_versions: Vec<Version>,
    pub allow_ranges: Vec<Range>,
    pub deny_versions: Vec<Version>,
    pub deny_ranges: Vec<Range>,
}

impl Rule {
    /// Creates an empty rule
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an exact version to the given side
    pub fn add_version(&mut self, side: RuleSide, version: Version) {
        match side {
            RuleSide::Allow => self.allow_versions.push(version),
            RuleSide::Deny => self.deny_versions.push(version),
        }
    }

    /// Adds a range to the given side
    pub fn add_range(&mut self, side: RuleSide, range: Range) {
        match side {
            RuleSide::Allow => self.allow_ranges.push(range),
            RuleSide::Deny => self.deny_ranges.push(range),
        }
    }

    /// Adds an exact version to the given side (builder pattern)
    pub fn with_version(mut self, side: RuleSide, version: Version) -> Self {
        self.add_version(side, version);
        self
    }

    /// Adds a range to the given side (builder pattern)
    pub fn with_range(mut self, side: RuleSide, range: Range) -> Self {
        self.add_range(side, range);
        self
    }

    /// Returns true if any allow entry exists
    pub fn has_allow_restriction(&self) -> bool {
        !self.allow_versions.is_empty() || !self.allow_ranges.is_empty()
    }

    /// Returns true if `version` equals a listed exact version or falls in a listed range
    pub fn matches(&self, side: RuleSide, version: &Version) -> bool {
        let (versions, ranges) = match side {
            RuleSide::Allow => (&self.allow_versions, &self.allow_ranges),
            RuleSide::Deny => (&self.deny_versions, &self.deny_ranges),
        };
        versions.contains(version) || ranges.iter().any(|r| r.contains(version))
    }
}

/// Immutable mapping from module path to [`Rule`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    modules: HashMap<String, Rule>,
}

impl RuleSet {
    /// Looks up the rule for a module path
    pub fn get(&self, path: &str) -> Option<&Rule> {
        self.modules.get(path)
    }

    /// Number of module paths with a rule
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Module paths covered by this rule set, sorted
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.modules.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }
}

impl From<HashMap<String, Rule>> for RuleSet {
    fn from(modules: HashMap<String, Rule>) -> Self {
        Self { modules }
    }
}

impl<S: Into<String>> FromIterator<(S, Rule)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (S, Rule)>>(iter: I) -> Self {
        Self {
            modules: iter.into_iter().map(|(p, r)| (p.into(), r)).collect(),
        }
    }
}
