//! Deprecation resolution
//!
//! A module is deprecated when:
//! - its rule has an allow list and the version matches none of it, or
//! - the version matches the deny list (checked even after the allow gate passes)
//!
//! Modules without a rule are never deprecated.

use crate::domain::{Module, RuleSet, RuleSide};
use serde::Serialize;

/// Outcome of checking one module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictStatus {
    /// No rule applies, or the version passes every rule
    Ok,
    /// The version failed the allow gate
    NotAllowed,
    /// The version matched the deny list
    Denied,
}

impl VerdictStatus {
    pub fn is_deprecated(&self) -> bool {
        !matches!(self, VerdictStatus::Ok)
    }

    /// Human-readable reason
    pub fn description(&self) -> &'static str {
        match self {
            VerdictStatus::Ok => "ok",
            VerdictStatus::NotAllowed => "not in allow list",
            VerdictStatus::Denied => "in deny list",
        }
    }
}

/// A module paired with its verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleVerdict {
    pub module: Module,
    pub status: VerdictStatus,
}

impl ModuleVerdict {
    pub fn is_deprecated(&self) -> bool {
        self.status.is_deprecated()
    }
}

/// Checks a module against the rule set, reporting why it is deprecated
pub fn check(rules: &RuleSet, module: &Module) -> VerdictStatus {
    let Some(rule) = rules.get(&module.path) else {
        return VerdictStatus::Ok;
    };

    if rule.has_allow_restriction() && !rule.matches(RuleSide::Allow, &module.version) {
        return VerdictStatus::NotAllowed;
    }

    if rule.matches(RuleSide::Deny, &module.version) {
        VerdictStatus::Denied
    } else {
        VerdictStatus::Ok
    }
}

/// Returns true if the module violates the rule set
pub fn is_deprecated(rules: &RuleSet, module: &Module) -> bool {
    check(rules, module).is_deprecated()
}

/// Checks every module, in order, without stopping at the first finding
pub fn evaluate(rules: &RuleSet, modules: &[Module]) -> Vec<ModuleVerdict> {
    modules
        .iter()
        .map(|module| ModuleVerdict {
            module: module.clone(),
            status: check(rules, module),
        })
        .collect()
}

impl RuleSet {
    /// Returns true if the module violates this rule set
    pub fn is_deprecated(&self, module: &Module) -> bool {
        is_deprecated(self, module)
    }
}
