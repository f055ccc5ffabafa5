//! Check orchestrator for coordinating the entire workflow
//!
//! This module provides:
//! - Workflow coordination: fetch → parse → evaluate
//! - Concurrent acquisition of the rule and manifest sources
//! - Parse-only mode support

use crate::domain::{Module, RuleSet};
use crate::error::AppError;
use crate::manifest::{parse_go_mod, DEFAULT_MANIFEST_PATH};
use crate::parser::parse_rules;
use crate::resolver::{evaluate, ModuleVerdict};
use crate::source::SourceFetcher;
use tracing::{debug, info};

/// What to check and how
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Rule source (local path or URL)
    pub rule_path: String,
    /// Manifest source (local path or URL)
    pub mod_path: String,
    /// Parse both inputs without evaluating
    pub parse_only: bool,
}

impl CheckOptions {
    /// Creates options for the given rule source and the default manifest
    pub fn new(rule_path: impl Into<String>) -> Self {
        Self {
            rule_path: rule_path.into(),
            mod_path: DEFAULT_MANIFEST_PATH.to_string(),
            parse_only: false,
        }
    }

    pub fn with_mod_path(mut self, mod_path: impl Into<String>) -> Self {
        self.mod_path = mod_path.into();
        self
    }

    pub fn with_parse_only(mut self, parse_only: bool) -> Self {
        self.parse_only = parse_only;
        self
    }
}

/// Result of a check run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Whether evaluation was skipped
    pub parse_only: bool,
    /// Number of module paths covered by the rules
    pub rule_count: usize,
    /// Number of modules extracted from the manifest
    pub module_count: usize,
    /// Per-module verdicts in manifest order (empty in parse-only mode)
    pub verdicts: Vec<ModuleVerdict>,
}

impl CheckReport {
    /// Number of deprecated modules
    pub fn deprecated_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.is_deprecated()).count()
    }

    /// Returns true if any module was found deprecated
    pub fn has_deprecated(&self) -> bool {
        self.verdicts.iter().any(ModuleVerdict::is_deprecated)
    }
}

/// Orchestrator for the check workflow
pub struct Orchestrator<F: SourceFetcher> {
    fetcher: F,
    options: CheckOptions,
}

impl<F: SourceFetcher> Orchestrator<F> {
    /// Create a new orchestrator
    pub fn new(fetcher: F, options: CheckOptions) -> Self {
        Self { fetcher, options }
    }

    /// Fetch and parse both inputs
    pub async fn load(&self) -> Result<(RuleSet, Vec<Module>), AppError> {
        let (rule_bytes, mod_bytes) = tokio::try_join!(
            self.fetcher.fetch(&self.options.rule_path),
            self.fetcher.fetch(&self.options.mod_path),
        )?;

        let rules = parse_rules(rule_bytes.as_slice())?;
        let modules = parse_go_mod(mod_bytes.as_slice())?;
        debug!(rules = rules.len(), modules = modules.len(), "inputs parsed");

        Ok((rules, modules))
    }

    /// Run the check workflow
    pub async fn run(&self) -> Result<CheckReport, AppError> {
        let (rules, modules) = self.load().await?;

        let verdicts = if self.options.parse_only {
            Vec::new()
        } else {
            evaluate(&rules, &modules)
        };

        let report = CheckReport {
            parse_only: self.options.parse_only,
            rule_count: rules.len(),
            module_count: modules.len(),
            verdicts,
        };
        info!(
            modules = report.module_count,
            deprecated = report.deprecated_count(),
            parse_only = report.parse_only,
            "check finished"
        );

        Ok(report)
    }
}
