//! CLI argument parsing module for modcop

use crate::manifest::DEFAULT_MANIFEST_PATH;
use crate::orchestrator::CheckOptions;
use crate::source::{SourceConfig, DEFAULT_USER_AGENT};
use clap::{ArgAction, Parser};
use std::time::Duration;

/// Go module version policy checker
#[derive(Parser, Debug, Clone)]
#[command(
    name = "modcop",
    version,
    about = "Checks go.mod requirements against a module version policy"
)]
pub struct CliArgs {
    /// Path to rules file, may be local or http/s
    #[arg(long = "rulepath", value_name = "PATH")]
    pub rule_path: Option<String>,

    /// Path to go.mod file, may be local or http/s
    #[arg(long = "modpath", value_name = "PATH", default_value = DEFAULT_MANIFEST_PATH)]
    pub mod_path: String,

    /// Only parse the rule and mod files
    #[arg(
        long = "parseOnly",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub parse_only: bool,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Only print deprecated modules
    #[arg(short, long)]
    pub quiet: bool,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,
}

impl CliArgs {
    /// Build check options, or None when no rule source was given
    pub fn check_options(&self) -> Option<CheckOptions> {
        let rule_path = self.rule_path.as_deref().filter(|p| !p.is_empty())?;
        Some(
            CheckOptions::new(rule_path)
                .with_mod_path(self.mod_path.clone())
                .with_parse_only(self.parse_only),
        )
    }

    /// Build the source acquisition configuration
    pub fn source_config(&self) -> SourceConfig {
        SourceConfig::new(Duration::from_secs(self.timeout), DEFAULT_USER_AGENT)
    }
}
