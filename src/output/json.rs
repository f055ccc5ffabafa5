//! JSON output formatter for machine processing

use crate::orchestrator::CheckReport;
use crate::output::OutputFormatter;
use crate::resolver::VerdictStatus;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

/// JSON representation of the full report
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Whether evaluation was skipped
    parse_only: bool,
    /// Number of deprecated modules
    deprecated: usize,
    /// Per-module verdicts
    modules: Vec<JsonModule<'a>>,
}

/// JSON representation of a module verdict
#[derive(Serialize)]
struct JsonModule<'a> {
    path: &'a str,
    version: String,
    deprecated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<VerdictStatus>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let modules = report
            .verdicts
            .iter()
            .map(|v| JsonModule {
                path: &v.module.path,
                version: v.module.version.to_string(),
                deprecated: v.is_deprecated(),
                reason: v.is_deprecated().then_some(v.status),
            })
            .collect();

        let output = JsonOutput {
            parse_only: report.parse_only,
            deprecated: report.deprecated_count(),
            modules,
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
