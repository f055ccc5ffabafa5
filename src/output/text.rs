//! Text output formatter for human-readable display
//!
//! Prints one line per module in manifest order:
//! - `Deprecated mod: <path> <version>`
//! - `<path> <version> OK`

use crate::orchestrator::CheckReport;
use crate::output::{OutputFormatter, Verbosity};
use crate::resolver::ModuleVerdict;
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn format_verdict(&self, verdict: &ModuleVerdict) -> Option<String> {
        let module = &verdict.module;

        if verdict.is_deprecated() {
            let label = if self.color {
                "Deprecated mod:".red().bold().to_string()
            } else {
                "Deprecated mod:".to_string()
            };
            let mut line = format!("{} {} {}", label, module.path, module.version);
            if self.verbosity == Verbosity::Verbose {
                line.push_str(&format!(" ({})", verdict.status.description()));
            }
            Some(line)
        } else if self.verbosity == Verbosity::Quiet {
            None
        } else {
            let ok = if self.color {
                "OK".green().to_string()
            } else {
                "OK".to_string()
            };
            Some(format!("{} {} {}", module.path, module.version, ok))
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        for verdict in &report.verdicts {
            if let Some(line) = self.format_verdict(verdict) {
                writeln!(writer, "{}", line)?;
            }
        }

        if report.parse_only && self.verbosity == Verbosity::Verbose {
            writeln!(
                writer,
                "Parsed {} rule(s) and {} module(s)",
                report.rule_count, report.module_count
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Module, Version};
    use crate::resolver::VerdictStatus;

    fn verdict(path: &str, version: Version, status: VerdictStatus) -> ModuleVerdict {
        ModuleVerdict {
            module: Module::new(path, version),
            status,
        }
    }

    fn create_test_report() -> CheckReport {
        CheckReport {
            parse_only: false,
            rule_count: 2,
            module_count: 3,
            verdicts: vec![
                verdict("acme/a", Version::new(1, 0, 0), VerdictStatus::Ok),
                verdict("acme/b", Version::new(1, 0, 1), VerdictStatus::NotAllowed),
                verdict("acme/c", Version::new(0, 2, 0), VerdictStatus::Denied),
            ],
        }
    }

    fn render(formatter: &TextFormatter, report: &CheckReport) -> String {
        let mut out = Vec::new();
        formatter.format(report, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_normal_output() {
        let formatter = TextFormatter::new(Verbosity::Normal, false);
        let output = render(&formatter, &create_test_report());
        assert_eq!(
            output,
            "acme/a v1.0.0 OK\nDeprecated mod: acme/b v1.0.1\nDeprecated mod: acme/c v0.2.0\n"
        );
    }

    #[test]
    fn test_quiet_output_only_deprecated() {
        let formatter = TextFormatter::new(Verbosity::Quiet, false);
        let output = render(&formatter, &create_test_report());
        assert!(!output.contains("OK"));
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_verbose_output_includes_reason() {
        let formatter = TextFormatter::new(Verbosity::Verbose, false);
        let output = render(&formatter, &create_test_report());
        assert!(output.contains("Deprecated mod: acme/b v1.0.1 (not in allow list)"));
        assert!(output.contains("Deprecated mod: acme/c v0.2.0 (in deny list)"));
    }

    #[test]
    fn test_parse_only_output() {
        let report = CheckReport {
            parse_only: true,
            rule_count: 2,
            module_count: 3,
            verdicts: Vec::new(),
        };
        assert!(render(&TextFormatter::new(Verbosity::Normal, false), &report).is_empty());
        assert_eq!(
            render(&TextFormatter::new(Verbosity::Verbose, false), &report),
            "Parsed 2 rule(s) and 3 module(s)\n"
        );
    }
}
