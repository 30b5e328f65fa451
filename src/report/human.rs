//! Human-readable report formatter.
//!
//! Prints the aligned check table, the overall verdict, guidance for each
//! failure and the schema message.

use std::io::Write;

use super::{Report, ReportFormatter};
use crate::checks::{recommendation, remediation, VerdictKind};
use crate::ui::ValidatorTheme;

const HEADER: &str = "Validation Results:";
const KEY_PADDING: usize = 4;
const SEPARATOR_WIDTH: usize = 50;

/// Formats reports for terminal display.
pub struct HumanFormatter {
    theme: ValidatorTheme,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self {
            theme: ValidatorTheme::for_color(use_color),
        }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let width = report.results.keys().map(str::len).max().unwrap_or(0) + KEY_PADDING;

        writeln!(writer)?;
        writeln!(writer, "{}", self.theme.header.apply_to(HEADER))?;
        writeln!(writer, "{}", self.theme.dim.apply_to("-".repeat(HEADER.len() + 1)))?;

        for (name, verdict) in report.results.iter() {
            let status = self.theme.verdict(verdict.kind()).apply_to(verdict);
            writeln!(writer, "{:<width$}{}", name, status, width = width)?;
        }

        writeln!(writer)?;
        writeln!(writer, "{}", self.theme.dim.apply_to("-".repeat(SEPARATOR_WIDTH)))?;
        let total = if report.passed() {
            self.theme.success.apply_to("PASS")
        } else {
            self.theme.error.apply_to("FAIL")
        };
        writeln!(writer, "Total Results: {}", total)?;

        let failures = report.failures();
        if !failures.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "{}", self.theme.header.apply_to("Failures:"))?;
            for name in failures {
                writeln!(writer, "- {}", self.theme.verdict(VerdictKind::Failure).apply_to(name))?;
                if let Some(text) = recommendation(name) {
                    writeln!(writer, "  {} {}", self.theme.key.apply_to("Recommendation:"), text)?;
                }
                if let Some(text) = remediation(name) {
                    writeln!(writer, "  {} {}", self.theme.key.apply_to("Remediation:"), text)?;
                }
            }
            writeln!(writer)?;
        }

        if let Some(ref schema) = report.schema {
            writeln!(writer, "{}", schema.message())?;
            for violation in schema.violations().iter().skip(1) {
                writeln!(writer, "  {}", self.theme.dim.apply_to(format!("- {}", violation)))?;
            }
        }

        Ok(())
    }
}
