//! JSON report formatter.
//!
//! Formats reports as machine-readable JSON for tooling integration. Check
//! order is preserved in `results` and `details`.

use std::io::Write;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use super::{Report, ReportFormatter};
use crate::checks::{recommendation, remediation, CheckResults, VerdictKind};
use crate::schema::SchemaViolation;

/// Formats reports as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    results: &'a CheckResults,
    details: JsonDetails<'a>,
    summary: JsonSummary,
    failures: Vec<JsonFailure<'a>>,
    schema: Option<JsonSchema<'a>>,
}

/// Detail text for the checks that recorded one.
struct JsonDetails<'a>(&'a CheckResults);

impl Serialize for JsonDetails<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (name, verdict) in self.0.iter() {
            if let Some(detail) = verdict.detail() {
                map.serialize_entry(name, detail)?;
            }
        }
        map.end()
    }
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    passed: usize,
    warnings: usize,
    failures: usize,
    result: &'static str,
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    check: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    recommendation: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remediation: Option<&'static str>,
}

#[derive(Serialize)]
struct JsonSchema<'a> {
    valid: bool,
    errors: &'a [SchemaViolation],
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let results = &report.results;

        let summary = JsonSummary {
            total: results.len(),
            passed: results.count(VerdictKind::Pass),
            warnings: results.count(VerdictKind::Warning),
            failures: results.count(VerdictKind::Failure),
            result: if report.passed() { "PASS" } else { "FAIL" },
        };

        let failures = report
            .failures()
            .into_iter()
            .map(|check| JsonFailure {
                check,
                recommendation: recommendation(check),
                remediation: remediation(check),
            })
            .collect();

        let schema = report.schema.as_ref().map(|outcome| JsonSchema {
            valid: outcome.is_valid(),
            errors: outcome.violations(),
        });

        let output = JsonOutput {
            results,
            details: JsonDetails(results),
            summary,
            failures,
            schema,
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
