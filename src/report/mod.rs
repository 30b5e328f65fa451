//! Validation reports.
//!
//! A [`Report`] pairs the compatibility check results with the optional
//! schema outcome. Formatters render it for people ([`HumanFormatter`]) or
//! for tooling ([`JsonFormatter`]).

pub mod human;
pub mod json;

use std::io::Write;

use crate::checks::CheckResults;
use crate::schema::SchemaOutcome;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Everything learned about one task definition.
#[derive(Debug, Clone)]
pub struct Report {
    pub results: CheckResults,
    /// `None` when schema validation was skipped.
    pub schema: Option<SchemaOutcome>,
}

impl Report {
    pub fn new(results: CheckResults, schema: Option<SchemaOutcome>) -> Self {
        Self { results, schema }
    }

    /// True when no check failed. Schema violations do not affect this.
    pub fn passed(&self) -> bool {
        !self.results.has_failures()
    }

    /// Failing check-names in result order.
    pub fn failures(&self) -> Vec<&str> {
        self.results.failures().collect()
    }
}

/// Trait for formatting reports.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
