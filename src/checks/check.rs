//! Compatibility check definitions.
//!
//! Every Fargate constraint is a type implementing [`CompatibilityCheck`].
//! A check reads the task definition and records one or more verdicts under
//! stable check-names.

use super::results::CheckResults;
use crate::task_definition::TaskDefinition;

/// A single Fargate compatibility rule.
///
/// Checks are stateless. They never fail: any shape of input, including
/// missing or mistyped fields, produces verdicts rather than errors.
pub trait CompatibilityCheck: Send + Sync {
    /// Unique identifier for this check.
    fn id(&self) -> &'static str;

    /// Description of the constraint this check enforces.
    fn description(&self) -> &str;

    /// Inspect the task definition and record verdicts.
    fn check(&self, task: &TaskDefinition<'_>, results: &mut CheckResults);
}
