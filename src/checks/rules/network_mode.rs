//! Network mode check.

use serde_json::Value;

use crate::checks::{CheckResults, CompatibilityCheck, Verdict};
use crate::task_definition::TaskDefinition;

/// Requires the `awsvpc` network mode.
pub struct NetworkModeCheck;

impl CompatibilityCheck for NetworkModeCheck {
    fn id(&self) -> &'static str {
        "network-mode"
    }

    fn description(&self) -> &str {
        "Fargate tasks must use the awsvpc network mode"
    }

    fn check(&self, task: &TaskDefinition<'_>, results: &mut CheckResults) {
        let verdict = match task.field("networkMode") {
            Some(Value::String(mode)) if mode.eq_ignore_ascii_case("awsvpc") => Verdict::pass(),
            Some(Value::String(mode)) => {
                Verdict::failure().with_detail(format!("networkMode is '{}'", mode))
            }
            Some(_) => Verdict::failure().with_detail("networkMode is not a string"),
            None => Verdict::failure().with_detail("networkMode is not set"),
        };
        results.record("networkMode", verdict);
    }
}
