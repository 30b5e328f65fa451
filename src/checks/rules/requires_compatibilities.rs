//! Requires-compatibilities check.

use serde_json::Value;

use crate::checks::{CheckResults, CompatibilityCheck, Verdict};
use crate::task_definition::TaskDefinition;

/// Requires `FARGATE` in `requiresCompatibilities`.
pub struct RequiresCompatibilitiesCheck;

impl CompatibilityCheck for RequiresCompatibilitiesCheck {
    fn id(&self) -> &'static str {
        "requires-compatibilities"
    }

    fn description(&self) -> &str {
        "requiresCompatibilities must include FARGATE"
    }

    fn check(&self, task: &TaskDefinition<'_>, results: &mut CheckResults) {
        let requires_fargate = task
            .field("requiresCompatibilities")
            .and_then(Value::as_array)
            .is_some_and(|launch_types| {
                launch_types
                    .iter()
                    .any(|launch_type| launch_type.as_str() == Some("FARGATE"))
            });

        let verdict = if requires_fargate {
            Verdict::pass()
        } else {
            Verdict::failure().with_detail("FARGATE is not in requiresCompatibilities")
        };
        results.record("requiresCompatibilities", verdict);
    }
}
