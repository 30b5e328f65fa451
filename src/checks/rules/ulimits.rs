//! Ulimit check.

use serde_json::Value;

use crate::checks::{CheckResults, CompatibilityCheck, Verdict};
use crate::task_definition::TaskDefinition;

/// The only ulimit Fargate lets containers override.
pub const SUPPORTED_ULIMIT: &str = "nofile";

/// Rejects ulimits other than `nofile`.
pub struct UlimitsCheck;

impl CompatibilityCheck for UlimitsCheck {
    fn id(&self) -> &'static str {
        "ulimits"
    }

    fn description(&self) -> &str {
        "Containers may only override the nofile ulimit"
    }

    fn check(&self, task: &TaskDefinition<'_>, results: &mut CheckResults) {
        let containers = match task.containers_or_placeholder() {
            Ok(containers) => containers,
            Err(err) => {
                results.record("ulimits", Verdict::failure().with_detail(err.to_string()));
                return;
            }
        };
        let mut verdict = Verdict::pass();
        'containers: for container in containers {
            let ulimits = match container.field("ulimits") {
                None => continue,
                Some(Value::Array(entries)) => entries,
                Some(_) => {
                    verdict = Verdict::failure().with_detail(format!(
                        "ulimits on container '{}' is not an array",
                        container.name()
                    ));
                    break;
                }
            };
            for ulimit in ulimits {
                let name = ulimit.get("name").and_then(Value::as_str);
                if name != Some(SUPPORTED_ULIMIT) {
                    verdict = Verdict::failure().with_detail(format!(
                        "container '{}' sets ulimit '{}'",
                        container.name(),
                        name.unwrap_or("<unnamed>")
                    ));
                    break 'containers;
                }
            }
        }
        results.record("ulimits", verdict);
    }
}
