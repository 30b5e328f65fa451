//! Stop timeout check.

use crate::checks::{CheckResults, CompatibilityCheck, Verdict};
use crate::task_definition::TaskDefinition;

/// Longest container stop timeout (seconds) Fargate allows.
pub const MAX_STOP_TIMEOUT_SECS: f64 = 120.0;

/// Caps `stopTimeout` at two minutes.
pub struct StopTimeoutCheck;

impl CompatibilityCheck for StopTimeoutCheck {
    fn id(&self) -> &'static str {
        "stop-timeout"
    }

    fn description(&self) -> &str {
        "Container stopTimeout must not exceed 120 seconds"
    }

    fn check(&self, task: &TaskDefinition<'_>, results: &mut CheckResults) {
        let containers = match task.containers_or_placeholder() {
            Ok(containers) => containers,
            Err(err) => {
                results.record("stopTimeout", Verdict::failure().with_detail(err.to_string()));
                return;
            }
        };
        let mut verdict = Verdict::pass();
        for container in containers {
            let failure = match container.field("stopTimeout") {
                None => None,
                Some(timeout) => match timeout.as_f64() {
                    Some(secs) if secs <= MAX_STOP_TIMEOUT_SECS => None,
                    Some(_) => Some(format!(
                        "container '{}' has stopTimeout {}",
                        container.name(),
                        timeout
                    )),
                    None => Some(format!(
                        "stopTimeout on container '{}' is not a number",
                        container.name()
                    )),
                },
            };
            if let Some(detail) = failure {
                verdict = Verdict::failure().with_detail(detail);
                break;
            }
        }
        results.record("stopTimeout", verdict);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::VerdictKind;
    use serde_json::{json, Value};

    fn status(doc: Value) -> Option<VerdictKind> {
        let mut results = CheckResults::new();
        StopTimeoutCheck.check(&TaskDefinition::new(&doc), &mut results);
        results.status("stopTimeout")
    }

    #[test]
    fn default_timeout_passes() {
        assert_eq!(status(json!({})), Some(VerdictKind::Pass));
        assert_eq!(
            status(json!({"containerDefinitions": [{"name": "app"}]})),
            Some(VerdictKind::Pass)
        );
    }

    #[test]
    fn limit_is_inclusive() {
        assert_eq!(
            status(json!({"containerDefinitions": [{"stopTimeout": 120}]})),
            Some(VerdictKind::Pass)
        );
    }

    #[test]
    fn over_limit_fails() {
        assert_eq!(
            status(json!({"containerDefinitions": [{"stopTimeout": 200}]})),
            Some(VerdictKind::Failure)
        );
        assert_eq!(
            status(json!({"containerDefinitions": [{"stopTimeout": 120.5}]})),
            Some(VerdictKind::Failure)
        );
    }

    #[test]
    fn non_numeric_timeout_fails() {
        assert_eq!(
            status(json!({"containerDefinitions": [{"stopTimeout": "30"}]})),
            Some(VerdictKind::Failure)
        );
    }

    #[test]
    fn non_array_container_list_fails() {
        assert_eq!(
            status(json!({"containerDefinitions": "web"})),
            Some(VerdictKind::Failure)
        );
    }

    #[test]
    fn any_container_over_limit_fails() {
        let doc = json!({
            "containerDefinitions": [{"stopTimeout": 30}, {"stopTimeout": 300}]
        });
        assert_eq!(status(doc), Some(VerdictKind::Failure));
    }
}
