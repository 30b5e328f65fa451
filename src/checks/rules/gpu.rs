//! GPU resource requirement check.

use serde_json::Value;

use crate::checks::{CheckResults, CompatibilityCheck, Verdict};
use crate::task_definition::{ContainerDefinition, TaskDefinition};

/// Rejects GPU resource requirements.
///
/// Reports under one shared key, so with several containers the last
/// container decides, even when an earlier one requested a GPU.
pub struct GpuCheck;

impl GpuCheck {
    fn evaluate(container: &ContainerDefinition<'_>) -> Verdict {
        match container.field("resourceRequirements") {
            None => Verdict::pass(),
            Some(Value::Array(requirements)) => {
                let requests_gpu = requirements
                    .iter()
                    .any(|req| req.get("type").and_then(Value::as_str) == Some("GPU"));
                if requests_gpu {
                    Verdict::failure().with_detail(format!(
                        "container '{}' requests a GPU",
                        container.name()
                    ))
                } else {
                    Verdict::pass()
                }
            }
            Some(_) => Verdict::failure().with_detail(format!(
                "resourceRequirements on container '{}' is not an array",
                container.name()
            )),
        }
    }
}

impl CompatibilityCheck for GpuCheck {
    fn id(&self) -> &'static str {
        "gpu"
    }

    fn description(&self) -> &str {
        "Containers must not request GPUs"
    }

    fn check(&self, task: &TaskDefinition<'_>, results: &mut CheckResults) {
        for container in task.containers() {
            results.record("GPU", Self::evaluate(&container));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::VerdictKind;
    use serde_json::json;

    fn status(doc: Value) -> Option<VerdictKind> {
        let mut results = CheckResults::new();
        GpuCheck.check(&TaskDefinition::new(&doc), &mut results);
        results.status("GPU")
    }

    #[test]
    fn gpu_requirement_fails() {
        let doc = json!({
            "containerDefinitions": [{
                "resourceRequirements": [{"type": "GPU", "value": "2"}]
            }]
        });
        assert_eq!(status(doc), Some(VerdictKind::Failure));
    }

    #[test]
    fn inference_accelerator_passes() {
        let doc = json!({
            "containerDefinitions": [{
                "resourceRequirements": [{"type": "InferenceAccelerator", "value": "device_1"}]
            }]
        });
        assert_eq!(status(doc), Some(VerdictKind::Pass));
    }

    #[test]
    fn no_containers_reports_nothing() {
        assert_eq!(status(json!({})), None);
    }

    #[test]
    fn last_container_overwrites_gpu_failure() {
        let doc = json!({
            "containerDefinitions": [
                {"resourceRequirements": [{"type": "GPU", "value": "1"}]},
                {"name": "sidecar"}
            ]
        });
        assert_eq!(status(doc), Some(VerdictKind::Pass));
    }
}
