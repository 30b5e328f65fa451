//! Unsupported parameter checks.
//!
//! Fargate rejects several task-level and container-level parameters that
//! only make sense on EC2 hosts. A parameter counts as used when it holds
//! anything other than `null`, `""` or `[]`.

use crate::checks::{CheckResults, CompatibilityCheck, Verdict};
use crate::task_definition::{is_set, TaskDefinition};

/// Task-level parameters Fargate does not support.
pub const UNSUPPORTED_ROOT_PARAMETERS: &[&str] = &["ipcMode", "pidMode", "placementConstraints"];

/// Container-level parameters Fargate does not support.
pub const UNSUPPORTED_CONTAINER_PARAMETERS: &[&str] = &[
    "disableNetworking",
    "dnsSearchDomains",
    "dnsServers",
    "dockerSecurityOptions",
    "extraHosts",
    "links",
    "privileged",
    "systemControls",
];

/// Flags task-level parameters that Fargate rejects.
pub struct UnsupportedRootParametersCheck;

impl CompatibilityCheck for UnsupportedRootParametersCheck {
    fn id(&self) -> &'static str {
        "unsupported-root-parameters"
    }

    fn description(&self) -> &str {
        "Task definition must not set ipcMode, pidMode or placementConstraints"
    }

    fn check(&self, task: &TaskDefinition<'_>, results: &mut CheckResults) {
        for &param in UNSUPPORTED_ROOT_PARAMETERS {
            let verdict = if is_set(task.field(param)) {
                Verdict::failure().with_detail(format!("'{}' is set", param))
            } else {
                Verdict::pass()
            };
            results.record(param, verdict);
        }
    }
}

/// Flags container-level parameters that Fargate rejects.
///
/// Verdicts share one key per parameter across all containers; the last
/// container decides.
pub struct UnsupportedContainerParametersCheck;

impl CompatibilityCheck for UnsupportedContainerParametersCheck {
    fn id(&self) -> &'static str {
        "unsupported-container-parameters"
    }

    fn description(&self) -> &str {
        "Containers must not set host-level networking, DNS, security or sysctl options"
    }

    fn check(&self, task: &TaskDefinition<'_>, results: &mut CheckResults) {
        // Seed every key so it is reported even without containers.
        for &param in UNSUPPORTED_CONTAINER_PARAMETERS {
            results.record(param, Verdict::pass());
        }

        for container in task.containers() {
            for &param in UNSUPPORTED_CONTAINER_PARAMETERS {
                let verdict = if is_set(container.field(param)) {
                    Verdict::failure().with_detail(format!(
                        "'{}' is set on container '{}'",
                        param,
                        container.name()
                    ))
                } else {
                    Verdict::pass()
                };
                results.record(param, verdict);
            }
        }
    }
}
