//! Linux parameter checks.
//!
//! Fargate only honours `linuxParameters.capabilities`, and of the added
//! capabilities only `SYS_PTRACE`. Both checks report under shared keys, so
//! with several containers the last container decides.

use serde_json::Value;

use crate::checks::{CheckResults, CompatibilityCheck, Verdict};
use crate::task_definition::{ContainerDefinition, TaskDefinition};

/// Capabilities Fargate allows containers to add.
pub const ALLOWED_ADDED_CAPABILITIES: &[&str] = &["SYS_PTRACE"];

/// Rejects `linuxParameters` keys other than `capabilities`.
pub struct LinuxParametersCheck;

impl LinuxParametersCheck {
    fn evaluate(container: &ContainerDefinition<'_>) -> Verdict {
        match container.field("linuxParameters") {
            None => Verdict::pass(),
            Some(Value::Object(params)) => {
                let unsupported: Vec<&str> = params
                    .keys()
                    .map(String::as_str)
                    .filter(|key| *key != "capabilities")
                    .collect();
                if unsupported.is_empty() {
                    Verdict::pass()
                } else {
                    Verdict::failure().with_detail(format!(
                        "unsupported linuxParameters on container '{}': {}",
                        container.name(),
                        unsupported.join(", ")
                    ))
                }
            }
            Some(_) => Verdict::failure().with_detail("linuxParameters is not an object"),
        }
    }
}

impl CompatibilityCheck for LinuxParametersCheck {
    fn id(&self) -> &'static str {
        "linux-parameters"
    }

    fn description(&self) -> &str {
        "Containers may only set linuxParameters.capabilities"
    }

    fn check(&self, task: &TaskDefinition<'_>, results: &mut CheckResults) {
        for container in task.containers() {
            results.record("linuxParameters", Self::evaluate(&container));
        }
    }
}

/// Rejects added Linux capabilities other than `SYS_PTRACE`.
pub struct LinuxCapabilitiesCheck;

impl LinuxCapabilitiesCheck {
    fn evaluate(container: &ContainerDefinition<'_>) -> Verdict {
        let capabilities = match container.field("linuxParameters") {
            None => return Verdict::pass(),
            Some(Value::Object(params)) => params.get("capabilities"),
            // Shape problems are reported by LinuxParametersCheck.
            Some(_) => return Verdict::pass(),
        };

        let added = match capabilities {
            None | Some(Value::Null) => return Verdict::pass(),
            Some(Value::Object(caps)) => caps.get("add"),
            Some(_) => return Verdict::failure().with_detail("capabilities is not an object"),
        };

        match added {
            None | Some(Value::Null) => Verdict::pass(),
            Some(Value::Array(items)) => {
                let disallowed: Vec<String> = items
                    .iter()
                    .filter(|cap| {
                        !cap.as_str()
                            .is_some_and(|name| ALLOWED_ADDED_CAPABILITIES.contains(&name))
                    })
                    .map(|cap| match cap.as_str() {
                        Some(name) => name.to_string(),
                        None => cap.to_string(),
                    })
                    .collect();
                if disallowed.is_empty() {
                    Verdict::pass()
                } else {
                    Verdict::failure().with_detail(format!(
                        "container '{}' adds {}",
                        container.name(),
                        disallowed.join(", ")
                    ))
                }
            }
            Some(_) => Verdict::failure().with_detail("capabilities.add is not an array"),
        }
    }
}

impl CompatibilityCheck for LinuxCapabilitiesCheck {
    fn id(&self) -> &'static str {
        "linux-capabilities"
    }

    fn description(&self) -> &str {
        "Containers may only add the SYS_PTRACE capability"
    }

    fn check(&self, task: &TaskDefinition<'_>, results: &mut CheckResults) {
        for container in task.containers() {
            results.record("linuxParameters_capabilities", Self::evaluate(&container));
        }
    }
}
