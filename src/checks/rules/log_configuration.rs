//! Log driver check.

use serde_json::Value;

use crate::checks::{CheckResults, CompatibilityCheck, Verdict};
use crate::task_definition::{ContainerDefinition, TaskDefinition};

/// Log drivers Fargate supports.
pub const SUPPORTED_LOG_DRIVERS: &[&str] = &["awslogs", "splunk", "awsfirelens"];

/// Requires every container to use a supported log driver.
///
/// A task definition without `containerDefinitions` is treated as one
/// container with no log configuration, which fails.
pub struct LogConfigurationCheck;

impl LogConfigurationCheck {
    fn driver<'a>(container: &ContainerDefinition<'a>) -> Option<&'a str> {
        container
            .field("logConfiguration")
            .and_then(|config| config.get("logDriver"))
            .and_then(Value::as_str)
    }
}

impl CompatibilityCheck for LogConfigurationCheck {
    fn id(&self) -> &'static str {
        "log-configuration"
    }

    fn description(&self) -> &str {
        "Containers must log through awslogs, splunk or awsfirelens"
    }

    fn check(&self, task: &TaskDefinition<'_>, results: &mut CheckResults) {
        let containers = match task.containers_or_placeholder() {
            Ok(containers) => containers,
            Err(err) => {
                results.record("logConfiguration", Verdict::failure().with_detail(err.to_string()));
                return;
            }
        };
        let mut verdict = Verdict::pass();
        for container in containers {
            let driver = Self::driver(&container).unwrap_or("").to_lowercase();
            if !SUPPORTED_LOG_DRIVERS.contains(&driver.as_str()) {
                let detail = if driver.is_empty() {
                    format!("container '{}' has no log driver", container.name())
                } else {
                    format!(
                        "container '{}' uses log driver '{}'",
                        container.name(),
                        driver
                    )
                };
                verdict = Verdict::failure().with_detail(detail);
                break;
            }
        }
        results.record("logConfiguration", verdict);
    }
}
