//! Windows CPU minimum check.

use crate::checks::{CheckResults, CompatibilityCheck, Verdict};
use crate::task_definition::{numeric_value, TaskDefinition};

/// Smallest task CPU (in CPU units) Fargate accepts for Windows containers.
pub const WINDOWS_MIN_CPU: f64 = 1024.0;

/// Requires at least one vCPU for Windows tasks.
///
/// Only evaluated when `runtimePlatform` is set.
pub struct WindowsCpuCheck;

impl CompatibilityCheck for WindowsCpuCheck {
    fn id(&self) -> &'static str {
        "cpu-windows"
    }

    fn description(&self) -> &str {
        "Windows tasks need at least 1024 CPU units"
    }

    fn check(&self, task: &TaskDefinition<'_>, results: &mut CheckResults) {
        if !task.has_field("runtimePlatform") {
            return;
        }

        let is_windows = task
            .operating_system_family()
            .is_some_and(|family| family.starts_with("WINDOWS"));
        if !is_windows {
            results.record("cpuWindows", Verdict::pass());
            return;
        }

        let verdict = match task.field("cpu") {
            None => Verdict::failure().with_detail("cpu is not set"),
            Some(cpu) => match numeric_value(cpu) {
                Some(units) if units >= WINDOWS_MIN_CPU => Verdict::pass(),
                Some(units) => Verdict::failure()
                    .with_detail(format!("cpu {} is below {}", units, WINDOWS_MIN_CPU)),
                None => Verdict::failure().with_detail(format!("cpu {} is not a number", cpu)),
            },
        };
        results.record("cpuWindows", verdict);
    }
}
