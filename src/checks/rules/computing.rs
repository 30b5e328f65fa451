//! Task size check.
//!
//! Fargate only runs specific CPU/memory pairs, and the allowed pairs depend
//! on the operating system family. Both values are matched as the literal
//! strings found in the task definition.

use crate::checks::{CheckResults, CompatibilityCheck, Verdict};
use crate::task_definition::TaskDefinition;

/// Operating system families Fargate accepts.
pub const SUPPORTED_OPERATING_SYSTEMS: &[&str] = &[
    "LINUX",
    "WINDOWS_SERVER_2019_FULL",
    "WINDOWS_SERVER_2019_CORE",
    "WINDOWS_SERVER_2022_FULL",
    "WINDOWS_SERVER_2022_CORE",
];

/// Memory values (MiB) allowed for one CPU setting.
#[derive(Debug, Clone, Copy)]
enum MemoryValues {
    Listed(&'static [u32]),
    Stepped { min: u32, max: u32, step: u32 },
}

/// One CPU setting and the memory it may be paired with.
#[derive(Debug, Clone, Copy)]
pub struct SizingTier {
    /// CPU units, as written in task definitions.
    pub cpu: &'static str,
    memory: MemoryValues,
}

impl SizingTier {
    const fn listed(cpu: &'static str, memory: &'static [u32]) -> Self {
        Self {
            cpu,
            memory: MemoryValues::Listed(memory),
        }
    }

    const fn stepped(cpu: &'static str, min: u32, max: u32, step: u32) -> Self {
        Self {
            cpu,
            memory: MemoryValues::Stepped { min, max, step },
        }
    }

    /// Allowed memory values in ascending order.
    pub fn memory_values(&self) -> Vec<u32> {
        match self.memory {
            MemoryValues::Listed(values) => values.to_vec(),
            MemoryValues::Stepped { min, max, step } => {
                (min..=max).step_by(step as usize).collect()
            }
        }
    }

    /// Whether `memory`, exactly as written, is allowed for this tier.
    pub fn allows(&self, memory: &str) -> bool {
        self.memory_values()
            .iter()
            .any(|value| value.to_string() == memory)
    }
}

/// CPU/memory combinations for Linux tasks.
pub const LINUX_SIZING: &[SizingTier] = &[
    SizingTier::listed("256", &[512, 1024, 2048]),
    SizingTier::stepped("512", 1024, 4096, 1024),
    SizingTier::stepped("1024", 2048, 8192, 1024),
    SizingTier::stepped("2048", 4096, 16384, 1024),
    SizingTier::stepped("4096", 8192, 30720, 1024),
    SizingTier::stepped("8192", 16384, 61440, 4096),
    SizingTier::stepped("16384", 32768, 122880, 8192),
];

/// CPU/memory combinations for Windows tasks.
pub const WINDOWS_SIZING: &[SizingTier] = &[
    SizingTier::stepped("1024", 2048, 8192, 1024),
    SizingTier::stepped("2048", 4096, 16384, 1024),
    SizingTier::stepped("4096", 8192, 30720, 1024),
];

/// Look up the sizing tier for a CPU value.
pub fn sizing_tier(windows: bool, cpu: &str) -> Option<&'static SizingTier> {
    let table = if windows {
        WINDOWS_SIZING
    } else {
        LINUX_SIZING
    };
    table.iter().find(|tier| tier.cpu == cpu)
}

/// Requires a supported OS family and CPU/memory pair.
pub struct ComputingCheck;

impl ComputingCheck {
    fn evaluate(task: &TaskDefinition<'_>) -> Verdict {
        if !task.has_field("cpu") || !task.has_field("memory") {
            return Verdict::failure().with_detail("cpu and memory must both be set");
        }

        let os_family = task.operating_system_family().unwrap_or("");
        if !SUPPORTED_OPERATING_SYSTEMS.contains(&os_family) {
            return Verdict::failure().with_detail(format!(
                "operatingSystemFamily '{}' is not supported",
                os_family
            ));
        }

        let (Some(cpu), Some(memory)) = (task.str_field("cpu"), task.str_field("memory")) else {
            return Verdict::failure().with_detail("cpu and memory must be strings");
        };

        let windows = os_family.contains("WINDOWS");
        match sizing_tier(windows, cpu) {
            Some(tier) if tier.allows(memory) => Verdict::pass(),
            Some(_) => Verdict::failure().with_detail(format!(
                "memory {} is not allowed with cpu {}",
                memory, cpu
            )),
            None => Verdict::failure().with_detail(format!(
                "cpu {} is not available for {}",
                cpu, os_family
            )),
        }
    }
}

impl CompatibilityCheck for ComputingCheck {
    fn id(&self) -> &'static str {
        "computing"
    }

    fn description(&self) -> &str {
        "Task cpu and memory must form a Fargate-supported combination"
    }

    fn check(&self, task: &TaskDefinition<'_>, results: &mut CheckResults) {
        results.record("computing", Self::evaluate(task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::VerdictKind;
    use serde_json::{json, Value};

    fn status(doc: Value) -> Option<VerdictKind> {
        let mut results = CheckResults::new();
        ComputingCheck.check(&TaskDefinition::new(&doc), &mut results);
        results.status("computing")
    }

    fn sized(cpu: &str, memory: &str, os: &str) -> Value {
        json!({
            "cpu": cpu,
            "memory": memory,
            "runtimePlatform": {"operatingSystemFamily": os}
        })
    }

    #[test]
    fn linux_tables_match_published_ranges() {
        let tier = sizing_tier(false, "256").unwrap();
        assert_eq!(tier.memory_values(), vec![512, 1024, 2048]);

        let tier = sizing_tier(false, "1024").unwrap();
        assert_eq!(
            tier.memory_values(),
            vec![2048, 3072, 4096, 5120, 6144, 7168, 8192]
        );

        let tier = sizing_tier(false, "8192").unwrap();
        let values = tier.memory_values();
        assert_eq!(values.first(), Some(&16384));
        assert_eq!(values.last(), Some(&61440));
        assert_eq!(values.len(), 12);

        let tier = sizing_tier(false, "16384").unwrap();
        let values = tier.memory_values();
        assert_eq!(values.first(), Some(&32768));
        assert_eq!(values.last(), Some(&122880));
        assert_eq!(values.len(), 12);
    }

    #[test]
    fn windows_table_has_no_small_tiers() {
        assert!(sizing_tier(true, "256").is_none());
        assert!(sizing_tier(true, "512").is_none());
        assert!(sizing_tier(true, "8192").is_none());
        assert_eq!(sizing_tier(true, "4096").unwrap().memory_values().len(), 23);
    }

    #[test]
    fn missing_cpu_or_memory_fails() {
        assert_eq!(status(json!({})), Some(VerdictKind::Failure));
        assert_eq!(
            status(json!({"cpu": "256", "runtimePlatform": {"operatingSystemFamily": "LINUX"}})),
            Some(VerdictKind::Failure)
        );
    }

    #[test]
    fn linux_sizing_without_runtime_platform_fails() {
        assert_eq!(
            status(json!({"cpu": "256", "memory": "512"})),
            Some(VerdictKind::Failure)
        );
    }

    #[test]
    fn valid_linux_combinations_pass() {
        for (cpu, memory) in [
            ("256", "512"),
            ("512", "4096"),
            ("4096", "30720"),
            ("16384", "122880"),
        ] {
            assert_eq!(
                status(sized(cpu, memory, "LINUX")),
                Some(VerdictKind::Pass),
                "{}/{} should pass",
                cpu,
                memory
            );
        }
    }

    #[test]
    fn invalid_linux_combinations_fail() {
        for (cpu, memory) in [
            ("256", "3072"),
            ("8192", "17408"),
            ("3072", "8192"),
            ("1024", "1024"),
        ] {
            assert_eq!(
                status(sized(cpu, memory, "LINUX")),
                Some(VerdictKind::Failure),
                "{}/{} should fail",
                cpu,
                memory
            );
        }
    }

    #[test]
    fn windows_uses_windows_table() {
        assert_eq!(
            status(sized("1024", "2048", "WINDOWS_SERVER_2019_CORE")),
            Some(VerdictKind::Pass)
        );
        assert_eq!(
            status(sized("256", "512", "WINDOWS_SERVER_2022_FULL")),
            Some(VerdictKind::Failure)
        );
    }

    #[test]
    fn unknown_os_family_fails() {
        assert_eq!(
            status(sized("256", "512", "WINDOWS_SERVER_2016_FULL")),
            Some(VerdictKind::Failure)
        );
    }

    #[test]
    fn values_are_matched_literally() {
        assert_eq!(
            status(sized("256", "0512", "LINUX")),
            Some(VerdictKind::Failure)
        );
        assert_eq!(
            status(json!({
                "cpu": 256,
                "memory": 512,
                "runtimePlatform": {"operatingSystemFamily": "LINUX"}
            })),
            Some(VerdictKind::Failure)
        );
    }
}
