//! Volume checks.
//!
//! Two independent checks look at `volumes`. The first reports whether any
//! volume uses a Docker volume configuration at all. The second walks the
//! volumes in order and stops at the first Docker or EFS volume, which
//! decides its verdict.

use serde_json::Value;

use crate::checks::{CheckResults, CompatibilityCheck, Verdict};
use crate::task_definition::TaskDefinition;

fn has_config(volume: &Value, name: &str) -> bool {
    volume.get(name).is_some_and(|config| !config.is_null())
}

fn volume_name(volume: &Value) -> &str {
    volume
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("<unnamed>")
}

/// Rejects Docker volume configurations. Only evaluated when `volumes` is set.
pub struct DockerVolumeConfigurationCheck;

impl CompatibilityCheck for DockerVolumeConfigurationCheck {
    fn id(&self) -> &'static str {
        "docker-volume-configuration"
    }

    fn description(&self) -> &str {
        "Volumes must not use dockerVolumeConfiguration"
    }

    fn check(&self, task: &TaskDefinition<'_>, results: &mut CheckResults) {
        if !task.has_field("volumes") {
            return;
        }

        let verdict = match task
            .volumes()
            .iter()
            .find(|volume| has_config(volume, "dockerVolumeConfiguration"))
        {
            Some(volume) => Verdict::failure().with_detail(format!(
                "volume '{}' uses dockerVolumeConfiguration",
                volume_name(volume)
            )),
            None => Verdict::pass(),
        };
        results.record("dockerVolumeConfiguration", verdict);
    }
}

/// Checks volume types; the first Docker or EFS volume decides.
pub struct VolumeTypesCheck;

impl CompatibilityCheck for VolumeTypesCheck {
    fn id(&self) -> &'static str {
        "volume-types"
    }

    fn description(&self) -> &str {
        "Volumes must be bind mounts, EFS or other Fargate-supported types"
    }

    fn check(&self, task: &TaskDefinition<'_>, results: &mut CheckResults) {
        let mut verdict = Verdict::pass();
        for volume in task.volumes() {
            if has_config(volume, "dockerVolumeConfiguration") {
                verdict = Verdict::failure().with_detail(format!(
                    "volume '{}' is a Docker volume",
                    volume_name(volume)
                ));
                break;
            }
            if has_config(volume, "efsVolumeConfiguration") {
                break;
            }
        }
        results.record("volumes", verdict);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::VerdictKind;
    use serde_json::json;

    fn run(doc: Value) -> CheckResults {
        let task = TaskDefinition::new(&doc);
        let mut results = CheckResults::new();
        DockerVolumeConfigurationCheck.check(&task, &mut results);
        VolumeTypesCheck.check(&task, &mut results);
        results
    }

    #[test]
    fn no_volumes_key_skips_docker_check() {
        let results = run(json!({}));
        assert!(!results.contains_key("dockerVolumeConfiguration"));
        assert_eq!(results.status("volumes"), Some(VerdictKind::Pass));
    }

    #[test]
    fn docker_volume_fails_both_checks() {
        let results = run(json!({
            "volumes": [{"name": "invalid_volume", "dockerVolumeConfiguration": {}}]
        }));
        assert_eq!(
            results.status("dockerVolumeConfiguration"),
            Some(VerdictKind::Failure)
        );
        assert_eq!(results.status("volumes"), Some(VerdictKind::Failure));
    }

    #[test]
    fn bind_mount_and_efs_volumes_pass() {
        let results = run(json!({
            "volumes": [
                {"name": "scratch"},
                {"name": "shared", "efsVolumeConfiguration": {"fileSystemId": "fs-1234"}}
            ]
        }));
        assert_eq!(
            results.status("dockerVolumeConfiguration"),
            Some(VerdictKind::Pass)
        );
        assert_eq!(results.status("volumes"), Some(VerdictKind::Pass));
    }

    #[test]
    fn empty_volume_list_counts_as_unset() {
        let results = run(json!({"volumes": []}));
        assert_eq!(results.status("dockerVolumeConfiguration"), None);
        assert_eq!(results.status("volumes"), Some(VerdictKind::Pass));
    }

    #[test]
    fn efs_volume_before_docker_volume_stops_type_check() {
        let results = run(json!({
            "volumes": [
                {"name": "shared", "efsVolumeConfiguration": {"fileSystemId": "fs-1234"}},
                {"name": "legacy", "dockerVolumeConfiguration": {"scope": "task"}}
            ]
        }));
        assert_eq!(results.status("volumes"), Some(VerdictKind::Pass));
        assert_eq!(
            results.status("dockerVolumeConfiguration"),
            Some(VerdictKind::Failure)
        );
    }

    #[test]
    fn failure_detail_names_volume() {
        let results = run(json!({
            "volumes": [{"name": "legacy", "dockerVolumeConfiguration": {}}]
        }));
        let detail = results.get("volumes").unwrap().detail().unwrap();
        assert!(detail.contains("legacy"));
    }
}
