//! Recommendation and remediation text for failing checks.
//!
//! Both tables are keyed by check-name and built once on first use. Reports
//! look them up only for checks that failed.
//!
//! Keys such as `ebsVolumes`, `cpu`, `operatingSystem` and `taskCPUandMemory`
//! are never emitted by a check. They stay so the tables keep the full
//! published guidance catalogue.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::rules::{UNSUPPORTED_CONTAINER_PARAMETERS, UNSUPPORTED_ROOT_PARAMETERS};

const RECOMMENDATION_TEXT: &[(&str, &str)] = &[
    ("networkMode", "Fargate requires the 'awsvpc' network mode."),
    ("ebsVolumes", "EBS volumes are not supported in Fargate."),
    ("dockerVolumeConfiguration", "Docker volume configurations are not supported in Fargate."),
    ("ephemeralStorage", "Ensure the ephemeral storage configurations in your task definition are valid for Fargate."),
    ("linuxParameters", "Certain Linux parameters are not supported or have limitations in Fargate."),
    ("linuxParameters_capabilities", "Fargate only allows adding the SYS_PTRACE Linux capability."),
    ("volumes", "Fargate tasks support specific volume types. Some configurations might not be valid."),
    ("cpu", "There are limitations on CPU values, especially for Windows containers on Fargate."),
    ("cpuWindows", "Windows containers on Fargate require at least 1 vCPU (1024 CPU units)."),
    ("operatingSystem", "Ensure you're using a Fargate-supported operating system."),
    ("cpuArchitecture", "Fargate supports specific CPU architectures based on the OS and container type."),
    ("taskCPUandMemory", "Ensure the combination of CPU and memory values is valid for Fargate."),
    ("ulimits", "There are restrictions on setting ulimits in Fargate tasks."),
    ("logConfiguration", "Fargate tasks support specific log drivers."),
    ("taskExecutionIAMRole", "Ensure the task execution IAM role has the necessary permissions."),
    ("taskStorage", "Ensure the storage configurations are compatible with Fargate."),
    ("compatibilities", "Your task definition should be compatible with Fargate."),
    ("requiresCompatibilities", "Your task definition should require Fargate compatibility."),
    ("stopTimeout", "Ensure the stop timeout value in your task definition does not exceed the Fargate limit."),
    ("GPU", "GPU configurations are not supported in Fargate."),
    ("computing", "Ensure the computing configurations in your task definition are compatible with Fargate."),
];

const REMEDIATION_TEXT: &[(&str, &str)] = &[
    ("networkMode", "Change the 'networkMode' in your task definition to 'awsvpc'."),
    ("ebsVolumes", "Remove EBS volumes from your task definition or consider another ECS launch type."),
    ("dockerVolumeConfiguration", "Remove Docker volume configurations from your task definition or consider another ECS launch type."),
    ("ephemeralStorage", "Set 'ephemeralStorage.sizeInGiB' to an integer between 21 and 200."),
    ("linuxParameters", "Adjust the Linux parameters in your task definition according to Fargate's specifications."),
    ("linuxParameters_capabilities", "Remove every capability other than SYS_PTRACE from 'linuxParameters.capabilities.add'."),
    ("volumes", "Modify the volume configurations in your task definition to be compatible with Fargate."),
    ("cpu", "Adjust the CPU value in your task definition to meet Fargate's requirements."),
    ("cpuWindows", "Raise the task 'cpu' to 1024 or more for Windows containers."),
    ("operatingSystem", "Change the operating system in your task definition to one supported by Fargate."),
    ("cpuArchitecture", "Ensure your task definition uses a Fargate-compatible CPU architecture."),
    ("taskCPUandMemory", "Modify the CPU and memory values in your task definition to a valid combination for Fargate."),
    ("ulimits", "Update or remove the ulimits configurations in your task definition for Fargate compatibility."),
    ("logConfiguration", "Adjust the log configuration in your task definition to use a supported log driver."),
    ("taskExecutionIAMRole", "Ensure the task execution IAM role is correctly set and has the required permissions."),
    ("taskStorage", "Modify the storage settings in your task definition to be Fargate-compatible."),
    ("compatibilities", "Ensure your task definition is compatible with Fargate."),
    ("requiresCompatibilities", "Ensure your task definition requires Fargate compatibility."),
    ("stopTimeout", "Adjust the 'stopTimeout' in your task definition to be within Fargate's limits."),
    ("GPU", "Remove GPU configurations from your task definition."),
    ("computing", "Ensure the computing settings in your task definition are Fargate-compatible."),
];

fn unsupported_parameters() -> impl Iterator<Item = &'static str> {
    UNSUPPORTED_CONTAINER_PARAMETERS
        .iter()
        .chain(UNSUPPORTED_ROOT_PARAMETERS)
        .copied()
}

static RECOMMENDATIONS: LazyLock<HashMap<&'static str, String>> = LazyLock::new(|| {
    let mut table: HashMap<_, _> = RECOMMENDATION_TEXT
        .iter()
        .map(|&(check, text)| (check, text.to_string()))
        .collect();
    for param in unsupported_parameters() {
        table.insert(
            param,
            format!("The '{}' parameter is not supported in Fargate.", param),
        );
    }
    table
});

static REMEDIATIONS: LazyLock<HashMap<&'static str, String>> = LazyLock::new(|| {
    let mut table: HashMap<_, _> = REMEDIATION_TEXT
        .iter()
        .map(|&(check, text)| (check, text.to_string()))
        .collect();
    for param in unsupported_parameters() {
        table.insert(
            param,
            format!(
                "Remove the '{}' parameter from your task definition or ensure its value is empty or null.",
                param
            ),
        );
    }
    table
});

/// Why a failing check matters.
pub fn recommendation(check: &str) -> Option<&'static str> {
    RECOMMENDATIONS.get(check).map(String::as_str)
}

/// How to fix a failing check.
pub fn remediation(check: &str) -> Option<&'static str> {
    REMEDIATIONS.get(check).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::check_fargate_compatibility;
    use serde_json::json;

    #[test]
    fn every_emitted_check_has_guidance() {
        let doc = json!({
            "ephemeralStorage": {"sizeInGiB": 10},
            "runtimePlatform": {"operatingSystemFamily": "WINDOWS_SERVER_2019_FULL"},
            "volumes": [],
            "containerDefinitions": [{"linuxParameters": {"capabilities": {"add": ["SYS_ADMIN"]}}}]
        });
        let results = check_fargate_compatibility(&doc);

        for check in results.keys() {
            assert!(recommendation(check).is_some(), "no recommendation for {}", check);
            assert!(remediation(check).is_some(), "no remediation for {}", check);
        }
    }

    #[test]
    fn unsupported_parameters_get_generated_text() {
        assert_eq!(
            recommendation("privileged"),
            Some("The 'privileged' parameter is not supported in Fargate.")
        );
        assert!(remediation("ipcMode").unwrap().contains("'ipcMode'"));
    }

    #[test]
    fn unknown_check_has_no_guidance() {
        assert!(recommendation("unknownCheck").is_none());
        assert!(remediation("unknownCheck").is_none());
    }

    #[test]
    fn legacy_keys_remain_available() {
        for key in ["ebsVolumes", "taskCPUandMemory", "compatibilities"] {
            assert!(recommendation(key).is_some());
            assert!(remediation(key).is_some());
        }
    }
}
