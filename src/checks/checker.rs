//! The compatibility checker.
//!
//! [`CompatibilityChecker`] holds an ordered list of checks and runs them
//! against one task definition at a time.

use serde_json::Value;

use super::check::CompatibilityCheck;
use super::results::CheckResults;
use super::rules::{
    ComputingCheck, DockerVolumeConfigurationCheck, EphemeralStorageCheck, GpuCheck,
    LinuxCapabilitiesCheck, LinuxParametersCheck, LogConfigurationCheck, NetworkModeCheck,
    RequiresCompatibilitiesCheck, StopTimeoutCheck, UlimitsCheck,
    UnsupportedContainerParametersCheck, UnsupportedRootParametersCheck, VolumeTypesCheck,
    WindowsCpuCheck,
};
use crate::error::Result;
use crate::task_definition::{parse_task_definition, TaskDefinition};

/// Ordered collection of compatibility checks.
pub struct CompatibilityChecker {
    checks: Vec<Box<dyn CompatibilityCheck>>,
}

impl CompatibilityChecker {
    /// Create a checker with no checks.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Create a checker with all built-in Fargate checks.
    ///
    /// Registration order is report order.
    pub fn with_builtins() -> Self {
        let mut checker = Self::new();
        checker.register(Box::new(UnsupportedRootParametersCheck));
        checker.register(Box::new(UnsupportedContainerParametersCheck));
        checker.register(Box::new(NetworkModeCheck));
        checker.register(Box::new(LinuxParametersCheck));
        checker.register(Box::new(LinuxCapabilitiesCheck));
        checker.register(Box::new(DockerVolumeConfigurationCheck));
        checker.register(Box::new(WindowsCpuCheck));
        checker.register(Box::new(RequiresCompatibilitiesCheck));
        checker.register(Box::new(ComputingCheck));
        checker.register(Box::new(VolumeTypesCheck));
        checker.register(Box::new(EphemeralStorageCheck));
        checker.register(Box::new(LogConfigurationCheck));
        checker.register(Box::new(UlimitsCheck));
        checker.register(Box::new(StopTimeoutCheck));
        checker.register(Box::new(GpuCheck));
        checker
    }

    /// Append a check. It runs after every check registered before it.
    pub fn register(&mut self, check: Box<dyn CompatibilityCheck>) {
        self.checks.push(check);
    }

    /// Get a check by ID.
    pub fn get(&self, id: &str) -> Option<&dyn CompatibilityCheck> {
        self.checks
            .iter()
            .find(|check| check.id() == id)
            .map(|check| check.as_ref())
    }

    /// Iterate over checks in run order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn CompatibilityCheck> {
        self.checks.iter().map(|check| check.as_ref())
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check against a parsed task definition.
    pub fn run(&self, document: &Value) -> CheckResults {
        let task = TaskDefinition::new(document);
        let mut results = CheckResults::new();
        for check in &self.checks {
            tracing::debug!("Running check {}", check.id());
            check.check(&task, &mut results);
        }
        tracing::info!(
            "Evaluated {} checks: {} result(s), {} failure(s)",
            self.checks.len(),
            results.len(),
            results.failures().count()
        );
        results
    }
}

impl Default for CompatibilityChecker {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// Check a parsed task definition against all built-in Fargate constraints.
pub fn check_fargate_compatibility(document: &Value) -> CheckResults {
    CompatibilityChecker::with_builtins().run(document)
}

/// Parse task definition JSON and check it against all built-in constraints.
///
/// # Errors
///
/// Returns `TaskDefinitionParse` if `json` is not valid JSON.
pub fn check_fargate_compatibility_str(json: &str) -> Result<CheckResults> {
    let document = parse_task_definition(json)?;
    Ok(check_fargate_compatibility(&document))
}
