//! Ephemeral storage check.

use std::ops::RangeInclusive;

use serde_json::Value;

use crate::checks::{CheckResults, CompatibilityCheck, Verdict};
use crate::task_definition::TaskDefinition;

/// Ephemeral storage sizes (GiB) Fargate accepts.
pub const EPHEMERAL_STORAGE_GIB: RangeInclusive<i64> = 21..=200;

/// Bounds `ephemeralStorage.sizeInGiB` when ephemeral storage is configured.
pub struct EphemeralStorageCheck;

impl CompatibilityCheck for EphemeralStorageCheck {
    fn id(&self) -> &'static str {
        "ephemeral-storage"
    }

    fn description(&self) -> &str {
        "ephemeralStorage.sizeInGiB must be an integer between 21 and 200"
    }

    fn check(&self, task: &TaskDefinition<'_>, results: &mut CheckResults) {
        let verdict = match task.field("ephemeralStorage") {
            None => Verdict::pass(),
            Some(storage) => match storage.get("sizeInGiB").and_then(Value::as_i64) {
                Some(size) if EPHEMERAL_STORAGE_GIB.contains(&size) => Verdict::pass(),
                Some(size) => Verdict::failure().with_detail(format!(
                    "sizeInGiB {} is outside {}-{}",
                    size,
                    EPHEMERAL_STORAGE_GIB.start(),
                    EPHEMERAL_STORAGE_GIB.end()
                )),
                None => Verdict::failure().with_detail("sizeInGiB must be an integer"),
            },
        };
        results.record("ephemeralStorage", verdict);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::VerdictKind;
    use serde_json::json;

    fn status(doc: Value) -> Option<VerdictKind> {
        let mut results = CheckResults::new();
        EphemeralStorageCheck.check(&TaskDefinition::new(&doc), &mut results);
        results.status("ephemeralStorage")
    }

    #[test]
    fn absent_storage_passes() {
        assert_eq!(status(json!({})), Some(VerdictKind::Pass));
        assert_eq!(status(json!({"ephemeralStorage": null})), Some(VerdictKind::Pass));
    }

    #[test]
    fn bounds_are_inclusive() {
        for size in [21, 100, 200] {
            assert_eq!(
                status(json!({"ephemeralStorage": {"sizeInGiB": size}})),
                Some(VerdictKind::Pass),
                "{} GiB should pass",
                size
            );
        }
    }

    #[test]
    fn out_of_range_fails() {
        for size in [0, 20, 201] {
            assert_eq!(
                status(json!({"ephemeralStorage": {"sizeInGiB": size}})),
                Some(VerdictKind::Failure),
                "{} GiB should fail",
                size
            );
        }
    }

    #[test]
    fn non_integer_sizes_fail() {
        assert_eq!(
            status(json!({"ephemeralStorage": {"sizeInGiB": "30"}})),
            Some(VerdictKind::Failure)
        );
        assert_eq!(
            status(json!({"ephemeralStorage": {"sizeInGiB": 30.5}})),
            Some(VerdictKind::Failure)
        );
        assert_eq!(
            status(json!({"ephemeralStorage": {}})),
            Some(VerdictKind::Failure)
        );
        assert_eq!(
            status(json!({"ephemeralStorage": 30})),
            Some(VerdictKind::Failure)
        );
    }
}
