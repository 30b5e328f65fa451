//! Fargate compatibility checks.
//!
//! This is the core of the validator: a fixed, extensible checklist of
//! Fargate constraints evaluated against a parsed task definition.
//!
//! # Overview
//!
//! - **Checks** - Individual constraints ([`CompatibilityCheck`] trait)
//! - **Checker** - Ordered collection of checks ([`CompatibilityChecker`])
//! - **Results** - Ordered check-name to verdict map ([`CheckResults`])
//! - **Guidance** - Recommendation and remediation text ([`recommendations`])
//!
//! Checks are pure: the same document always produces the same results, and
//! a checker can be shared across threads.
//!
//! # Example
//!
//! ```
//! use fargate_validator::checks::{check_fargate_compatibility, VerdictKind};
//! use serde_json::json;
//!
//! let results = check_fargate_compatibility(&json!({"networkMode": "bridge"}));
//! assert_eq!(results.status("networkMode"), Some(VerdictKind::Failure));
//! assert_eq!(results.status("ipcMode"), Some(VerdictKind::Pass));
//! ```

pub mod check;
pub mod checker;
pub mod recommendations;
pub mod results;
pub mod rules;
pub mod verdict;

pub use check::CompatibilityCheck;
pub use checker::{check_fargate_compatibility, check_fargate_compatibility_str, CompatibilityChecker};
pub use recommendations::{recommendation, remediation};
pub use results::CheckResults;
pub use rules::{UNSUPPORTED_CONTAINER_PARAMETERS, UNSUPPORTED_ROOT_PARAMETERS};
pub use verdict::{Verdict, VerdictKind};
