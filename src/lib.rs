//! Fargate Validator - AWS ECS task definition compatibility checks.
//!
//! Reads an ECS task definition, evaluates it against the constraints of the
//! Fargate launch type, validates its shape against a JSON Schema and
//! reports the results with guidance for every failure.
//!
//! # Modules
//!
//! - [`checks`] - Fargate compatibility checks and their guidance text
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`report`] - Human and JSON report formatting
//! - [`schema`] - JSON Schema shape validation
//! - [`task_definition`] - Loading and navigating task definition documents
//! - [`ui`] - Terminal output and theming
//!
//! # Example
//!
//! ```
//! use fargate_validator::checks::{check_fargate_compatibility_str, VerdictKind};
//!
//! let results = check_fargate_compatibility_str(r#"{"networkMode": "awsvpc"}"#).unwrap();
//! assert_eq!(results.status("networkMode"), Some(VerdictKind::Pass));
//! assert_eq!(results.status("computing"), Some(VerdictKind::Failure));
//! ```

pub mod checks;
pub mod cli;
pub mod error;
pub mod report;
pub mod schema;
pub mod task_definition;
pub mod ui;

pub use error::{Result, ValidatorError};
