//! Shape validation of task definitions against the JSON Schema.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::definition::TaskDefinitionSchema;
use crate::error::{Result, ValidatorError};

/// One schema violation, located by JSON pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaViolation {
    /// JSON pointer to the offending value ("" for the document root).
    pub path: String,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} (at {})", self.message, self.path)
        }
    }
}

/// Result of validating a document against the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaOutcome {
    Valid,
    Invalid(Vec<SchemaViolation>),
}

impl SchemaOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, SchemaOutcome::Valid)
    }

    /// All violations, in the order the validator produced them.
    pub fn violations(&self) -> &[SchemaViolation] {
        match self {
            SchemaOutcome::Valid => &[],
            SchemaOutcome::Invalid(violations) => violations,
        }
    }

    /// Summary line: `Task definition is valid!` or
    /// `Task definition is invalid! <first violation>`.
    pub fn message(&self) -> String {
        match self.violations().first() {
            None => "Task definition is valid!".to_string(),
            Some(first) => format!("Task definition is invalid! {}", first),
        }
    }
}

/// Compiled task definition schema.
pub struct SchemaValidator {
    validator: jsonschema::Validator,
}

impl SchemaValidator {
    /// Compile the built-in schema.
    pub fn new() -> Result<Self> {
        Self::from_schema(&TaskDefinitionSchema::new().generate())
    }

    /// Compile an arbitrary schema document.
    pub fn from_schema(schema: &Value) -> Result<Self> {
        let validator =
            jsonschema::validator_for(schema).map_err(|e| ValidatorError::SchemaCompile {
                message: e.to_string(),
            })?;
        Ok(Self { validator })
    }

    /// Validate a parsed task definition.
    pub fn validate(&self, document: &Value) -> SchemaOutcome {
        let violations: Vec<SchemaViolation> = self
            .validator
            .iter_errors(document)
            .map(|error| SchemaViolation {
                path: error.instance_path.to_string(),
                message: error.to_string(),
            })
            .collect();

        if violations.is_empty() {
            SchemaOutcome::Valid
        } else {
            tracing::debug!(count = violations.len(), "Task definition failed schema validation");
            SchemaOutcome::Invalid(violations)
        }
    }
}
