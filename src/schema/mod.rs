//! JSON Schema shape validation for task definitions.
//!
//! Independent of the compatibility checks: a document can satisfy the
//! schema and still fail Fargate checks, and the reverse.

pub mod definition;
pub mod validator;

pub use definition::TaskDefinitionSchema;
pub use validator::{SchemaOutcome, SchemaValidator, SchemaViolation};
