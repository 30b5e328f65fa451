//! Task definition loading and access.
//!
//! - [`loader`] reads and parses task definition files
//! - [`document`] provides read-only views used by the compatibility checks

pub mod document;
pub mod loader;

pub use document::{
    is_set, numeric_value, ContainerDefinition, ContainersNotArray, TaskDefinition,
};
pub use loader::{
    load_task_definition, parse_task_definition, parse_task_definition_at, read_task_definition,
};
