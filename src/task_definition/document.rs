//! Read-only views over a parsed task definition.
//!
//! Task definitions arrive as arbitrary JSON. The views in this module give
//! the compatibility checks a narrow, typed way to reach into that JSON while
//! treating absent fields, `null` values and empty collections the same way.

use serde_json::Value;
use thiserror::Error;

/// `containerDefinitions` is set but holds something other than an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("containerDefinitions is not an array")]
pub struct ContainersNotArray;

/// Stand-in document for a container list that was never provided.
static PLACEHOLDER_CONTAINER: Value = Value::Null;

/// Whether a field holds a meaningful value.
///
/// Absent fields, `null`, the empty string and the empty array all count as
/// "not set". Every other value, including `false`, `0` and `{}`, is set.
pub fn is_set(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(_) => true,
    }
}

/// Interpret a value as a number, accepting numeric strings.
///
/// Strings must hold an integer, as ECS encodes `cpu` and `memory` that way.
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<i64>().ok().map(|n| n as f64),
        _ => None,
    }
}

fn lookup<'a>(node: &'a Value, name: &str) -> Option<&'a Value> {
    node.get(name).filter(|v| !v.is_null())
}

/// A task definition document.
#[derive(Debug, Clone, Copy)]
pub struct TaskDefinition<'a> {
    root: &'a Value,
}

impl<'a> TaskDefinition<'a> {
    /// Wrap a parsed document.
    pub fn new(root: &'a Value) -> Self {
        Self { root }
    }

    /// Get a top-level field, treating `null` as absent.
    pub fn field(&self, name: &str) -> Option<&'a Value> {
        lookup(self.root, name)
    }

    /// Get a top-level string field.
    pub fn str_field(&self, name: &str) -> Option<&'a str> {
        self.field(name).and_then(Value::as_str)
    }

    /// Whether a top-level field is set, as defined by [`is_set`].
    pub fn has_field(&self, name: &str) -> bool {
        is_set(self.field(name))
    }

    /// `runtimePlatform.operatingSystemFamily`, when it is a string.
    pub fn operating_system_family(&self) -> Option<&'a str> {
        self.field("runtimePlatform")
            .and_then(|platform| lookup(platform, "operatingSystemFamily"))
            .and_then(Value::as_str)
    }

    /// Entries of the `volumes` array, empty when unset or not an array.
    pub fn volumes(&self) -> &'a [Value] {
        self.field("volumes")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Container definitions, empty when unset or not an array.
    pub fn containers(&self) -> Vec<ContainerDefinition<'a>> {
        match self.field("containerDefinitions") {
            Some(Value::Array(items)) => items.iter().map(ContainerDefinition::new).collect(),
            _ => Vec::new(),
        }
    }

    /// Container definitions, or a single empty container when the list is
    /// unset or empty.
    ///
    /// Fails when the list is set to something other than an array.
    pub fn containers_or_placeholder(
        &self,
    ) -> Result<Vec<ContainerDefinition<'a>>, ContainersNotArray> {
        match self.field("containerDefinitions") {
            Some(Value::Array(items)) if !items.is_empty() => {
                Ok(items.iter().map(ContainerDefinition::new).collect())
            }
            other if is_set(other) => Err(ContainersNotArray),
            _ => Ok(vec![ContainerDefinition::new(&PLACEHOLDER_CONTAINER)]),
        }
    }
}

/// One entry of `containerDefinitions`.
#[derive(Debug, Clone, Copy)]
pub struct ContainerDefinition<'a> {
    root: &'a Value,
}

impl<'a> ContainerDefinition<'a> {
    /// Wrap a container entry.
    pub fn new(root: &'a Value) -> Self {
        Self { root }
    }

    /// Container name for log messages.
    pub fn name(&self) -> &'a str {
        self.str_field("name").unwrap_or("<unnamed>")
    }

    /// Get a field, treating `null` as absent.
    pub fn field(&self, name: &str) -> Option<&'a Value> {
        lookup(self.root, name)
    }

    /// Get a string field.
    pub fn str_field(&self, name: &str) -> Option<&'a str> {
        self.field(name).and_then(Value::as_str)
    }
}
