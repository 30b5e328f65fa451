//! Task definition file loading.
//!
//! Reads a task definition from disk and parses it as JSON. Parsing is the
//! caller's concern; the compatibility checks only ever see a parsed
//! document.

use crate::error::{Result, ValidatorError};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Path reported in parse errors for documents that did not come from a file.
const INLINE_SOURCE: &str = "<inline>";

/// Read the raw text of a task definition file.
///
/// # Errors
///
/// Returns `TaskDefinitionNotFound` if the file doesn't exist.
pub fn read_task_definition(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ValidatorError::TaskDefinitionNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ValidatorError::Io(e)
        }
    })
}

/// Parse task definition JSON text.
///
/// # Arguments
///
/// * `content` - The JSON text to parse
/// * `source_path` - Path for error reporting
pub fn parse_task_definition_at(content: &str, source_path: &Path) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| ValidatorError::TaskDefinitionParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse task definition JSON text that has no backing file.
pub fn parse_task_definition(content: &str) -> Result<Value> {
    parse_task_definition_at(content, Path::new(INLINE_SOURCE))
}

/// Load and parse a task definition file.
///
/// # Errors
///
/// Returns `TaskDefinitionNotFound` if the file doesn't exist.
/// Returns `TaskDefinitionParse` if the file is not valid JSON.
pub fn load_task_definition(path: &Path) -> Result<Value> {
    let content = read_task_definition(path)?;
    tracing::debug!(
        "Read {} bytes of task definition from {}",
        content.len(),
        path.display()
    );
    parse_task_definition_at(&content, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_parses_valid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("task.json");
        fs::write(&path, r#"{"family": "web", "networkMode": "awsvpc"}"#).unwrap();

        let doc = load_task_definition(&path).unwrap();

        assert_eq!(doc["family"], "web");
        assert_eq!(doc["networkMode"], "awsvpc");
    }

    #[test]
    fn load_returns_not_found_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.json");

        let result = load_task_definition(&path);

        assert!(matches!(
            result,
            Err(ValidatorError::TaskDefinitionNotFound { .. })
        ));
    }

    #[test]
    fn load_reports_parse_error_with_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "{ \"family\": ").unwrap();

        let err = load_task_definition(&path).unwrap_err();

        match err {
            ValidatorError::TaskDefinitionParse { path: p, message } => {
                assert_eq!(p, path);
                assert!(!message.is_empty());
            }
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn parse_inline_uses_placeholder_path() {
        let err = parse_task_definition("not json").unwrap_err();
        assert!(err.to_string().contains("<inline>"));
    }

    #[test]
    fn parse_accepts_non_object_documents() {
        let doc = parse_task_definition("[1, 2, 3]").unwrap();
        assert!(doc.is_array());
    }
}
