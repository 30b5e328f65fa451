//! Error types for validator operations.
//!
//! This module defines [`ValidatorError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ValidatorError` for failures the CLI reports to the user
//! - Use `anyhow::Error` (via `ValidatorError::Other`) for unexpected errors
//! - A failing compatibility check is never an error; it is a verdict

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for validator operations.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// Task definition file not found at the given path.
    #[error("Task definition not found: {path}")]
    TaskDefinitionNotFound { path: PathBuf },

    /// Task definition text is not valid JSON.
    #[error("Failed to parse task definition at {path}: {message}")]
    TaskDefinitionParse { path: PathBuf, message: String },

    /// The built-in task definition schema could not be compiled.
    #[error("Invalid task definition schema: {message}")]
    SchemaCompile { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for validator operations.
pub type Result<T> = std::result::Result<T, ValidatorError>;
