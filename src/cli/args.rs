//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::report::OutputFormat;

/// Validate an AWS ECS task definition for Fargate compatibility.
#[derive(Debug, Clone, Parser)]
#[command(name = "fargate-validator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the task definition JSON file
    pub task_definition: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, env = "FARGATE_VALIDATOR_FORMAT", default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Skip JSON Schema validation
    #[arg(long)]
    pub skip_schema: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
