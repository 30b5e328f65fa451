//! Validate command implementation.
//!
//! Loads one task definition, runs the compatibility checks and the schema
//! validator, and prints the report.

use std::path::{Path, PathBuf};

use crate::checks::CompatibilityChecker;
use crate::cli::args::Cli;
use crate::error::{Result, ValidatorError};
use crate::report::{HumanFormatter, JsonFormatter, OutputFormat, Report, ReportFormatter};
use crate::schema::SchemaValidator;
use crate::task_definition::load_task_definition;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The validate command implementation.
pub struct ValidateCommand {
    path: PathBuf,
    format: OutputFormat,
    skip_schema: bool,
}

impl ValidateCommand {
    /// Create a new validate command for the task definition at `path`.
    pub fn new(path: &Path, cli: &Cli) -> Self {
        Self {
            path: path.to_path_buf(),
            format: cli.format,
            skip_schema: cli.skip_schema,
        }
    }

    /// Get the task definition path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render the report in the configured format.
    fn format_output(&self, report: &Report, use_color: bool) -> Result<String> {
        let mut output = Vec::new();

        match self.format {
            OutputFormat::Json => JsonFormatter::new().format(report, &mut output)?,
            OutputFormat::Human => HumanFormatter::new(use_color).format(report, &mut output)?,
        }

        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let document = match load_task_definition(&self.path) {
            Ok(document) => document,
            Err(e @ ValidatorError::TaskDefinitionNotFound { .. })
            | Err(e @ ValidatorError::TaskDefinitionParse { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        let results = CompatibilityChecker::with_builtins().run(&document);

        let schema = if self.skip_schema {
            tracing::debug!("Skipping schema validation");
            None
        } else {
            Some(SchemaValidator::new()?.validate(&document))
        };

        let report = Report::new(results, schema);
        if !report.passed() {
            tracing::info!(
                failures = report.failures().len(),
                "Task definition is not Fargate compatible"
            );
        }

        let output = self.format_output(&report, ui.use_color())?;
        ui.report(&output);

        // Failing checks are reported, not signalled through the exit code.
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    const VALID_TASK: &str = r#"{
        "family": "web",
        "networkMode": "awsvpc",
        "requiresCompatibilities": ["FARGATE"],
        "cpu": "256",
        "memory": "512",
        "runtimePlatform": {"operatingSystemFamily": "LINUX"},
        "containerDefinitions": [{
            "name": "app",
            "image": "nginx:latest",
            "logConfiguration": {"logDriver": "awslogs"}
        }]
    }"#;

    fn setup_task(content: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("task.json");
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    fn command(path: &Path, extra: &[&str]) -> ValidateCommand {
        let mut args = vec!["fargate-validator"];
        args.extend_from_slice(extra);
        let cli = Cli::parse_from(args);
        ValidateCommand::new(path, &cli)
    }

    #[test]
    fn validate_command_creation() {
        let cmd = command(Path::new("task.json"), &[]);
        assert_eq!(cmd.path(), Path::new("task.json"));
    }

    #[test]
    fn valid_task_passes() {
        let (_temp, path) = setup_task(VALID_TASK);
        let mut ui = MockUI::new();

        let result = command(&path, &[]).execute(&mut ui).unwrap();

        assert!(result.success);
        let report = &ui.reports()[0];
        assert!(report.contains("Total Results: PASS"));
        assert!(report.trim_end().ends_with("Task definition is valid!"));
    }

    #[test]
    fn failing_checks_still_exit_zero() {
        let (_temp, path) = setup_task(r#"{"family": "web", "containerDefinitions": []}"#);
        let mut ui = MockUI::new();

        let result = command(&path, &[]).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 0);
        assert!(ui.reports()[0].contains("Total Results: FAIL"));
        assert!(ui.reports()[0].contains("- networkMode"));
    }

    #[test]
    fn missing_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = command(&temp.path().join("missing.json"), &[])
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Task definition not found"));
        assert!(ui.reports().is_empty());
    }

    #[test]
    fn malformed_json_is_reported() {
        let (_temp, path) = setup_task("{not json");
        let mut ui = MockUI::new();

        let result = command(&path, &[]).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Failed to parse task definition"));
    }

    #[test]
    fn json_format_emits_json() {
        let (_temp, path) = setup_task(VALID_TASK);
        let mut ui = MockUI::new();

        command(&path, &["--format", "json"]).execute(&mut ui).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&ui.reports()[0]).unwrap();
        assert_eq!(parsed["summary"]["result"], "PASS");
        assert_eq!(parsed["schema"]["valid"], true);
    }

    #[test]
    fn skip_schema_omits_schema_message() {
        let (_temp, path) = setup_task(VALID_TASK);
        let mut ui = MockUI::new();

        command(&path, &["--skip-schema"]).execute(&mut ui).unwrap();

        assert!(!ui.reports()[0].contains("Task definition is"));
    }

    #[test]
    fn schema_violation_does_not_change_exit_code() {
        let (_temp, path) = setup_task(r#"{"networkMode": "awsvpc"}"#);
        let mut ui = MockUI::new();

        let result = command(&path, &[]).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.reports()[0].contains("Task definition is invalid!"));
    }
}
