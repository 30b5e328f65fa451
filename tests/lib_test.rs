//! Library integration tests.

use fargate_validator::ValidatorError;

#[test]
fn error_types_are_public() {
    let err = ValidatorError::TaskDefinitionNotFound {
        path: "task.json".into(),
    };
    assert!(err.to_string().contains("task.json"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> fargate_validator::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use fargate_validator::cli::Cli;
    use fargate_validator::report::OutputFormat;

    let cli = Cli::parse_from(["fargate-validator", "--format", "json", "task.json"]);
    assert_eq!(cli.format, OutputFormat::Json);
    assert!(cli.task_definition.is_some());
}

#[test]
fn parse_errors_surface_from_string_entry_point() {
    use fargate_validator::checks::check_fargate_compatibility_str;

    let err = check_fargate_compatibility_str("not json").unwrap_err();
    assert!(matches!(err, ValidatorError::TaskDefinitionParse { .. }));
}

#[test]
fn report_pipeline_is_public() {
    use fargate_validator::checks::check_fargate_compatibility;
    use fargate_validator::report::{JsonFormatter, Report, ReportFormatter};
    use fargate_validator::schema::SchemaValidator;
    use serde_json::json;

    let doc = json!({"family": "web", "containerDefinitions": []});
    let report = Report::new(
        check_fargate_compatibility(&doc),
        Some(SchemaValidator::new().unwrap().validate(&doc)),
    );

    let mut output = Vec::new();
    JsonFormatter::new().format(&report, &mut output).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(parsed["summary"]["result"], "FAIL");
    assert_eq!(parsed["schema"]["valid"], true);
}
