use serde_json::json;
use stencil::error::Error;
use stencil::validator::SchemaValidator;
use tempfile::TempDir;

const VALID: &str = r#"
name: Simple
description: A simple template
category: web
globalConfig:
  templatePath: tpl/
permissions: [fs, net]
jobs:
  - name: scaffold
    steps:
      - type: template
        files:
          - file: app.ts
            output: src/app.ts
      - type: bash
        command: npm install
      - type: copy
"#;

#[test]
fn test_valid_document() {
    let validator = SchemaValidator::new().unwrap();
    let result = validator.validate_source(VALID).unwrap();

    assert!(result.is_valid(), "unexpected diagnostics: {:?}", result.diagnostics);
}

#[test]
fn test_missing_jobs() {
    let validator = SchemaValidator::new().unwrap();
    let result = validator.validate(&json!({"name": "x"}));

    assert!(!result.is_valid());
    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics[0];
    assert!(diagnostic.message.contains("jobs"));
    assert_eq!(diagnostic.instance_path, "");
    assert_eq!(diagnostic.location(), "root");
    assert_eq!(diagnostic.value, json!({"name": "x"}));
}

#[test]
fn test_collects_all_violations() {
    let validator = SchemaValidator::new().unwrap();
    let document = json!({
        "jobs": [
            {"name": "a", "steps": [{"type": "template"}, {"type": "docker"}]},
            {"steps": [{"name": "no type"}]}
        ]
    });
    let result = validator.validate(&document);

    let paths: Vec<&str> = result.diagnostics.iter().map(|d| d.instance_path.as_str()).collect();
    assert!(!result.is_valid());
    assert!(result.diagnostics.iter().any(|d| d.instance_path.is_empty() && d.message.contains("name")));
    assert!(paths.contains(&"/jobs/0/steps/1/type"));
    assert!(paths.contains(&"/jobs/1"));
    assert!(paths.contains(&"/jobs/1/steps/0"));

    let bad_type = result
        .diagnostics
        .iter()
        .find(|d| d.instance_path == "/jobs/0/steps/1/type")
        .unwrap();
    assert_eq!(bad_type.value, json!("docker"));
}

#[test]
fn test_field_types() {
    let validator = SchemaValidator::new().unwrap();
    let document = json!({
        "name": 42,
        "jobs": [],
        "permissions": ["fs", 1],
        "globalConfig": "tpl/"
    });
    let result = validator.validate(&document);

    let paths: Vec<&str> = result.diagnostics.iter().map(|d| d.instance_path.as_str()).collect();
    assert_eq!(result.diagnostics.len(), 3);
    assert!(paths.contains(&"/name"));
    assert!(paths.contains(&"/permissions/1"));
    assert!(paths.contains(&"/globalConfig"));
}

#[test]
fn test_build_shape_is_not_accepted() {
    // top-level `steps` is the build pipeline's shape; the validator requires `jobs`
    let validator = SchemaValidator::new().unwrap();
    let result = validator
        .validate_source("name: Simple\nsteps:\n  - type: template\n")
        .unwrap();

    assert!(!result.is_valid());
    assert!(result.diagnostics.iter().any(|d| d.message.contains("jobs")));
}

#[test]
fn test_unparsable_source() {
    let validator = SchemaValidator::new().unwrap();
    assert!(matches!(
        validator.validate_source("name: [unclosed"),
        Err(Error::ParseError { .. })
    ));
}

#[test]
fn test_validate_files_continues_after_failure() {
    let temp_dir = TempDir::new().unwrap();
    let broken = temp_dir.path().join("broken.yaml");
    let invalid = temp_dir.path().join("invalid.yaml");
    let valid = temp_dir.path().join("valid.yaml");
    std::fs::write(&broken, "name: [unclosed").unwrap();
    std::fs::write(&invalid, "name: x").unwrap();
    std::fs::write(&valid, VALID).unwrap();

    let validator = SchemaValidator::new().unwrap();
    let report = validator.validate_files([&broken, &invalid, &valid]);

    assert_eq!(report.files.len(), 3);
    assert!(report.files[0].outcome.is_err());
    assert!(!report.files[1].is_valid());
    assert!(report.files[2].is_valid());
    assert_eq!(report.invalid_count(), 2);
    assert!(!report.all_valid());
}

#[test]
fn test_validate_files_all_valid() {
    let temp_dir = TempDir::new().unwrap();
    let valid = temp_dir.path().join("templates.yaml");
    std::fs::write(&valid, VALID).unwrap();

    let validator = SchemaValidator::new().unwrap();
    let report = validator.validate_files([valid]);

    assert!(report.all_valid());
}
