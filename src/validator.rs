//! Structural validation of template definition files.
//!
//! Definitions are checked against a JSON Schema describing the document
//! accepted by the scaffolding tool: a `name`, a list of `jobs`, and for each
//! job a list of typed `steps`. Every violation is collected in a single pass.

use std::fmt;
use std::path::{Path, PathBuf};

use jsonschema::Validator;
use log::{debug, error};
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::parse_document;
use crate::error::{Error, Result};

/// Allowed values of `jobs[].steps[].type`
pub const STEP_TYPES: [&str; 3] = ["template", "bash", "copy"];

/// Returns the schema every `templates.yaml` must satisfy.
pub fn definition_schema() -> Value {
    json!({
        "title": "Repository schema",
        "description": "This schema describes the structure of config file for a repository.",
        "type": "object",
        "required": ["name", "jobs"],
        "properties": {
            "name": { "type": "string", "description": "Name of the repository." },
            "description": { "type": "string", "description": "Description of the repository." },
            "category": { "type": "string", "description": "Category of the repository." },
            "globalConfig": { "type": "object", "description": "Global configuration for the repository." },
            "environment": { "type": "object", "description": "Environment variables for the repository." },
            "form": { "type": "object", "description": "Global form for the repository." },
            "permissions": {
                "type": "array",
                "description": "List of permissions for the repository.",
                "items": { "type": "string" }
            },
            "lifecycle": { "type": "array", "description": "List of lifecycle events at the global level." },
            "jobs": {
                "type": "array",
                "description": "List of jobs for the repository.",
                "items": {
                    "type": "object",
                    "required": ["name", "steps"],
                    "properties": {
                        "name": { "type": "string", "description": "Name of the job." },
                        "steps": {
                            "type": "array",
                            "description": "List of steps for the job.",
                            "items": {
                                "type": "object",
                                "required": ["type"],
                                "properties": {
                                    "type": { "type": "string", "enum": STEP_TYPES },
                                    "name": { "type": "string" },
                                    "files": { "type": "array" },
                                    "command": { "type": "string" },
                                    "lifecycle": { "type": "array" },
                                    "form": { "type": "object" }
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

/// One schema violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// JSON pointer to the offending node, empty for the document root
    pub instance_path: String,
    pub message: String,
    /// The offending value
    pub value: Value,
}

impl Diagnostic {
    /// Location for display; the root is shown as `root`.
    pub fn location(&self) -> &str {
        if self.instance_path.is_empty() {
            "root"
        } else {
            &self.instance_path
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location(), self.message)
    }
}

/// Outcome of validating one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Validator compiled from [`definition_schema`].
pub struct SchemaValidator {
    validator: Validator,
}

impl SchemaValidator {
    /// Compiles the definition schema.
    ///
    /// # Errors
    /// * `Error::SchemaError` if the schema does not compile
    pub fn new() -> Result<Self> {
        let validator = jsonschema::validator_for(&definition_schema())
            .map_err(|e| Error::SchemaError(e.to_string()))?;
        Ok(Self { validator })
    }

    /// Checks `document` and returns every violation found.
    pub fn validate(&self, document: &Value) -> ValidationResult {
        let diagnostics = self
            .validator
            .iter_errors(document)
            .map(|e| Diagnostic {
                instance_path: e.instance_path.to_string(),
                message: e.to_string(),
                value: e.instance.clone().into_owned(),
            })
            .collect();
        ValidationResult { diagnostics }
    }

    /// Parses YAML text and validates it.
    ///
    /// # Errors
    /// * `Error::ParseError` if the text cannot be parsed at all
    pub fn validate_source(&self, content: &str) -> Result<ValidationResult> {
        let document = parse_document(content)?;
        Ok(self.validate(&document))
    }

    /// Reads, parses and validates the file at `path`.
    pub fn validate_file<P: AsRef<Path>>(&self, path: P) -> Result<ValidationResult> {
        let path = path.as_ref();
        debug!("Validating {}", path.display());
        let content = std::fs::read_to_string(path).map_err(Error::IoError)?;
        self.validate_source(&content).map_err(|e| match e {
            Error::ParseError { message, .. } => {
                Error::ParseError { path: path.display().to_string(), message }
            }
            other => other,
        })
    }

    /// Validates each file independently; a file that cannot be read or parsed
    /// counts as invalid and does not stop the others.
    pub fn validate_files<I, P>(&self, paths: I) -> ValidationReport
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let files = paths
            .into_iter()
            .map(|path| {
                let path = path.as_ref();
                let outcome = self.validate_file(path).map_err(|e| {
                    error!("{}", e);
                    e.to_string()
                });
                FileValidation { path: path.to_path_buf(), outcome }
            })
            .collect();
        ValidationReport { files }
    }
}

/// Validation outcome of a single file. `Err` holds the read or parse failure.
#[derive(Debug)]
pub struct FileValidation {
    pub path: PathBuf,
    pub outcome: std::result::Result<ValidationResult, String>,
}

impl FileValidation {
    pub fn is_valid(&self) -> bool {
        matches!(&self.outcome, Ok(result) if result.is_valid())
    }
}

/// Outcome of a validation run over several files.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub files: Vec<FileValidation>,
}

impl ValidationReport {
    /// True only if every file parsed and has no diagnostics.
    pub fn all_valid(&self) -> bool {
        self.files.iter().all(FileValidation::is_valid)
    }

    pub fn invalid_count(&self) -> usize {
        self.files.iter().filter(|f| !f.is_valid()).count()
    }
}
