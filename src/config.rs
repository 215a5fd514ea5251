//! Template definition model and parsing.
//! A definition is read from `templates/<namespace>/templates.yaml`; fields the
//! build pipeline does not interpret are kept as opaque values so that nothing
//! authored is lost on the way to the build output.
//!
//! Parsing only rejects text that is not well-formed. Shape rules such as the
//! allowed step types are enforced by [`crate::validator`], not here.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::Path;

/// Keys not modelled explicitly, kept in source order.
pub type Extra = IndexMap<String, Value>;

/// Keeps a key that is present with a null value as `Some(Value::Null)`;
/// only an absent key becomes `None` (through `#[serde(default)]`).
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// One declarative template.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_config: Option<GlobalConfig>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub environment: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub form: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Value>,
    /// Executed in order by the scaffolding tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl TemplateDefinition {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }

    /// Definition-wide default prefix for file references.
    pub fn template_path(&self) -> Option<&str> {
        self.global_config.as_ref().and_then(|c| c.template_path.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_path: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Kind of a step. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    Template,
    Bash,
    Copy,
}

/// One unit of a template's procedure.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Step {
    /// The authored `type`, kept verbatim even when it is not a known [`StepType`].
    #[serde(
        rename = "type",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub step_type: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileRef>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub form: Option<Value>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Step {
    pub fn new(step_type: StepType) -> Self {
        Self { step_type: serde_json::to_value(step_type).ok(), ..Default::default() }
    }

    /// The step type, if it is one of the known kinds.
    pub fn kind(&self) -> Option<StepType> {
        self.step_type.clone().and_then(|v| serde_json::from_value(v).ok())
    }
}

/// A file manipulated by a step.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    /// Relative path as authored, namespaced after resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Per-file override of `globalConfig.templatePath`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_folder: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl FileRef {
    pub fn new<S: Into<String>>(file: S) -> Self {
        Self { file: Some(file.into()), ..Default::default() }
    }
}

/// An empty or `null` document has nothing to build.
fn from_yaml(content: &str, path: &str) -> Result<TemplateDefinition> {
    let definition: Option<TemplateDefinition> =
        serde_yaml::from_str(content).map_err(|e| Error::parse(path, e))?;
    definition.ok_or_else(|| Error::parse(path, "document is empty"))
}

/// Parses a definition from YAML (or JSON) text.
///
/// # Errors
/// * `Error::ParseError` if the text is not well-formed, is empty, or a modelled
///   field has an incompatible shape (e.g. `steps` is not a list)
pub fn parse_definition(content: &str) -> Result<TemplateDefinition> {
    from_yaml(content, "<input>")
}

/// Reads and parses the definition stored at `path`.
pub fn load_definition<P: AsRef<Path>>(path: P) -> Result<TemplateDefinition> {
    let path = path.as_ref();
    debug!("Loading definition from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(Error::IoError)?;
    from_yaml(&content, &path.display().to_string())
}

/// Parses the text into an untyped document, as consumed by the schema validator.
pub fn parse_document(content: &str) -> Result<Value> {
    let value: Option<Value> =
        serde_yaml::from_str(content).map_err(|e| Error::parse("<input>", e))?;
    Ok(value.unwrap_or(Value::Null))
}
