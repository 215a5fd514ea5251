//! Build pipeline.
//!
//! For each `templates/<namespace>/templates.yaml`:
//! 1. the template directory is mirrored into `<output>/<namespace>/`
//! 2. the definition is parsed
//! 3. a path-resolved copy is written to `<output>/<namespace>/index.json`
//! 4. a summary of the unresolved definition is appended to the manifest
//!
//! The manifest is then written to `<output>/index.json`. A failure within one
//! definition is logged and recorded; discovery and manifest failures abort the run.

use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::{
    config::load_definition,
    constants::INDEX_FILE,
    discovery::{find_definitions, namespace_of},
    error::{Error, Result},
    manifest::{summarize, Manifest, TemplateSummary},
    resolver::resolve_paths,
    writer::{copy_template_files, write_json},
};

/// A definition that could not be built.
#[derive(Debug)]
pub struct BuildFailure {
    pub source: PathBuf,
    pub error: Error,
}

/// Outcome of a build run.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub manifest: Manifest,
    /// Namespaces written, in discovery order
    pub namespaces: Vec<String>,
    pub failures: Vec<BuildFailure>,
    /// Location of the written manifest
    pub manifest_path: PathBuf,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Orchestrates a build from a templates directory into an output directory.
pub struct Processor<'a> {
    templates_dir: &'a Path,
    output_dir: &'a Path,
}

impl<'a> Processor<'a> {
    pub fn new(templates_dir: &'a Path, output_dir: &'a Path) -> Self {
        Self { templates_dir, output_dir }
    }

    /// Builds a single definition and returns its manifest entry.
    pub fn process(&self, definition_path: &Path) -> Result<(String, TemplateSummary)> {
        let namespace = namespace_of(definition_path).ok_or_else(|| Error::ParseError {
            path: definition_path.display().to_string(),
            message: "definition has no enclosing directory".to_string(),
        })?;
        let template_dir = self.templates_dir.join(&namespace);
        let destination = self.output_dir.join(&namespace);

        debug!("Processing template '{}'", namespace);

        let copied = copy_template_files(&template_dir, &destination)?;
        if !copied.is_complete() {
            warn!(
                "{} file(s) of template '{}' could not be copied",
                copied.failed.len(),
                namespace
            );
        }

        let definition = load_definition(definition_path)?;
        let resolved = resolve_paths(&definition, &namespace);
        write_json(destination.join(INDEX_FILE), &resolved)?;

        let summary = summarize(&definition, &namespace);
        Ok((namespace, summary))
    }

    /// Runs the whole build.
    ///
    /// # Errors
    /// * `Error::DiscoveryError` if the templates directory cannot be enumerated
    /// * `Error::WriteError` / `Error::SerializeError` if the manifest cannot be written
    pub fn run(&self) -> Result<BuildReport> {
        let definitions = find_definitions(self.templates_dir)?;
        info!("Found {} template definition(s) in {}", definitions.len(), self.templates_dir.display());

        let mut report = BuildReport::default();
        for definition_path in definitions {
            match self.process(&definition_path) {
                Ok((namespace, summary)) => {
                    report.namespaces.push(namespace);
                    report.manifest.push(summary);
                }
                Err(e) => {
                    error!("Error processing {}: {}", definition_path.display(), e);
                    report.failures.push(BuildFailure { source: definition_path, error: e });
                }
            }
        }

        let manifest_path = self.output_dir.join(INDEX_FILE);
        write_json(&manifest_path, &report.manifest)?;
        info!("Templates info written to {}", manifest_path.display());
        report.manifest_path = manifest_path;

        Ok(report)
    }
}
