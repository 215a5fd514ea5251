//! Resolution of authored file references into namespaced paths.
//!
//! Every `files[].file` of a definition is rewritten to
//! `/<namespace>/<prefix><file>`, where the prefix is taken from the first
//! non-empty source in this order:
//!
//! 1. the file's own `templateFolder`
//! 2. the definition's `globalConfig.templatePath`
//! 3. nothing
//!
//! A prefix of `./` contributes nothing, and a non-empty prefix always ends
//! with `/`.

use crate::config::TemplateDefinition;
use crate::constants::CURRENT_DIR_MARKER;
use log::debug;

/// Picks the path source for one file reference. First non-empty candidate wins.
fn select_prefix<'a>(template_folder: Option<&'a str>, template_path: Option<&'a str>) -> &'a str {
    [template_folder, template_path].into_iter().flatten().find(|s| !s.is_empty()).unwrap_or("")
}

/// Turns a selected path source into the segment placed between namespace and file.
fn normalize_prefix(prefix: &str) -> String {
    match prefix {
        "" | CURRENT_DIR_MARKER => String::new(),
        p if p.ends_with('/') => p.to_string(),
        p => format!("{}/", p),
    }
}

/// Computes the resolved value of a single `file` entry.
///
/// # Example
/// ```
/// use stencil::resolver::resolve_file_path;
///
/// assert_eq!(resolve_file_path("app.ts", None, Some("tpl/"), "simple"), "/simple/tpl/app.ts");
/// assert_eq!(resolve_file_path("README.md", Some("./"), Some("tpl/"), "simple"), "/simple/README.md");
/// ```
pub fn resolve_file_path(
    file: &str,
    template_folder: Option<&str>,
    template_path: Option<&str>,
    namespace: &str,
) -> String {
    let prefix = normalize_prefix(select_prefix(template_folder, template_path));
    format!("/{}/{}{}", namespace, prefix, file)
}

/// Returns a copy of `definition` with every file reference resolved against `namespace`.
///
/// The input is left untouched; all fields other than `files[].file` are carried over as-is.
/// Steps without `files`, file entries without `file` and definitions without `steps`
/// pass through unchanged.
pub fn resolve_paths(definition: &TemplateDefinition, namespace: &str) -> TemplateDefinition {
    let mut resolved = definition.clone();
    let template_path = definition.template_path();

    for step in resolved.steps.iter_mut().flatten() {
        for file_ref in step.files.iter_mut().flatten() {
            let Some(authored) = file_ref.file.as_deref() else {
                continue;
            };
            let file = resolve_file_path(
                authored,
                file_ref.template_folder.as_deref(),
                template_path,
                namespace,
            );
            debug!("Resolved '{}' to '{}'", authored, file);
            file_ref.file = Some(file);
        }
    }

    resolved
}
