//! Persistence of build artifacts: copied template trees and JSON documents.

use crate::discovery::find_template_files;
use crate::error::{Error, Result};
use log::{debug, error};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Files copied for one template, and those that could not be.
#[derive(Debug, Default)]
pub struct CopyReport {
    pub copied: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

impl CopyReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| Error::WriteError { path: parent.to_path_buf(), source: e })?;
    }
    fs::copy(source, dest)
        .map(|_| ())
        .map_err(|e| Error::WriteError { path: dest.to_path_buf(), source: e })
}

/// Mirrors every file below `template_dir` into `dest_dir`, byte for byte.
///
/// A file that fails to copy is logged and recorded in the report; the
/// remaining files are still copied.
///
/// # Errors
/// * `Error::DiscoveryError` if `template_dir` cannot be listed
/// * `Error::WriteError` if `dest_dir` cannot be created
pub fn copy_template_files<P: AsRef<Path>, Q: AsRef<Path>>(
    template_dir: P,
    dest_dir: Q,
) -> Result<CopyReport> {
    let template_dir = template_dir.as_ref();
    let dest_dir = dest_dir.as_ref();

    fs::create_dir_all(dest_dir)
        .map_err(|e| Error::WriteError { path: dest_dir.to_path_buf(), source: e })?;

    let mut report = CopyReport::default();
    for source in find_template_files(template_dir)? {
        let relative = match source.strip_prefix(template_dir) {
            Ok(relative) => relative,
            Err(e) => {
                error!("Cannot place {} under {}: {}", source.display(), dest_dir.display(), e);
                report.failed.push((source.clone(), e.to_string()));
                continue;
            }
        };
        let target = dest_dir.join(relative);
        match copy_file(&source, &target) {
            Ok(()) => {
                debug!("Copied '{}' to '{}'", source.display(), target.display());
                report.copied.push(target);
            }
            Err(e) => {
                error!("Error copying {} to {}: {}", source.display(), target.display(), e);
                report.failed.push((source, e.to_string()));
            }
        }
    }
    Ok(report)
}

/// Writes `value` as JSON with two-space indentation, creating parent directories.
pub fn write_json<P: AsRef<Path>, T: Serialize + ?Sized>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    let content = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| Error::WriteError { path: parent.to_path_buf(), source: e })?;
    }
    fs::write(path, content).map_err(|e| Error::WriteError { path: path.to_path_buf(), source: e })
}
