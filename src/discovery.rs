//! Discovery of template definitions and template files on disk.

use crate::constants::{DEFINITION_FILE, IGNORED_DIRS};
use crate::error::{Error, Result};
use globset::{Glob, GlobMatcher};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

fn discovery_error(root: &Path, err: impl std::fmt::Display) -> Error {
    Error::DiscoveryError { root: root.display().to_string(), message: err.to_string() }
}

/// Matches `<namespace>/templates.yaml` relative to the templates directory.
fn definition_matcher(root: &Path) -> Result<GlobMatcher> {
    Glob::new(&format!("*/{}", DEFINITION_FILE))
        .map(|glob| glob.compile_matcher())
        .map_err(|e| discovery_error(root, e))
}

/// Returns the namespace of a definition: the name of its directory.
pub fn namespace_of<P: AsRef<Path>>(definition_path: P) -> Option<String> {
    definition_path
        .as_ref()
        .parent()
        .and_then(|dir| dir.file_name())
        .map(|name| name.to_string_lossy().into_owned())
}

/// Finds every `<templates_dir>/*/templates.yaml`, one level deep, sorted by path.
///
/// Symlinked template directories are followed. A template directory that cannot
/// be read is skipped with a warning.
///
/// # Errors
/// * `Error::DiscoveryError` if `templates_dir` itself cannot be read
pub fn find_definitions<P: AsRef<Path>>(templates_dir: P) -> Result<Vec<PathBuf>> {
    let root = templates_dir.as_ref();
    let matcher = definition_matcher(root)?;
    if !root.is_dir() {
        return Err(discovery_error(root, "not a directory"));
    }

    let mut found = Vec::new();
    let walker = WalkDir::new(root).min_depth(2).max_depth(2).follow_links(true).sort_by_file_name();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(discovery_error(root, e)),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(root).map_err(|e| discovery_error(root, e))?;
        if matcher.is_match(relative) {
            debug!("Found definition {}", entry.path().display());
            found.push(entry.into_path());
        }
    }
    Ok(found)
}

/// Lists every non-directory entry below `template_dir`, recursively, sorted by path.
///
/// Entries that cannot be read are skipped with a warning.
pub fn find_template_files<P: AsRef<Path>>(template_dir: P) -> Result<Vec<PathBuf>> {
    let root = template_dir.as_ref();
    if !root.is_dir() {
        return Err(discovery_error(root, "not a directory"));
    }

    let files = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", root.display(), e);
                None
            }
        })
        .filter(|entry| !entry.file_type().is_dir())
        .map(DirEntry::into_path)
        .collect();
    Ok(files)
}

fn is_ignored_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry.file_name().to_str().map(|name| IGNORED_DIRS.contains(&name)).unwrap_or(false)
}

/// Finds every `templates.yaml` anywhere below `root`, skipping build, output and
/// dependency directories.
///
/// # Errors
/// * `Error::DiscoveryError` if `root` cannot be read
pub fn find_all_definitions<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(discovery_error(root, "not a directory"));
    }

    let mut found = Vec::new();
    let walker = WalkDir::new(root).sort_by_file_name().into_iter().filter_entry(|e| !is_ignored_dir(e));
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(discovery_error(root, e)),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", root.display(), e);
                continue;
            }
        };
        if entry.file_type().is_file() && entry.file_name() == DEFINITION_FILE {
            debug!("Found definition {}", entry.path().display());
            found.push(entry.into_path());
        }
    }
    Ok(found)
}
