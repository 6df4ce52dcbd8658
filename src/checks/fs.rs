//! Filesystem helpers shared by the checks.
//!
//! Reads open and close the file within the call; no handle outlives it.

use crate::data::manifest::{EntryKind, ManifestEntry};
use crate::PortfolioError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Read `rel` under `root` as UTF-8 text
pub fn read_text(root: &Path, rel: &str) -> Result<String, PortfolioError> {
    Ok(fs::read_to_string(root.join(rel))?)
}

/// Whether `rel` exists under `root` (file or directory)
pub fn exists(root: &Path, rel: &str) -> bool {
    root.join(rel).exists()
}

/// Entries of `dir` (relative to `root`, `None` for the root itself) whose
/// names end in `.{extension}`, sorted by name.
///
/// Dotfiles are included and directories are not filtered out. A directory
/// that cannot be listed yields no entries.
pub fn discover(
    root: &Path,
    dir: Option<&str>,
    extension: &str,
    kind: EntryKind,
) -> Vec<ManifestEntry> {
    let search = match dir {
        Some(d) => root.join(d),
        None => root.to_path_buf(),
    };

    let read_dir = match fs::read_dir(&search) {
        Ok(rd) => rd,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(dir = %search.display(), "directory absent, nothing to discover");
            return Vec::new();
        }
        Err(e) => {
            warn!(dir = %search.display(), error = %e, "cannot list directory");
            return Vec::new();
        }
    };

    let suffix = format!(".{}", extension);
    let mut names: Vec<String> = read_dir
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(&suffix))
        .collect();
    names.sort();

    names
        .into_iter()
        .map(|name| {
            let path = match dir {
                Some(d) => format!("{}/{}", d, name),
                None => name,
            };
            ManifestEntry::new(path, kind)
        })
        .collect()
}
