//! Portfolio file manifest
//!
//! The expected files of a portfolio site, tagged by how they are checked.

use std::fmt;

/// Subdirectory holding files produced by the content generator
pub const GENERATED_DIR: &str = "generated_content";

/// Script name skipped by the JavaScript check when the checker ships as a
/// `.js` file inside the site it inspects
pub const CHECKER_SCRIPT_NAME: &str = "portfolio_checker.js";

/// Files that must exist directly under the project root
pub const REQUIRED_FILES: [&str; 9] = [
    "index.html",
    "main.js",
    "main.css",
    "about.css",
    "about.js",
    "dynamic-loader.js",
    "skills-visualizer.js",
    "dynamic-theme.css",
    "enhanced-features.js",
];

/// Files expected inside [`GENERATED_DIR`]
pub const GENERATED_FILES: [&str; 6] = [
    "portfolio_stats.json",
    "dynamic_variables.css",
    "dynamic_skills.html",
    "dynamic_projects.html",
    "background_particles.json",
    "performance_metrics.json",
];

/// JSON file validated at the project root
pub const TOP_LEVEL_JSON: [&str; 1] = ["portfolio_api.json"];

/// JSON files inside [`GENERATED_DIR`] validated when the directory exists
pub const GENERATED_JSON: [&str; 3] = [
    "portfolio_stats.json",
    "background_particles.json",
    "performance_metrics.json",
];

/// How a manifest entry is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    RequiredFile,
    GeneratedFile,
    JsonFile,
    CssFile,
    JsFile,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::RequiredFile => write!(f, "required-file"),
            EntryKind::GeneratedFile => write!(f, "generated-file"),
            EntryKind::JsonFile => write!(f, "json-file"),
            EntryKind::CssFile => write!(f, "css-file"),
            EntryKind::JsFile => write!(f, "js-file"),
        }
    }
}

/// A path relative to the project root plus its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub path: String,
    pub kind: EntryKind,
}

impl ManifestEntry {
    pub fn new(path: impl Into<String>, kind: EntryKind) -> Self {
        ManifestEntry {
            path: path.into(),
            kind,
        }
    }

    /// Final path component, used in CSS/JS messages
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// Join a file name onto the generated directory using `/` separators
pub fn generated_path(generated_dir: &str, name: &str) -> String {
    format!("{}/{}", generated_dir, name)
}

/// Required top-level files
pub fn required_entries() -> Vec<ManifestEntry> {
    REQUIRED_FILES
        .iter()
        .map(|name| ManifestEntry::new(*name, EntryKind::RequiredFile))
        .collect()
}

/// Generated files, with paths under `generated_dir`
pub fn generated_entries(generated_dir: &str) -> Vec<ManifestEntry> {
    GENERATED_FILES
        .iter()
        .map(|name| {
            ManifestEntry::new(generated_path(generated_dir, name), EntryKind::GeneratedFile)
        })
        .collect()
}

/// JSON files to validate; generated ones only when that directory exists
pub fn json_entries(generated_dir: &str, include_generated: bool) -> Vec<ManifestEntry> {
    let mut entries: Vec<ManifestEntry> = TOP_LEVEL_JSON
        .iter()
        .map(|name| ManifestEntry::new(*name, EntryKind::JsonFile))
        .collect();

    if include_generated {
        entries.extend(GENERATED_JSON.iter().map(|name| {
            ManifestEntry::new(generated_path(generated_dir, name), EntryKind::JsonFile)
        }));
    }

    entries
}
