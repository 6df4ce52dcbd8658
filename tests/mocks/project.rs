//! Temporary portfolio project builder.
//!
//! Provides fixture trees that simulate:
//! - A complete, valid portfolio
//! - A bare directory with only `index.html`
//! - Individual broken files layered on either

use portfolio_check::data::manifest::{GENERATED_DIR, GENERATED_FILES, REQUIRED_FILES};
use portfolio_check::CheckerConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A portfolio project rooted in a temporary directory
pub struct MockProject {
    dir: TempDir,
}

impl MockProject {
    /// Empty project directory
    pub fn empty() -> Self {
        MockProject {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Every required and generated file with valid contents
    pub fn complete() -> Self {
        let project = Self::empty();

        for name in REQUIRED_FILES {
            project.write(name, valid_content(name));
        }
        project.write("portfolio_api.json", r#"{"projects": [], "version": 1}"#);

        for name in GENERATED_FILES {
            project.write(&format!("{}/{}", GENERATED_DIR, name), valid_content(name));
        }

        project
    }

    /// Only an empty `index.html`
    pub fn index_only() -> Self {
        let project = Self::empty();
        project.write("index.html", "");
        project
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn config(&self) -> CheckerConfig {
        CheckerConfig::with_root(self.root())
    }

    /// Write `contents` to `rel`, creating parent directories
    pub fn write(&self, rel: &str, contents: impl AsRef<[u8]>) -> &Self {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(path, contents).expect("write fixture file");
        self
    }

    pub fn remove(&self, rel: &str) -> &Self {
        let path = self.path(rel);
        if path.is_dir() {
            fs::remove_dir_all(path).expect("remove fixture dir");
        } else {
            fs::remove_file(path).expect("remove fixture file");
        }
        self
    }

    pub fn mkdir(&self, rel: &str) -> &Self {
        fs::create_dir_all(self.path(rel)).expect("create fixture dir");
        self
    }
}

/// Plausible valid contents for a file, chosen by extension
pub fn valid_content(name: &str) -> &'static str {
    if name.ends_with(".json") {
        r#"{"ok": true, "items": [1, 2, 3]}"#
    } else if name.ends_with(".css") {
        ":root { --accent: #3a7; }\nbody { margin: 0; color: var(--accent); }\n"
    } else if name.ends_with(".js") {
        "document.addEventListener('DOMContentLoaded', () => {\n  init({ theme: 'dark' });\n});\n"
    } else {
        "<!DOCTYPE html>\n<html><body><main></main></body></html>\n"
    }
}
