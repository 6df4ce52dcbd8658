//! Presence checks for required and generated files.

use crate::checks::fs::exists;
use crate::data::manifest::{generated_entries, required_entries};
use crate::{Check, CheckCategory, CheckResult, CheckerConfig, IssueKind};
use tracing::debug;

/// Each required file must exist directly under the root
pub fn check_required_files(config: &CheckerConfig) -> Vec<Check> {
    required_entries()
        .into_iter()
        .map(|entry| {
            let result = if exists(&config.root, &entry.path) {
                CheckResult::pass(format!("Found: {}", entry.path))
            } else {
                debug!(file = %entry.path, "required file missing");
                CheckResult::fail(
                    IssueKind::MissingFile,
                    format!("Missing required file: {}", entry.path),
                )
            };
            Check {
                target: entry.path,
                category: CheckCategory::RequiredFiles,
                result,
            }
        })
        .collect()
}

/// The generated directory must exist, and each generated file within it.
///
/// A missing directory is one issue; its files are then not checked.
pub fn check_generated_content(config: &CheckerConfig) -> Vec<Check> {
    let dir = &config.generated_dir;

    if !exists(&config.root, dir) {
        debug!(dir = %dir, "generated content directory missing");
        return vec![Check {
            target: dir.clone(),
            category: CheckCategory::GeneratedContent,
            result: CheckResult::fail(IssueKind::MissingFile, format!("Missing {} directory", dir)),
        }];
    }

    generated_entries(dir)
        .into_iter()
        .map(|entry| {
            let result = if exists(&config.root, &entry.path) {
                CheckResult::pass(format!("Generated: {}", entry.file_name()))
            } else {
                CheckResult::fail(
                    IssueKind::MissingFile,
                    format!("Missing generated file: {}", entry.file_name()),
                )
            };
            Check {
                target: entry.path,
                category: CheckCategory::GeneratedContent,
                result,
            }
        })
        .collect()
}
