//! JSON syntax checks.
//!
//! Only parse success matters; the parsed value is discarded.

use crate::checks::fs::{exists, read_text};
use crate::data::manifest::json_entries;
use crate::{Check, CheckCategory, CheckResult, CheckerConfig, IssueKind, PortfolioError};
use serde::de::IgnoredAny;
use std::path::Path;
use tracing::{debug, warn};

/// Check that `rel` under `root` is well-formed JSON.
///
/// The value is skipped rather than built, so numbers of any magnitude are
/// accepted.
pub fn validate_json_file(root: &Path, rel: &str) -> Result<(), PortfolioError> {
    let content = read_text(root, rel)?;
    serde_json::from_str::<IgnoredAny>(&content)?;
    Ok(())
}

/// Validate one JSON file
pub fn check_json_file(root: &Path, rel: &str) -> CheckResult {
    if !exists(root, rel) {
        return CheckResult::fail(IssueKind::MissingFile, format!("Missing JSON file: {}", rel));
    }

    match validate_json_file(root, rel) {
        Ok(_) => CheckResult::pass(format!("Valid JSON: {}", rel)),
        Err(e @ PortfolioError::Json(_)) => {
            debug!(file = %rel, error = %e, "invalid JSON");
            CheckResult::fail(IssueKind::MalformedJson, format!("Invalid JSON in {}: {}", rel, e))
        }
        Err(e) => {
            warn!(file = %rel, error = %e, "cannot read JSON file");
            CheckResult::fail(IssueKind::ReadError, format!("Error reading JSON {}: {}", rel, e))
        }
    }
}

/// Validate the top-level JSON file, plus the generated ones when the
/// generated directory exists
pub fn check_json_files(config: &CheckerConfig) -> Vec<Check> {
    let include_generated = exists(&config.root, &config.generated_dir);

    json_entries(&config.generated_dir, include_generated)
        .into_iter()
        .map(|entry| Check {
            result: check_json_file(&config.root, &entry.path),
            target: entry.path,
            category: CheckCategory::Json,
        })
        .collect()
}
