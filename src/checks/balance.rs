//! Delimiter balance checks for CSS and JavaScript.
//!
//! Counting is a single pass over characters. Delimiters inside strings or
//! comments are counted like any other, so `content: "{"` in CSS is
//! reported as a mismatch.

use crate::checks::fs::{discover, read_text};
use crate::data::manifest::{EntryKind, ManifestEntry};
use crate::{Check, CheckCategory, CheckResult, CheckerConfig, IssueKind};
use std::path::Path;
use tracing::{debug, warn};

/// Occurrence counts of an opening and closing delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterCount {
    pub open: usize,
    pub close: usize,
}

impl DelimiterCount {
    pub fn is_balanced(&self) -> bool {
        self.open == self.close
    }
}

/// Count `open` and `close` in `content`
pub fn count_delimiters(content: &str, open: char, close: char) -> DelimiterCount {
    content.chars().fold(DelimiterCount { open: 0, close: 0 }, |mut acc, c| {
        if c == open {
            acc.open += 1;
        } else if c == close {
            acc.close += 1;
        }
        acc
    })
}

/// Brace balance of CSS text
pub fn check_css_content(name: &str, content: &str) -> CheckResult {
    let braces = count_delimiters(content, '{', '}');
    if braces.is_balanced() {
        CheckResult::pass(format!("CSS syntax OK: {}", name))
    } else {
        CheckResult::fail(
            IssueKind::UnbalancedDelimiters,
            format!(
                "CSS bracket mismatch in {}: {} {{ vs {} }}",
                name, braces.open, braces.close
            ),
        )
    }
}

/// Parenthesis then brace balance of JavaScript text.
///
/// Braces are only compared when parentheses balance, so a file yields at
/// most one issue.
pub fn check_js_content(name: &str, content: &str) -> CheckResult {
    if !count_delimiters(content, '(', ')').is_balanced() {
        CheckResult::fail(
            IssueKind::UnbalancedDelimiters,
            format!("JS parentheses mismatch in {}", name),
        )
    } else if !count_delimiters(content, '{', '}').is_balanced() {
        CheckResult::fail(
            IssueKind::UnbalancedDelimiters,
            format!("JS brace mismatch in {}", name),
        )
    } else {
        CheckResult::pass(format!("JS syntax OK: {}", name))
    }
}

fn check_entry(
    root: &Path,
    entry: ManifestEntry,
    category: CheckCategory,
    label: &str,
    check_content: fn(&str, &str) -> CheckResult,
) -> Check {
    let name = entry.file_name().to_string();
    debug!(file = %entry.path, "checking delimiter balance");

    let result = match read_text(root, &entry.path) {
        Ok(content) => check_content(&name, &content),
        Err(e) => {
            warn!(file = %entry.path, error = %e, "cannot read file");
            let message = format!("Error reading {} {}: {}", label, name, e);
            CheckResult::fail(IssueKind::ReadError, message)
        }
    };

    Check {
        target: entry.path,
        category,
        result,
    }
}

/// Every `*.css` at the root, then every `*.css` in the generated directory
pub fn check_css_files(config: &CheckerConfig) -> Vec<Check> {
    let mut entries = discover(&config.root, None, "css", EntryKind::CssFile);
    entries.extend(discover(
        &config.root,
        Some(config.generated_dir.as_str()),
        "css",
        EntryKind::CssFile,
    ));

    entries
        .into_iter()
        .map(|entry| {
            check_entry(&config.root, entry, CheckCategory::Css, "CSS", check_css_content)
        })
        .collect()
}

/// Every `*.js` at the root except the excluded script names
pub fn check_js_files(config: &CheckerConfig) -> Vec<Check> {
    discover(&config.root, None, "js", EntryKind::JsFile)
        .into_iter()
        .filter(|entry| !config.excluded_scripts.iter().any(|s| s == entry.file_name()))
        .map(|entry| {
            check_entry(&config.root, entry, CheckCategory::JavaScript, "JS", check_js_content)
        })
        .collect()
}
