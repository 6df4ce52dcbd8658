//! portfolio-check library
//!
//! Pre-publish validation for a static portfolio website.
//!
//! A run walks a fixed manifest of expected files under a project root and
//! reports:
//! - Missing required top-level files
//! - Missing `generated_content/` files
//! - JSON files that fail to parse
//! - CSS and JavaScript files with unbalanced delimiters
//!
//! Every failed check becomes an [`Issue`]; nothing is fixed or retried.
//!
//! # Example
//!
//! ```no_run
//! use portfolio_check::{run_checks, CheckerConfig};
//!
//! let report = run_checks(CheckerConfig::default()).expect("invalid project root");
//! for issue in report.issues() {
//!     println!("{}", issue);
//! }
//! ```

pub mod checks;
pub mod cli;
pub mod data;
pub mod engine;
pub mod version;

use cli::args::Args;
use data::manifest::{CHECKER_SCRIPT_NAME, GENERATED_DIR};
use engine::orchestrator::{create_all_checks, CheckOrchestrator};
use std::fmt;
use std::path::PathBuf;
use tracing::info;

pub use engine::result::{ResultSummary, ValidationReport};

/// Kind of problem an [`Issue`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    /// An expected path is absent
    MissingFile,
    /// A JSON file exists but does not parse
    MalformedJson,
    /// Counts of a paired delimiter differ
    UnbalancedDelimiters,
    /// A file could not be opened or decoded
    ReadError,
}

/// One failed check, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub kind: IssueKind,
    pub message: String,
}

impl Issue {
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Issue {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    /// Check passed; `message` is the informational line for the scan
    Pass { message: String },
    /// Check failed with exactly one issue
    Fail(Issue),
}

impl CheckResult {
    pub fn pass(message: impl Into<String>) -> Self {
        CheckResult::Pass {
            message: message.into(),
        }
    }

    pub fn fail(kind: IssueKind, message: impl Into<String>) -> Self {
        CheckResult::Fail(Issue::new(kind, message))
    }

    /// The issue, if this check failed
    pub fn issue(&self) -> Option<&Issue> {
        match self {
            CheckResult::Pass { .. } => None,
            CheckResult::Fail(issue) => Some(issue),
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckResult::Pass { message } => write!(f, "PASS: {}", message),
            CheckResult::Fail(issue) => write!(f, "FAIL: {}", issue),
        }
    }
}

/// Check category, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckCategory {
    /// Required top-level files
    RequiredFiles,
    /// The `generated_content/` directory and its files
    GeneratedContent,
    /// JSON syntax
    Json,
    /// CSS brace balance
    Css,
    /// JavaScript parenthesis/brace balance
    JavaScript,
}

impl CheckCategory {
    pub const ALL: [CheckCategory; 5] = [
        CheckCategory::RequiredFiles,
        CheckCategory::GeneratedContent,
        CheckCategory::Json,
        CheckCategory::Css,
        CheckCategory::JavaScript,
    ];
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckCategory::RequiredFiles => write!(f, "required files"),
            CheckCategory::GeneratedContent => write!(f, "generated content"),
            CheckCategory::Json => write!(f, "JSON files"),
            CheckCategory::Css => write!(f, "CSS files"),
            CheckCategory::JavaScript => write!(f, "JavaScript files"),
        }
    }
}

/// An executed check with its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    /// Path the check inspected, relative to the project root
    pub target: String,
    pub category: CheckCategory,
    pub result: CheckResult,
}

/// Error types for portfolio-check operations.
///
/// Only `InvalidRoot` escapes [`run_checks`]; the others are turned into
/// issues by the check that hit them.
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("project root {} is not a directory", .path.display())]
    InvalidRoot { path: PathBuf },
}

/// Configuration for a validation run.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Project root to inspect
    pub root: PathBuf,
    /// Name of the generated content subdirectory
    pub generated_dir: String,
    /// Top-level `.js` names skipped by the JavaScript check
    pub excluded_scripts: Vec<String>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        CheckerConfig {
            root: PathBuf::from("."),
            generated_dir: GENERATED_DIR.to_string(),
            excluded_scripts: vec![CHECKER_SCRIPT_NAME.to_string()],
        }
    }
}

impl CheckerConfig {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Self {
        let mut config = CheckerConfig::default();
        if let Some(ref root) = args.root {
            config.root = PathBuf::from(root);
        }
        config
    }

    /// Configuration rooted at `root` with default manifest settings
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        CheckerConfig {
            root: root.into(),
            ..Default::default()
        }
    }
}

/// Run every check against the configured project root.
///
/// Missing files, bad JSON, unbalanced delimiters and read failures are all
/// recorded in the returned report. The only error is a root that is not a
/// directory.
///
/// # Example
///
/// ```no_run
/// use portfolio_check::{run_checks, CheckerConfig};
///
/// match run_checks(CheckerConfig::with_root("site")) {
///     Ok(report) => println!("{} issues", report.issues().len()),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run_checks(config: CheckerConfig) -> Result<ValidationReport, PortfolioError> {
    if !config.root.is_dir() {
        return Err(PortfolioError::InvalidRoot { path: config.root });
    }

    let mut orchestrator = CheckOrchestrator::new(config);
    orchestrator.register_checks(create_all_checks());

    let report = orchestrator.run_all();
    info!(
        checks = report.checks.len(),
        issues = report.issues().len(),
        duration_ms = report.total_duration_ms,
        "portfolio check complete"
    );

    Ok(report)
}
