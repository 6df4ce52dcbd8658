//! Check execution orchestrator.
//!
//! Holds the registered check groups and runs them one after another, in
//! registration order, on the calling thread. A group that finds problems
//! does not stop later groups.

use crate::engine::result::{ResultAggregator, ValidationReport};
use crate::{Check, CheckCategory, CheckerConfig};
use std::time::Instant;
use tracing::debug;

/// A registered group of checks with its execution function
pub struct RegisteredCheck {
    pub id: String,
    pub name: String,
    pub category: CheckCategory,
    pub check_fn: Box<dyn Fn(&CheckerConfig) -> Vec<Check> + Send + Sync>,
}

/// Check orchestrator
pub struct CheckOrchestrator {
    config: CheckerConfig,
    checks: Vec<RegisteredCheck>,
}

impl CheckOrchestrator {
    /// Create a new orchestrator for the given project configuration
    pub fn new(config: CheckerConfig) -> Self {
        CheckOrchestrator {
            config,
            checks: Vec::new(),
        }
    }

    /// Register checks for execution
    pub fn register_checks(&mut self, checks: Vec<RegisteredCheck>) {
        self.checks.extend(checks);
    }

    /// Run all registered checks
    pub fn run_all(&self) -> ValidationReport {
        let start = Instant::now();
        let mut aggregator = ResultAggregator::new();

        for check in &self.checks {
            debug!(
                id = %check.id,
                name = %check.name,
                category = %check.category,
                "running check group"
            );
            let results = (check.check_fn)(&self.config);
            for result in results {
                aggregator.add_result(result);
            }
        }

        let total_duration_ms = start.elapsed().as_millis() as u64;
        aggregator.set_metadata(self.config.root.clone(), total_duration_ms);
        aggregator.into_report()
    }
}

/// Create all registered checks with their execution functions
pub fn create_all_checks() -> Vec<RegisteredCheck> {
    use crate::checks::{balance, files, json};

    vec![
        RegisteredCheck {
            id: "FILE-001".to_string(),
            name: "Required Files".to_string(),
            category: CheckCategory::RequiredFiles,
            check_fn: Box::new(files::check_required_files),
        },
        RegisteredCheck {
            id: "FILE-002".to_string(),
            name: "Generated Content".to_string(),
            category: CheckCategory::GeneratedContent,
            check_fn: Box::new(files::check_generated_content),
        },
        RegisteredCheck {
            id: "JSON-001".to_string(),
            name: "JSON Syntax".to_string(),
            category: CheckCategory::Json,
            check_fn: Box::new(json::check_json_files),
        },
        RegisteredCheck {
            id: "CSS-001".to_string(),
            name: "CSS Brace Balance".to_string(),
            category: CheckCategory::Css,
            check_fn: Box::new(balance::check_css_files),
        },
        RegisteredCheck {
            id: "JS-001".to_string(),
            name: "JavaScript Delimiter Balance".to_string(),
            category: CheckCategory::JavaScript,
            check_fn: Box::new(balance::check_js_files),
        },
    ]
}
