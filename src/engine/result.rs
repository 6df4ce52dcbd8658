//! Result aggregation and reporting.
//!
//! Collects check results in execution order and derives the issue list and
//! summary from them.

use crate::{Check, CheckCategory, CheckResult, Issue, IssueKind};
use std::path::PathBuf;

/// Result summary statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSummary {
    pub passed: u32,
    pub failed: u32,
    pub total: u32,
}

/// Validation report containing all check results
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub root: PathBuf,
    pub checks: Vec<Check>,
    pub total_duration_ms: u64,
}

impl ValidationReport {
    /// Issues in the order their checks ran
    pub fn issues(&self) -> Vec<&Issue> {
        self.checks.iter().filter_map(|c| c.result.issue()).collect()
    }

    /// Issues of one kind, in order
    pub fn issues_of_kind(&self, kind: IssueKind) -> Vec<&Issue> {
        self.issues().into_iter().filter(|i| i.kind == kind).collect()
    }

    /// Checks belonging to a category
    pub fn checks_in(&self, category: CheckCategory) -> Vec<&Check> {
        self.checks.iter().filter(|c| c.category == category).collect()
    }

    /// True when no check failed
    pub fn is_clean(&self) -> bool {
        self.checks.iter().all(|c| c.result.issue().is_none())
    }

    /// Calculate summary statistics
    pub fn summary(&self) -> ResultSummary {
        let mut summary = ResultSummary::default();

        for check in &self.checks {
            summary.total += 1;
            match check.result {
                CheckResult::Pass { .. } => summary.passed += 1,
                CheckResult::Fail(_) => summary.failed += 1,
            }
        }

        summary
    }
}

/// Result aggregator for collecting check results
pub struct ResultAggregator {
    checks: Vec<Check>,
    root: PathBuf,
    total_duration_ms: u64,
}

impl ResultAggregator {
    /// Create a new result aggregator
    pub fn new() -> Self {
        ResultAggregator {
            checks: Vec::new(),
            root: PathBuf::new(),
            total_duration_ms: 0,
        }
    }

    /// Set report metadata
    pub fn set_metadata(&mut self, root: PathBuf, total_duration_ms: u64) {
        self.root = root;
        self.total_duration_ms = total_duration_ms;
    }

    /// Add a completed check result
    pub fn add_result(&mut self, check: Check) {
        self.checks.push(check);
    }

    /// Create final validation report
    pub fn into_report(self) -> ValidationReport {
        ValidationReport {
            root: self.root,
            checks: self.checks,
            total_duration_ms: self.total_duration_ms,
        }
    }
}

impl Default for ResultAggregator {
    fn default() -> Self {
        Self::new()
    }
}
