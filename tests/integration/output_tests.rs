//! Output formatting tests.
//!
//! Tests for the terminal report layout.

use crate::mocks::MockProject;
use portfolio_check::cli::output::{
    get_formatter, OutputFormatter, TerminalFormatter, RECOMMENDATIONS, USAGE_REMINDERS,
};
use portfolio_check::engine::result::ValidationReport;
use portfolio_check::{run_checks, Check, CheckCategory, CheckResult, IssueKind};
use std::path::PathBuf;

fn create_sample_report() -> ValidationReport {
    ValidationReport {
        root: PathBuf::from("."),
        checks: vec![
            Check {
                target: "index.html".to_string(),
                category: CheckCategory::RequiredFiles,
                result: CheckResult::pass("Found: index.html"),
            },
            Check {
                target: "main.js".to_string(),
                category: CheckCategory::RequiredFiles,
                result: CheckResult::fail(IssueKind::MissingFile, "Missing required file: main.js"),
            },
            Check {
                target: "portfolio_api.json".to_string(),
                category: CheckCategory::Json,
                result: CheckResult::pass("Valid JSON: portfolio_api.json"),
            },
            Check {
                target: "main.css".to_string(),
                category: CheckCategory::Css,
                result: CheckResult::fail(
                    IssueKind::UnbalancedDelimiters,
                    "CSS bracket mismatch in main.css: 3 { vs 2 }",
                ),
            },
        ],
        total_duration_ms: 3,
    }
}

fn create_clean_report() -> ValidationReport {
    ValidationReport {
        root: PathBuf::from("."),
        checks: vec![Check {
            target: "index.html".to_string(),
            category: CheckCategory::RequiredFiles,
            result: CheckResult::pass("Found: index.html"),
        }],
        total_duration_ms: 1,
    }
}

#[test]
fn test_banner() {
    let output = TerminalFormatter::new(false).format(&create_clean_report());
    let first = output.lines().next().unwrap();
    assert_eq!(first, format!("Portfolio Error Checker v{}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_every_section_header_present() {
    let output = TerminalFormatter::new(false).format(&create_clean_report());
    for header in [
        "Checking required files...",
        "Checking generated content...",
        "Checking JSON files...",
        "Checking CSS files...",
        "Checking JavaScript files...",
    ] {
        assert!(output.contains(header), "missing header: {}", header);
    }
}

#[test]
fn test_pass_lines_in_scan_and_issues_in_summary() {
    let output = TerminalFormatter::new(false).format(&create_sample_report());

    assert!(output.contains("  [PASS] Found: index.html\n"));
    assert!(output.contains("  [PASS] Valid JSON: portfolio_api.json\n"));

    let summary_at = output.find("PORTFOLIO CHECK SUMMARY").unwrap();
    let missing_at = output.find("Missing required file: main.js").unwrap();
    assert!(missing_at > summary_at);

    assert!(output.contains("[WARN] Found 2 issues:"));
    assert!(output.contains("   [FAIL] Missing required file: main.js\n"));
    assert!(output.contains("   [FAIL] CSS bracket mismatch in main.css: 3 { vs 2 }\n"));
}

#[test]
fn test_issues_listed_in_order() {
    let output = TerminalFormatter::new(false).format(&create_sample_report());
    let first = output.find("Missing required file: main.js").unwrap();
    let second = output.find("CSS bracket mismatch").unwrap();
    assert!(first < second);
}

#[test]
fn test_recommendations_only_with_issues() {
    let with_issues = TerminalFormatter::new(false).format(&create_sample_report());
    assert!(with_issues.contains("RECOMMENDATIONS:"));
    for hint in RECOMMENDATIONS {
        assert!(with_issues.contains(hint));
    }

    let clean = TerminalFormatter::new(false).format(&create_clean_report());
    assert!(!clean.contains("RECOMMENDATIONS:"));
    assert!(clean.contains("All checks passed! Portfolio is ready."));
    assert!(clean.contains("No critical issues found."));
}

#[test]
fn test_usage_reminders_always_last() {
    for report in [create_sample_report(), create_clean_report()] {
        let output = TerminalFormatter::new(false).format(&report);
        assert!(output.contains("To fix issues, run:"));
        let last_line = output.lines().last().unwrap();
        assert_eq!(last_line, format!("   {}", USAGE_REMINDERS[USAGE_REMINDERS.len() - 1]));
    }
}

#[test]
fn test_no_color_has_no_escapes() {
    let output = get_formatter(true).format(&create_sample_report());
    assert!(!output.contains("\x1b["));
}

#[test]
fn test_color_markers() {
    let output = get_formatter(false).format(&create_sample_report());
    assert!(output.contains("\x1b[32m[PASS]\x1b[0m"));
    assert!(output.contains("\x1b[31m[FAIL]\x1b[0m"));
}

#[test]
fn test_index_only_report_text() {
    let project = MockProject::index_only();
    let report = run_checks(project.config()).unwrap();
    let output = TerminalFormatter::new(false).format(&report);

    assert!(output.contains("  [PASS] Found: index.html\n"));
    assert!(output.contains("Found 10 issues:"));
    assert!(output.contains("   [FAIL] Missing generated_content directory\n"));
}
