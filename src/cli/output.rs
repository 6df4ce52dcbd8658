//! Output formatting for portfolio-check.
//!
//! Renders a validation report as the console report: a banner, one section
//! per check category with a line per passing check, then the issue
//! summary, remediation hints and usage reminders.

use crate::engine::result::ValidationReport;
use crate::version::get_build_info;
use crate::CheckCategory;

const RULE: &str = "========================================";

/// Fixed hints printed whenever any issue was found
pub const RECOMMENDATIONS: [&str; 4] = [
    "Fix missing files",
    "Validate JSON syntax",
    "Check CSS/JS syntax",
    "Re-run the content generator if needed",
];

/// Fixed reminders printed at the end of every report
pub const USAGE_REMINDERS: [&str; 2] = [
    "python portfolio_generator.py",
    "Check file paths and syntax",
];

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format a validation report into a string
    fn format(&self, report: &ValidationReport) -> String;
}

/// Terminal (human-readable) formatter
pub struct TerminalFormatter {
    color: bool,
}

impl TerminalFormatter {
    pub fn new(color: bool) -> Self {
        TerminalFormatter { color }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        self.colorize(text, "32")
    }

    fn yellow(&self, text: &str) -> String {
        self.colorize(text, "33")
    }

    fn red(&self, text: &str) -> String {
        self.colorize(text, "31")
    }

    fn bold(&self, text: &str) -> String {
        self.colorize(text, "1")
    }
}

impl OutputFormatter for TerminalFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let mut output = String::new();

        // Banner
        output.push_str(&self.bold(&get_build_info().banner()));
        output.push('\n');
        output.push_str(RULE);
        output.push('\n');

        // Scan: passing checks only, issues are listed in the summary
        for (index, category) in CheckCategory::ALL.iter().enumerate() {
            if index > 0 {
                output.push('\n');
            }
            output.push_str(&format!("Checking {}...\n", category));

            for check in report.checks_in(*category) {
                if let crate::CheckResult::Pass { ref message } = check.result {
                    output.push_str(&format!("  {} {}\n", self.green("[PASS]"), message));
                }
            }
        }

        // Summary
        let issues = report.issues();
        output.push('\n');
        output.push_str(&self.bold("PORTFOLIO CHECK SUMMARY"));
        output.push('\n');
        output.push_str(RULE);
        output.push('\n');

        if issues.is_empty() {
            output.push_str(&format!(
                "{} All checks passed! Portfolio is ready.\n",
                self.green("[DONE]")
            ));
            output.push_str("No critical issues found.\n");
        } else {
            output.push_str(&format!(
                "{} Found {} issues:\n",
                self.yellow("[WARN]"),
                issues.len()
            ));
            for issue in &issues {
                output.push_str(&format!("   {} {}\n", self.red("[FAIL]"), issue));
            }

            output.push_str("\nRECOMMENDATIONS:\n");
            for hint in RECOMMENDATIONS {
                output.push_str(&format!("   - {}\n", hint));
            }
        }

        output.push_str("\nTo fix issues, run:\n");
        let reminders: Vec<String> = USAGE_REMINDERS
            .iter()
            .map(|line| format!("   {}", line))
            .collect();
        output.push_str(&reminders.join("\n"));

        output
    }
}

/// Get the terminal formatter with color enabled unless `no_color`
pub fn get_formatter(no_color: bool) -> Box<dyn OutputFormatter> {
    Box::new(TerminalFormatter::new(!no_color))
}
