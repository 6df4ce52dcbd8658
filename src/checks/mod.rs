//! Validation check modules.
//!
//! Checks run in this order:
//! - Required files: presence of the top-level site files
//! - Generated content: presence of `generated_content/` and its files
//! - JSON: syntax of the API and generated data files
//! - CSS: brace balance
//! - JavaScript: parenthesis, then brace, balance
//!
//! # Error Conversion
//!
//! Checks never return errors. A missing path, a file that cannot be read
//! or decoded, and a JSON parse failure each become a `CheckResult::Fail`
//! carrying one issue. Each check yields at most one issue.

pub mod balance;
pub mod files;
pub mod fs;
pub mod json;
