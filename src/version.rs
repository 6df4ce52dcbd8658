//! Build metadata for `--version` and the report banner.
//!
//! `build.rs` sets the `PORTFOLIO_CHECK_*` variables when git, `date` and
//! rustc are available; each missing value is left out of the output.

use std::fmt;

/// Title printed at the top of every report
pub const REPORT_TITLE: &str = "Portfolio Error Checker";

/// Metadata captured at compile time
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: Option<&'static str>,
    pub build_date: Option<&'static str>,
    pub target: &'static str,
    pub rustc_version: Option<&'static str>,
}

impl BuildInfo {
    /// First line of the console report, e.g. "Portfolio Error Checker v1.0.0"
    pub fn banner(&self) -> String {
        format!("{} v{}", REPORT_TITLE, self.version)
    }

    /// Optional metadata lines as `(label, value)` pairs, present ones only
    fn details(&self) -> Vec<(&'static str, &'static str)> {
        [
            ("Commit", self.commit),
            ("Built", self.build_date),
            ("Target", Some(self.target)),
            ("Rustc", self.rustc_version),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "portfolio-check {}", self.version)?;
        for (label, value) in self.details() {
            write!(f, "\n{}: {}", label, value)?;
        }
        Ok(())
    }
}

/// Build information for the running binary
pub fn get_build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        commit: option_env!("PORTFOLIO_CHECK_GIT_HASH"),
        build_date: option_env!("PORTFOLIO_CHECK_BUILD_DATE"),
        target: std::env::consts::ARCH,
        rustc_version: option_env!("PORTFOLIO_CHECK_RUSTC_VERSION"),
    }
}
