//! Build script for portfolio-check.
//!
//! Embeds git, build date and rustc metadata for `--version`.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    if let Some(hash) = get_git_hash() {
        println!("cargo:rustc-env=PORTFOLIO_CHECK_GIT_HASH={}", hash);
    }

    if let Some(date) = get_build_date() {
        println!("cargo:rustc-env=PORTFOLIO_CHECK_BUILD_DATE={}", date);
    }

    if let Some(version) = get_rustc_version() {
        println!("cargo:rustc-env=PORTFOLIO_CHECK_RUSTC_VERSION={}", version);
    }
}

/// Run a command and return its trimmed stdout on success
fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
}

/// Short git commit hash
fn get_git_hash() -> Option<String> {
    command_stdout("git", &["rev-parse", "--short", "HEAD"])
}

/// Build date in ISO 8601 format
fn get_build_date() -> Option<String> {
    command_stdout("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"])
}

/// rustc version, "rustc 1.75.0 (..." -> "1.75.0"
fn get_rustc_version() -> Option<String> {
    command_stdout("rustc", &["--version"])
        .and_then(|s| s.split_whitespace().nth(1).map(|v| v.to_string()))
}
