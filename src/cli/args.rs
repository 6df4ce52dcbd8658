//! Zero-dependency argument parser for portfolio-check.
//!
//! Running with no arguments checks the current directory.

use std::env;

/// Environment variable overriding the project root
pub const ROOT_ENV: &str = "PORTFOLIO_CHECK_ROOT";

/// Command to execute
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Command {
    /// Validate the portfolio (default)
    #[default]
    Check,
    /// Print version information
    Version,
}

/// Parsed command line arguments
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Command to execute
    pub command: Command,
    /// Project root; `None` means the current directory
    pub root: Option<String>,
    /// Disable colored output
    pub no_color: bool,
    /// Show help
    pub help: bool,
}

impl Args {
    /// Parse command line arguments from std::env::args()
    pub fn parse() -> Result<Self, String> {
        let args: Vec<String> = env::args().skip(1).collect();
        Self::parse_from(&args)
    }

    /// Parse command line arguments from a slice (for testing)
    pub fn parse_from(args: &[String]) -> Result<Self, String> {
        let mut result = Args::default();
        let mut i = 0;

        if env::var_os("NO_COLOR").is_some() {
            result.no_color = true;
        }
        if let Ok(root) = env::var(ROOT_ENV) {
            if !root.is_empty() {
                result.root = Some(root);
            }
        }

        while i < args.len() {
            let arg = &args[i];

            match arg.as_str() {
                "check" => result.command = Command::Check,
                "version" => result.command = Command::Version,

                "-h" | "--help" => result.help = true,
                "-V" | "--version" => result.command = Command::Version,

                "--no-color" => result.no_color = true,
                "--root" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--root requires a directory".to_string());
                    }
                    result.root = Some(args[i].clone());
                }
                _ if arg.starts_with("--root=") => {
                    let root = &arg["--root=".len()..];
                    if root.is_empty() {
                        return Err("--root requires a directory".to_string());
                    }
                    result.root = Some(root.to_string());
                }

                _ if arg.starts_with('-') => {
                    return Err(format!("Unknown option: '{}'", arg));
                }
                _ => {
                    return Err(format!("Unexpected argument: '{}'", arg));
                }
            }

            i += 1;
        }

        Ok(result)
    }
}
