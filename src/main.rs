//! portfolio-check CLI entry point
//!
//! Validates a static portfolio site before publishing.

use portfolio_check::cli::args::{Args, Command};
use portfolio_check::cli::output::get_formatter;
use portfolio_check::version::get_build_info;
use portfolio_check::{run_checks, CheckerConfig};

use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the report (respects RUST_LOG)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let args = match Args::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Run 'portfolio-check --help' for usage information.");
            return ExitCode::from(2);
        }
    };

    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    match args.command {
        Command::Version => {
            println!("{}", get_build_info());
            ExitCode::SUCCESS
        }
        Command::Check => check(&args),
    }
}

fn print_help() {
    println!(
        r#"portfolio-check - Pre-publish validation for static portfolio websites

USAGE:
    portfolio-check [OPTIONS]

CHECKS (in order):
    Required files      index.html, main.js, main.css and the other site files
    Generated content   generated_content/ and the files it should contain
    JSON                portfolio_api.json and generated JSON data
    CSS                 {{ and }} counts in every *.css file
    JavaScript          ( and ) then {{ and }} counts in every *.js file

OPTIONS:
    --root <DIR>    Project root to check (default: current directory)
    --no-color      Disable colored output
    -h, --help      Print this help message
    -V, --version   Print version information

ENVIRONMENT:
    PORTFOLIO_CHECK_ROOT   Project root, overridden by --root
    NO_COLOR               Disable colored output
    RUST_LOG               Diagnostic logging on stderr (e.g. debug)

The report always exits 0; issues are listed, never fatal."#
    );
}

fn check(args: &Args) -> ExitCode {
    let config = CheckerConfig::from_args(args);

    let report = match run_checks(config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let formatter = get_formatter(args.no_color);
    println!("{}", formatter.format(&report));

    ExitCode::SUCCESS
}
