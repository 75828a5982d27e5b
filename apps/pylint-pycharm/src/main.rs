//! pylint-pycharm binary entry point.
//! Resolves settings, runs the conversion and relays the linter's exit code.

use clap::Parser;
use pylint_pycharm::cli::Cli;
use pylint_pycharm::{config, convert, utils};
use tracing_subscriber::EnvFilter;

/// Exit status for fatal conversion errors.
const FAILURE_EXIT: i32 = 1;
/// Exit status for unusable invocations.
const USAGE_EXIT: i32 = 2;

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    // stdout carries the translated report; logs stay on stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let (inputs, linter_args) = cli.split_targets();
    if inputs.is_empty() {
        eprintln!(
            "{} at least one input file or module is required",
            utils::error_prefix()
        );
        std::process::exit(USAGE_EXIT);
    }

    let start = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let settings = match config::resolve_settings(
        &start,
        cli.config.as_deref(),
        cli.command.as_deref(),
        cli.virtualenv.as_deref(),
    ) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(USAGE_EXIT);
        }
    };

    let mut stdout = std::io::stdout().lock();
    match convert(&inputs, &linter_args, &settings, &mut stdout) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!(
                "{} Pylint execution failed: {}",
                utils::error_prefix(),
                e
            );
            std::process::exit(FAILURE_EXIT);
        }
    }
}
