//! CLI argument parsing via `clap`.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pylint-pycharm",
    version,
    about = "Pylint to PyCharm message converter",
    long_about = "Run Pylint on the given files and packages and rewrite its report into\nPyCharm-clickable `path:line:column: message` lines.\n\nAdditional arguments starting with '-' (after the inputs) are forwarded to Pylint.\nConfiguration precedence: CLI > pylint-pycharm.toml > defaults.",
    after_help = "Examples:\n  pylint-pycharm $FilePath$\n  pylint-pycharm -v venv/bin src/pkg tests --disable=C0111\n  pylint-pycharm --command 'python3 -m pylint' app.py --rcfile=.pylintrc",
    arg_required_else_help = true
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(short = 'v', long, help = "Path to the virtualenv bin directory holding `activate`")]
    pub virtualenv: Option<String>,
    #[arg(long, help = "Linter command to run (default: pylint)")]
    pub command: Option<String>,
    #[arg(long, help = "Config file (default: discover pylint-pycharm.toml)")]
    pub config: Option<PathBuf>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Enable debug logging on stderr")]
    pub verbose: bool,
    /// Input files and modules, followed by arguments forwarded to Pylint
    #[arg(required = true, trailing_var_arg = true, value_name = "INPUTS")]
    pub targets: Vec<String>,
}

impl Cli {
    /// Split trailing values into inputs and forwarded linter arguments.
    ///
    /// Inputs run up to the first value starting with `-`; that value and
    /// everything after it belong to the linter.
    pub fn split_targets(&self) -> (Vec<String>, Vec<String>) {
        let cut = self
            .targets
            .iter()
            .position(|t| t.starts_with('-'))
            .unwrap_or(self.targets.len());
        (self.targets[..cut].to_vec(), self.targets[cut..].to_vec())
    }
}
