//! Linter invocation: argument preparation, command construction, execution.

use crate::error::{ConvertError, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

const OUTPUT_FORMAT_FLAG: &str = "--output-format=";
const PARSEABLE_FORMAT: &str = "--output-format=parseable";
const COMMAND_NOT_FOUND: i32 = 127;

/// Force the parseable report format.
///
/// Every `--output-format=` argument the caller passed is dropped and a single
/// `--output-format=parseable` is appended.
pub fn prepare_args(args: &[String]) -> Vec<String> {
    let mut out: Vec<String> = args
        .iter()
        .filter(|a| !a.starts_with(OUTPUT_FORMAT_FLAG))
        .cloned()
        .collect();
    out.push(PARSEABLE_FORMAT.to_string());
    out
}

/// Build the shell command line for one linter run.
///
/// With a virtualenv the linter is wrapped between sourcing its `activate`
/// script and `deactivate`. Windows has no `source`; `activate` is run as a
/// script there.
pub fn format_command(
    command: &str,
    modules: &[String],
    args: &[String],
    virtualenv: Option<&str>,
) -> String {
    let cmd = format!("{} {} {}", command, modules.join(" "), args.join(" "));
    match virtualenv {
        Some(venv) if !venv.is_empty() => {
            let activate = Path::new(venv).join("activate");
            let source = if cfg!(windows) { "" } else { ". " };
            format!(
                "{}{} && {} && deactivate",
                source,
                activate.to_string_lossy(),
                cmd
            )
        }
        _ => cmd,
    }
}

/// Run `command` through the platform shell.
///
/// Returns the exit code and captured stdout; stderr goes straight to the
/// terminal. Exit code 127 means the shell could not find the command.
pub fn run_command(command: &str) -> Result<(i32, String)> {
    debug!("running: {}", command);
    let output = shell(command)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|e| ConvertError::CommandFailed {
            command: command.to_string(),
            source: Some(e),
        })?;
    let Some(code) = output.status.code() else {
        return Err(ConvertError::CommandFailed {
            command: command.to_string(),
            source: None,
        });
    };
    if code == COMMAND_NOT_FOUND {
        return Err(ConvertError::CommandNotFound {
            command: command.to_string(),
        });
    }
    debug!("linter exited with {}", code);
    Ok((code, String::from_utf8_lossy(&output.stdout).into_owned()))
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut c = Command::new("sh");
    c.arg("-c").arg(command);
    c
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut c = Command::new("cmd");
    c.arg("/C").arg(command);
    c
}
