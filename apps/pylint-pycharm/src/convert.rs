//! One conversion run: lint, map, translate, emit.

use crate::config::Settings;
use crate::error::Result;
use crate::mapper::build_map;
use crate::runner::{format_command, prepare_args, run_command};
use crate::translator::translate;
use std::io::Write;
use tracing::info;

/// Run the linter over `inputs` and write the PyCharm-formatted report to `out`.
///
/// `linter_args` follow `settings.extra_args` on the command line. Returns the
/// linter's own exit code; any `Err` means nothing was written.
pub fn convert<W: Write>(
    inputs: &[String],
    linter_args: &[String],
    settings: &Settings,
    out: &mut W,
) -> Result<i32> {
    let mut args = settings.extra_args.clone();
    args.extend_from_slice(linter_args);
    let args = prepare_args(&args);
    let command = format_command(
        &settings.command,
        inputs,
        &args,
        settings.virtualenv.as_deref(),
    );
    let (exit_code, report) = run_command(&command)?;

    let file_path_map = build_map(inputs)?;
    let output_text = translate(&file_path_map, &report)?;
    out.write_all(output_text.as_bytes())?;
    out.flush()?;
    info!("converted {} report lines", output_text.split('\n').count());

    Ok(exit_code)
}
