//! Error taxonomy for a conversion run.
//!
//! Every variant is fatal: it aborts the run before any translated text is
//! written. Ordinary linter exit codes (including "issues found") are not
//! errors and never show up here.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions raised by the mapper, translator, runner or config layer.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The linter process could not be started, or died without an exit code.
    #[error("Command '{command}' failed")]
    CommandFailed {
        command: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The shell reported exit code 127.
    #[error("Command '{command}' not found")]
    CommandNotFound { command: String },

    /// A diagnostic line names a path that is absent from the path map.
    #[error("No root path found for module {path}")]
    UnmappedPath { path: String },

    /// A discovered or explicit config file could not be read or parsed.
    #[error("Invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
