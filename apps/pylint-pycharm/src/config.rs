//! Configuration discovery and effective settings resolution.
//!
//! pylint-pycharm reads `pylint-pycharm.toml|yaml|yml` from the working
//! directory (or the closest ancestor) and merges it with CLI flags to
//! produce `Settings`.
//! Defaults:
//! - `command`: `pylint`
//! - `virtualenv`: none
//! - `args`: none
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{ConvertError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_COMMAND: &str = "pylint";

const CONFIG_NAMES: [&str; 3] = [
    "pylint-pycharm.toml",
    "pylint-pycharm.yaml",
    "pylint-pycharm.yml",
];

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
/// Root configuration loaded from `pylint-pycharm.toml|yaml`.
pub struct FileConfig {
    /// Linter executable (or any shell snippet) to invoke.
    pub command: Option<String>,
    /// Directory holding the virtualenv `activate` script.
    pub virtualenv: Option<String>,
    /// Linter arguments placed before the ones given on the command line.
    #[serde(default)]
    pub args: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
/// Fully-resolved configuration handed to the converter.
pub struct Settings {
    pub command: String,
    pub virtualenv: Option<String>,
    pub extra_args: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            command: DEFAULT_COMMAND.to_string(),
            virtualenv: None,
            extra_args: Vec::new(),
        }
    }
}

/// Walk upward from `start` looking for a config file.
///
/// Stops at the first directory holding a config file, or at a `.git`
/// directory (returning `None` there).
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut cur = start;
    loop {
        for name in CONFIG_NAMES {
            let candidate = cur.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        if cur.join(".git").exists() {
            return None;
        }
        cur = cur.parent()?;
    }
}

/// Load a config file, picking the parser from its extension.
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let invalid = |message: String| ConvertError::Config {
        path: path.to_path_buf(),
        message,
    };
    let s = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        serde_yaml::from_str(&s).map_err(|e| invalid(e.to_string()))
    } else {
        toml::from_str(&s).map_err(|e| invalid(e.to_string()))
    }
}

/// Resolve `Settings` by merging CLI flags, the config file, and defaults.
///
/// `cli_config` names a config file explicitly; otherwise one is discovered
/// from `start`.
pub fn resolve_settings(
    start: &Path,
    cli_config: Option<&Path>,
    cli_command: Option<&str>,
    cli_virtualenv: Option<&str>,
) -> Result<Settings> {
    let cfg_path = match cli_config {
        Some(p) => Some(p.to_path_buf()),
        None => discover_config(start),
    };
    let cfg = match cfg_path.as_deref() {
        Some(p) => {
            debug!("using config {}", p.display());
            load_config(p)?
        }
        None => FileConfig::default(),
    };

    let command = cli_command
        .map(|s| s.to_string())
        .or(cfg.command)
        .unwrap_or_else(|| DEFAULT_COMMAND.to_string());
    let virtualenv = cli_virtualenv.map(|s| s.to_string()).or(cfg.virtualenv);
    let extra_args = cfg.args.unwrap_or_default();

    Ok(Settings {
        command,
        virtualenv,
        extra_args,
    })
}
