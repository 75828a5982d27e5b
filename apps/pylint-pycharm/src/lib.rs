//! pylint-pycharm core library.
//!
//! Runs Pylint and rewrites its parseable report into the
//! `absolute_path:line:0: message` lines PyCharm turns into links.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `mapper`: Linter-reported path -> absolute path map.
//! - `translator`: Line-by-line report rewriting.
//! - `runner`: Linter argument preparation, command line, execution.
//! - `convert`: One full run wiring the pieces together.
//! - `error`: Fatal error taxonomy.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod mapper;
pub mod runner;
pub mod translator;
pub mod utils;

pub use config::Settings;
pub use convert::convert;
pub use error::{ConvertError, Result};
pub use mapper::{build_map, key_for, map_directory, PathMap};
pub use translator::translate;
