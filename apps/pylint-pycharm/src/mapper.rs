//! Path map construction.
//!
//! Pylint reports a file either by the path it was given or, for files under
//! the working directory, by a path relative to it. The map built here keys
//! every file under the inputs by the string Pylint will print and maps it to
//! the absolute path PyCharm needs to open the file.

use crate::error::Result;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};
use tracing::debug;
use walkdir::WalkDir;

/// Linter key -> absolute path.
pub type PathMap = HashMap<String, String>;

/// Key under which the linter reports `path` when run from `cwd`.
///
/// Absolute paths that start with `cwd` lose that prefix and any leading
/// separators; everything else is returned unchanged.
///
/// All leading separators go, not just one: `/a//b` under `/a` is keyed `b`,
/// the same way Pylint normalizes it.
pub fn key_for(cwd: &str, path: &str) -> String {
    if Path::new(path).is_absolute() {
        if let Some(rest) = path.strip_prefix(cwd) {
            return rest.trim_start_matches(is_separator).to_string();
        }
    }
    path.to_string()
}

/// Map every file below `dir_path` (recursively, `dir_path` included).
///
/// Relative `dir_path`s are resolved against `cwd`; keys keep the spelling the
/// caller used for the walk root. A missing or unreadable directory
/// contributes nothing.
pub fn map_directory(cwd: &str, dir_path: &str) -> PathMap {
    let mut map = PathMap::new();
    let walk_root = Path::new(cwd).join(dir_path);
    let walker = WalkDir::new(&walk_root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                debug!("skipping unreadable entry under {}: {}", dir_path, err);
                continue;
            }
        };
        // Symlinked directories are listed but not descended into.
        if entry.depth() == 0 || entry.path().is_dir() {
            continue;
        }
        let Some(parent) = entry.path().parent() else {
            continue;
        };
        let sub = parent.strip_prefix(&walk_root).unwrap_or(Path::new(""));
        let root = if sub.as_os_str().is_empty() {
            dir_path.to_string()
        } else {
            Path::new(dir_path).join(sub).to_string_lossy().into_owned()
        };
        let name = entry.file_name();
        let key = Path::new(&key_for(cwd, &root)).join(name);
        map.insert(
            key.to_string_lossy().into_owned(),
            absolute(cwd, &root).join(name).to_string_lossy().into_owned(),
        );
    }
    map
}

/// Build the path map for `inputs` relative to an explicit `cwd`.
///
/// Files add a single entry, anything else is walked as a directory. When two
/// inputs produce the same key the later one wins.
pub fn build_map_in(cwd: &str, inputs: &[String]) -> PathMap {
    let mut map = PathMap::new();
    for path in inputs {
        let resolved = Path::new(cwd).join(path);
        let entries = if resolved.is_file() {
            let mut single = PathMap::new();
            single.insert(
                key_for(cwd, path),
                absolute(cwd, path).to_string_lossy().into_owned(),
            );
            single
        } else {
            map_directory(cwd, path)
        };
        for (key, abs) in entries {
            if let Some(prev) = map.insert(key.clone(), abs.clone()) {
                if prev != abs {
                    debug!("key {} remapped from {} to {}", key, prev, abs);
                }
            }
        }
    }
    debug!("path map holds {} entries", map.len());
    map
}

/// Build the path map for `inputs` relative to the process working directory.
pub fn build_map(inputs: &[String]) -> Result<PathMap> {
    let cwd = std::env::current_dir()?;
    Ok(build_map_in(&cwd.to_string_lossy(), inputs))
}

/// Lexical absolute form of `path`: joined onto `cwd`, `.` dropped, `..`
/// popped. Symlinks are not resolved.
pub fn absolute(cwd: &str, path: &str) -> PathBuf {
    let joined = Path::new(cwd).join(path);
    let mut out = PathBuf::new();
    for comp in joined.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn is_separator(c: char) -> bool {
    c == MAIN_SEPARATOR || c == '/'
}
