//! Rewrites Pylint's parseable report into PyCharm-clickable lines.
//!
//! Input lines of the form `path:line: description` become
//! `absolute_path:line:0: description`; everything else passes through.
//! Pylint's parseable format carries no column, PyCharm wants one, so the
//! column is always `0`.

use crate::error::{ConvertError, Result};
use crate::mapper::PathMap;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static MESSAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<filename>[^:]*):(?P<line_number>\d+): (?P<description>.*)")
        .expect("message pattern is valid")
});

/// A report line that names a file location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic<'a> {
    pub path: &'a str,
    pub line: &'a str,
    pub description: &'a str,
}

impl<'a> Diagnostic<'a> {
    /// Pair this diagnostic with the absolute path it resolves to.
    pub fn at<'p>(&self, full_path: &'p str) -> Rewritten<'a, 'p> {
        Rewritten {
            full_path,
            diagnostic: *self,
        }
    }
}

/// Display adapter producing the PyCharm line for a resolved diagnostic.
pub struct Rewritten<'a, 'p> {
    full_path: &'p str,
    diagnostic: Diagnostic<'a>,
}

impl fmt::Display for Rewritten<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:0: {}",
            self.full_path, self.diagnostic.line, self.diagnostic.description
        )
    }
}

/// Match one report line against the diagnostic pattern.
pub fn parse_line(line: &str) -> Option<Diagnostic<'_>> {
    let caps = MESSAGE_PATTERN.captures(line)?;
    Some(Diagnostic {
        path: caps.name("filename")?.as_str(),
        line: caps.name("line_number")?.as_str(),
        description: caps.name("description")?.as_str(),
    })
}

/// Translate the whole report.
///
/// Fails on the first diagnostic whose path is missing from `file_path_map`;
/// nothing is returned for the lines already processed.
pub fn translate(file_path_map: &PathMap, txt: &str) -> Result<String> {
    let mut result: Vec<String> = Vec::new();
    for line in txt.split('\n') {
        match parse_line(line) {
            Some(diag) => {
                let full_path = file_path_map.get(diag.path).ok_or_else(|| {
                    ConvertError::UnmappedPath {
                        path: diag.path.to_string(),
                    }
                })?;
                result.push(diag.at(full_path).to_string());
            }
            None => result.push(line.to_string()),
        }
    }
    Ok(result.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> PathMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_translate_rewrites_and_passes_through() {
        let m = map(&[("a", "/c/a"), ("/b", "/b")]);
        let out = translate(&m, "a:100: some text\nMore text\n/b:3: t").unwrap();
        assert_eq!(out, "/c/a:100:0: some text\nMore text\n/b:3:0: t");
    }

    #[test]
    fn test_translate_unmapped_path_is_fatal() {
        let err = translate(&PathMap::new(), "INVALID:100: some text").unwrap_err();
        match err {
            ConvertError::UnmappedPath { path } => assert_eq!(path, "INVALID"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_translate_stops_at_first_unmapped_line() {
        let m = map(&[("ok.py", "/abs/ok.py")]);
        let err = translate(&m, "ok.py:1: fine\nbad.py:2: nope\nmissing.py:3: x").unwrap_err();
        assert_eq!(err.to_string(), "No root path found for module bad.py");
    }

    #[test]
    fn test_empty_and_trailing_separator_preserved() {
        let m = PathMap::new();
        assert_eq!(translate(&m, "").unwrap(), "");

        let m = map(&[("a.py", "/x/a.py")]);
        let out = translate(&m, "a.py:7: C0114: Missing module docstring\n").unwrap();
        assert_eq!(out, "/x/a.py:7:0: C0114: Missing module docstring\n");
        assert_eq!(out.split('\n').count(), 2);
    }

    #[test]
    fn test_passthrough_lines_untouched() {
        let text = "************* Module pkg\n   \n\r\nYour code has been rated at 10.00/10\n---";
        assert_eq!(translate(&PathMap::new(), text).unwrap(), text);
    }

    #[test]
    fn test_parse_line_fields() {
        let d = parse_line("pkg/mod.py:12: [W0611(unused-import), ] Unused import os: x").unwrap();
        assert_eq!(d.path, "pkg/mod.py");
        assert_eq!(d.line, "12");
        assert_eq!(d.description, "[W0611(unused-import), ] Unused import os: x");

        assert!(parse_line("pkg/mod.py:12 no separator").is_none());
        assert!(parse_line("pkg/mod.py:x: not a number").is_none());
        assert!(parse_line("pkg/mod.py:12:missing space").is_none());
        assert!(parse_line(" leading:1: text").is_some());
    }

    #[test]
    fn test_rewritten_output_does_not_rematch() {
        let m = map(&[("a.py", "/x/a.py")]);
        let once = translate(&m, "a.py:3: E1101 bad\nsummary").unwrap();
        assert!(parse_line(once.lines().next().unwrap()).is_none());
        assert_eq!(translate(&m, &once).unwrap(), once);
    }

    #[test]
    fn test_line_count_preserved() {
        let m = map(&[("a.py", "/x/a.py"), ("b.py", "/x/b.py")]);
        let text = "\n\na.py:1: one\nnoise\nb.py:2: two\n\n";
        let out = translate(&m, text).unwrap();
        assert_eq!(out.split('\n').count(), text.split('\n').count());
    }

    use proptest::prelude::*;

    fn report_line() -> impl Strategy<Value = String> {
        prop_oneof![
            ("[a-z/._ ]{0,12}", 0u32..100_000, "[^\n]{0,20}")
                .prop_map(|(path, line, desc)| format!("{}:{}: {}", path, line, desc)),
            "[^\n]{0,30}",
        ]
    }

    /// Map every path the report mentions to a colon-free absolute path.
    fn covering_map(text: &str) -> PathMap {
        text.split('\n')
            .filter_map(parse_line)
            .map(|d| (d.path.to_string(), format!("/abs/{}", d.path)))
            .collect()
    }

    proptest! {
        #[test]
        fn test_translate_preserves_line_count(lines in prop::collection::vec(report_line(), 0..12)) {
            let text = lines.join("\n");
            let m = covering_map(&text);
            let out = translate(&m, &text).unwrap();
            prop_assert_eq!(out.split('\n').count(), text.split('\n').count());
        }

        #[test]
        fn test_translate_twice_changes_nothing(lines in prop::collection::vec(report_line(), 0..12)) {
            let text = lines.join("\n");
            let m = covering_map(&text);
            let once = translate(&m, &text).unwrap();
            let twice = translate(&m, &once).unwrap();
            prop_assert_eq!(twice, once);
        }
    }
}
