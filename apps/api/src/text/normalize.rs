//! Whitespace and control-character normalization.
//!
//! Every component downstream of intake operates on "clean text": no control
//! characters, single-space word separation, no leading/trailing whitespace.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// CR, VT, FF, and NBSP become plain spaces before the collapse pass.
    static ref CONTROL_CHARS: Regex = Regex::new(r"[\r\x0B\x0C\u{00A0}]").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Collapses all whitespace (including newlines) to single spaces and trims.
/// Idempotent; empty input yields an empty string and never errors.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let replaced = CONTROL_CHARS.replace_all(text, " ");
    let collapsed = WHITESPACE_RUN.replace_all(&replaced, " ");
    collapsed.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_whitespace_only_yields_empty_output() {
        assert_eq!(normalize("  \n\t  "), "");
    }

    #[test]
    fn test_newline_runs_collapse_to_single_space() {
        assert_eq!(normalize("a\r\n\nb"), "a b");
    }

    #[test]
    fn test_control_characters_become_spaces() {
        assert_eq!(normalize("a\x0Cb\x0Bc\rd"), "a b c d");
    }

    #[test]
    fn test_non_breaking_space_becomes_space() {
        assert_eq!(normalize("a\u{00A0}b"), "a b");
    }

    #[test]
    fn test_interior_runs_collapse() {
        assert_eq!(normalize("Senior   Software \t Engineer"), "Senior Software Engineer");
    }

    #[test]
    fn test_leading_and_trailing_whitespace_trimmed() {
        assert_eq!(normalize("  hello world  "), "hello world");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "",
            "plain",
            "a\r\n\nb",
            "  mixed \u{00A0} whitespace \x0C here  ",
            "Job Title: Senior Engineer\nLocation: Remote",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }
}
