//! Parameter placeholder extraction.
//!
//! Localized values may embed Dart interpolation placeholders (`$name` or
//! `${name}`). A `$` preceded by a single backslash is escaped and is not a
//! parameter. Multi-backslash sequences are not given any special meaning.

use std::sync::LazyLock;

use regex::Regex;

// The `regex` crate has no look-behind, so the escaping backslash is captured
// as an optional group and checked per match.
static PARAMETER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\\?)\$\{?([A-Za-z_][A-Za-z0-9_]*)\}?").unwrap()
});

/// Extract placeholder names from a value, in first-occurrence order.
///
/// Duplicate names are collapsed; escaped occurrences are skipped. The
/// returned names are stripped of `$`, `{` and `}`.
pub fn extract_parameters(value: &str) -> Vec<String> {
    let mut names = Vec::new();
    for captures in PARAMETER_REGEX.captures_iter(value) {
        if !captures[1].is_empty() {
            continue;
        }
        let name = &captures[2];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Whether a value contains at least one unescaped placeholder.
pub fn has_parameters(value: &str) -> bool {
    !extract_parameters(value).is_empty()
}
