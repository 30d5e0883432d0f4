//! Case-insensitive regex helpers and whitespace classification.
//!
//! Every helper compiles its pattern case-insensitively and returns new
//! strings. A malformed pattern is a bug in the caller and panics.

use regex::{Regex, RegexBuilder};

/// Compile `pattern` case-insensitively.
///
/// # Panics
///
/// Panics if `pattern` is not a valid regular expression.
#[must_use]
#[allow(clippy::expect_used)]
pub fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("regex_util: malformed pattern")
}

/// Whether `pattern` matches anywhere in `input`.
///
/// # Example
///
/// ```rust
/// use rs_paging_links::regex_util::is_match;
///
/// assert!(is_match("Page-2", "[a-z]"));
/// assert!(!is_match("12", "[a-z]"));
/// ```
#[must_use]
pub fn is_match(input: &str, pattern: &str) -> bool {
    compile(pattern).is_match(input)
}

/// Replace every match of `pattern` in `input` with `replacement`.
#[must_use]
pub fn find_and_replace(input: &str, pattern: &str, replacement: &str) -> String {
    compile(pattern).replace_all(input, replacement).into_owned()
}

/// Split `input` around matches of `pattern`.
///
/// Trailing empty pieces are dropped, so `"a/b/"` split on `/` gives
/// `["a", "b"]`. An input made only of separators gives an empty vector.
#[must_use]
pub fn split(input: &str, pattern: &str) -> Vec<String> {
    let mut pieces: Vec<String> = compile(pattern).split(input).map(str::to_string).collect();
    while pieces.last().is_some_and(String::is_empty) {
        pieces.pop();
    }
    pieces
}

/// Whitespace as the distillation pipeline understands it.
///
/// This is narrower than `char::is_whitespace`: U+0085 and U+00A0 are not
/// whitespace, U+180E and U+001C..U+001F are.
#[must_use]
pub fn is_whitespace(c: char) -> bool {
    matches!(
        u32::from(c),
        0x0009..=0x000d
            | 0x001c..=0x0020
            | 0x1680
            | 0x180e
            | 0x2000..=0x2006
            | 0x2028..=0x2029
            | 0x205f
            | 0x3000
    )
}

/// Whether every character of `s` is whitespace. True for the empty string.
#[must_use]
pub fn is_all_whitespace(s: &str) -> bool {
    s.chars().all(is_whitespace)
}

/// Trim leading and trailing whitespace per [`is_whitespace`].
#[must_use]
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_whitespace)
}

/// Collapse whitespace runs into a single space and trim the ends.
#[must_use]
pub fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split(is_whitespace).filter(|w| !w.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}
