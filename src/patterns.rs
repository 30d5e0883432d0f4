//! Compiled regex patterns for paging-link detection.
//!
//! All patterns are compiled once at first use using `LazyLock` and are
//! case-insensitive. They are organized by what they look at: link
//! text/class/id, ancestor class/id, or the URL itself.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Direction Patterns (link text + class + id)
// =============================================================================

/// Matches next-page wording: next, continue, >, >>, ».
///
/// `>|` and `»|` are excluded because they usually mean "last".
pub static NEXT_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(next|weiter|continue|>([^\|]|$)|»([^\|]|$))").expect("NEXT_LINK regex")
});

/// Matches previous-page wording.
///
/// "new" is here on purpose: "newer posts" links go back in a blog's paging.
pub static PREV_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(prev|early|old|new|<|«)").expect("PREV_LINK regex")
});

/// Matches "first" or "last" page links.
pub static FIRST_LAST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(first|last)").expect("FIRST_LAST regex"));

// =============================================================================
// Context Patterns (class + id)
// =============================================================================

/// Matches class/id names of content containers.
pub static POSITIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)article|body|content|entry|hentry|main|page|pagination|post|text|blog|story")
        .expect("POSITIVE regex")
});

/// Matches class/id names of boilerplate regions.
pub static NEGATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)combx|comment|com-|contact|foot|footer|footnote|masthead|media|meta|outbrain|promo|related|shoutbox|sidebar|sponsor|shopping|tags|tool|widget",
    )
    .expect("NEGATIVE regex")
});

/// Matches link text or hrefs that lead somewhere other than the next page.
pub static EXTRANEOUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)print|archive|comment|discuss|e[\-]?mail|share|reply|all|login|sign|single|as one|article",
    )
    .expect("EXTRANEOUS regex")
});

/// Matches page, paging, paginate, pagination.
pub static PAGINATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)pag(e|ing|inat)").expect("PAGINATION regex"));

// =============================================================================
// URL Patterns
// =============================================================================

/// Matches paging info at the end of a URL: /page/2, /pagenum/2, ?p=3, ?page=11.
pub static LINK_PAGINATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)p(a|g|ag)?(e|ing|ination)?(=|/)[0-9]{1,2}$").expect("LINK_PAGINATION regex")
});

/// Matches a trailing page number on a path segment.
///
/// Matches: "_p3", "-pg3", "p3", "_1", the "-2" of "-12-2".
/// Does not match: "_p3 ", "p", "p123".
pub static PAGE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)((_|-)?p[a-z]*|(_|-))[0-9]{1,2}$").expect("PAGE_NUMBER regex")
});

/// Matches a fragment and the slash in front of it, or a bare trailing slash.
pub static HREF_CLEANER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/?(#.*)?$").expect("HREF_CLEANER regex"));

/// Matches a single ASCII digit.
pub static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").expect("DIGIT regex"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_link_excludes_last_markers() {
        assert!(NEXT_LINK.is_match("Next"));
        assert!(NEXT_LINK.is_match("Weiter"));
        assert!(NEXT_LINK.is_match(">"));
        assert!(NEXT_LINK.is_match("»"));
        assert!(NEXT_LINK.is_match("> "));
        assert!(!NEXT_LINK.is_match(">|"));
        assert!(!NEXT_LINK.is_match("»|"));
    }

    #[test]
    fn prev_link_matches_older_and_newer() {
        assert!(PREV_LINK.is_match("Previous"));
        assert!(PREV_LINK.is_match("Older posts"));
        assert!(PREV_LINK.is_match("Newer posts"));
        assert!(PREV_LINK.is_match("«"));
        assert!(!PREV_LINK.is_match("Next"));
    }

    #[test]
    fn page_number_matches_suffixes() {
        for s in ["page_p3", "page-pg3", "p3", "x_1", "-12-2"] {
            assert!(PAGE_NUMBER.is_match(s), "{s} should match");
        }
        for s in ["_p3 ", "p", "p123"] {
            assert!(!PAGE_NUMBER.is_match(s), "{s} should not match");
        }
        assert_eq!(PAGE_NUMBER.replace_all("page-2", ""), "page");
        assert_eq!(PAGE_NUMBER.replace_all("-12-2", ""), "-12");
    }

    #[test]
    fn link_pagination_matches_url_shapes() {
        assert!(LINK_PAGINATION.is_match("http://a.com/story/page/2"));
        assert!(LINK_PAGINATION.is_match("http://a.com/story?page=11"));
        assert!(LINK_PAGINATION.is_match("http://a.com/story?p=3"));
        assert!(LINK_PAGINATION.is_match("http://a.com/story?pg=3"));
        assert!(!LINK_PAGINATION.is_match("http://a.com/story?page=123"));
    }

    #[test]
    fn href_cleaner_strips_fragment_and_slash() {
        assert_eq!(HREF_CLEANER.replace("http://a.com/x/#top", ""), "http://a.com/x");
        assert_eq!(HREF_CLEANER.replace("http://a.com/x/", ""), "http://a.com/x");
        assert_eq!(HREF_CLEANER.replace("http://a.com/x#a/b", ""), "http://a.com/x");
        assert_eq!(HREF_CLEANER.replace("http://a.com/x", ""), "http://a.com/x");
    }

    #[test]
    fn negative_and_positive_overlap() {
        assert!(NEGATIVE.is_match("body-and-footer"));
        assert!(POSITIVE.is_match("body-and-footer"));
        assert!(NEGATIVE.is_match("sidebar"));
        assert!(!POSITIVE.is_match("sidebar"));
    }
}
