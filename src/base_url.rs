//! Base URL derivation.
//!
//! Guesses the URL of an article independent of the page currently shown, by
//! dropping page-number-looking parts from the deepest path segments. The
//! result is a fuzzy reference: it is not guaranteed to be a prefix of the
//! page URL, and the scorer only uses it for substring and equality checks.

use crate::patterns::PAGE_NUMBER;
use crate::regex_util;
use crate::url_utils;
use crate::Result;

/// Derive the base URL of the article shown at `url`.
///
/// The query string is dropped. Path segments are examined deepest first;
/// only the two deepest get page-number stripping, and only the deepest may
/// be dropped as `index`.
///
/// # Errors
///
/// Returns `Error::MalformedUrl` if `url` has no `scheme://host` part.
///
/// # Example
///
/// ```rust
/// use rs_paging_links::find_base_url;
///
/// let base = find_base_url("http://example.com/article/page-2.html")?;
/// assert_eq!(base, "http://example.com/article/page");
/// # Ok::<(), rs_paging_links::Error>(())
/// ```
pub fn find_base_url(url: &str) -> Result<String> {
    let url = regex_util::find_and_replace(url, r"\?.*$", "");
    let (scheme, rest) = url_utils::split_scheme(&url)?;

    // Deepest segment first; the host ends up last.
    let mut segments = regex_util::split(&rest, "/");
    segments.reverse();

    let Some((host, path_segments)) = segments.split_last() else {
        return Err(crate::Error::MalformedUrl(url));
    };
    let deepest_has_letter = path_segments
        .first()
        .is_some_and(|deepest| regex_util::is_match(deepest, "[a-z]"));

    let mut cleaned: Vec<String> = Vec::with_capacity(path_segments.len());
    for (i, original) in path_segments.iter().enumerate() {
        if let Some(segment) = clean_segment(original, i, deepest_has_letter) {
            cleaned.push(segment);
        }
    }
    cleaned.reverse();

    Ok(format!("{scheme}://{host}/{}", cleaned.join("/")))
}

/// Clean one path segment; `depth` is 0 for the deepest segment.
///
/// Returns `None` when the segment should be dropped.
fn clean_segment(original: &str, depth: usize, deepest_has_letter: bool) -> Option<String> {
    let near_end = depth < 2;
    let mut segment = original.to_string();

    // Split off anything that looks like a file extension.
    if let Some((stem, extension)) = segment.rsplit_once('.') {
        if !regex_util::is_match(extension, "[^a-z]") {
            segment = stem.to_string();
        }
    }

    // EW-CMS style ids: /ew/article/0,,20313460_20369436,00.html
    segment = regex_util::find_and_replace(&segment, ",00", "");

    if near_end {
        segment = PAGE_NUMBER.replace_all(&segment, "").into_owned();
    }

    if segment.is_empty() {
        return None;
    }

    // A bare number this deep is almost always a page number.
    if near_end && regex_util::is_match(&segment, "^[0-9]{1,2}$") {
        return None;
    }

    if depth == 0 && segment.eq_ignore_ascii_case("index") {
        return None;
    }

    if near_end && segment.chars().count() < 3 && !deepest_has_letter {
        return None;
    }

    Some(segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(url: &str) -> String {
        find_base_url(url).unwrap_or_else(|e| panic!("{url}: {e}"))
    }

    #[test]
    fn test_strips_extension_and_page_suffix() {
        assert_eq!(base("http://example.com/article/page-2.html"), "http://example.com/article/page");
        assert_eq!(base("http://example.com/article/story_p3.htm"), "http://example.com/article/story");
    }

    #[test]
    fn test_drops_bare_page_number() {
        assert_eq!(base("http://example.com/news/story/2"), "http://example.com/news/story");
        assert_eq!(base("http://example.com/news/story/2/"), "http://example.com/news/story");
        assert_eq!(base("http://example.com/news/12/story"), "http://example.com/news/story");
    }

    #[test]
    fn test_page_number_only_stripped_from_two_deepest() {
        assert_eq!(base("http://example.com/part-3/a/b"), "http://example.com/part-3/a/b");
        assert_eq!(base("http://example.com/a/part-3/b"), "http://example.com/a/part/b");
    }

    #[test]
    fn test_drops_index_only_when_deepest() {
        assert_eq!(base("http://example.com/news/index.html"), "http://example.com/news");
        assert_eq!(base("http://example.com/index/story"), "http://example.com/index/story");
    }

    #[test]
    fn test_query_is_dropped() {
        assert_eq!(base("http://example.com/story.php?id=7&page=2"), "http://example.com/story");
    }

    #[test]
    fn test_non_alpha_extension_kept() {
        assert_eq!(base("http://example.com/docs/1.2"), "http://example.com/docs/1.2");
        assert_eq!(base("http://example.com/v/release.v2"), "http://example.com/v/release.v2");
    }

    #[test]
    fn test_ew_cms_artifact() {
        assert_eq!(
            base("http://www.ew.com/ew/article/0,,20313460_20369436,00.html"),
            "http://www.ew.com/ew/article/0,,20313460_20369436"
        );
    }

    #[test]
    fn test_short_segments_dropped_when_deepest_has_no_letters() {
        // Deepest segment "2015" has no letters, so the short "ab" one above it goes.
        assert_eq!(base("http://example.com/news/ab/2015"), "http://example.com/news/2015");
        // With a lettered deepest segment short segments survive.
        assert_eq!(base("http://example.com/news/ab/story"), "http://example.com/news/ab/story");
    }

    #[test]
    fn test_host_only() {
        assert_eq!(base("http://example.com"), "http://example.com/");
        assert_eq!(base("http://example.com/"), "http://example.com/");
        assert_eq!(base("http://example.com:8080/a"), "http://example.com:8080/a");
    }

    #[test]
    fn test_malformed() {
        assert!(find_base_url("example.com/a").is_err());
    }
}
