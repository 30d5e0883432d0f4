//! URL Utility Functions
//!
//! String-level helpers for the page URL and for link hrefs. The paging
//! heuristics compare URLs as strings (prefixes, substrings, case-insensitive
//! equality), so most helpers work on `&str` rather than parsed `Url`s. Only
//! href resolution goes through the `url` crate.

use url::Url;

use crate::patterns::HREF_CLEANER;
use crate::regex_util;
use crate::{Error, Result};

/// Split a URL into its scheme and everything after `://`.
///
/// The remainder stops at a second `://` if the URL has one.
///
/// # Errors
///
/// Returns `Error::MalformedUrl` when there is no `scheme://` with a
/// non-empty scheme and a non-empty remainder.
pub fn split_scheme(url: &str) -> Result<(String, String)> {
    let mut parts = regex_util::split(url, "://").into_iter();
    match (parts.next(), parts.next()) {
        (Some(scheme), Some(rest)) if !scheme.is_empty() && !rest.is_empty() => Ok((scheme, rest)),
        _ => Err(Error::MalformedUrl(url.to_string())),
    }
}

/// Get the scheme of a URL (`http`, `https`, ...).
///
/// # Errors
///
/// Returns `Error::MalformedUrl` if the URL has no `scheme://` part.
pub fn scheme(url: &str) -> Result<String> {
    split_scheme(url).map(|(scheme, _)| scheme)
}

/// Get the hostname of a URL. The port is kept if present.
///
/// # Errors
///
/// Returns `Error::MalformedUrl` if the URL has no `scheme://host` part.
///
/// # Example
///
/// ```rust
/// use rs_paging_links::url_utils::hostname;
///
/// assert_eq!(hostname("http://example.com:8080/a/b").unwrap(), "example.com:8080");
/// ```
pub fn hostname(url: &str) -> Result<String> {
    let (_, rest) = split_scheme(url)?;
    let host = if rest.contains('/') {
        regex_util::split(&rest, "/").into_iter().next().unwrap_or_default()
    } else {
        rest
    };

    if host.is_empty() {
        return Err(Error::MalformedUrl(url.to_string()));
    }
    Ok(host)
}

/// The `scheme://hostname/` prefix every same-site link must start with.
///
/// The trailing slash makes sure the whole hostname is matched and not just
/// a prefix of it.
///
/// # Errors
///
/// Returns `Error::MalformedUrl` if the URL has no `scheme://host` part.
pub fn allowed_prefix(url: &str) -> Result<String> {
    Ok(format!("{}://{}/", scheme(url)?, hostname(url)?))
}

/// Parse the page URL for use as a resolution base.
///
/// # Errors
///
/// Returns `Error::MalformedUrl` for input without `scheme://host`, and
/// `Error::InvalidUrl` if the `url` crate rejects it.
pub fn parse_base(url: &str) -> Result<Url> {
    hostname(url)?;
    Url::parse(url).map_err(|source| Error::InvalidUrl {
        url: url.to_string(),
        source,
    })
}

/// Resolve a raw `href` attribute against the page URL.
///
/// A missing attribute resolves like an empty one, to the page itself
/// (without its fragment). Returns `None` when the href cannot be resolved.
#[must_use]
pub fn resolve_href(raw: Option<&str>, base: &Url) -> Option<String> {
    base.join(raw.unwrap_or_default()).ok().map(String::from)
}

/// Remove the fragment and then a trailing slash from an href.
///
/// # Example
///
/// ```rust
/// use rs_paging_links::url_utils::clean_href;
///
/// assert_eq!(clean_href("http://a.com/story/2/#comments"), "http://a.com/story/2");
/// ```
#[must_use]
pub fn clean_href(href: &str) -> String {
    HREF_CLEANER.replace(href, "").into_owned()
}

/// Remove one trailing slash.
#[must_use]
pub fn strip_trailing_slash(s: &str) -> String {
    regex_util::find_and_replace(s, "/$", "")
}

/// Prepend `http://` to input that has no scheme.
///
/// Empty input stays empty.
#[must_use]
pub fn fix_missing_scheme(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    if !url.contains("://") {
        return format!("http://{url}");
    }
    url.to_string()
}

/// ASCII case-insensitive `starts_with`.
#[must_use]
pub fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Remove every ASCII case-insensitive occurrence of `needle` from `s`.
///
/// # Example
///
/// ```rust
/// use rs_paging_links::url_utils::remove_ignore_ascii_case;
///
/// assert_eq!(remove_ignore_ascii_case("HTTP://A.com/x/3", "http://a.com/x"), "/3");
/// ```
#[must_use]
pub fn remove_ignore_ascii_case(s: &str, needle: &str) -> String {
    if needle.is_empty() {
        return s.to_string();
    }
    // ASCII lowercasing keeps byte offsets, so matches index into `s` too.
    let lower = s.to_ascii_lowercase();
    let needle = needle.to_ascii_lowercase();
    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    for (start, _) in lower.match_indices(&needle) {
        out.push_str(&s[last..start]);
        last = start + needle.len();
    }
    out.push_str(&s[last..]);
    out
}
