//! # rs-paging-links
//!
//! Finds the "next page" and "previous page" links of paginated articles.
//!
//! Articles split over several pages rarely mark their paging links in a
//! machine-readable way. This library scores every anchor of a page on its
//! text, class, id, surrounding containers and URL shape, and picks the most
//! convincing one per direction, or none when nothing is convincing enough.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_paging_links::{find_next, find_previous};
//! use rs_paging_links::dom::Document;
//!
//! let doc = Document::from(r#"<html><body>
//!     <article><p>Page two of the story.</p></article>
//!     <div class="pagination">
//!         <a href="/story/1">« Prev</a>
//!         <a href="/story/3">Next »</a>
//!     </div>
//! </body></html>"#);
//! let root = doc.select("html");
//!
//! let next = find_next(&root, "http://example.com/story/2")?;
//! assert_eq!(next.as_deref(), Some("http://example.com/story/3"));
//!
//! let previous = find_previous(&root, "http://example.com/story/2")?;
//! assert_eq!(previous.as_deref(), Some("http://example.com/story/1"));
//! # Ok::<(), rs_paging_links::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Base URL guessing**: strips page numbers from the deepest path segments
//! - **Heuristic scoring**: wording, pagination containers, URL shape, page numbers
//! - **Pluggable DOM**: the scorer runs over any [`document::PagingElement`]
//!   and [`document::Layout`] implementation; [`dom`] provides one for `dom_query`
//! - **Diagnostics**: an optional per-link trace explains every decision

mod error;
mod options;
mod result;

/// Base URL derivation.
pub mod base_url;

/// Document access traits used by the scorer.
pub mod document;

/// `dom_query` adapter and layout estimate for parsed documents.
pub mod dom;

/// Paging-link scoring.
pub mod paging;

/// Compiled heuristic patterns.
pub mod patterns;

/// Case-insensitive regex helpers and whitespace classification.
pub mod regex_util;

/// URL utilities for splitting, resolution, and cleaning.
pub mod url_utils;

// Public API - re-exports
pub use base_url::find_base_url;
pub use error::{Error, Result};
pub use options::Options;
pub use paging::{Direction, PagingLinkResult, PagingTrace};
pub use result::PaginationInfo;

use dom::{Document, Selection, StaticLayout};

/// Finds the link to the next page.
///
/// # Arguments
///
/// * `root` - The document, or the part of it to search
/// * `url` - Absolute URL of the page
///
/// # Returns
///
/// Returns `Ok(None)` when no link is convincing enough. Returns an `Error`
/// only if `url` has no `scheme://host` shape.
///
/// # Example
///
/// ```rust
/// use rs_paging_links::find_next;
/// use rs_paging_links::dom::Document;
///
/// let doc = Document::from(r#"<a href="/news/story?page=3">3</a><a href="/news/story?page=3">next</a>"#);
/// let next = find_next(&doc.select("html"), "http://example.com/news/story?page=2")?;
/// assert_eq!(next.as_deref(), Some("http://example.com/news/story?page=3"));
/// # Ok::<(), rs_paging_links::Error>(())
/// ```
pub fn find_next(root: &Selection, url: &str) -> Result<Option<String>> {
    find_paging_link(root, url, Direction::Next, &Options::default()).map(|r| r.href)
}

/// Finds the link to the previous page.
///
/// Unlike [`find_next`], the previous page may be the bare article URL
/// without any page number.
pub fn find_previous(root: &Selection, url: &str) -> Result<Option<String>> {
    find_paging_link(root, url, Direction::Prev, &Options::default()).map(|r| r.href)
}

/// Finds the paging link in `direction` with custom options.
///
/// The returned [`PagingLinkResult`] carries the chosen href along with
/// counts and, when [`Options::collect_trace`] is set, the per-link trace.
///
/// # Example
///
/// ```rust
/// use rs_paging_links::{find_paging_link, Direction, Options};
/// use rs_paging_links::dom::Document;
///
/// let doc = Document::from(r#"<a href="/story/3">Next</a><a href="https://other.org/3">next</a>"#);
/// let options = Options {
///     collect_trace: true,
///     ..Options::default()
/// };
/// let result = find_paging_link(&doc.select("html"), "http://example.com/story/2", Direction::Next, &options)?;
///
/// assert_eq!(result.links_examined, 2);
/// let trace = result.trace.expect("trace was requested");
/// assert_eq!(trace.summary(), "numLinks=2, found next: http://example.com/story/3");
/// # Ok::<(), rs_paging_links::Error>(())
/// ```
pub fn find_paging_link(
    root: &Selection,
    url: &str,
    direction: Direction,
    options: &Options,
) -> Result<PagingLinkResult> {
    paging::find_paging_link_in(dom::links(root), &StaticLayout, url, direction, options)
}

/// Builds the paging information for a document.
pub fn pagination_info(root: &Selection, url: &str) -> Result<PaginationInfo> {
    Ok(PaginationInfo {
        next_page: find_next(root, url)?,
    })
}

/// Parses `html` and builds its paging information.
///
/// # Example
///
/// ```rust
/// use rs_paging_links::pagination_info_from_html;
///
/// let info = pagination_info_from_html("<p>Single-page article.</p>", "http://example.com/a")?;
/// assert!(info.next_page.is_none());
/// # Ok::<(), rs_paging_links::Error>(())
/// ```
pub fn pagination_info_from_html(html: &str, url: &str) -> Result<PaginationInfo> {
    let doc = Document::from(html);
    pagination_info(&doc.select("html"), url)
}
