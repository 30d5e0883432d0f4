//! DOM Adapter
//!
//! Implements the [`PagingElement`] and [`Layout`] seams on top of the
//! `dom_query` crate. A `dom_query` tree is never rendered, so
//! [`StaticLayout`] estimates visibility and box size from markup alone:
//! inline styles, the `hidden` attribute, non-rendered tags, and whether the
//! element has anything to draw.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

use crate::document::{BoxSize, Layout, PagingElement};
use crate::regex_util;

/// Tags whose content is never rendered.
const NON_RENDERED_TAGS: &[&str] = &["script", "style", "noscript", "template", "head", "title"];

/// Tags that draw something even without text.
const REPLACED_TAGS: &[&str] = &[
    "img", "svg", "picture", "video", "canvas", "input", "button", "object", "embed", "iframe",
    "image",
];

/// Estimated width of one character of link text, in pixels.
const CHAR_WIDTH: u32 = 8;

/// Estimated line height, in pixels.
const LINE_HEIGHT: u32 = 16;

/// Estimated size of an image-only link, in pixels.
const REPLACED_SIZE: u32 = 16;

// === Element Access ===

impl PagingElement for NodeRef<'_> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attr(name).map(|v| v.to_string())
    }

    fn inner_text(&self) -> String {
        inner_text(self)
    }

    fn parent_element(&self) -> Option<Self> {
        self.parent().filter(NodeRef::is_element)
    }
}

/// All `<a>` elements below `root`, in document order.
///
/// Anchors without an `href` are included; they resolve to the page itself.
#[must_use]
pub fn links<'a>(root: &Selection<'a>) -> Vec<NodeRef<'a>> {
    root.select("a").nodes().to_vec()
}

/// Lowercase tag name of an element, `None` for non-element nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

fn has_tag(node: &NodeRef, tags: &[&str]) -> bool {
    tag_name(node).is_some_and(|t| tags.contains(&t.as_str()))
}

// === Text ===

/// Visible text of an element, whitespace collapsed.
///
/// Text inside non-rendered tags and hidden elements is skipped, and `<br>`
/// counts as a line break.
///
/// # Example
///
/// ```rust
/// use rs_paging_links::dom::{inner_text, Document};
///
/// let doc = Document::from(r#"<a href="/2">Next <span style="display:none">page</span> &raquo;</a>"#);
/// let link = doc.select("a");
/// let node = link.nodes()[0];
/// assert_eq!(inner_text(&node), "Next »");
/// ```
#[must_use]
pub fn inner_text(node: &NodeRef) -> String {
    let mut raw = String::new();
    let mut stack: Vec<NodeRef> = node.children().into_iter().rev().collect();

    while let Some(current) = stack.pop() {
        if current.is_text() {
            raw.push_str(&current.text());
            continue;
        }
        if !current.is_element() || is_hidden(&current) {
            continue;
        }
        if has_tag(&current, &["br"]) {
            raw.push('\n');
            continue;
        }
        stack.extend(current.children().into_iter().rev());
    }

    regex_util::collapse_whitespace(&raw)
}

// === Styles ===

/// Inline style declarations as lowercase `(property, value)` pairs.
#[must_use]
pub fn inline_style(node: &NodeRef) -> Vec<(String, String)> {
    let Some(style) = node.attr("style") else {
        return Vec::new();
    };
    style
        .split(';')
        .filter_map(|decl| decl.split_once(':'))
        .map(|(prop, value)| {
            let value = regex_util::trim(value).to_ascii_lowercase();
            (
                regex_util::trim(prop).to_ascii_lowercase(),
                regex_util::trim(value.trim_end_matches("!important")).to_string(),
            )
        })
        .collect()
}

fn style_value(node: &NodeRef, property: &str) -> Option<String> {
    // Later declarations win.
    inline_style(node)
        .into_iter()
        .rev()
        .find(|(prop, _)| prop == property)
        .map(|(_, value)| value)
}

/// Leading number of a CSS length such as `0`, `0px`, `12.5em`.
fn css_number(value: &str) -> Option<f64> {
    let end = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
        .unwrap_or(value.len());
    value[..end].parse().ok()
}

/// Whether the element takes no part in rendering, taking its subtree with it.
///
/// True for non-rendered tags, the `hidden` attribute and `display: none`.
#[must_use]
pub fn is_hidden(node: &NodeRef) -> bool {
    has_tag(node, NON_RENDERED_TAGS)
        || node.attr("hidden").is_some()
        || style_value(node, "display").is_some_and(|v| v == "none")
}

/// Whether the element itself is drawn visibly.
///
/// Checks `display`, `visibility` and `opacity` on the element only.
/// A hidden ancestor shows up as an empty box instead.
#[must_use]
pub fn is_visible(node: &NodeRef) -> bool {
    !is_hidden(node)
        && !style_value(node, "visibility").is_some_and(|v| v == "hidden" || v == "collapse")
        && !style_value(node, "opacity")
            .and_then(|v| css_number(&v))
            .is_some_and(|o| o <= 0.0)
}

fn has_replaced_content(node: &NodeRef) -> bool {
    if has_tag(node, REPLACED_TAGS) {
        return true;
    }
    let mut stack: Vec<NodeRef> = node.children();
    while let Some(current) = stack.pop() {
        if !current.is_element() || is_hidden(&current) {
            continue;
        }
        if has_tag(&current, REPLACED_TAGS) {
            return true;
        }
        stack.extend(current.children());
    }
    false
}

// === Layout ===

/// Layout estimate for documents that were parsed but never rendered.
///
/// Only the zero/non-zero distinction of [`BoxSize`] is meaningful: an
/// element is empty when it or an ancestor is hidden, when its inline style
/// sets a zero `width` or `height`, or when it has neither visible text nor
/// replaced content like an `<img>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLayout;

impl Layout<NodeRef<'_>> for StaticLayout {
    fn box_size(&self, element: &NodeRef<'_>) -> BoxSize {
        let mut current = Some(*element);
        while let Some(node) = current {
            if node.is_element() && is_hidden(&node) {
                return BoxSize::ZERO;
            }
            current = node.parent();
        }

        let text_len = u32::try_from(inner_text(element).chars().count()).unwrap_or(u32::MAX);
        let replaced = has_replaced_content(element);
        if text_len == 0 && !replaced {
            return BoxSize::ZERO;
        }

        let mut width = text_len.saturating_mul(CHAR_WIDTH).max(if replaced { REPLACED_SIZE } else { 0 });
        let mut height = if replaced { REPLACED_SIZE.max(LINE_HEIGHT) } else { LINE_HEIGHT };

        if let Some(w) = style_value(element, "width").and_then(|v| css_number(&v)) {
            width = css_pixels(w);
        }
        if let Some(h) = style_value(element, "height").and_then(|v| css_number(&v)) {
            height = css_pixels(h);
        }

        BoxSize::new(width, height)
    }

    fn is_visible(&self, element: &NodeRef<'_>) -> bool {
        is_visible(element)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn css_pixels(value: f64) -> u32 {
    if value <= 0.0 {
        0
    } else {
        // Sub-pixel boxes still render.
        value.ceil().min(f64::from(u32::MAX)) as u32
    }
}
