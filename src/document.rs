//! Document access seams.
//!
//! The scorer never touches a DOM directly. It reads links through
//! [`PagingElement`] and asks a [`Layout`] about rendering, so the same
//! algorithm runs over a `dom_query` tree (see [`crate::dom`]) or over a live
//! browser DOM supplied by the embedding pipeline.

/// Rendered size of an element's box, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoxSize {
    /// Box width.
    pub width: u32,
    /// Box height.
    pub height: u32,
}

impl BoxSize {
    /// A box that takes no space.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Create a box size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Read access to an element of the document.
///
/// Missing attributes read as empty strings; implementations should never
/// fail on a stale or partially-built element.
pub trait PagingElement: Sized {
    /// Raw attribute value, `None` if the attribute is absent.
    fn attribute(&self, name: &str) -> Option<String>;

    /// The `class` attribute, or `""`.
    fn class_name(&self) -> String {
        self.attribute("class").unwrap_or_default()
    }

    /// The `id` attribute, or `""`.
    fn id(&self) -> String {
        self.attribute("id").unwrap_or_default()
    }

    /// Text of the visible descendants only.
    fn inner_text(&self) -> String;

    /// The parent element, `None` at the root.
    fn parent_element(&self) -> Option<Self>;

    /// Walk the ancestors of this element, nearest first, at most `max_depth` of them.
    fn ancestors(&self, max_depth: usize) -> Ancestors<Self> {
        Ancestors {
            next: self.parent_element(),
            remaining: max_depth,
        }
    }
}

/// Rendering information for elements of type `E`.
pub trait Layout<E> {
    /// Size of the element's box.
    fn box_size(&self, element: &E) -> BoxSize;

    /// Whether the element itself is rendered visibly.
    fn is_visible(&self, element: &E) -> bool;
}

/// Bounded iterator over an element's ancestors.
///
/// Created by [`PagingElement::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<E> {
    next: Option<E>,
    remaining: usize,
}

impl<E: PagingElement> Iterator for Ancestors<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next.take()?;
        self.next = current.parent_element();
        self.remaining -= 1;
        Some(current)
    }
}
