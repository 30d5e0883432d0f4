//! Result types handed to the surrounding pipeline.

use serde::{Deserialize, Serialize};

/// Paging information about a document.
///
/// Only the next page is reported; the previous page is available through
/// [`crate::find_previous`] for callers that walk backwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationInfo {
    /// Absolute URL of the next page, if one was found.
    pub next_page: Option<String>,
}

impl PaginationInfo {
    /// True if the document continues on another page.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }
}
