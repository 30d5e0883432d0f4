//! Per-link diagnostic trace of a paging pass.
//!
//! The trace is a value returned with the result. When it is collected it is
//! also emitted through `tracing` at debug level, one line per link plus a
//! summary, under the `rs_paging_links::paging` target.

use serde::Serialize;

use super::candidate::Candidate;
use super::direction::Direction;

/// What the scorer saw and decided for one anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkTrace {
    /// Position of the anchor in document order.
    pub index: usize,
    /// Resolved href, or the raw attribute if it could not be resolved.
    pub href: String,
    /// Visible text of the anchor.
    pub text: String,
    /// Filter and score notes, in the order they happened.
    pub messages: Vec<String>,
}

/// Diagnostic record of one paging pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagingTrace {
    /// Direction that was searched.
    pub direction: Direction,
    /// Number of anchors examined.
    pub num_links: usize,
    /// The returned href, if any.
    pub found: Option<String>,
    /// One entry per anchor, in document order.
    pub links: Vec<LinkTrace>,
    /// Final candidate scores, in first-seen order.
    pub candidates: Vec<Candidate>,
}

impl PagingTrace {
    /// One-line summary: `numLinks=N, found next: <href|null>`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "numLinks={}, found {}: {}",
            self.num_links,
            self.direction,
            self.found.as_deref().unwrap_or("null")
        )
    }

    /// Emit the trace through `tracing` at debug level.
    pub fn emit(&self) {
        tracing::debug!(target: "rs_paging_links::paging", "{}", self.summary());
        for link in &self.links {
            tracing::debug!(
                target: "rs_paging_links::paging",
                "{}) {}, txt=[{}], dbg=[{}]",
                link.index,
                link.href,
                link.text,
                link.messages.join("; ")
            );
        }
    }
}

/// Collects link traces while a pass runs; does nothing when disabled.
#[derive(Debug)]
pub(crate) struct TraceRecorder {
    links: Option<Vec<LinkTrace>>,
}

impl TraceRecorder {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            links: enabled.then(Vec::new),
        }
    }

    /// Start the entry for the anchor at `index`.
    ///
    /// `text` is only evaluated when tracing.
    pub(crate) fn begin(&mut self, index: usize, href: &str, text: impl FnOnce() -> String) {
        if let Some(links) = &mut self.links {
            links.push(LinkTrace {
                index,
                href: href.to_string(),
                text: text(),
                messages: Vec::new(),
            });
        }
    }

    /// Add a note to the entry for `index`.
    pub(crate) fn note(&mut self, index: usize, message: impl FnOnce() -> String) {
        let Some(links) = &mut self.links else {
            return;
        };
        // Entries are pushed in index order; the wanted one is usually last.
        if let Some(entry) = links.iter_mut().rev().find(|l| l.index == index) {
            entry.messages.push(message());
        }
    }

    pub(crate) fn finish(
        self,
        direction: Direction,
        num_links: usize,
        found: Option<&str>,
        candidates: Vec<Candidate>,
    ) -> Option<PagingTrace> {
        self.links.map(|links| PagingTrace {
            direction,
            num_links,
            found: found.map(str::to_string),
            links,
            candidates,
        })
    }
}
