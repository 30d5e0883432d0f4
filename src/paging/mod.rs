//! Paging-link scorer.
//!
//! One pass walks every anchor of a document in order, filters out links
//! that cannot be a paging link, and scores the rest on their text, their
//! class/id, their ancestors' class/id and the shape of their URL. Anchors
//! pointing at the same URL pool their scores. The best candidate at or above
//! [`Options::min_score`] wins.
//!
//! The pass is generic over [`PagingElement`] and [`Layout`], so it runs the
//! same way over a parsed `dom_query` tree and over any other DOM binding.

mod candidate;
mod direction;
mod trace;

pub use candidate::{Candidate, CandidateSet};
pub use direction::{Direction, DirectionPolicy};
pub use trace::{LinkTrace, PagingTrace};

use serde::Serialize;

use crate::base_url::find_base_url;
use crate::document::{Layout, PagingElement};
use crate::patterns::{
    DIGIT, EXTRANEOUS, FIRST_LAST, LINK_PAGINATION, NEGATIVE, PAGINATION, POSITIVE,
};
use crate::regex_util;
use crate::url_utils;
use crate::{Options, Result};

use trace::TraceRecorder;

/// Outcome of one paging pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagingLinkResult {
    /// The chosen href, without a trailing slash.
    pub href: Option<String>,
    /// Number of anchors examined.
    pub links_examined: usize,
    /// Number of distinct hrefs that survived filtering.
    pub candidates: usize,
    /// Diagnostic trace, present when [`Options::collect_trace`] is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<PagingTrace>,
}

/// Find the paging link in `direction` among `links`.
///
/// `links` must be every anchor of the document in document order; order
/// decides ties. `page_url` is the absolute URL of the page.
///
/// # Errors
///
/// Fails only when `page_url` has no usable `scheme://host` shape. A document
/// without a qualifying link is `Ok` with `href: None`.
pub fn find_paging_link_in<E, L>(
    links: impl IntoIterator<Item = E>,
    layout: &L,
    page_url: &str,
    direction: Direction,
    options: &Options,
) -> Result<PagingLinkResult>
where
    E: PagingElement,
    L: Layout<E>,
{
    let pass = Pass::new(page_url, direction, options)?;
    let mut candidates = CandidateSet::default();
    let mut trace = TraceRecorder::new(options.collect_trace);
    let mut links_examined = 0;

    for (index, link) in links.into_iter().enumerate() {
        links_examined += 1;
        let Some((href, text)) = pass.admit(index, &link, layout, &mut trace) else {
            continue;
        };
        let candidate = candidates.upsert(index, &text, &href);
        pass.score(index, &link, &href, &text, candidate, &mut trace);
    }

    let found = candidates.best(options.min_score).map(|best| {
        trace.note(best.source_index, || {
            format!("found: score={}, txt=[{}], {}", best.score, best.text, best.href)
        });
        url_utils::strip_trailing_slash(&best.href)
    });

    let num_candidates = candidates.len();
    let trace = trace.finish(pass.policy.direction, links_examined, found.as_deref(), candidates.into_vec());
    if let Some(trace) = &trace {
        trace.emit();
    }

    Ok(PagingLinkResult {
        href: found,
        links_examined,
        candidates: num_candidates,
        trace,
    })
}

/// Per-page state shared by every link of a pass.
struct Pass<'o> {
    policy: DirectionPolicy,
    options: &'o Options,
    base_url: String,
    current_url: String,
    allowed_prefix: String,
    resolution_base: url::Url,
}

impl<'o> Pass<'o> {
    fn new(page_url: &str, direction: Direction, options: &'o Options) -> Result<Self> {
        // Hrefs come out of `Url::join` normalized; the page URL must match.
        let resolution_base = url_utils::parse_base(page_url)?;
        let page_url = resolution_base.as_str();
        let base_url = find_base_url(page_url)?;
        let allowed_prefix = url_utils::allowed_prefix(page_url)?;
        let current_url = url_utils::clean_href(page_url);
        Ok(Self {
            policy: direction.policy(),
            options,
            base_url,
            current_url,
            allowed_prefix,
            resolution_base,
        })
    }

    /// Apply the filters; returns the cleaned href and text of a qualifying link.
    fn admit<E, L>(
        &self,
        index: usize,
        link: &E,
        layout: &L,
        trace: &mut TraceRecorder,
    ) -> Option<(String, String)>
    where
        E: PagingElement,
        L: Layout<E>,
    {
        let raw_href = link.attribute("href");
        let Some(href) = url_utils::resolve_href(raw_href.as_deref(), &self.resolution_base) else {
            trace.begin(index, raw_href.as_deref().unwrap_or_default(), || link.inner_text());
            trace.note(index, || "ignored: unresolvable href".to_string());
            return None;
        };
        trace.begin(index, &href, || link.inner_text());

        if !url_utils::starts_with_ignore_case(&href, &self.allowed_prefix) {
            trace.note(index, || "ignored: prefix".to_string());
            return None;
        }

        if self.policy.require_digit {
            let after_host = href.get(self.allowed_prefix.len()..).unwrap_or_default();
            if !DIGIT.is_match(after_host) {
                trace.note(index, || "ignored: no number".to_string());
                return None;
            }
        }

        let size = layout.box_size(link);
        if size.is_empty() {
            trace.note(index, || format!("ignored: sz={}x{}", size.width, size.height));
            return None;
        }

        if !layout.is_visible(link) {
            trace.note(index, || "ignored: invisible".to_string());
            return None;
        }

        let href = url_utils::clean_href(&href);
        trace.note(index, || format!("-> {href}"));

        if href.eq_ignore_ascii_case(&self.current_url)
            || (self.policy.skip_base_url && href.eq_ignore_ascii_case(&self.base_url))
        {
            trace.note(index, || format!("ignored: same as current or base url {}", self.base_url));
            return None;
        }

        let text = link.inner_text();
        if EXTRANEOUS.is_match(&text) || text.chars().count() > self.options.max_link_text_len {
            trace.note(index, || "ignored: one of extra".to_string());
            return None;
        }

        if self.policy.require_digit {
            let beyond_base = url_utils::remove_ignore_ascii_case(&href, &self.base_url);
            if !DIGIT.is_match(&beyond_base) {
                trace.note(index, || format!("ignored: no number beyond base url {}", self.base_url));
                return None;
            }
        }

        Some((href, text))
    }

    /// Add this link's contribution to `candidate`.
    fn score<E: PagingElement>(
        &self,
        index: usize,
        link: &E,
        href: &str,
        text: &str,
        candidate: &mut Candidate,
        trace: &mut TraceRecorder,
    ) {
        let mut card = Scorecard {
            index,
            candidate,
            trace,
        };

        if !href.starts_with(&self.base_url) {
            card.bump(-25, "not under base url");
        }

        let link_data = format!("{text} {} {}", link.class_name(), link.id());
        if self.policy.own.is_match(&link_data) {
            card.bump(50, "direction wording");
        }
        if PAGINATION.is_match(&link_data) {
            card.bump(25, "pagination wording");
        }
        // Checks the pooled text, so "Last | Next" is not penalized.
        if FIRST_LAST.is_match(&link_data) && !self.policy.own.is_match(&card.candidate.text) {
            card.bump(-65, "first/last");
        }
        if NEGATIVE.is_match(&link_data) || EXTRANEOUS.is_match(&link_data) {
            card.bump(-50, "negative or extraneous");
        }
        if self.policy.opposite.is_match(&link_data) {
            card.bump(-200, "opposite direction");
        }

        let mut paging_parent = Latch::default();
        let mut negative_parent = Latch::default();
        for ancestor in link.ancestors(self.options.max_ancestor_depth) {
            if paging_parent.is_set() && negative_parent.is_set() {
                break;
            }
            let class_and_id = format!("{} {}", ancestor.class_name(), ancestor.id());
            if paging_parent.fire(|| PAGINATION.is_match(&class_and_id)) {
                card.bump(25, "pagination parent");
            }
            if negative_parent
                .fire(|| NEGATIVE.is_match(&class_and_id) && !POSITIVE.is_match(&class_and_id))
            {
                card.bump(-25, "negative parent");
            }
        }

        if LINK_PAGINATION.is_match(href) || PAGINATION.is_match(href) {
            card.bump(25, "paging href");
        }
        if EXTRANEOUS.is_match(href) {
            card.bump(-15, "extraneous href");
        }

        let text_len = text.chars().count();
        if text_len > 10 {
            card.bump(-i32::try_from(text_len).unwrap_or(i32::MAX), "long text");
        }

        if let Some(number) = parse_leading_int(text).filter(|&n| n > 0) {
            if number == 1 {
                card.bump(-10, "page one");
            } else {
                let bonus = i32::try_from((10 - number).max(0)).unwrap_or(0);
                card.bump(bonus, "page number");
            }
        }
    }
}

/// Score changes for one link, noted in the trace as they happen.
struct Scorecard<'a> {
    index: usize,
    candidate: &'a mut Candidate,
    trace: &'a mut TraceRecorder,
}

impl Scorecard<'_> {
    fn bump(&mut self, delta: i32, reason: &str) {
        self.candidate.adjust(delta);
        let score = self.candidate.score;
        self.trace
            .note(self.index, || format!("{delta:+} {reason} (score={score})"));
    }
}

/// A flag that can be set once.
#[derive(Debug, Default)]
struct Latch(bool);

impl Latch {
    /// Set the latch if it is still open and `condition` holds.
    ///
    /// Returns true only on the call that set it.
    fn fire(&mut self, condition: impl FnOnce() -> bool) -> bool {
        if self.0 || !condition() {
            return false;
        }
        self.0 = true;
        true
    }

    fn is_set(&self) -> bool {
        self.0
    }
}

/// Integer at the start of `text`, after optional whitespace and sign.
///
/// Trailing text is ignored: `"2 »"` is 2. Digits beyond the `i64` range
/// saturate.
fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start_matches(regex_util::is_whitespace);
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}
