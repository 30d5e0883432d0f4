//! Candidate bookkeeping for one paging pass.

use std::collections::HashMap;

use serde::Serialize;

/// A distinct target URL and its accumulated score.
///
/// Several anchors may point at the same URL; their texts are concatenated
/// with `" | "` and each of them adds to the score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Index of the first anchor that produced this candidate.
    pub source_index: usize,
    /// Accumulated score.
    pub score: i32,
    /// Texts of all contributing anchors, joined with `" | "`.
    pub text: String,
    /// Cleaned target URL.
    pub href: String,
}

impl Candidate {
    fn new(source_index: usize, text: &str, href: &str) -> Self {
        Self {
            source_index,
            score: 0,
            text: text.to_string(),
            href: href.to_string(),
        }
    }

    /// Add `delta` to the score.
    pub fn adjust(&mut self, delta: i32) {
        self.score = self.score.saturating_add(delta);
    }
}

/// Candidates keyed by cleaned href, in first-seen order.
///
/// The order decides ties: of two candidates with the same score, the one
/// whose href was seen first wins.
#[derive(Debug, Default)]
pub struct CandidateSet {
    entries: Vec<Candidate>,
    by_href: HashMap<String, usize>,
}

impl CandidateSet {
    /// Candidate for `href`, created on first sight.
    ///
    /// An existing candidate gets `text` appended instead.
    pub fn upsert(&mut self, source_index: usize, text: &str, href: &str) -> &mut Candidate {
        if let Some(&slot) = self.by_href.get(href) {
            let candidate = &mut self.entries[slot];
            candidate.text.push_str(" | ");
            candidate.text.push_str(text);
            return candidate;
        }

        let slot = self.entries.len();
        self.by_href.insert(href.to_string(), slot);
        self.entries.push(Candidate::new(source_index, text, href));
        &mut self.entries[slot]
    }

    /// The highest-scoring candidate with at least `min_score`.
    ///
    /// Only a strictly higher score displaces an earlier candidate.
    #[must_use]
    pub fn best(&self, min_score: i32) -> Option<&Candidate> {
        self.entries.iter().fold(None, |best: Option<&Candidate>, candidate| {
            if candidate.score < min_score {
                return best;
            }
            match best {
                Some(current) if candidate.score <= current.score => Some(current),
                _ => Some(candidate),
            }
        })
    }

    /// Number of distinct hrefs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no link qualified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Candidates in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.entries.iter()
    }

    /// Consume the set, yielding candidates in first-seen order.
    #[must_use]
    pub fn into_vec(self) -> Vec<Candidate> {
        self.entries
    }
}
