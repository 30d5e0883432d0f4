//! Paging direction and the rules that differ between directions.

use std::fmt;

use regex::Regex;
use serde::Serialize;

use crate::patterns::{NEXT_LINK, PREV_LINK};

/// Which paging link to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The page after the current one.
    Next,
    /// The page before the current one.
    Prev,
}

impl Direction {
    /// The rule set for this direction.
    #[must_use]
    pub fn policy(self) -> DirectionPolicy {
        match self {
            Self::Next => DirectionPolicy {
                direction: self,
                own: &NEXT_LINK,
                opposite: &PREV_LINK,
                require_digit: true,
                skip_base_url: true,
            },
            Self::Prev => DirectionPolicy {
                direction: self,
                own: &PREV_LINK,
                opposite: &NEXT_LINK,
                require_digit: false,
                skip_base_url: false,
            },
        }
    }

    /// The other direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Next => Self::Prev,
            Self::Prev => Self::Next,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Next => "next",
            Self::Prev => "prev",
        })
    }
}

/// The direction-specific half of the scoring rules.
///
/// Next and previous passes run the same algorithm; everything that differs
/// between them lives here.
#[derive(Debug, Clone, Copy)]
pub struct DirectionPolicy {
    /// The direction this policy scores for.
    pub direction: Direction,
    /// Wording that points this way (+50).
    pub own: &'static Regex,
    /// Wording that points the other way (-200).
    pub opposite: &'static Regex,
    /// Skip links with no digit after the host, and none beyond the base URL.
    ///
    /// A site's first page often is the bare base URL, so only the next
    /// direction can insist on a page number.
    pub require_digit: bool,
    /// Skip links equal to the base URL.
    pub skip_base_url: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_policy_is_strict_about_digits() {
        let policy = Direction::Next.policy();
        assert!(policy.require_digit);
        assert!(policy.skip_base_url);
        assert!(policy.own.is_match("Next »"));
        assert!(policy.opposite.is_match("« Prev"));
    }

    #[test]
    fn prev_policy_accepts_base_url() {
        let policy = Direction::Prev.policy();
        assert!(!policy.require_digit);
        assert!(!policy.skip_base_url);
        assert!(policy.own.is_match("Older entries"));
        assert!(policy.opposite.is_match("continue"));
    }

    #[test]
    fn directions_mirror_each_other() {
        for direction in [Direction::Next, Direction::Prev] {
            let policy = direction.policy();
            let mirror = direction.opposite().policy();
            assert_eq!(policy.own.as_str(), mirror.opposite.as_str());
            assert_eq!(policy.opposite.as_str(), mirror.own.as_str());
        }
    }

    #[test]
    fn display_and_serialize() {
        assert_eq!(Direction::Next.to_string(), "next");
        assert_eq!(Direction::Prev.to_string(), "prev");
        assert_eq!(serde_json::to_string(&Direction::Prev).ok().as_deref(), Some("\"prev\""));
    }
}
