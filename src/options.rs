//! Configuration options for paging-link detection.
//!
//! The `Options` struct exposes the few knobs of the scorer. The defaults are
//! the tuned values the heuristics were calibrated with; change them only when
//! you know the site family you are processing.

/// Configuration options for a paging-link pass.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_paging_links::Options;
///
/// let options = Options {
///     collect_trace: true,
///     ..Options::default()
/// };
/// assert_eq!(options.min_score, 50);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Record a per-link diagnostic trace and emit it through `tracing`.
    ///
    /// Default: `false`
    pub collect_trace: bool,

    /// Minimum score a candidate needs before it can be returned.
    ///
    /// Default: `50`
    pub min_score: i32,

    /// Links whose visible text is longer than this are never candidates.
    ///
    /// Measured in characters.
    ///
    /// Default: `25`
    pub max_link_text_len: usize,

    /// Maximum number of ancestors inspected for paging/negative context.
    ///
    /// Default: `64`
    pub max_ancestor_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            collect_trace: false,
            min_score: 50,
            max_link_text_len: 25,
            max_ancestor_depth: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert!(!opts.collect_trace);
        assert_eq!(opts.min_score, 50);
        assert_eq!(opts.max_link_text_len, 25);
        assert_eq!(opts.max_ancestor_depth, 64);
    }

    #[test]
    fn test_custom_options() {
        let opts = Options {
            collect_trace: true,
            min_score: 75,
            ..Options::default()
        };

        assert!(opts.collect_trace);
        assert_eq!(opts.min_score, 75);
        assert_eq!(opts.max_link_text_len, 25);
    }
}
