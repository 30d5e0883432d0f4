//! Error types for rs-paging-links.
//!
//! Only precondition violations on the page URL are errors. A document with
//! no qualifying link is a normal outcome and is reported as `Ok(None)`.

/// Error type for paging-link detection.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page URL has no recognizable `scheme://host` shape.
    #[error("malformed page URL (expected scheme://host): {0:?}")]
    MalformedUrl(String),

    /// The page URL looks absolute but cannot be used to resolve hrefs.
    #[error("page URL {url:?} cannot be used as a resolution base: {source}")]
    InvalidUrl {
        /// The offending page URL.
        url: String,
        /// Why the `url` crate rejected it.
        #[source]
        source: url::ParseError,
    },
}

/// Result type alias for paging-link operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_url_message_names_the_input() {
        let err = Error::MalformedUrl("example.com/page".to_string());
        assert!(err.to_string().contains("example.com/page"));
    }

    #[test]
    fn invalid_url_exposes_source() {
        let err = Error::InvalidUrl {
            url: "http://".to_string(),
            source: url::ParseError::EmptyHost,
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
