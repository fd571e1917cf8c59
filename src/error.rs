//! Error handling for the ytfetch crate.
//!
//! All fallible operations in the crate return [`Result`]. The playlist
//! walker relies on [`Error::is_retryable`] to decide whether a failed
//! playlist resolution is worth another attempt.

use std::io;
use thiserror::Error;

/// Errors that can happen while resolving or downloading media.
#[derive(Error, Debug)]
pub enum Error {
    /// The remote content is gone (deleted, private, region-locked).
    #[error("content unavailable: {0}")]
    Unavailable(String),

    /// The extractor produced output we could not make sense of.
    #[error("malformed extractor response: {0}")]
    Malformed(String),

    /// The extractor subprocess failed for a reason other than the
    /// content being unavailable (network trouble, rate limiting, ...).
    #[error("extractor error: {0}")]
    Extractor(String),

    /// The in-flight transfer was cancelled by the user.
    #[error("download cancelled by user")]
    Cancelled,

    /// Error from the underlying URL parser or the expected URL format.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// I/O error.
    #[error("I/O error")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Error from the reqwest client.
    #[error("request error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error from the reqwest middleware stack.
    #[error("request error")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },
}

impl Error {
    /// Whether a playlist resolution that failed with this error should be
    /// attempted again.
    ///
    /// Transient network failures, remote disconnects, unavailable content
    /// and malformed extractor responses are all retryable at resolution
    /// granularity. Everything else propagates.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Unavailable(_)
                | Error::Malformed(_)
                | Error::Extractor(_)
                | Error::Reqwest { .. }
                | Error::Middleware { .. }
        )
    }
}

/// Result type alias for operations that can fail with a ytfetch error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_classes() {
        assert!(Error::Unavailable("gone".into()).is_retryable());
        assert!(Error::Malformed("bad json".into()).is_retryable());
        assert!(Error::Extractor("HTTP 429".into()).is_retryable());
    }

    #[test]
    fn non_retryable_classes() {
        assert!(!Error::Cancelled.is_retryable());
        assert!(!Error::InvalidUrl("not a url".into()).is_retryable());
        let io = Error::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(!io.is_retryable());
    }
}
