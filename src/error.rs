//! Error types and result handling for adapter operations.
//!
//! All operations return a [`Result<T>`], a type alias for
//! `std::result::Result<T, Error>`. The error surface is intentionally
//! small: anything the site fails to provide at the field level degrades to
//! an empty value instead of an error, so errors here cover the network and
//! response-decoding layers only.
//!
//! # Examples
//!
//! ```rust
//! use manhuafast::error::{Error, Result};
//!
//! fn example_operation() -> Result<String> {
//!     Ok("Success".to_string())
//! }
//!
//! fn example_with_error() -> Result<()> {
//!     Err(Error::parse("Something went wrong"))
//! }
//! ```

use thiserror::Error;

/// Type alias for Results with adapter errors.
///
/// All public APIs in this crate return this Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all adapter operations.
///
/// # Variants
///
/// * [`Network`](Error::Network) - HTTP client and connection errors
/// * [`Parse`](Error::Parse) - Response decoding and format errors
/// * [`Source`](Error::Source) - Site-specific errors with context
/// * [`NotFound`](Error::NotFound) - Missing resources
/// * [`RateLimit`](Error::RateLimit) - Rate limiting responses
/// * [`Other`](Error::Other) - Generic error messages
#[derive(Error, Debug)]
pub enum Error {
    /// Network-related errors from HTTP operations.
    ///
    /// Wraps errors from the underlying HTTP client (reqwest), including
    /// connection timeouts, DNS resolution failures, and TLS errors.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response decoding and data format errors.
    ///
    /// Used when the received data cannot be decoded as expected, such as
    /// a non-UTF-8 response body.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use manhuafast::Error;
    ///
    /// let error = Error::parse("Invalid UTF-8 in response body");
    /// ```
    #[error("Parse error: {0}")]
    Parse(String),

    /// Site-specific errors with contextual information.
    ///
    /// # Fields
    ///
    /// * `src` - The identifier of the source that encountered the error
    /// * `message` - Descriptive error message explaining what went wrong
    ///
    /// # Examples
    ///
    /// ```rust
    /// use manhuafast::Error;
    ///
    /// let error = Error::source("mfn", "HTTP 503");
    /// ```
    #[error("Source error [{src}]: {message}")]
    Source { src: String, message: String },

    /// Resource not found errors.
    ///
    /// Used when a requested resource (manga, chapter) cannot be found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limiting errors from the site.
    ///
    /// Indicates the site throttled the request after retries were
    /// exhausted. Optionally carries the number of seconds to wait before
    /// retrying, as provided by the `Retry-After` header.
    #[error("Rate limited, retry after {retry_after:?} seconds")]
    RateLimit { retry_after: Option<u64> },

    /// Generic error messages.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates a parse error with the given message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Creates a site-specific error with source ID and message.
    pub fn source(src: impl Into<String>, msg: impl Into<String>) -> Self {
        Error::Source {
            src: src.into(),
            message: msg.into(),
        }
    }

    /// Creates a not found error with the given message.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    /// Creates a rate limit error with optional retry-after time.
    pub fn rate_limit(retry_after: Option<u64>) -> Self {
        Error::RateLimit { retry_after }
    }
}
