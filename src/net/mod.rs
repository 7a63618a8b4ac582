//! Request scheduling: HTTP client, rate limiting, and header injection.
//!
//! The adapter itself never touches the network directly; every operation
//! goes through an [`HttpClient`], which owns the cross-call request policy:
//!
//! - **Rate Limiting**: minimum delay between requests to the site
//! - **Header Injection**: a fixed User-Agent and Referer on every request
//! - **Retry Logic**: bounded retries with exponential backoff
//!
//! # Examples
//!
//! ```rust
//! use manhuafast::net::HttpClient;
//!
//! # async fn example() -> manhuafast::Result<()> {
//! let client = HttpClient::new("mfn")
//!     .with_rate_limit(500)  // 500ms between requests
//!     .with_header("Referer", "https://manhuafast.net");
//!
//! let html = client.get_text("https://manhuafast.net").await?;
//! # Ok(())
//! # }
//! ```

use bytes::Bytes;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use reqwest::{Client, header::HeaderMap};
use std::collections::HashMap;
use std::time::{Duration, Instant};

pub mod html;

/// Global HTTP client instance with optimized configuration.
///
/// Configured with a 15-second timeout, connection pooling, and compression
/// support. Created lazily on first use and reused across all requests.
static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(15))
        .pool_max_idle_per_host(10)
        .gzip(true)
        .brotli(true)
        .build()
        .expect("Failed to build HTTP client")
});

/// Per-source rate limiter to avoid overwhelming the site.
///
/// Tracks the last request time for each source and enforces a minimum
/// delay between requests. Safe to use across threads and async tasks.
#[derive(Debug)]
pub struct RateLimiter {
    last_request: Mutex<HashMap<String, Instant>>,
    default_delay: Duration,
}

impl Clone for RateLimiter {
    fn clone(&self) -> Self {
        Self {
            last_request: Mutex::new(HashMap::new()),
            default_delay: self.default_delay,
        }
    }
}

impl RateLimiter {
    /// Creates a new rate limiter with the specified minimum delay
    /// between requests, in milliseconds.
    pub fn new(delay_ms: u64) -> Self {
        Self {
            last_request: Mutex::new(HashMap::new()),
            default_delay: Duration::from_millis(delay_ms),
        }
    }

    /// Waits if necessary before allowing a request for the specified
    /// source.
    ///
    /// Checks the last request time for the source and sleeps when
    /// insufficient time has passed since the previous request.
    pub async fn wait(&self, source_id: &str) {
        let now = Instant::now();
        let wait_duration = {
            let last_map = self.last_request.lock();
            if let Some(&last) = last_map.get(source_id) {
                let elapsed = now.duration_since(last);
                if elapsed < self.default_delay {
                    Some(self.default_delay - elapsed)
                } else {
                    None
                }
            } else {
                None
            }
        };

        if let Some(duration) = wait_duration {
            tokio::time::sleep(duration).await;
        }

        self.last_request
            .lock()
            .insert(source_id.to_string(), Instant::now());
    }
}

/// HTTP client wrapper with built-in rate limiting and retry logic.
///
/// Each client is associated with a source identifier and applies rate
/// limiting per source. Headers added with
/// [`with_header`](HttpClient::with_header) are sent on every request.
///
/// # Examples
///
/// ```rust
/// use manhuafast::net::HttpClient;
///
/// let client = HttpClient::new("mfn")
///     .with_rate_limit(500)
///     .with_max_retries(3)
///     .with_header("Referer", "https://manhuafast.net");
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    source_id: String,
    rate_limiter: RateLimiter,
    max_retries: u32,
    headers: HeaderMap,
}

impl HttpClient {
    /// Creates a new HTTP client for the specified source.
    ///
    /// Defaults to a 200ms rate-limit delay and 3 retries.
    pub fn new(source_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            rate_limiter: RateLimiter::new(200),
            max_retries: 3,
            headers: HeaderMap::new(),
        }
    }

    /// Sets the minimum delay between requests in milliseconds.
    pub fn with_rate_limit(mut self, delay_ms: u64) -> Self {
        self.rate_limiter = RateLimiter::new(delay_ms);
        self
    }

    /// Sets the maximum number of retries for failed requests.
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Adds a header sent on every request made by this client.
    ///
    /// Invalid header names or values are ignored.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            name.parse::<reqwest::header::HeaderName>(),
            value.parse::<reqwest::header::HeaderValue>(),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Performs a GET request with rate limiting and retry logic.
    ///
    /// Applies the rate limit, injects the configured headers, and retries
    /// failed requests with exponential backoff. A 429 response is retried
    /// until the retry budget runs out, then surfaces as
    /// [`Error::RateLimit`](crate::Error::RateLimit) carrying the
    /// `Retry-After` value when the site provides one.
    ///
    /// # Errors
    ///
    /// * [`Error::RateLimit`](crate::Error::RateLimit) - rate limited after retries
    /// * [`Error::Source`](crate::Error::Source) - HTTP errors (4xx, 5xx)
    /// * [`Error::Network`](crate::Error::Network) - connection errors
    pub async fn get(&self, url: &str) -> crate::Result<Bytes> {
        let mut attempts = 0;

        loop {
            // Apply rate limiting
            self.rate_limiter.wait(&self.source_id).await;

            match CLIENT.get(url).headers(self.headers.clone()).send().await {
                Ok(response) => {
                    if response.status().is_success() {
                        return Ok(response.bytes().await?);
                    }

                    // Handle rate limiting
                    if response.status() == 429 {
                        if attempts < self.max_retries {
                            attempts += 1;
                            let delay = Duration::from_secs(2_u64.pow(attempts));
                            tokio::time::sleep(delay).await;
                            continue;
                        }

                        let retry_after = response
                            .headers()
                            .get("retry-after")
                            .and_then(|v| v.to_str().ok())
                            .and_then(|v| v.parse::<u64>().ok());

                        return Err(crate::Error::rate_limit(retry_after));
                    }

                    // Other HTTP errors
                    return Err(crate::Error::source(
                        &self.source_id,
                        format!("HTTP {}", response.status()),
                    ));
                }
                Err(e) => {
                    if attempts < self.max_retries {
                        attempts += 1;
                        tokio::time::sleep(Duration::from_secs(1)).await;
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }
    }

    /// Performs a GET request and returns the response as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// * All errors from [`get()`](HttpClient::get)
    /// * [`Error::Parse`](crate::Error::Parse) - if the response is not valid UTF-8
    pub async fn get_text(&self, url: &str) -> crate::Result<String> {
        let bytes = self.get(url).await?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| crate::Error::parse(format!("Invalid UTF-8: {}", e)))
    }
}
