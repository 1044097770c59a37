//! Rate limit handling.
//!
//! The API answers HTTP 429 when a client sends requests too quickly and may
//! include a `Retry-After` header with the number of seconds to wait.

use http::HeaderMap;
use std::time::Duration;

/// Parses a numeric `Retry-After` header into a delay.
///
/// Returns `None` when the header is missing or is not a whole number of
/// seconds. No default is ever substituted.
///
/// # Examples
///
/// ```
/// use scryfall_api::rate_limit::parse_retry_after;
/// use http::HeaderMap;
/// use std::time::Duration;
///
/// let mut headers = HeaderMap::new();
/// headers.insert("retry-after", "5".parse().unwrap());
/// assert_eq!(parse_retry_after(&headers), Some(Duration::from_secs(5)));
/// ```
pub fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    let header = headers.get(http::header::RETRY_AFTER)?.to_str().ok()?;
    header.trim().parse::<u64>().ok().map(Duration::from_secs)
}

/// Configuration for rate limit handling.
///
/// # Examples
///
/// ```
/// use scryfall_api::rate_limit::RateLimitConfig;
/// use std::time::Duration;
///
/// let config = RateLimitConfig::builder()
///     .enabled(true)
///     .max_wait(Duration::from_secs(30))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Whether a `Retry-After` hint replaces the backoff delay when retrying
    /// a rate-limited request.
    pub enabled: bool,

    /// Upper bound on how long a `Retry-After` hint may make the client wait.
    ///
    /// Defaults to 5 minutes.
    pub max_wait: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_wait: Duration::from_secs(300),
        }
    }
}

impl RateLimitConfig {
    /// Creates a new builder for configuring rate limit handling.
    pub fn builder() -> RateLimitConfigBuilder {
        RateLimitConfigBuilder::default()
    }

    /// Creates a configuration that ignores `Retry-After` hints.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Returns the delay to honor for the given server hint, if any.
    pub fn delay_for(&self, retry_after: Option<Duration>) -> Option<Duration> {
        if !self.enabled {
            return None;
        }
        retry_after.map(|delay| delay.min(self.max_wait))
    }
}

/// Builder for `RateLimitConfig`.
#[derive(Default)]
pub struct RateLimitConfigBuilder {
    enabled: Option<bool>,
    max_wait: Option<Duration>,
}

impl RateLimitConfigBuilder {
    /// Sets whether rate limit hints are honored.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Sets the maximum wait time for a single rate limit hint.
    pub fn max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = Some(max_wait);
        self
    }

    /// Builds the `RateLimitConfig`.
    pub fn build(self) -> RateLimitConfig {
        let default = RateLimitConfig::default();
        RateLimitConfig {
            enabled: self.enabled.unwrap_or(default.enabled),
            max_wait: self.max_wait.unwrap_or(default.max_wait),
        }
    }
}
