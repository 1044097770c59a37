//! Immutable client configuration.

use crate::{logging::LogLevel, rate_limit::RateLimitConfig, retry::RetryPolicy};
use std::time::Duration;
use url::Url;

/// The production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.scryfall.com";

/// Default time allowed to establish a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default time allowed for one complete request attempt.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Default time a connection may sit idle while reading a response.
pub const DEFAULT_SOCKET_TIMEOUT: Duration = Duration::from_secs(30);

/// The user agent sent when none is configured.
///
/// The API asks clients to identify themselves and offer a contact point.
pub fn default_user_agent() -> String {
    format!(
        "{}/{} (+https://crates.io/crates/{})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_NAME"),
    )
}

/// Configuration shared by every request made through one [`Client`](crate::Client).
///
/// Produced by [`ClientBuilder::build`](crate::ClientBuilder::build) and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Prefix for every relative request path.
    pub base_url: Url,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Time allowed to establish a connection.
    pub connect_timeout: Duration,
    /// Time allowed for one attempt, from sending to reading the full body.
    pub request_timeout: Duration,
    /// Time a connection may stay idle while a response is being read.
    pub socket_timeout: Duration,
    /// Retry count and backoff.
    pub retry_policy: RetryPolicy,
    /// Handling of `Retry-After` hints.
    pub rate_limit: RateLimitConfig,
    /// Whether request/response lines are logged.
    pub logging_enabled: bool,
    /// Verbosity of request/response logging.
    pub log_level: LogLevel,
}

impl ClientConfig {
    /// The maximum number of retries after the initial attempt.
    pub fn max_retries(&self) -> usize {
        self.retry_policy.max_retries
    }
}
