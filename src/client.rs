//! HTTP transport with response classification and retry.
//!
//! The [`Client`] type is the single pipeline every API call goes through.
//! Use [`ClientBuilder`] to configure and create clients.

use crate::{
    classify::{classify_response, classify_transport, decode_body},
    config::{
        default_user_agent, ClientConfig, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT,
        DEFAULT_REQUEST_TIMEOUT, DEFAULT_SOCKET_TIMEOUT,
    },
    logging::{HttpLogger, LogLevel, LogSink},
    metadata::RequestMetadata,
    pagination::Page,
    rate_limit::RateLimitConfig,
    retry::{RetryOnTransient, RetryPolicy, RetryPredicate},
    Error, Response, Result,
};
use http::{header, HeaderMap, HeaderName, HeaderValue};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// A configured connection to the API.
///
/// Cloning is cheap: clones share the connection pool and configuration.
/// Independent clients share nothing.
///
/// # Examples
///
/// ```no_run
/// use scryfall_api::{metadata::RequestMetadata, models::Card, Client};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), scryfall_api::Error> {
/// let client = Client::builder()
///     .request_timeout(Duration::from_secs(20))
///     .max_retries(3)
///     .build()?;
///
/// let metadata = RequestMetadata::get("/cards/named").with_query_param("exact", "Counterspell");
/// let card = client.call::<(), Card>(metadata, None).await?;
/// println!("{} ({})", card.name, card.set);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    config: ClientConfig,
    default_headers: HeaderMap,
    retry_predicate: Box<dyn RetryPredicate>,
    logger: Option<HttpLogger>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client with the default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Creates a new `ClientBuilder` for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Makes a typed request.
    ///
    /// Every attempt is classified: a non-2xx status or transport failure
    /// becomes an [`Error`]. Transient errors on idempotent requests are
    /// retried according to the configured policy; when retries run out the
    /// last error is returned unchanged.
    ///
    /// # Type Parameters
    ///
    /// * `Req` - The request body type (must implement `Serialize`)
    /// * `Res` - The response body type (must implement `DeserializeOwned`)
    pub async fn call<Req, Res>(
        &self,
        metadata: RequestMetadata,
        body: Option<&Req>,
    ) -> Result<Response<Res>>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let start_time = Instant::now();
        let url = self.resolve_url(&metadata)?;
        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| Error::InvalidArgument(format!("Failed to serialize request: {}", e)))?;
        let mut attempt = 0;

        loop {
            attempt += 1;

            let result = match self
                .execute_request(&metadata, &url, body.as_deref(), attempt)
                .await
            {
                Ok(response) => self.parse_response(&url, response, start_time, attempt).await,
                Err(e) => Err(e),
            };

            let error = match result {
                Ok(response) => return Ok(response),
                Err(e) => e,
            };

            tracing::warn!(
                error = %error,
                attempt = attempt,
                method = %metadata.method,
                path = %metadata.path,
                "Request failed"
            );

            if !metadata.idempotent || !self.inner.retry_predicate.should_retry(&error, attempt) {
                return Err(error);
            }

            let Some(backoff) = self.inner.config.retry_policy.delay_for_attempt(attempt) else {
                tracing::warn!(attempts = attempt, "Retries exhausted");
                return Err(error);
            };

            // A server hint wins over the computed backoff
            let delay = match self.inner.config.rate_limit.delay_for(error.retry_after()) {
                Some(hint) => {
                    tracing::info!(
                        rate_limit_delay_ms = hint.as_millis(),
                        attempt = attempt,
                        max_wait_secs = self.inner.config.rate_limit.max_wait.as_secs(),
                        "Rate limited - waiting before retry"
                    );
                    hint
                }
                None => {
                    tracing::info!(
                        delay_ms = backoff.as_millis(),
                        attempt = attempt,
                        "Retrying request after delay"
                    );
                    backoff
                }
            };

            tokio::time::sleep(delay).await;
        }
    }

    /// Resolves the request path and query against the base URL.
    fn resolve_url(&self, metadata: &RequestMetadata) -> Result<Url> {
        let mut url = match Url::parse(&metadata.path) {
            Ok(absolute) => absolute,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                self.inner.config.base_url.join(&metadata.path)?
            }
            Err(e) => return Err(e.into()),
        };

        if !metadata.query_params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &metadata.query_params {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Executes a single request attempt.
    async fn execute_request(
        &self,
        metadata: &RequestMetadata,
        url: &Url,
        body: Option<&[u8]>,
        attempt: usize,
    ) -> Result<reqwest::Response> {
        tracing::debug!(
            method = %metadata.method,
            url = %url,
            attempt = attempt,
            "Executing HTTP request"
        );

        let mut request = self
            .inner
            .http_client
            .request(metadata.method.clone(), url.clone());

        for (name, value) in &self.inner.default_headers {
            request = request.header(name, value);
        }

        for (name, value) in &metadata.headers {
            request = request.header(name, value);
        }

        if let Some(body) = body {
            request = request
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.to_vec());
        }

        let request = request.build().map_err(classify_transport)?;

        if let Some(logger) = &self.inner.logger {
            logger.log_request(request.method(), request.url(), request.headers(), body);
        }

        self.inner
            .http_client
            .execute(request)
            .await
            .map_err(classify_transport)
    }

    /// Classifies the response and decodes its body.
    async fn parse_response<Res>(
        &self,
        url: &Url,
        response: reqwest::Response,
        start_time: Instant,
        attempts: usize,
    ) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        let status = response.status();
        let headers = response.headers().clone();

        let raw_body = match response.text().await {
            Ok(text) => text,
            // The status alone classifies a failed response
            Err(e) if !status.is_success() => {
                tracing::debug!(error = %e, "Failed to read error response body");
                String::new()
            }
            Err(e) => return Err(classify_transport(e)),
        };
        let latency = start_time.elapsed();

        tracing::info!(
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            attempts = attempts,
            "Received HTTP response"
        );

        if let Some(logger) = &self.inner.logger {
            logger.log_response(url, status, &headers, &raw_body, latency);
        }

        classify_response(status, &headers, &raw_body)?;
        let data = decode_body(status, &raw_body)?;

        Ok(Response::new(
            data, raw_body, status, headers, latency, attempts,
        ))
    }

    /// Makes a GET request to the specified path or absolute URL.
    pub async fn get<Res>(&self, path: impl Into<String>) -> Result<Response<Res>>
    where
        Res: DeserializeOwned,
    {
        self.call::<(), Res>(RequestMetadata::get(path), None).await
    }

    /// Makes a POST request with a JSON body.
    ///
    /// POST requests are not retried unless their metadata is marked
    /// idempotent; use [`Client::call`] for that.
    pub async fn post<Req, Res>(&self, path: impl Into<String>, body: &Req) -> Result<Response<Res>>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        self.call(RequestMetadata::post(path), Some(body)).await
    }

    /// Fetches one page of a list endpoint and checks its pagination fields.
    pub async fn fetch_page<Req, T>(
        &self,
        metadata: RequestMetadata,
        body: Option<&Req>,
    ) -> Result<Page<T>>
    where
        Req: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let page = self.call::<Req, Page<T>>(metadata, body).await?.data;
        page.check_links()?;
        Ok(page)
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// Every setting is optional; see [`crate::config`] for the defaults.
///
/// # Examples
///
/// ```no_run
/// use scryfall_api::{ClientBuilder, LogLevel, RetryPolicy};
/// use std::time::Duration;
///
/// # fn example() -> Result<(), scryfall_api::Error> {
/// let client = ClientBuilder::new()
///     .user_agent("deckbuilder/2.1 (ops@example.com)")
///     .connect_timeout(Duration::from_secs(5))
///     .retry_policy(RetryPolicy {
///         max_retries: 4,
///         initial_delay: Duration::from_millis(250),
///         max_delay: Duration::from_secs(10),
///         jitter: true,
///     })
///     .logging(true)
///     .log_level(LogLevel::Headers)
///     .log_sink(|line| eprintln!("scryfall: {line}"))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    connect_timeout: Duration,
    request_timeout: Duration,
    socket_timeout: Duration,
    default_headers: HeaderMap,
    retry_policy: RetryPolicy,
    retry_predicate: Option<Box<dyn RetryPredicate>>,
    rate_limit_config: RateLimitConfig,
    logging_enabled: bool,
    log_level: LogLevel,
    log_sink: Option<LogSink>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    pub fn new() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

        Self {
            base_url: None,
            user_agent: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            socket_timeout: DEFAULT_SOCKET_TIMEOUT,
            default_headers,
            retry_policy: RetryPolicy::default(),
            retry_predicate: None,
            rate_limit_config: RateLimitConfig::default(),
            logging_enabled: false,
            log_level: LogLevel::default(),
            log_sink: None,
        }
    }

    /// Sets the base URL for relative request paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.base_url = Some(Url::parse(url.as_ref())?);
        Ok(self)
    }

    /// Overrides the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the time allowed to establish a connection.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the time allowed for one complete request attempt.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the time a connection may stay idle while reading a response.
    pub fn socket_timeout(mut self, timeout: Duration) -> Self {
        self.socket_timeout = timeout;
        self
    }

    /// Adds a default header that will be included in all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the maximum number of retries, keeping the current backoff.
    pub fn max_retries(mut self, max_retries: usize) -> Self {
        self.retry_policy.max_retries = max_retries;
        self
    }

    /// Replaces the retry policy.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Sets a custom retry predicate.
    ///
    /// By default, requests are retried based on [`Error::is_retryable`].
    pub fn retry_predicate(mut self, predicate: Box<dyn RetryPredicate>) -> Self {
        self.retry_predicate = Some(predicate);
        self
    }

    /// Sets how `Retry-After` hints are honored.
    pub fn rate_limit_config(mut self, config: RateLimitConfig) -> Self {
        self.rate_limit_config = config;
        self
    }

    /// Enables or disables request/response logging.
    pub fn logging(mut self, enabled: bool) -> Self {
        self.logging_enabled = enabled;
        self
    }

    /// Sets the verbosity of request/response logging.
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Routes request/response log lines to `sink` instead of `tracing`.
    pub fn log_sink<F>(mut self, sink: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.log_sink = Some(Arc::new(sink));
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn build(self) -> Result<Client> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let user_agent = self.user_agent.unwrap_or_else(default_user_agent);

        let http_client = reqwest::Client::builder()
            .user_agent(user_agent.clone())
            .connect_timeout(self.connect_timeout)
            .timeout(self.request_timeout)
            .read_timeout(self.socket_timeout)
            .build()
            .map_err(|e| Error::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        let retry_predicate = self
            .retry_predicate
            .unwrap_or_else(|| Box::new(RetryOnTransient));

        let logger = HttpLogger::new(self.logging_enabled, self.log_level, self.log_sink);

        let config = ClientConfig {
            base_url,
            user_agent,
            connect_timeout: self.connect_timeout,
            request_timeout: self.request_timeout,
            socket_timeout: self.socket_timeout,
            retry_policy: self.retry_policy,
            rate_limit: self.rate_limit_config,
            logging_enabled: self.logging_enabled,
            log_level: self.log_level,
        };

        tracing::debug!(base_url = %config.base_url, "Built API client");

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                config,
                default_headers: self.default_headers,
                retry_predicate,
                logger,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let client = Client::new().unwrap();
        let config = client.config();

        assert_eq!(config.base_url.as_str(), "https://api.scryfall.com/");
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert_eq!(config.socket_timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries(), 2);
        assert!(!config.logging_enabled);
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.user_agent.starts_with("scryfall-api/"));
    }

    #[test]
    fn test_resolve_relative_and_absolute_paths() {
        let client = Client::new().unwrap();

        let url = client
            .resolve_url(
                &RequestMetadata::get("/cards/search")
                    .with_query_param("q", "c:red pow=3")
                    .with_query_param("page", 2),
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.scryfall.com/cards/search?q=c%3Ared+pow%3D3&page=2"
        );

        let next = "https://api.scryfall.com/cards/search?page=3&q=c%3Ared";
        let url = client.resolve_url(&RequestMetadata::get(next)).unwrap();
        assert_eq!(url.as_str(), next);
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            Client::builder().base_url("not a url"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_invalid_default_header() {
        assert!(matches!(
            Client::builder().default_header("bad header", "x"),
            Err(Error::Configuration(_))
        ));
    }
}
