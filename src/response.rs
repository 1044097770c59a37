//! Successful response wrapper.
//!
//! [`Response`] pairs the decoded body with what the transport observed:
//! raw text, status, headers, latency across all attempts and the number of
//! attempts it took.

use http::{HeaderMap, StatusCode};
use std::time::Duration;

/// A successful, decoded API response.
///
/// # Examples
///
/// ```no_run
/// use scryfall_api::{metadata::RequestMetadata, models::Catalog, Client};
///
/// # async fn example() -> Result<(), scryfall_api::Error> {
/// let client = Client::builder().build()?;
///
/// let response = client
///     .call::<(), Catalog>(RequestMetadata::get("/catalog/land-types"), None)
///     .await?;
///
/// println!("{} land types", response.data.total_values);
/// println!("took {:?} over {} attempt(s)", response.latency, response.attempts);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// The decoded response body.
    pub data: T,

    /// The raw response body.
    pub raw_body: String,

    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// Time from the first attempt until the successful response was read.
    pub latency: Duration,

    /// Number of attempts made, `1` when no retry was needed.
    pub attempts: usize,
}

impl<T> Response<T> {
    /// Creates a new `Response`.
    pub fn new(
        data: T,
        raw_body: String,
        status: StatusCode,
        headers: HeaderMap,
        latency: Duration,
        attempts: usize,
    ) -> Self {
        Self {
            data,
            raw_body,
            status,
            headers,
            latency,
            attempts,
        }
    }

    /// Discards the metadata and returns the decoded body.
    pub fn into_data(self) -> T {
        self.data
    }

    /// Maps the response data to a different type, keeping the metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scryfall_api::Response;
    /// # use http::{HeaderMap, StatusCode};
    /// # use std::time::Duration;
    /// let response = Response::new(
    ///     vec!["Forest", "Island"],
    ///     String::new(),
    ///     StatusCode::OK,
    ///     HeaderMap::new(),
    ///     Duration::from_millis(40),
    ///     1,
    /// );
    ///
    /// let count = response.map(|names| names.len());
    /// assert_eq!(count.data, 2);
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            data: f(self.data),
            raw_body: self.raw_body,
            status: self.status,
            headers: self.headers,
            latency: self.latency,
            attempts: self.attempts,
        }
    }

    /// Returns `true` if the request required retries.
    pub fn was_retried(&self) -> bool {
        self.attempts > 1
    }

    /// Returns a header value by name, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

impl<T> AsRef<T> for Response<T> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}

impl<T> std::ops::Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
