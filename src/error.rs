//! Error types for Scryfall API calls.
//!
//! Every failure a caller can observe is one variant of [`Error`]. Argument
//! problems are caught locally before any request is sent
//! ([`Error::InvalidArgument`]); everything else is produced after a request
//! was attempted and classified from the HTTP status or transport failure.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Structured error body returned by the API on failure.
///
/// Every field is optional: the body is parsed best-effort and missing
/// fields are left as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Object discriminator, `"error"` for API error bodies.
    #[serde(rename = "object", default = "default_object")]
    pub object_type: String,
    /// HTTP status echoed by the API.
    #[serde(default)]
    pub status: Option<u16>,
    /// Machine-readable error code such as `"not_found"`.
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable explanation.
    #[serde(default)]
    pub details: Option<String>,
    /// Optional sub-classification, e.g. `"ambiguous"` for fuzzy name lookups.
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    /// Non-fatal problems the API noticed while handling the request.
    #[serde(default)]
    pub warnings: Option<Vec<String>>,
}

fn default_object() -> String {
    "error".to_string()
}

impl ErrorPayload {
    /// Builds a payload carrying only a status and a detail string.
    ///
    /// Used when a failure response had no parsable JSON error body.
    pub fn fallback(status: StatusCode, details: impl Into<String>) -> Self {
        Self {
            object_type: default_object(),
            status: Some(status.as_u16()),
            code: None,
            details: Some(details.into()),
            error_type: None,
            warnings: None,
        }
    }
}

/// The main error type for Scryfall API calls.
///
/// # Examples
///
/// ```no_run
/// use scryfall_api::{Error, Scryfall};
///
/// # async fn example() -> Result<(), Error> {
/// let scryfall = Scryfall::new()?;
///
/// match scryfall.cards().named_exact("Black Lotus", None).await {
///     Ok(card) => println!("Found {}", card.name),
///     Err(Error::NotFound(payload)) => {
///         eprintln!("No such card: {:?}", payload.details);
///     }
///     Err(Error::RateLimited { retry_after, .. }) => {
///         eprintln!("Slow down, server asked for {:?}", retry_after);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An argument was rejected before any request was sent.
    ///
    /// Never retried and never wraps a network condition.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The API rejected the request (HTTP 400).
    #[error("Invalid request: {}", details_or(.0, "Bad request"))]
    InvalidRequest(ErrorPayload),

    /// The requested resource does not exist (HTTP 404).
    #[error("Not found: {}", details_or(.0, "Not found"))]
    NotFound(ErrorPayload),

    /// Too many requests were sent (HTTP 429).
    ///
    /// `retry_after` is the server's `Retry-After` hint when the response
    /// carried a numeric one, and `None` otherwise.
    #[error("Rate limited: {}", details_or(.payload, "Too Many Requests"))]
    RateLimited {
        /// The parsed or synthesized error body.
        payload: ErrorPayload,
        /// Delay suggested by the server.
        retry_after: Option<Duration>,
    },

    /// The API failed internally (HTTP 5xx).
    #[error("Server error {status}: {}", details_or(.payload, "Server error"))]
    ServerError {
        /// The 5xx status code.
        status: StatusCode,
        /// The parsed or synthesized error body.
        payload: ErrorPayload,
    },

    /// A network-level failure: DNS, refused connection, timeout, or a body
    /// that could not be read.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// A response body could not be interpreted.
    ///
    /// Raised for success bodies that do not match the expected type and for
    /// list pages whose pagination fields contradict each other.
    #[error("Parse error: {reason}")]
    Parse {
        /// Status of the response that failed to parse, if one was received.
        status: Option<StatusCode>,
        /// What went wrong.
        reason: String,
        /// The raw body that failed to parse, when available.
        raw_response: Option<String>,
    },

    /// Any other non-success status.
    #[error("HTTP error {status}")]
    HttpError {
        /// The HTTP status code.
        status: StatusCode,
        /// The parsed error body, if the response carried one.
        payload: Option<ErrorPayload>,
    },

    /// Invalid client configuration or a request that could not be built,
    /// such as a malformed header value or a URL with a non-HTTP scheme.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An invalid URL was provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

fn details_or<'a>(payload: &'a ErrorPayload, fallback: &'a str) -> &'a str {
    payload.details.as_deref().unwrap_or(fallback)
}

impl Error {
    /// Returns `true` if this error is a transient failure worth retrying.
    ///
    /// Rate limiting, 5xx responses and network failures are retryable.
    /// Everything else is terminal.
    ///
    /// # Examples
    ///
    /// ```
    /// use scryfall_api::{Error, ErrorPayload};
    /// use http::StatusCode;
    ///
    /// let err = Error::ServerError {
    ///     status: StatusCode::SERVICE_UNAVAILABLE,
    ///     payload: ErrorPayload::fallback(StatusCode::SERVICE_UNAVAILABLE, "Server error"),
    /// };
    /// assert!(err.is_retryable());
    ///
    /// let err = Error::NotFound(ErrorPayload::fallback(StatusCode::NOT_FOUND, "Not found"));
    /// assert!(!err.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::RateLimited { .. } | Error::ServerError { .. } | Error::Network(_)
        )
    }

    /// Returns `true` if the error was caused by a connect or request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Network(e) if e.is_timeout())
    }

    /// Returns the HTTP status code of the response behind this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::InvalidRequest(_) => Some(StatusCode::BAD_REQUEST),
            Error::NotFound(_) => Some(StatusCode::NOT_FOUND),
            Error::RateLimited { .. } => Some(StatusCode::TOO_MANY_REQUESTS),
            Error::ServerError { status, .. } => Some(*status),
            Error::HttpError { status, .. } => Some(*status),
            Error::Parse { status, .. } => *status,
            Error::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the error body sent by the API, if this error carries one.
    pub fn payload(&self) -> Option<&ErrorPayload> {
        match self {
            Error::InvalidRequest(payload)
            | Error::NotFound(payload)
            | Error::RateLimited { payload, .. }
            | Error::ServerError { payload, .. } => Some(payload),
            Error::HttpError { payload, .. } => payload.as_ref(),
            _ => None,
        }
    }

    /// Returns the best available human-readable detail string.
    pub fn details(&self) -> Option<&str> {
        self.payload()?.details.as_deref()
    }

    /// Returns the server's suggested retry delay for rate-limited requests.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Error::RateLimited { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

/// A specialized `Result` type for Scryfall API calls.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_payload_parses_partial_body() {
        let payload: ErrorPayload = serde_json::from_str(
            r#"{"object":"error","code":"not_found","status":404,"details":"No card found"}"#,
        )
        .unwrap();

        assert_eq!(payload.status, Some(404));
        assert_eq!(payload.code.as_deref(), Some("not_found"));
        assert_eq!(payload.details.as_deref(), Some("No card found"));
        assert!(payload.warnings.is_none());
    }

    #[test]
    fn test_error_payload_tolerates_unknown_fields() {
        let payload: ErrorPayload =
            serde_json::from_str(r#"{"status":400,"brand_new_field":true}"#).unwrap();
        assert_eq!(payload.object_type, "error");
        assert_eq!(payload.status, Some(400));
    }

    #[test]
    fn test_status_is_recoverable_from_every_http_variant() {
        let err = Error::InvalidRequest(ErrorPayload::fallback(StatusCode::BAD_REQUEST, "x"));
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));

        let err = Error::RateLimited {
            payload: ErrorPayload::fallback(StatusCode::TOO_MANY_REQUESTS, "x"),
            retry_after: None,
        };
        assert_eq!(err.status(), Some(StatusCode::TOO_MANY_REQUESTS));

        let err = Error::HttpError {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            payload: None,
        };
        assert_eq!(err.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert!(err.payload().is_none());
    }

    #[test]
    fn test_display_uses_payload_details() {
        let err = Error::NotFound(ErrorPayload::fallback(
            StatusCode::NOT_FOUND,
            "No cards found matching “foo”",
        ));
        assert_eq!(err.to_string(), "Not found: No cards found matching “foo”");
    }

    #[test]
    fn test_invalid_argument_is_terminal() {
        let err = Error::InvalidArgument("Page must be greater than 0".to_string());
        assert!(!err.is_retryable());
        assert_eq!(err.status(), None);
    }
}
