//! Response validation and error classification.
//!
//! Every response passes through [`classify_response`] before its body is
//! decoded: success statuses pass untouched and every other status becomes
//! exactly one [`Error`] variant. Transport failures are mapped by
//! [`classify_transport`], body decoding failures by [`decode_body`].

use crate::{Error, ErrorPayload, Result};
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

/// Returns `true` if the `Content-Type` header names a JSON media type.
pub fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// Parses an API error body, best-effort.
///
/// Bodies that are not declared as JSON, or that fail to parse, yield `None`.
pub fn parse_error_payload(headers: &HeaderMap, body: &str) -> Option<ErrorPayload> {
    if !is_json(headers) {
        return None;
    }
    match serde_json::from_str(body) {
        Ok(payload) => Some(payload),
        Err(e) => {
            tracing::debug!(error = %e, "Error body is not a valid error payload");
            None
        }
    }
}

/// Checks a response status, turning failures into classified errors.
///
/// Returns `Ok(())` for 2xx statuses without looking at the body.
///
/// # Examples
///
/// ```
/// use scryfall_api::{classify::classify_response, Error};
/// use http::{HeaderMap, StatusCode};
///
/// assert!(classify_response(StatusCode::OK, &HeaderMap::new(), "{}").is_ok());
///
/// match classify_response(StatusCode::NOT_FOUND, &HeaderMap::new(), "gone") {
///     Err(Error::NotFound(payload)) => assert_eq!(payload.details.as_deref(), Some("Not found")),
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
pub fn classify_response(status: StatusCode, headers: &HeaderMap, body: &str) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }

    let payload = parse_error_payload(headers, body);
    let or_fallback = |details: &str| {
        payload
            .clone()
            .unwrap_or_else(|| ErrorPayload::fallback(status, details))
    };

    let error = match status.as_u16() {
        400 => Error::InvalidRequest(or_fallback("Bad request")),
        404 => Error::NotFound(or_fallback("Not found")),
        429 => Error::RateLimited {
            payload: or_fallback("Too Many Requests"),
            retry_after: crate::rate_limit::parse_retry_after(headers),
        },
        500..=599 => Error::ServerError {
            status,
            payload: or_fallback("Server error"),
        },
        _ => Error::HttpError { status, payload },
    };

    if status.is_client_error() {
        tracing::error!(status = status.as_u16(), error = %error, "Client error (4xx)");
    } else if status.is_server_error() {
        tracing::warn!(status = status.as_u16(), error = %error, "Server error (5xx)");
    } else {
        tracing::warn!(status = status.as_u16(), error = %error, "Unexpected HTTP status");
    }

    Err(error)
}

/// Maps a transport failure to a classified error.
///
/// Requests that could not be built, such as a URL with a non-HTTP scheme,
/// become [`Error::Configuration`] and are never retried. Response decoding
/// failures become [`Error::Parse`]; connectivity failures, timeouts and
/// interrupted bodies become [`Error::Network`].
pub fn classify_transport(error: reqwest::Error) -> Error {
    if error.is_builder() {
        tracing::error!(error = %error, "Request could not be built");
        Error::Configuration(format!("Invalid request: {}", error))
    } else if error.is_decode() {
        Error::Parse {
            status: error.status(),
            reason: error.to_string(),
            raw_response: None,
        }
    } else {
        Error::Network(error)
    }
}

/// Decodes a success body into `T`, keeping the raw text on failure.
pub fn decode_body<T>(status: StatusCode, raw_body: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str::<T>(raw_body).map_err(|e| {
        tracing::error!(
            error = %e,
            raw_response = %raw_body,
            "Failed to deserialize response"
        );
        Error::Parse {
            status: Some(status),
            reason: e.to_string(),
            raw_response: Some(raw_body.to_string()),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use std::time::Duration;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            "content-type",
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        headers
    }

    const NOT_FOUND_BODY: &str = r#"{
        "object": "error",
        "code": "not_found",
        "status": 404,
        "details": "No card found with the given ID or set code and collector number."
    }"#;

    #[test]
    fn test_success_passes_through() {
        for code in [200, 201, 204, 299] {
            let status = StatusCode::from_u16(code).unwrap();
            assert!(classify_response(status, &json_headers(), "not even json").is_ok());
        }
    }

    #[test]
    fn test_is_json_matches_media_type_only() {
        assert!(is_json(&json_headers()));

        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("Application/JSON"));
        assert!(is_json(&headers));

        headers.insert("content-type", HeaderValue::from_static("text/html"));
        assert!(!is_json(&headers));
        assert!(!is_json(&HeaderMap::new()));
    }

    #[test]
    fn test_400_invalid_request() {
        let body = r#"{"object":"error","code":"bad_request","status":400,"details":"q is required","warnings":["w1"]}"#;
        match classify_response(StatusCode::BAD_REQUEST, &json_headers(), body) {
            Err(Error::InvalidRequest(payload)) => {
                assert_eq!(payload.code.as_deref(), Some("bad_request"));
                assert_eq!(payload.details.as_deref(), Some("q is required"));
                assert_eq!(payload.warnings, Some(vec!["w1".to_string()]));
            }
            other => panic!("Expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_404_with_payload() {
        match classify_response(StatusCode::NOT_FOUND, &json_headers(), NOT_FOUND_BODY) {
            Err(Error::NotFound(payload)) => {
                assert_eq!(payload.status, Some(404));
                assert_eq!(payload.code.as_deref(), Some("not_found"));
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_json_body_ignored_without_json_content_type() {
        match classify_response(StatusCode::NOT_FOUND, &HeaderMap::new(), NOT_FOUND_BODY) {
            Err(Error::NotFound(payload)) => {
                assert_eq!(payload, ErrorPayload::fallback(StatusCode::NOT_FOUND, "Not found"));
            }
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_body_yields_fallback() {
        match classify_response(StatusCode::BAD_REQUEST, &json_headers(), "{ not json") {
            Err(Error::InvalidRequest(payload)) => {
                assert_eq!(payload.status, Some(400));
                assert_eq!(payload.details.as_deref(), Some("Bad request"));
            }
            other => panic!("Expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_429_retry_after() {
        let mut headers = HeaderMap::new();
        headers.insert("retry-after", HeaderValue::from_static("5"));

        match classify_response(StatusCode::TOO_MANY_REQUESTS, &headers, "") {
            Err(Error::RateLimited {
                payload,
                retry_after,
            }) => {
                assert_eq!(retry_after, Some(Duration::from_secs(5)));
                assert_eq!(payload.details.as_deref(), Some("Too Many Requests"));
            }
            other => panic!("Expected RateLimited, got {:?}", other),
        }

        match classify_response(StatusCode::TOO_MANY_REQUESTS, &HeaderMap::new(), "") {
            Err(Error::RateLimited { retry_after, .. }) => assert_eq!(retry_after, None),
            other => panic!("Expected RateLimited, got {:?}", other),
        }
    }

    #[test]
    fn test_5xx_server_error() {
        for code in [500, 502, 503, 599] {
            let status = StatusCode::from_u16(code).unwrap();
            match classify_response(status, &HeaderMap::new(), "<html>oops</html>") {
                Err(Error::ServerError {
                    status: got,
                    payload,
                }) => {
                    assert_eq!(got, status);
                    assert_eq!(payload.status, Some(code));
                    assert_eq!(payload.details.as_deref(), Some("Server error"));
                }
                other => panic!("Expected ServerError for {code}, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_other_status_is_http_error() {
        match classify_response(StatusCode::UNPROCESSABLE_ENTITY, &HeaderMap::new(), "") {
            Err(Error::HttpError { status, payload }) => {
                assert_eq!(status.as_u16(), 422);
                assert!(payload.is_none());
            }
            other => panic!("Expected HttpError, got {:?}", other),
        }

        let body = r#"{"status":403,"details":"Forbidden"}"#;
        match classify_response(StatusCode::FORBIDDEN, &json_headers(), body) {
            Err(Error::HttpError { status, payload }) => {
                assert_eq!(status.as_u16(), 403);
                assert_eq!(payload.unwrap().details.as_deref(), Some("Forbidden"));
            }
            other => panic!("Expected HttpError, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_body_failure_keeps_raw_text() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Named {
            name: String,
        }

        match decode_body::<Named>(StatusCode::OK, "invalid json") {
            Err(Error::Parse {
                status,
                raw_response,
                ..
            }) => {
                assert_eq!(status, Some(StatusCode::OK));
                assert_eq!(raw_response.as_deref(), Some("invalid json"));
            }
            other => panic!("Expected Parse, got {:?}", other),
        }
    }
}
