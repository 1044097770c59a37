//! Request metadata: everything needed to issue one API request.

use http::{HeaderMap, HeaderName, HeaderValue, Method};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is inside one path segment (RFC 3986 unreserved).
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Joins segments into an absolute path, escaping each one.
///
/// Reserved characters such as `/`, `?` and `#` inside a segment are
/// percent-encoded, so caller input can never change the path structure
/// or leak into the query.
///
/// # Examples
///
/// ```
/// use scryfall_api::metadata::encode_path;
///
/// assert_eq!(encode_path(&["cards", "lea", "161"]), "/cards/lea/161");
/// assert_eq!(encode_path(&["sets", "abc?x=1"]), "/sets/abc%3Fx%3D1");
/// ```
pub fn encode_path(segments: &[&str]) -> String {
    segments.iter().fold(String::new(), |mut path, segment| {
        path.push('/');
        path.extend(utf8_percent_encode(segment, PATH_SEGMENT));
        path
    })
}

/// Metadata for an individual HTTP request.
///
/// Built by the endpoint wrappers once their arguments passed validation,
/// then handed to [`Client::call`](crate::Client::call). The path is either
/// relative to the client's base URL or an absolute URL such as a
/// `next_page` link.
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// The HTTP method (GET, POST, etc.).
    pub method: Method,

    /// The request path, relative to the base URL, or an absolute URL.
    pub path: String,

    /// Additional headers for this request.
    pub headers: HeaderMap,

    /// Query parameters, sent in insertion order.
    pub query_params: Vec<(String, String)>,

    /// Whether repeating the request is free of side effects.
    ///
    /// Only idempotent requests are retried.
    pub idempotent: bool,
}

impl RequestMetadata {
    /// Creates a new `RequestMetadata` with the given method and path.
    ///
    /// Safe methods (GET, HEAD, OPTIONS) and PUT/DELETE start out idempotent,
    /// everything else does not.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        let idempotent = method.is_idempotent();
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            query_params: Vec::new(),
            idempotent,
        }
    }

    /// Shorthand for a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Shorthand for a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Adds a header to the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn with_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, crate::Error> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| crate::Error::Configuration(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| crate::Error::Configuration(format!("Invalid header value: {}", e)))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Adds a query parameter to the request.
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query_params.push((key.into(), value.to_string()));
        self
    }

    /// Adds a query parameter only when a value is present.
    pub fn with_optional_param(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.with_query_param(key, value),
            None => self,
        }
    }

    /// Marks whether the request may be retried safely.
    pub fn idempotent(mut self, idempotent: bool) -> Self {
        self.idempotent = idempotent;
        self
    }
}

impl Default for RequestMetadata {
    fn default() -> Self {
        Self::get("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idempotency_follows_method() {
        assert!(RequestMetadata::get("/cards/random").idempotent);
        assert!(!RequestMetadata::post("/cards/collection").idempotent);
        assert!(
            RequestMetadata::post("/cards/collection")
                .idempotent(true)
                .idempotent
        );
    }

    #[test]
    fn test_encode_path_escapes_reserved_characters() {
        assert_eq!(encode_path(&["sets", "mh3"]), "/sets/mh3");
        assert_eq!(encode_path(&["sets", "abc#frag"]), "/sets/abc%23frag");
        assert_eq!(encode_path(&["cards", "lea", "1/2"]), "/cards/lea/1%2F2");
        assert_eq!(encode_path(&["cards", "war", "1★"]), "/cards/war/1%E2%98%85");
        assert_eq!(encode_path(&["bulk-data", "oracle_cards"]), "/bulk-data/oracle_cards");
    }

    #[test]
    fn test_query_params_keep_order() {
        let metadata = RequestMetadata::get("/cards/search")
            .with_query_param("q", "t:goblin")
            .with_optional_param("order", None::<&str>)
            .with_optional_param("page", Some(2))
            .with_query_param("include_extras", false);

        assert_eq!(
            metadata.query_params,
            vec![
                ("q".to_string(), "t:goblin".to_string()),
                ("page".to_string(), "2".to_string()),
                ("include_extras".to_string(), "false".to_string()),
            ]
        );
    }
}
