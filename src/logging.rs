//! Opt-in request/response logging.
//!
//! When enabled on the client, each attempt writes human-readable lines to a
//! [`LogSink`]. Without a custom sink the lines are emitted through
//! `tracing` at info level under the `scryfall_api::http` target.

use http::{HeaderMap, Method, StatusCode};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// A function receiving one formatted log line at a time.
pub type LogSink = Arc<dyn Fn(&str) + Send + Sync>;

/// How much of each request and response is logged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    /// Nothing is logged.
    None,
    /// Request and response lines only.
    #[default]
    Info,
    /// Request and response lines plus headers.
    Headers,
    /// Request and response lines plus bodies.
    Body,
    /// Lines, headers and bodies.
    All,
}

impl LogLevel {
    /// Returns `true` if headers are logged at this level.
    pub fn logs_headers(self) -> bool {
        matches!(self, LogLevel::Headers | LogLevel::All)
    }

    /// Returns `true` if bodies are logged at this level.
    pub fn logs_body(self) -> bool {
        matches!(self, LogLevel::Body | LogLevel::All)
    }
}

/// Writes request/response lines to the configured sink.
#[derive(Clone)]
pub(crate) struct HttpLogger {
    level: LogLevel,
    sink: Option<LogSink>,
}

impl fmt::Debug for HttpLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpLogger")
            .field("level", &self.level)
            .field("custom_sink", &self.sink.is_some())
            .finish()
    }
}

impl HttpLogger {
    /// Returns a logger, or `None` when logging is disabled.
    pub(crate) fn new(enabled: bool, level: LogLevel, sink: Option<LogSink>) -> Option<Self> {
        if !enabled || level == LogLevel::None {
            return None;
        }
        Some(Self { level, sink })
    }

    fn emit(&self, line: &str) {
        match &self.sink {
            Some(sink) => sink(line),
            None => tracing::info!(target: "scryfall_api::http", "{}", line),
        }
    }

    fn emit_headers(&self, headers: &HeaderMap) {
        for (name, value) in headers {
            let value = value.to_str().unwrap_or("<binary>");
            self.emit(&format!("-> {}: {}", name, value));
        }
    }

    pub(crate) fn log_request(
        &self,
        method: &Method,
        url: &Url,
        headers: &HeaderMap,
        body: Option<&[u8]>,
    ) {
        self.emit(&format!("REQUEST: {}", url));
        self.emit(&format!("METHOD: {}", method));

        if self.level.logs_headers() {
            self.emit("COMMON HEADERS");
            self.emit_headers(headers);
        }

        if self.level.logs_body() {
            match body {
                Some(body) => {
                    self.emit("BODY START");
                    self.emit(&String::from_utf8_lossy(body));
                    self.emit("BODY END");
                }
                None => self.emit("BODY: <empty>"),
            }
        }
    }

    pub(crate) fn log_response(
        &self,
        url: &Url,
        status: StatusCode,
        headers: &HeaderMap,
        body: &str,
        latency: Duration,
    ) {
        self.emit(&format!("RESPONSE: {}", status));
        self.emit(&format!("FROM: {} ({} ms)", url, latency.as_millis()));

        if self.level.logs_headers() {
            self.emit("COMMON HEADERS");
            self.emit_headers(headers);
        }

        if self.level.logs_body() {
            self.emit("BODY START");
            self.emit(body);
            self.emit("BODY END");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn capturing(level: LogLevel) -> (HttpLogger, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let captured = lines.clone();
        let sink: LogSink = Arc::new(move |line: &str| {
            captured.lock().unwrap().push(line.to_string());
        });
        (HttpLogger::new(true, level, Some(sink)).unwrap(), lines)
    }

    fn url() -> Url {
        Url::parse("https://api.scryfall.com/cards/search?q=bolt").unwrap()
    }

    #[test]
    fn test_disabled_logger() {
        assert!(HttpLogger::new(false, LogLevel::All, None).is_none());
        assert!(HttpLogger::new(true, LogLevel::None, None).is_none());
    }

    #[test]
    fn test_info_logs_lines_only() {
        let (logger, lines) = capturing(LogLevel::Info);
        let mut headers = HeaderMap::new();
        headers.insert("accept", "application/json".parse().unwrap());

        logger.log_request(&Method::GET, &url(), &headers, None);
        logger.log_response(
            &url(),
            StatusCode::OK,
            &headers,
            "{}",
            Duration::from_millis(12),
        );

        let lines = lines.lock().unwrap();
        assert_eq!(
            *lines,
            vec![
                "REQUEST: https://api.scryfall.com/cards/search?q=bolt".to_string(),
                "METHOD: GET".to_string(),
                "RESPONSE: 200 OK".to_string(),
                "FROM: https://api.scryfall.com/cards/search?q=bolt (12 ms)".to_string(),
            ]
        );
    }

    #[test]
    fn test_all_logs_headers_and_bodies() {
        let (logger, lines) = capturing(LogLevel::All);
        let mut headers = HeaderMap::new();
        headers.insert("content-type", "application/json".parse().unwrap());

        logger.log_request(&Method::POST, &url(), &headers, Some(br#"{"identifiers":[]}"#));

        let lines = lines.lock().unwrap();
        assert!(lines.contains(&"-> content-type: application/json".to_string()));
        assert!(lines.contains(&r#"{"identifiers":[]}"#.to_string()));
    }

    #[test]
    fn test_level_flags() {
        assert!(!LogLevel::Info.logs_headers());
        assert!(!LogLevel::Info.logs_body());
        assert!(LogLevel::Headers.logs_headers());
        assert!(!LogLevel::Headers.logs_body());
        assert!(LogLevel::Body.logs_body());
        assert!(LogLevel::All.logs_headers() && LogLevel::All.logs_body());
    }
}
