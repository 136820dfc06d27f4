//! Response snapshot type
//!
//! Everything the suite observes from one HTTP exchange: status code,
//! headers, body text, and timing.

use std::collections::HashMap;
use std::time::Duration;

/// Snapshot of one HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSpec {
    /// HTTP status code.
    pub status: u16,
    /// Response headers as a map.
    pub headers: HashMap<String, String>,
    /// Response body as text.
    pub body: String,
    /// Time from send to last body byte.
    pub duration: Duration,
}

impl ResponseSpec {
    /// Creates a new `ResponseSpec` from raw response data.
    ///
    /// Invalid UTF-8 sequences in the body are replaced with the
    /// replacement character.
    #[must_use]
    pub fn new(
        status: u16,
        headers: HashMap<String, String>,
        body: Vec<u8>,
        duration: Duration,
    ) -> Self {
        let body = String::from_utf8(body)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());

        Self {
            status,
            headers,
            body,
            duration,
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns true if the status code indicates a client error (4xx).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Returns true if the status code indicates a server error (5xx).
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }

    /// Attempts to parse the body as JSON.
    #[must_use]
    pub fn body_as_json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// Gets a header value by name (case-insensitive).
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&String> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    /// Content-Type header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&String> {
        self.get_header("content-type")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn response(status: u16, body: &str) -> ResponseSpec {
        ResponseSpec::new(
            status,
            HashMap::new(),
            body.as_bytes().to_vec(),
            Duration::from_millis(50),
        )
    }

    #[test]
    fn test_status_checks() {
        assert!(response(200, "").is_success());
        assert!(response(201, "").is_success());
        assert!(!response(404, "").is_success());
        assert!(response(404, "").is_client_error());
        assert!(response(500, "").is_server_error());
    }

    #[test]
    fn test_body_as_json() {
        let resp = response(200, r#"{"id": 20}"#);
        let json = resp.body_as_json().unwrap();
        assert_eq!(json["id"], 20);

        assert_eq!(response(200, "not json").body_as_json(), None);
    }

    #[test]
    fn test_get_header_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        let resp = ResponseSpec::new(200, headers, vec![], Duration::ZERO);

        assert_eq!(
            resp.get_header("content-type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(resp.content_type(), Some(&"application/json".to_string()));
        assert_eq!(resp.get_header("X-Missing"), None);
    }

    #[test]
    fn test_lossy_body() {
        let resp = ResponseSpec::new(200, HashMap::new(), vec![0xff, 0xfe], Duration::ZERO);
        assert!(!resp.body.is_empty());
    }
}
