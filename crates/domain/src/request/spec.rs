//! Request specification type

use serde::{Deserialize, Serialize};

use super::HttpMethod;

/// Complete specification for one HTTP request against the upstream API.
///
/// Every body in this suite is JSON, so the body is carried directly as a
/// `serde_json::Value` rather than as typed content variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute target URL
    pub url: String,
    /// Optional JSON body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

impl RequestSpec {
    /// Creates a GET request for the given URL.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            body: None,
        }
    }

    /// Creates a POST request with a JSON body.
    #[must_use]
    pub fn post(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            body: Some(body),
        }
    }

    /// Creates a PUT request with a JSON body.
    #[must_use]
    pub fn put(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: HttpMethod::Put,
            url: url.into(),
            body: Some(body),
        }
    }

    /// Creates a PATCH request with a JSON body.
    #[must_use]
    pub fn patch(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: HttpMethod::Patch,
            url: url.into(),
            body: Some(body),
        }
    }

    /// Creates a DELETE request for the given URL.
    #[must_use]
    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Delete,
            url: url.into(),
            body: None,
        }
    }

    /// Returns whether this request carries a body.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        self.body.is_some()
    }
}
