//! HTTP Client port

use std::future::Future;

use postcheck_domain::{RequestSpec, ResponseSpec};
use thiserror::Error;

/// Transport-level errors surfaced by HTTP client adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpClientError {
    /// The request URL was rejected by the client.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// The configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// The connection to the upstream host failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Any other transport-level failure.
    #[error("{0}")]
    Other(String),
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing the case
/// runner to execute against an in-process stand-in instead of the live
/// upstream.
pub trait HttpClient: Send + Sync {
    /// Executes an HTTP request and returns the observed response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails due to network issues,
    /// timeout, or other transport-level problems.
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = Result<ResponseSpec, HttpClientError>> + Send;
}
