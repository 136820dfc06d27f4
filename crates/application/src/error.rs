//! Application error types

use postcheck_domain::DomainError;
use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The configured base URL cannot address a suite resource.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The fixture data does not cover a required case.
    #[error("fixture error: {0}")]
    Fixture(String),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
