//! Response checks and status expectations.
//!
//! This module provides the types for defining and evaluating checks on
//! HTTP responses. Checks are pure: they only read the response snapshot.

use serde::{Deserialize, Serialize};

use crate::response::ResponseSpec;

/// Expected status code value, range, or set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum StatusExpectation {
    /// Exact status code.
    Exact(u16),
    /// Range of status codes (e.g., 200-205).
    Range {
        /// Minimum status code (inclusive).
        min: u16,
        /// Maximum status code (inclusive).
        max: u16,
    },
    /// One of multiple status codes.
    OneOf(Vec<u16>),
}

impl StatusExpectation {
    /// Creates an exact status expectation.
    #[must_use]
    pub const fn exact(code: u16) -> Self {
        Self::Exact(code)
    }

    /// Creates an inclusive range expectation.
    #[must_use]
    pub const fn range(min: u16, max: u16) -> Self {
        Self::Range { min, max }
    }

    /// Creates a one-of-set expectation.
    #[must_use]
    pub fn one_of(codes: impl Into<Vec<u16>>) -> Self {
        Self::OneOf(codes.into())
    }

    /// Checks if a status code matches this expectation.
    #[must_use]
    pub fn matches(&self, status: u16) -> bool {
        match self {
            Self::Exact(expected) => status == *expected,
            Self::Range { min, max } => status >= *min && status <= *max,
            Self::OneOf(codes) => codes.contains(&status),
        }
    }

    /// Gets a description of the expectation.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Exact(code) => format!("= {code}"),
            Self::Range { min, max } => format!("in {min}-{max}"),
            Self::OneOf(codes) => {
                let codes_str: Vec<_> = codes.iter().map(ToString::to_string).collect();
                format!("in [{}]", codes_str.join(", "))
            }
        }
    }
}

/// A single check evaluated against a response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Check {
    /// Status code falls within the accepted set.
    Status {
        /// Accepted status codes.
        expected: StatusExpectation,
    },
    /// Status code falls outside the rejected set.
    StatusNot {
        /// Rejected status codes.
        rejected: StatusExpectation,
    },
    /// Body parses as a JSON object.
    BodyIsObject,
    /// Named top-level body field equals the expected JSON value.
    FieldEquals {
        /// Field name.
        field: String,
        /// Expected value (as JSON).
        expected: serde_json::Value,
    },
    /// Named top-level body field is present.
    FieldPresent {
        /// Field name.
        field: String,
    },
}

impl Check {
    /// Gets a human-readable description of this check.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Status { expected } => format!("Status code {}", expected.description()),
            Self::StatusNot { rejected } => format!("Status code not {}", rejected.description()),
            Self::BodyIsObject => "Body is a JSON object".to_string(),
            Self::FieldEquals { field, expected } => format!("Field '{field}' equals {expected}"),
            Self::FieldPresent { field } => format!("Field '{field}' present"),
        }
    }

    /// Evaluates this check against a response.
    #[must_use]
    pub fn evaluate(&self, response: &ResponseSpec) -> CheckResult {
        match self {
            Self::Status { expected } => {
                let actual = response.status;
                if expected.matches(actual) {
                    CheckResult::pass_with_value(self.clone(), actual.to_string())
                } else {
                    CheckResult::fail_with_value(
                        self.clone(),
                        actual.to_string(),
                        format!("expected status {}, got {actual}", expected.description()),
                    )
                }
            }
            Self::StatusNot { rejected } => {
                let actual = response.status;
                if rejected.matches(actual) {
                    CheckResult::fail_with_value(
                        self.clone(),
                        actual.to_string(),
                        format!("status {actual} is {}", rejected.description()),
                    )
                } else {
                    CheckResult::pass_with_value(self.clone(), actual.to_string())
                }
            }
            Self::BodyIsObject => match response.body_as_json() {
                Some(serde_json::Value::Object(_)) => CheckResult::pass(self.clone()),
                Some(other) => CheckResult::fail_with_value(
                    self.clone(),
                    json_kind(&other).to_string(),
                    "body is not a JSON object",
                ),
                None => CheckResult::fail(self.clone(), "body is not valid JSON"),
            },
            Self::FieldEquals { field, expected } => match body_field(response, field) {
                FieldLookup::Found(value) => {
                    if &value == expected {
                        CheckResult::pass_with_value(self.clone(), value.to_string())
                    } else {
                        CheckResult::fail_with_value(
                            self.clone(),
                            value.to_string(),
                            format!("field '{field}' mismatch: expected {expected}, got {value}"),
                        )
                    }
                }
                FieldLookup::Missing => {
                    CheckResult::fail(self.clone(), format!("field '{field}' not found"))
                }
                FieldLookup::NotJson => CheckResult::fail(self.clone(), "body is not valid JSON"),
            },
            Self::FieldPresent { field } => match body_field(response, field) {
                FieldLookup::Found(value) => {
                    CheckResult::pass_with_value(self.clone(), value.to_string())
                }
                FieldLookup::Missing => {
                    CheckResult::fail(self.clone(), format!("field '{field}' not found"))
                }
                FieldLookup::NotJson => CheckResult::fail(self.clone(), "body is not valid JSON"),
            },
        }
    }
}

/// Outcome of looking up a top-level body field.
enum FieldLookup {
    Found(serde_json::Value),
    Missing,
    NotJson,
}

/// Looks up a top-level field of the response body.
fn body_field(response: &ResponseSpec, field: &str) -> FieldLookup {
    match response.body_as_json() {
        Some(json) => json
            .get(field)
            .map_or(FieldLookup::Missing, |v| FieldLookup::Found(v.clone())),
        None => FieldLookup::NotJson,
    }
}

/// Short name for a JSON value kind, used in failure messages.
const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Result of evaluating a single check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    /// The check that was evaluated.
    pub check: Check,
    /// Whether the check passed.
    pub passed: bool,
    /// Actual value found (for display).
    pub actual: Option<String>,
    /// Error message if failed.
    pub error: Option<String>,
}

impl CheckResult {
    /// Creates a passed result.
    #[must_use]
    pub const fn pass(check: Check) -> Self {
        Self {
            check,
            passed: true,
            actual: None,
            error: None,
        }
    }

    /// Creates a passed result with the actual value.
    #[must_use]
    pub fn pass_with_value(check: Check, actual: impl Into<String>) -> Self {
        Self {
            check,
            passed: true,
            actual: Some(actual.into()),
            error: None,
        }
    }

    /// Creates a failed result.
    #[must_use]
    pub fn fail(check: Check, error: impl Into<String>) -> Self {
        Self {
            check,
            passed: false,
            actual: None,
            error: Some(error.into()),
        }
    }

    /// Creates a failed result with the actual value.
    #[must_use]
    pub fn fail_with_value(check: Check, actual: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            check,
            passed: false,
            actual: Some(actual.into()),
            error: Some(error.into()),
        }
    }
}
