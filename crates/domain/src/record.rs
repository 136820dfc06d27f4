//! Test cases and result records.

use crate::check::Check;
use crate::request::RequestSpec;
use crate::verdict::Verdict;

/// One smoke-test case: a named request plus the checks on its response.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    /// Case name, unique within the suite.
    pub name: String,
    /// Human-readable request-type label for the ledger.
    pub label: String,
    /// The request to issue.
    pub request: RequestSpec,
    /// Checks evaluated against the response.
    pub checks: Vec<Check>,
}

impl TestCase {
    /// Creates a new test case.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        request: RequestSpec,
        checks: Vec<Check>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            request,
            checks,
        }
    }
}

/// One row of the result ledger.
///
/// Append-only; exactly one record is produced per executed case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    /// Local wall-clock timestamp, second precision.
    pub timestamp: String,
    /// Request-type label of the case.
    pub request_type: String,
    /// Case name.
    pub test_name: String,
    /// Status code of the completed call, or `-` when none was received.
    pub response: String,
    /// Final verdict.
    pub verdict: Verdict,
}

impl ResultRecord {
    /// Returns the record as ledger fields, in column order.
    #[must_use]
    pub fn fields(&self) -> [String; 5] {
        [
            self.timestamp.clone(),
            self.request_type.clone(),
            self.test_name.clone(),
            self.response.clone(),
            self.verdict.to_string(),
        ]
    }
}
