//! Case execution.
//!
//! The runner is the single path every case goes through: one HTTP call,
//! check evaluation, verdict classification, one ledger append. Keeping the
//! path shared keeps verdicts and record shapes uniform across the suite.

use std::sync::Arc;

use postcheck_domain::{ResultRecord, TestCase, Verdict};

use crate::ports::{Clock, HttpClient, ResultSink};

/// Ledger timestamp format: local wall clock, second precision.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Response descriptor recorded when no response was received.
const NO_RESPONSE: &str = "-";

/// Executes test cases against the upstream and records every outcome.
pub struct CaseRunner<C, K, S> {
    client: Arc<C>,
    clock: K,
    sink: Arc<S>,
}

impl<C, K, S> CaseRunner<C, K, S>
where
    C: HttpClient,
    K: Clock,
    S: ResultSink,
{
    /// Creates a new runner over the given adapters.
    pub const fn new(client: Arc<C>, clock: K, sink: Arc<S>) -> Self {
        Self {
            client,
            clock,
            sink,
        }
    }

    /// Runs one case to completion, including its ledger append.
    ///
    /// Classification is uniform for every case: all checks pass ->
    /// `Pass`; any check fails -> `Fail`; the call itself fails ->
    /// `Error` with the transport detail. The outcome is always recorded,
    /// and exactly once.
    pub async fn run(&self, case: &TestCase) -> Verdict {
        let (verdict, response) = match self.client.execute(&case.request).await {
            Ok(response) => {
                let any_failed = case
                    .checks
                    .iter()
                    .any(|check| !check.evaluate(&response).passed);
                let verdict = if any_failed { Verdict::Fail } else { Verdict::Pass };
                (verdict, response.status.to_string())
            }
            Err(e) => (Verdict::Error(e.to_string()), NO_RESPONSE.to_string()),
        };

        let record = ResultRecord {
            timestamp: self.clock.now().format(TIMESTAMP_FORMAT).to_string(),
            request_type: case.label.clone(),
            test_name: case.name.clone(),
            response,
            verdict: verdict.clone(),
        };
        self.sink.append(&record).await;

        verdict
    }
}

/// Aggregated outcome of a suite run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Total executed cases.
    pub total: usize,
    /// Cases whose checks all passed.
    pub passed: usize,
    /// Cases that failed a check.
    pub failed: usize,
    /// Cases that errored before their checks could run.
    pub errored: usize,
}

impl RunSummary {
    /// Creates an empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one executed case.
    pub fn record(&mut self, verdict: &Verdict) {
        self.total += 1;
        match verdict {
            Verdict::Pass => self.passed += 1,
            Verdict::Fail => self.failed += 1,
            Verdict::Error(_) => self.errored += 1,
        }
    }

    /// Returns true when every executed case passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone};
    use postcheck_domain::{Check, RequestSpec, ResponseSpec, StatusExpectation};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    use crate::ports::HttpClientError;

    /// HTTP client stand-in serving one canned result.
    struct MockHttpClient {
        response: Result<ResponseSpec, HttpClientError>,
    }

    impl MockHttpClient {
        fn responding(status: u16, body: &str) -> Self {
            Self {
                response: Ok(ResponseSpec::new(
                    status,
                    HashMap::new(),
                    body.as_bytes().to_vec(),
                    Duration::from_millis(25),
                )),
            }
        }

        fn failing(error: HttpClientError) -> Self {
            Self {
                response: Err(error),
            }
        }
    }

    impl HttpClient for MockHttpClient {
        async fn execute(
            &self,
            _request: &RequestSpec,
        ) -> Result<ResponseSpec, HttpClientError> {
            self.response.clone()
        }
    }

    /// Clock stand-in pinned to a known instant.
    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            Local.with_ymd_and_hms(2024, 5, 2, 9, 30, 0).unwrap()
        }
    }

    /// Sink stand-in collecting records in memory.
    #[derive(Default)]
    struct RecordingSink {
        records: Mutex<Vec<ResultRecord>>,
    }

    impl RecordingSink {
        fn records(&self) -> Vec<ResultRecord> {
            self.records.lock().unwrap().clone()
        }
    }

    impl ResultSink for RecordingSink {
        async fn append(&self, record: &ResultRecord) {
            self.records.lock().unwrap().push(record.clone());
        }
    }

    fn make_runner(
        client: MockHttpClient,
    ) -> (
        CaseRunner<MockHttpClient, FixedClock, RecordingSink>,
        Arc<RecordingSink>,
    ) {
        let sink = Arc::new(RecordingSink::default());
        let runner = CaseRunner::new(Arc::new(client), FixedClock, Arc::clone(&sink));
        (runner, sink)
    }

    fn get_by_id_case() -> TestCase {
        TestCase::new(
            "get_post_by_id",
            "GET - by id",
            RequestSpec::get("https://api.example.com/posts/20"),
            vec![
                Check::Status {
                    expected: StatusExpectation::one_of([200, 201]),
                },
                Check::BodyIsObject,
                Check::FieldEquals {
                    field: "id".to_string(),
                    expected: serde_json::json!(20),
                },
            ],
        )
    }

    #[tokio::test]
    async fn test_all_checks_pass() {
        let (runner, sink) = make_runner(MockHttpClient::responding(200, r#"{"id": 20}"#));

        let verdict = runner.run(&get_by_id_case()).await;

        assert_eq!(verdict, Verdict::Pass);
        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].timestamp, "2024-05-02 09:30:00");
        assert_eq!(records[0].request_type, "GET - by id");
        assert_eq!(records[0].test_name, "get_post_by_id");
        assert_eq!(records[0].response, "200");
        assert_eq!(records[0].verdict, Verdict::Pass);
    }

    #[tokio::test]
    async fn test_failed_check_is_fail_and_still_recorded() {
        let (runner, sink) = make_runner(MockHttpClient::responding(200, r#"{"id": 21}"#));

        let verdict = runner.run(&get_by_id_case()).await;

        assert_eq!(verdict, Verdict::Fail);
        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].verdict, Verdict::Fail);
        assert_eq!(records[0].response, "200");
    }

    #[tokio::test]
    async fn test_transport_error_is_error_and_still_recorded() {
        let (runner, sink) = make_runner(MockHttpClient::failing(
            HttpClientError::ConnectionFailed("dns failure".to_string()),
        ));

        let verdict = runner.run(&get_by_id_case()).await;

        assert_eq!(
            verdict,
            Verdict::Error("connection failed: dns failure".to_string())
        );
        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].response, "-");
        assert_eq!(
            records[0].verdict,
            Verdict::Error("connection failed: dns failure".to_string())
        );
    }

    #[tokio::test]
    async fn test_expected_server_error_passes() {
        let case = TestCase::new(
            "put_update_post_with_invalid_id",
            "PUT - Invalid id",
            RequestSpec::put(
                "https://api.example.com/posts/99999",
                serde_json::json!({"id": 99999}),
            ),
            vec![Check::Status {
                expected: StatusExpectation::exact(500),
            }],
        );

        let (runner, _) = make_runner(MockHttpClient::responding(500, ""));
        assert_eq!(runner.run(&case).await, Verdict::Pass);

        let (runner, _) = make_runner(MockHttpClient::responding(200, ""));
        assert_eq!(runner.run(&case).await, Verdict::Fail);
    }

    #[tokio::test]
    async fn test_delete_records_status_code_not_body() {
        let case = TestCase::new(
            "delete_post",
            "Valid DELETE",
            RequestSpec::delete("https://api.example.com/posts/3"),
            vec![Check::Status {
                expected: StatusExpectation::range(200, 205),
            }],
        );

        let (runner, sink) = make_runner(MockHttpClient::responding(204, r#"{"ignored": true}"#));
        let verdict = runner.run(&case).await;

        assert_eq!(verdict, Verdict::Pass);
        assert_eq!(sink.records()[0].response, "204");
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = RunSummary::new();
        summary.record(&Verdict::Pass);
        summary.record(&Verdict::Pass);
        summary.record(&Verdict::Fail);
        summary.record(&Verdict::Error("boom".to_string()));

        assert_eq!(summary.total, 4);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.errored, 1);
        assert!(!summary.all_passed());
    }

    #[test]
    fn test_summary_all_passed() {
        let mut summary = RunSummary::new();
        summary.record(&Verdict::Pass);
        assert!(summary.all_passed());
    }
}
