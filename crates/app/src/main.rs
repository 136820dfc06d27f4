//! Postcheck - Posts-API smoke suite entry point.
//!
//! Wires the adapters to the case runner, executes the suite
//! sequentially, and exits nonzero when any case did not pass.

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use postcheck_application::runner::{CaseRunner, RunSummary};
use postcheck_application::suite::smoke_suite;
use postcheck_infrastructure::{CsvResultLog, ReqwestHttpClient, SystemClock, load_posts};

/// Upstream exercised when `POSTCHECK_BASE_URL` is not set.
const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Ledger written when `POSTCHECK_LOG` is not set.
const DEFAULT_LOG_PATH: &str = "results.csv";

/// Fixture read when `POSTCHECK_FIXTURE` is not set.
const DEFAULT_FIXTURE_PATH: &str = "test_data.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get configuration from environment
    let base_url =
        std::env::var("POSTCHECK_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let log_path = std::env::var("POSTCHECK_LOG").unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string());
    let fixture_path =
        std::env::var("POSTCHECK_FIXTURE").unwrap_or_else(|_| DEFAULT_FIXTURE_PATH.to_string());

    let base: Url = base_url.parse()?;
    let fixture = load_posts(&PathBuf::from(&fixture_path)).await?;
    let cases = smoke_suite(&base, &fixture)?;

    tracing::info!(
        upstream = %base,
        ledger = %log_path,
        cases = cases.len(),
        "starting postcheck v{}",
        env!("CARGO_PKG_VERSION")
    );

    let runner = CaseRunner::new(
        Arc::new(ReqwestHttpClient::new()?),
        SystemClock::new(),
        Arc::new(CsvResultLog::new(&log_path)),
    );

    let mut summary = RunSummary::new();
    for case in &cases {
        let verdict = runner.run(case).await;
        tracing::info!(case = %case.name, verdict = %verdict, "case finished");
        summary.record(&verdict);
    }

    tracing::info!(
        total = summary.total,
        passed = summary.passed,
        failed = summary.failed,
        errored = summary.errored,
        "run complete"
    );

    if !summary.all_passed() {
        std::process::exit(1);
    }
    Ok(())
}
