//! CSV result ledger.
//!
//! Appends one row per executed case to an append-only CSV file. The
//! header row is written only when the file is empty at open time, so
//! repeated runs against an existing ledger only add data rows. The file
//! is opened and closed anew on every append and is never rotated or
//! truncated.

use std::path::{Path, PathBuf};

use postcheck_application::ports::ResultSink;
use postcheck_domain::ResultRecord;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Column header of the ledger file.
const HEADER: &str = "Timestamp,Request Type,Test Name,Response,Result";

/// Error type for ledger writes.
#[derive(Debug, thiserror::Error)]
pub enum ResultLogError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Append-only CSV ledger of case outcomes.
#[derive(Debug, Clone)]
pub struct CsvResultLog {
    path: PathBuf,
}

impl CsvResultLog {
    /// Creates a ledger writing to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the ledger path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record, creating the file and header as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or written.
    pub async fn try_append(&self, record: &ResultRecord) -> Result<(), ResultLogError> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await?;

        let mut out = String::new();
        if file.metadata().await?.len() == 0 {
            out.push_str(HEADER);
            out.push('\n');
        }
        out.push_str(&to_row(record));
        out.push('\n');

        file.write_all(out.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

impl ResultSink for CsvResultLog {
    /// Best-effort append: failures are warned about and swallowed, never
    /// surfaced to the runner.
    async fn append(&self, record: &ResultRecord) {
        if let Err(e) = self.try_append(record).await {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                "failed to record case outcome"
            );
        }
    }
}

/// Renders one record as a CSV row.
fn to_row(record: &ResultRecord) -> String {
    record
        .fields()
        .iter()
        .map(|field| escape(field))
        .collect::<Vec<_>>()
        .join(",")
}

/// Quotes a field when it contains a delimiter, quote, or line break.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
