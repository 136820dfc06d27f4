//! Result sink port

use std::future::Future;

use postcheck_domain::ResultRecord;

/// Port for recording executed-case outcomes.
///
/// Appends are best-effort by contract: implementations recover from their
/// own I/O failures and never surface them to the runner, so a broken
/// ledger cannot change a verdict.
pub trait ResultSink: Send + Sync {
    /// Records one executed case.
    fn append(&self, record: &ResultRecord) -> impl Future<Output = ()> + Send;
}
