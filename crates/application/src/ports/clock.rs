//! Clock port for time-related operations

use chrono::{DateTime, Local};

/// Port for reading the wall clock.
///
/// Ledger timestamps are local wall-clock time; this abstraction allows
/// testing timestamp-dependent code with a fixed implementation.
pub trait Clock: Send + Sync {
    /// Returns the current local timestamp.
    fn now(&self) -> DateTime<Local>;
}
