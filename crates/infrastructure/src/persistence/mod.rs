//! File persistence: the CSV result ledger and fixture loading.

mod csv_log;
mod fixture;

pub use csv_log::{CsvResultLog, ResultLogError};
pub use fixture::{FixtureError, load_posts};
