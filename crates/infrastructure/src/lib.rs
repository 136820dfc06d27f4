//! Postcheck Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer: the reqwest HTTP client, the system clock, the
//! CSV result ledger, and the fixture loader.

pub mod adapters;
pub mod persistence;

pub use adapters::{ReqwestHttpClient, SystemClock};
pub use persistence::{CsvResultLog, FixtureError, ResultLogError, load_posts};
