//! Postcheck Application - Case execution and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for external dependencies)
//! - The case runner that executes one test case end to end
//! - The smoke-suite catalog
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod runner;
pub mod suite;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{Clock, HttpClient, HttpClientError, ResultSink};
pub use runner::{CaseRunner, RunSummary};
pub use suite::smoke_suite;
