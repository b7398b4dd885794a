//! Report loading for cuke.
//!
//! This crate reads a Cucumber test-run report — a stream of message
//! envelopes in NDJSON form — and turns it into flat scenario records plus
//! execution statistics. It recognizes only the envelope kinds the viewer
//! needs (gherkin documents, pickles, test cases, step results, run
//! timestamps, meta) and ignores everything else in the stream.

#![warn(missing_docs)]

mod build;
mod error;
mod messages;
mod summary;

pub use build::{Report, Scenario};
pub use error::ReportError;
pub use messages::{Status, Timestamp};
pub use summary::{ExecutionSummary, format_age, format_duration};
