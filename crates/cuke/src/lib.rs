//! cuke: a command-line explorer for Cucumber test-run reports.
//!
//! `cuke` loads a report — the NDJSON stream of Cucumber message envelopes
//! that runners emit — builds an in-memory index over scenario names, and
//! answers free-text searches against it. It also lists scenarios and
//! summarizes the run (counts by status, pass rate, duration).

#![warn(missing_docs)]

pub mod cli;
