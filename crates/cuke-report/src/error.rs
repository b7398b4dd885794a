//! Error types for report loading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to open or read the report file.
    #[error("failed to read report {path}: {source}")]
    ReadFile {
        /// Path to the report that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to read from the report stream.
    #[error("failed to read report stream: {0}")]
    ReadStream(#[source] io::Error),

    /// A line in the stream was not a valid message envelope.
    #[error("malformed message envelope on line {line}: {source}")]
    Malformed {
        /// 1-based line number within the stream.
        line: usize,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}
