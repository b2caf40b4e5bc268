//! Error types for sg-io.

use thiserror::Error;

use sg_map::MapError;

/// Errors raised while reading a scenario token stream.
///
/// Any of these aborts the run; the batch pipeline has no recovery policy
/// for malformed input.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("token {index}: expected an integer, got {token:?}")]
    InvalidToken { index: usize, token: String },

    #[error("input ended early: token {index} ({expected}) is missing")]
    Truncated { index: usize, expected: &'static str },

    #[error("token {index} ({expected}): value {value} is out of range")]
    OutOfRange {
        index: usize,
        expected: &'static str,
        value: i64,
    },

    #[error("{count} unexpected trailing tokens")]
    Trailing { count: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Map(#[from] MapError),
}

pub type ReadResult<T> = Result<T, ReadError>;

/// Errors that can occur while writing the CSV map report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;
