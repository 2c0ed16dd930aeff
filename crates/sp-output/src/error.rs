//! Error types for sp-output.

use thiserror::Error;

/// Errors that can occur when writing generated datasets.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("city {city:?}: {agents} agents but {assignments} assignments")]
    RowCountMismatch {
        city:        String,
        agents:      usize,
        assignments: usize,
    },
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
