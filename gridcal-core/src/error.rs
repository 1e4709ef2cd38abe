//! Error types for gridcal.

use thiserror::Error;

/// Errors that can occur in gridcal operations.
#[derive(Error, Debug)]
pub enum GridCalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    DateParse(String),

    #[error("Event ends before it starts ({start} > {end})")]
    InvertedRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("No event with id {0}")]
    EventNotFound(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for gridcal operations.
pub type GridCalResult<T> = Result<T, GridCalError>;
