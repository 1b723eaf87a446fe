//! Error types for the stock_trend crate

use thiserror::Error;

/// Custom error types for the stock_trend crate
#[derive(Debug, Error)]
pub enum TrendError {
    /// Error from IO operations (missing or unreadable input file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from malformed dates, prices, or window strings
    #[error("Parse error: {0}")]
    Parse(String),

    /// Error from invalid smoothing parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from chart rendering
    #[error("Chart error: {0}")]
    Chart(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, TrendError>;

impl From<csv::Error> for TrendError {
    fn from(err: csv::Error) -> Self {
        let msg = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => TrendError::Io(io_err),
            _ => TrendError::Parse(msg),
        }
    }
}

impl From<chrono::ParseError> for TrendError {
    fn from(err: chrono::ParseError) -> Self {
        TrendError::Parse(err.to_string())
    }
}

impl From<std::num::ParseFloatError> for TrendError {
    fn from(err: std::num::ParseFloatError) -> Self {
        TrendError::Parse(err.to_string())
    }
}
