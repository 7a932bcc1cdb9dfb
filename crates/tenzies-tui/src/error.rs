//! Error types for the terminal UI.

use thiserror::Error;

/// Result type for terminal UI operations.
pub type TuiResult<T> = Result<T, TuiError>;

/// Errors that can stop the terminal UI.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Setting up, drawing to, or reading from the terminal failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The log subscriber could not be installed.
    #[error("logging error: {0}")]
    Logging(String),
}
