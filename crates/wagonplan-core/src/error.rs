//! Error types for wagonplan

use thiserror::Error;

/// Main error type for wagonplan operations
#[derive(Debug, Error)]
pub enum WagonPlanError {
    /// Input rejected before any search started
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error in optimizer configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WagonPlanError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        WagonPlanError::InvalidInput(msg.into())
    }

    /// Returns true if the error was caused by rejected input data.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, WagonPlanError::InvalidInput(_))
    }
}

/// Result type alias for wagonplan operations
pub type Result<T> = std::result::Result<T, WagonPlanError>;
