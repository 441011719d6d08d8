//! Error types for the sales_forecast crate
//!
//! Errors describe caller mistakes and configuration problems only. A month
//! without enough data to forecast is not an error; see
//! [`ForecastOutcome`](crate::engine::ForecastOutcome).

use thiserror::Error;

/// Custom error types for the sales_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// A daily record with an impossible day or amount
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// A negative or non-finite goal amount
    #[error("Invalid goal: {0}")]
    InvalidGoal(String),

    /// A month/year selector or explicit month context that cannot exist
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    /// Configuration failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from JSON (de)serialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ForecastError::Config("window must be positive".to_string());
        assert_eq!(err.to_string(), "Configuration error: window must be positive");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "forecast.json");
        let err: ForecastError = io.into();
        assert!(matches!(err, ForecastError::Io(_)));
    }
}
