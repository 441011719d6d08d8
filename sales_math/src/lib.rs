//! # Sales Math
//!
//! Numeric building blocks used by the sales forecasting engine.
//! This crate provides the descriptive statistics and least-squares
//! regression that the projection methods are assembled from.
//!
//! Every function guards its divisions: empty input is reported as
//! [`MathError::InsufficientData`] and degenerate denominators never leak
//! `NaN` or infinities to the caller.

use thiserror::Error;

pub mod regression;
pub mod statistics;

pub use regression::LinearRegression;
pub use statistics::{
    coefficient_of_variation, mean, population_std_dev, trailing_mean, weighted_mean,
};

/// Errors that can occur in sales math calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for sales math operations
pub type Result<T> = std::result::Result<T, MathError>;
