//! Ordinary least-squares linear regression
//!
//! Fits `y = slope * x + intercept` over a batch of `(x, y)` points. Used to
//! extrapolate the daily sales run-rate and to read the trend direction.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Denominators below this are treated as a degenerate (vertical) fit.
const DEGENERATE_SPREAD: f64 = 1e-10;

/// Fitted linear regression line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    slope: f64,
    intercept: f64,
    points: usize,
}

impl LinearRegression {
    /// Fit a line through the given `(x, y)` points
    pub fn fit(points: &[(f64, f64)]) -> Result<Self> {
        if points.len() < 2 {
            return Err(MathError::InsufficientData(format!(
                "Linear regression needs at least 2 points, have {}",
                points.len()
            )));
        }

        let n = points.len() as f64;
        let x_mean = points.iter().map(|&(x, _)| x).sum::<f64>() / n;
        let y_mean = points.iter().map(|&(_, y)| y).sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for &(x, y) in points {
            numerator += (x - x_mean) * (y - y_mean);
            denominator += (x - x_mean) * (x - x_mean);
        }

        if denominator.abs() < DEGENERATE_SPREAD {
            return Err(MathError::CalculationError(
                "Cannot calculate slope: x values are too similar".to_string(),
            ));
        }

        let slope = numerator / denominator;
        let intercept = y_mean - slope * x_mean;

        Ok(Self {
            slope,
            intercept,
            points: points.len(),
        })
    }

    /// Value of the fitted line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Slope of the fitted line (trend direction and strength)
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Intercept of the fitted line
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Number of points the line was fitted on
    pub fn len(&self) -> usize {
        self.points
    }

    /// Always false: a fit needs at least two points
    pub fn is_empty(&self) -> bool {
        self.points == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_perfect_line() {
        let points = [(1.0, 110.0), (2.0, 120.0), (3.0, 130.0), (4.0, 140.0)];
        let fit = LinearRegression::fit(&points).unwrap();

        assert_relative_eq!(fit.slope(), 10.0, epsilon = 1e-9);
        assert_relative_eq!(fit.intercept(), 100.0, epsilon = 1e-9);
        assert_relative_eq!(fit.predict(10.0), 200.0, epsilon = 1e-9);
        assert_eq!(fit.len(), 4);
    }

    #[test]
    fn test_flat_series_has_zero_slope() {
        let points = [(1.0, 50.0), (4.0, 50.0), (9.0, 50.0)];
        let fit = LinearRegression::fit(&points).unwrap();

        assert_eq!(fit.slope(), 0.0);
        assert_relative_eq!(fit.predict(30.0), 50.0);
    }

    #[test]
    fn test_noisy_fit() {
        // Least squares over x = 1..=5, y = [2, 4, 5, 4, 5]
        let points = [(1.0, 2.0), (2.0, 4.0), (3.0, 5.0), (4.0, 4.0), (5.0, 5.0)];
        let fit = LinearRegression::fit(&points).unwrap();

        assert_relative_eq!(fit.slope(), 0.6, epsilon = 1e-9);
        assert_relative_eq!(fit.intercept(), 2.2, epsilon = 1e-9);
    }

    #[test]
    fn test_insufficient_points() {
        assert!(matches!(
            LinearRegression::fit(&[(1.0, 10.0)]),
            Err(MathError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_degenerate_x() {
        let points = [(3.0, 10.0), (3.0, 20.0), (3.0, 30.0)];
        assert!(matches!(
            LinearRegression::fit(&points),
            Err(MathError::CalculationError(_))
        ));
    }
}
