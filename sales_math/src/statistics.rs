//! Descriptive statistics over daily amounts
//!
//! Contains:
//! - Arithmetic mean
//! - Population standard deviation
//! - Coefficient of variation
//! - Recency-weighted mean
//! - Trailing (last N values) mean

use crate::{MathError, Result};
use statrs::statistics::Statistics;

/// Means with an absolute value below this are treated as zero.
const ZERO_MEAN_TOLERANCE: f64 = 1e-12;

fn ensure_not_empty(values: &[f64], what: &str) -> Result<()> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(format!(
            "Cannot calculate {} of an empty series",
            what
        )));
    }
    Ok(())
}

/// Arithmetic mean of the values
pub fn mean(values: &[f64]) -> Result<f64> {
    ensure_not_empty(values, "mean")?;
    Ok(values.iter().mean())
}

/// Population standard deviation (divides by `n`, not `n - 1`)
pub fn population_std_dev(values: &[f64]) -> Result<f64> {
    ensure_not_empty(values, "standard deviation")?;
    Ok(values.iter().population_std_dev())
}

/// Coefficient of variation: population standard deviation divided by the mean.
///
/// A series whose mean is zero has no meaningful relative spread; the
/// coefficient is defined as `0.0` in that case rather than dividing by zero.
pub fn coefficient_of_variation(values: &[f64]) -> Result<f64> {
    let avg = mean(values)?;
    if avg.abs() < ZERO_MEAN_TOLERANCE {
        return Ok(0.0);
    }

    let std_dev = population_std_dev(values)?;
    Ok(std_dev / avg)
}

/// Mean weighted by position: the k-th value (1-based) has weight `k`,
/// so later observations count more.
pub fn weighted_mean(values: &[f64]) -> Result<f64> {
    ensure_not_empty(values, "weighted mean")?;

    let (weighted_sum, weight_total) = values
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(sum, weights), (i, &value)| {
            let weight = (i + 1) as f64;
            (sum + value * weight, weights + weight)
        });

    Ok(weighted_sum / weight_total)
}

/// Mean of the last `window` values
pub fn trailing_mean(values: &[f64], window: usize) -> Result<f64> {
    if window == 0 {
        return Err(MathError::InvalidInput(
            "Window must be greater than zero".to_string(),
        ));
    }
    if values.len() < window {
        return Err(MathError::InsufficientData(format!(
            "Not enough data for trailing mean. Need {} values, have {}.",
            window,
            values.len()
        )));
    }

    mean(&values[values.len() - window..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_and_std_dev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&values).unwrap(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(population_std_dev(&values).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_series_is_rejected() {
        assert!(matches!(mean(&[]), Err(MathError::InsufficientData(_))));
        assert!(population_std_dev(&[]).is_err());
        assert!(weighted_mean(&[]).is_err());
        assert!(coefficient_of_variation(&[]).is_err());
    }

    #[test]
    fn test_coefficient_of_variation() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(coefficient_of_variation(&values).unwrap(), 0.4, epsilon = 1e-12);

        // Constant series has no spread
        assert_relative_eq!(
            coefficient_of_variation(&[300.0, 300.0, 300.0]).unwrap(),
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_coefficient_of_variation_zero_mean() {
        let cv = coefficient_of_variation(&[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(cv, 0.0);
        assert!(cv.is_finite());
    }

    #[test]
    fn test_weighted_mean_favors_recent_values() {
        // (1*100 + 2*200 + 3*300) / 6
        let wm = weighted_mean(&[100.0, 200.0, 300.0]).unwrap();
        assert_relative_eq!(wm, 1400.0 / 6.0, epsilon = 1e-12);
        assert!(wm > mean(&[100.0, 200.0, 300.0]).unwrap());
    }

    #[test]
    fn test_trailing_mean() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        assert_relative_eq!(trailing_mean(&values, 3).unwrap(), 8.0, epsilon = 1e-12);
        assert_relative_eq!(trailing_mean(&values, 9).unwrap(), 5.0, epsilon = 1e-12);

        assert!(matches!(
            trailing_mean(&values, 0),
            Err(MathError::InvalidInput(_))
        ));
        assert!(matches!(
            trailing_mean(&values, 10),
            Err(MathError::InsufficientData(_))
        ));
    }
}
