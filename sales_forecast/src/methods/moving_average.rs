//! Trailing moving average projection over the most recent recorded days

use crate::config::{MOVING_AVERAGE_MIN_DAYS, MOVING_AVERAGE_WINDOW};
use crate::error::{ForecastError, Result};
use crate::methods::{ProjectionInput, ProjectionMethod};
use sales_math::trailing_mean;

/// Mean of the most recent recorded days carried forward
#[derive(Debug, Clone)]
pub struct TrailingAverage {
    name: String,
    window: usize,
    min_days: usize,
}

impl TrailingAverage {
    /// Create a trailing average over the last `window` recorded days
    pub fn new(window: usize, min_days: usize) -> Result<Self> {
        if window == 0 {
            return Err(ForecastError::Config(
                "Window size must be positive".to_string(),
            ));
        }

        Ok(Self {
            name: format!("moving average (window={})", window),
            window,
            min_days,
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl Default for TrailingAverage {
    fn default() -> Self {
        Self {
            name: format!("moving average (window={})", MOVING_AVERAGE_WINDOW),
            window: MOVING_AVERAGE_WINDOW,
            min_days: MOVING_AVERAGE_MIN_DAYS,
        }
    }
}

impl ProjectionMethod for TrailingAverage {
    fn name(&self) -> &str {
        &self.name
    }

    fn min_days(&self) -> usize {
        self.min_days
    }

    fn project(&self, input: &ProjectionInput<'_>) -> Option<f64> {
        if input.series.is_empty() || !self.is_active(input.series) {
            return None;
        }

        // Fewer recorded days than the window: use the run rate instead
        let per_day = trailing_mean(&input.series.amounts(), self.window)
            .unwrap_or(input.average_per_day);

        Some(input.project_constant(per_day))
    }
}
