//! Linear trend projection fitted on day of month

use crate::config::REGRESSION_MIN_DAYS;
use crate::methods::{ProjectionInput, ProjectionMethod};
use crate::records::DailySeries;
use sales_math::LinearRegression;

/// Least-squares fit of amount against day of month, extrapolated day by
/// day from the last recorded day. Negative daily values are floored at zero.
#[derive(Debug, Clone, Copy)]
pub struct LinearTrend {
    min_days: usize,
}

impl LinearTrend {
    pub fn new(min_days: usize) -> Self {
        Self { min_days }
    }

    /// Fit the series, or `None` below the threshold or on a degenerate fit
    pub fn fit(&self, series: &DailySeries) -> Option<LinearRegression> {
        if !self.is_active(series) {
            return None;
        }

        match LinearRegression::fit(&series.points()) {
            Ok(fit) => Some(fit),
            Err(err) => {
                tracing::debug!(error = %err, "regression fit unavailable");
                None
            }
        }
    }
}

impl Default for LinearTrend {
    fn default() -> Self {
        Self::new(REGRESSION_MIN_DAYS)
    }
}

impl ProjectionMethod for LinearTrend {
    fn name(&self) -> &str {
        "linear regression"
    }

    fn min_days(&self) -> usize {
        self.min_days
    }

    fn project(&self, input: &ProjectionInput<'_>) -> Option<f64> {
        let fit = self.fit(input.series)?;
        project_fit(&fit, input)
    }
}

/// Sum the fitted line over the remaining days following the last recorded day
pub(crate) fn project_fit(fit: &LinearRegression, input: &ProjectionInput<'_>) -> Option<f64> {
    let last_day = input.series.last_day()?;

    let remaining: f64 = (1..=input.days_remaining)
        .map(|offset| fit.predict(f64::from(last_day + offset)).max(0.0))
        .sum();

    Some((input.total_so_far + remaining).min(f64::MAX))
}
