//! End-of-month projection methods
//!
//! Each method turns the month-to-date series into an independent
//! full-month projection `total_so_far + estimated remaining sales`, or
//! declines (`None`) when the series is below its activation threshold.

use crate::records::DailySeries;
use std::fmt::Debug;

pub mod linear_regression;
pub mod moving_average;
pub mod simple_average;
pub mod weighted_average;

pub use linear_regression::LinearTrend;
pub use moving_average::TrailingAverage;
pub use simple_average::SimpleAverage;
pub use weighted_average::RecencyWeighted;

/// Everything a method needs to project the month
#[derive(Debug, Clone, Copy)]
pub struct ProjectionInput<'a> {
    pub series: &'a DailySeries,
    pub total_so_far: f64,
    /// Month-to-date total divided by days elapsed
    pub average_per_day: f64,
    pub days_remaining: u32,
}

impl ProjectionInput<'_> {
    /// Project with a constant per-day estimate over the remaining days,
    /// saturating at `f64::MAX`
    pub fn project_constant(&self, per_day: f64) -> f64 {
        (self.total_so_far + per_day.max(0.0) * f64::from(self.days_remaining)).min(f64::MAX)
    }
}

/// Common interface for projection methods
pub trait ProjectionMethod: Debug {
    /// Name of the method
    fn name(&self) -> &str;

    /// Recorded days needed before the method activates
    fn min_days(&self) -> usize;

    /// Full-month projection, or `None` when the method cannot run on this series
    fn project(&self, input: &ProjectionInput<'_>) -> Option<f64>;

    /// Whether the series is long enough for this method
    fn is_active(&self, series: &DailySeries) -> bool {
        series.len() >= self.min_days()
    }
}
