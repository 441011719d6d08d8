//! Recency-weighted average projection

use crate::config::WEIGHTED_MIN_DAYS;
use crate::methods::{ProjectionInput, ProjectionMethod};
use sales_math::weighted_mean;

/// Recorded amounts averaged with linearly increasing weights (the k-th
/// recorded day weighs k), carried forward.
#[derive(Debug, Clone, Copy)]
pub struct RecencyWeighted {
    min_days: usize,
}

impl RecencyWeighted {
    pub fn new(min_days: usize) -> Self {
        Self { min_days }
    }
}

impl Default for RecencyWeighted {
    fn default() -> Self {
        Self::new(WEIGHTED_MIN_DAYS)
    }
}

impl ProjectionMethod for RecencyWeighted {
    fn name(&self) -> &str {
        "weighted average"
    }

    fn min_days(&self) -> usize {
        self.min_days
    }

    fn project(&self, input: &ProjectionInput<'_>) -> Option<f64> {
        if !self.is_active(input.series) {
            return None;
        }

        let per_day = weighted_mean(&input.series.amounts()).ok()?;
        Some(input.project_constant(per_day))
    }
}
