//! Simple average projection: the month-to-date run rate

use crate::methods::{ProjectionInput, ProjectionMethod};

/// Month-to-date run rate: the average per elapsed day carried forward.
///
/// Always available once a single day has been recorded, and the fallback
/// for every other method.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleAverage;

impl ProjectionMethod for SimpleAverage {
    fn name(&self) -> &str {
        "simple average"
    }

    fn min_days(&self) -> usize {
        1
    }

    fn project(&self, input: &ProjectionInput<'_>) -> Option<f64> {
        if !self.is_active(input.series) {
            return None;
        }
        Some(input.project_constant(input.average_per_day))
    }
}
