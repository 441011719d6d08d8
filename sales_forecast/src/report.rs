use crate::engine::ForecastOutcome;
use crate::error::Result;
use crate::goal::GoalProgress;
use crate::month::MonthContext;
use crate::records::DailySeries;
use serde::Serialize;

/// Everything a dashboard needs for one store and month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthReport {
    pub context: MonthContext,
    /// Aggregated daily sales the figures were computed from
    pub series: DailySeries,
    pub forecast: ForecastOutcome,
    /// Goal standing; absent without a goal or for a month that has not started
    pub goal: Option<GoalProgress>,
}

impl MonthReport {
    /// Month-to-date sales
    pub fn total_so_far(&self) -> f64 {
        self.series.total()
    }

    /// Serialize the report for presentation layers
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
