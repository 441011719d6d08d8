//! Forecast engine
//!
//! Runs the four projection methods over a month-to-date series, blends
//! them according to how much data is available and attaches a confidence
//! score and trend direction. One engine serves every dashboard; it holds
//! only configuration, so a shared instance can be used from any thread.

use crate::aggregator::aggregate_daily;
use crate::confidence::confidence_score;
use crate::config::ForecastConfig;
use crate::error::Result;
use crate::goal::{percent_of, GoalClassifier, GoalProgress};
use crate::methods::linear_regression::project_fit;
use crate::methods::{
    LinearTrend, ProjectionInput, ProjectionMethod, RecencyWeighted, SimpleAverage,
    TrailingAverage,
};
use crate::month::{MonthContext, MonthPhase};
use crate::records::{DailySalesRecord, DailySeries, MonthlyGoal};
use crate::report::MonthReport;
use serde::Serialize;
use std::fmt;

/// Slopes within this distance of zero read as a stable trend
const SLOPE_TOLERANCE: f64 = 1e-9;

/// Direction implied by the regression slope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Growth,
    Decline,
    Stable,
}

impl Trend {
    /// Classify a slope; no slope (regression inactive) reads as stable
    pub fn from_slope(slope: Option<f64>) -> Self {
        match slope {
            Some(s) if s > SLOPE_TOLERANCE => Trend::Growth,
            Some(s) if s < -SLOPE_TOLERANCE => Trend::Decline,
            _ => Trend::Stable,
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Growth => "growth",
            Trend::Decline => "decline",
            Trend::Stable => "stable",
        };
        f.write_str(label)
    }
}

/// Which blend produced the projected total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendStrategy {
    /// 1-2 recorded days: simple average only
    SimpleOnly,
    /// Regression, weighted and simple average
    Short,
    /// All four methods
    Full,
}

/// Each method's own full-month projection. `None` marks a method that was
/// below its activation threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MethodEstimates {
    pub simple: f64,
    pub moving_average: Option<f64>,
    pub regression: Option<f64>,
    pub weighted: Option<f64>,
}

/// Projection for the month being viewed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    pub total_so_far: f64,
    /// Total divided by days elapsed, including days without sales
    pub average_per_day: f64,
    pub days_elapsed: u32,
    pub days_remaining: u32,
    /// Days with at least one recorded sale
    pub recorded_days: usize,
    pub projected_total: f64,
    /// Heuristic 0-100 score, informational only
    pub confidence_percent: u8,
    pub trend: Trend,
    /// Regression slope in sales per day, when the regression was active
    pub trend_slope: Option<f64>,
    /// Projected total as a percentage of the goal; zero without a goal
    pub percent_of_goal_projected: f64,
    pub blend: BlendStrategy,
    pub estimates: MethodEstimates,
}

/// Why no forecast was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// No sales recorded yet this month
    NoData,
    /// No days left to project
    MonthEnded,
    /// The month has not started
    FutureMonth,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            UnavailableReason::NoData => "no sales recorded yet",
            UnavailableReason::MonthEnded => "the month has already ended",
            UnavailableReason::FutureMonth => "the month has not started",
        };
        f.write_str(message)
    }
}

/// Either a forecast or the reason there is none
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ForecastOutcome {
    Available(ForecastResult),
    Unavailable(UnavailableReason),
}

impl ForecastOutcome {
    pub fn is_available(&self) -> bool {
        matches!(self, ForecastOutcome::Available(_))
    }

    pub fn result(&self) -> Option<&ForecastResult> {
        match self {
            ForecastOutcome::Available(result) => Some(result),
            ForecastOutcome::Unavailable(_) => None,
        }
    }

    pub fn into_result(self) -> Option<ForecastResult> {
        match self {
            ForecastOutcome::Available(result) => Some(result),
            ForecastOutcome::Unavailable(_) => None,
        }
    }

    pub fn unavailable_reason(&self) -> Option<UnavailableReason> {
        match self {
            ForecastOutcome::Available(_) => None,
            ForecastOutcome::Unavailable(reason) => Some(*reason),
        }
    }
}

/// Shared forecasting engine
#[derive(Debug, Clone)]
pub struct ForecastEngine {
    config: ForecastConfig,
    simple: SimpleAverage,
    moving_average: TrailingAverage,
    regression: LinearTrend,
    weighted: RecencyWeighted,
    classifier: GoalClassifier,
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self {
            config: ForecastConfig::default(),
            simple: SimpleAverage,
            moving_average: TrailingAverage::default(),
            regression: LinearTrend::default(),
            weighted: RecencyWeighted::default(),
            classifier: GoalClassifier::default(),
        }
    }
}

impl ForecastEngine {
    /// Create an engine from a validated configuration
    pub fn new(config: ForecastConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            simple: SimpleAverage,
            moving_average: TrailingAverage::new(
                config.moving_average_window,
                config.moving_average_min_days,
            )?,
            regression: LinearTrend::new(config.regression_min_days),
            weighted: RecencyWeighted::new(config.weighted_min_days),
            classifier: GoalClassifier::new(config.pace_tolerance)?,
            config,
        })
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Project the end-of-month total for an aggregated series
    pub fn forecast(
        &self,
        series: &DailySeries,
        context: &MonthContext,
        goal: &MonthlyGoal,
    ) -> ForecastOutcome {
        if context.phase() == MonthPhase::Future {
            return ForecastOutcome::Unavailable(UnavailableReason::FutureMonth);
        }
        if series.is_empty() {
            return ForecastOutcome::Unavailable(UnavailableReason::NoData);
        }
        let days_remaining = context.days_remaining();
        if days_remaining == 0 {
            return ForecastOutcome::Unavailable(UnavailableReason::MonthEnded);
        }

        let days_elapsed = context.days_elapsed();
        let total_so_far = series.total();
        let average_per_day = if days_elapsed == 0 {
            0.0
        } else {
            total_so_far / f64::from(days_elapsed)
        };

        let input = ProjectionInput {
            series,
            total_so_far,
            average_per_day,
            days_remaining,
        };

        let simple = self
            .simple
            .project(&input)
            .unwrap_or_else(|| input.project_constant(average_per_day));
        let fit = self.regression.fit(series);
        let estimates = MethodEstimates {
            simple,
            moving_average: self.moving_average.project(&input),
            regression: fit.as_ref().and_then(|fit| project_fit(fit, &input)),
            weighted: self.weighted.project(&input),
        };

        let blend = self.select_blend(series.len());
        // Saturate rather than overflow on extreme amounts
        let projected_total = self.blend(blend, &estimates).min(f64::MAX);
        let trend_slope = fit.map(|fit| fit.slope()).filter(|slope| slope.is_finite());
        let trend = Trend::from_slope(trend_slope);
        let confidence_percent = confidence_score(&self.config.confidence, &series.amounts());

        let percent_of_goal_projected = if goal.is_set() {
            percent_of(projected_total, goal.amount)
        } else {
            0.0
        };

        tracing::debug!(
            year = context.year(),
            month = context.month(),
            recorded_days = series.len(),
            ?blend,
            projected_total,
            confidence_percent,
            %trend,
            "month forecast computed"
        );

        ForecastOutcome::Available(ForecastResult {
            total_so_far,
            average_per_day,
            days_elapsed,
            days_remaining,
            recorded_days: series.len(),
            projected_total,
            confidence_percent,
            trend,
            trend_slope,
            percent_of_goal_projected,
            blend,
            estimates,
        })
    }

    /// Classify month-to-date sales against the goal, `None` without a goal
    pub fn classify_goal(
        &self,
        total_so_far: f64,
        goal: &MonthlyGoal,
        context: &MonthContext,
    ) -> Option<GoalProgress> {
        self.classifier.classify(
            total_so_far,
            goal,
            context.days_elapsed(),
            context.days_in_month(),
        )
    }

    /// Aggregate raw records, forecast and classify the goal in one pass.
    ///
    /// Goal progress is still reported for a finished month; a future month
    /// has none.
    pub fn evaluate(
        &self,
        records: &[DailySalesRecord],
        context: &MonthContext,
        goal: &MonthlyGoal,
    ) -> MonthReport {
        let series = aggregate_daily(records);
        let forecast = self.forecast(&series, context, goal);
        let goal_progress = match context.phase() {
            MonthPhase::Future => None,
            MonthPhase::Past | MonthPhase::Current => {
                self.classify_goal(series.total(), goal, context)
            }
        };

        if let ForecastOutcome::Unavailable(reason) = &forecast {
            tracing::debug!(
                year = context.year(),
                month = context.month(),
                %reason,
                "forecast unavailable"
            );
        }

        MonthReport {
            context: *context,
            series,
            forecast,
            goal: goal_progress,
        }
    }

    fn select_blend(&self, recorded_days: usize) -> BlendStrategy {
        if recorded_days >= self.config.full_blend_min_days {
            BlendStrategy::Full
        } else if recorded_days >= self.config.short_blend_min_days {
            BlendStrategy::Short
        } else {
            BlendStrategy::SimpleOnly
        }
    }

    fn blend(&self, blend: BlendStrategy, estimates: &MethodEstimates) -> f64 {
        let simple = estimates.simple;
        let or_simple = |estimate: Option<f64>, method: &str| {
            estimate.unwrap_or_else(|| {
                tracing::debug!(method, "method inactive, falling back to simple average");
                simple
            })
        };

        match blend {
            BlendStrategy::SimpleOnly => simple,
            BlendStrategy::Short => {
                let w = &self.config.short_blend;
                w.regression * or_simple(estimates.regression, self.regression.name())
                    + w.weighted * or_simple(estimates.weighted, self.weighted.name())
                    + w.simple * simple
            }
            BlendStrategy::Full => {
                let w = &self.config.full_blend;
                w.regression * or_simple(estimates.regression, self.regression.name())
                    + w.moving_average
                        * or_simple(estimates.moving_average, self.moving_average.name())
                    + w.weighted * or_simple(estimates.weighted, self.weighted.name())
                    + w.simple * simple
            }
        }
    }
}
