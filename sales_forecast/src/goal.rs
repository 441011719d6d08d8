//! Goal pace classification
//!
//! Compares month-to-date sales against the share of the goal that should
//! have been reached by now, assuming a uniform daily pace. Reaching the
//! full goal overrides every pace comparison.

use crate::config::PACE_TOLERANCE;
use crate::error::{ForecastError, Result};
use crate::records::MonthlyGoal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Standing of the store against its monthly goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Month-to-date sales already reached the goal
    Achieved,
    /// At or above the expected pace
    Ahead,
    /// Below the expected pace but within the tolerance band
    OnPace,
    /// Below the tolerance band
    Behind,
}

impl GoalStatus {
    /// Label shown on the store dashboards
    pub fn dashboard_label(&self) -> &'static str {
        match self {
            GoalStatus::Achieved => "meta atingida",
            GoalStatus::Ahead => "no prazo",
            GoalStatus::OnPace => "no ritmo",
            GoalStatus::Behind => "atrasado",
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GoalStatus::Achieved => "achieved",
            GoalStatus::Ahead => "ahead",
            GoalStatus::OnPace => "on pace",
            GoalStatus::Behind => "behind",
        };
        f.write_str(label)
    }
}

/// Goal standing with the figures the dashboards display
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    pub status: GoalStatus,
    pub goal_amount: f64,
    pub total_so_far: f64,
    /// Month-to-date sales as a percentage of the goal
    pub percent_achieved: f64,
    /// Share of the month elapsed, as a percentage
    pub expected_percent: f64,
    /// Amount that should have been sold by now at a uniform pace
    pub expected_to_date: f64,
    /// Sales beyond the goal once achieved, otherwise zero
    pub surplus: f64,
    /// Sales still missing to reach the goal, never negative
    pub shortfall: f64,
    /// Per-day sales needed over the remaining days to close the shortfall
    pub required_daily_average: f64,
}

/// Classifies month-to-date sales against the goal's expected pace
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalClassifier {
    pace_tolerance: f64,
}

impl GoalClassifier {
    /// Create a classifier counting anything within `pace_tolerance` of the
    /// expected pace as on pace
    pub fn new(pace_tolerance: f64) -> Result<Self> {
        if !(pace_tolerance > 0.0 && pace_tolerance <= 1.0) {
            return Err(ForecastError::Config(format!(
                "pace_tolerance must be in (0, 1], got {}",
                pace_tolerance
            )));
        }
        Ok(Self { pace_tolerance })
    }

    pub fn pace_tolerance(&self) -> f64 {
        self.pace_tolerance
    }

    /// Classify, or `None` when no goal is set
    pub fn classify(
        &self,
        total_so_far: f64,
        goal: &MonthlyGoal,
        days_elapsed: u32,
        days_in_month: u32,
    ) -> Option<GoalProgress> {
        if !goal.is_set() {
            return None;
        }

        let goal_amount = goal.amount;
        let percent_achieved = percent_of(total_so_far, goal_amount);
        let pace = if days_in_month == 0 {
            0.0
        } else {
            f64::from(days_elapsed) / f64::from(days_in_month)
        };
        let expected_percent = pace * 100.0;

        let status = if total_so_far >= goal_amount {
            GoalStatus::Achieved
        } else if percent_achieved >= expected_percent {
            GoalStatus::Ahead
        } else if percent_achieved >= expected_percent * self.pace_tolerance {
            GoalStatus::OnPace
        } else {
            GoalStatus::Behind
        };

        let surplus = if status == GoalStatus::Achieved {
            total_so_far - goal_amount
        } else {
            0.0
        };
        let shortfall = (goal_amount - total_so_far).max(0.0);
        let days_remaining = days_in_month.saturating_sub(days_elapsed);
        let required_daily_average = if days_remaining == 0 {
            0.0
        } else {
            shortfall / f64::from(days_remaining)
        };

        Some(GoalProgress {
            status,
            goal_amount,
            total_so_far,
            percent_achieved,
            expected_percent,
            expected_to_date: goal_amount * pace,
            surplus,
            shortfall,
            required_daily_average,
        })
    }
}

/// `part` as a percentage of `whole`, or 0.0 when the quotient is not finite
pub(crate) fn percent_of(part: f64, whole: f64) -> f64 {
    let percent = part / whole * 100.0;
    if percent.is_finite() {
        percent
    } else {
        0.0
    }
}

impl Default for GoalClassifier {
    fn default() -> Self {
        Self {
            pace_tolerance: PACE_TOLERANCE,
        }
    }
}
