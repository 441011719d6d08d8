//! Input value objects: daily sales records, the monthly goal and the
//! canonical per-day series produced by the aggregator.

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Highest day-of-month any calendar month can have
pub const MAX_DAY: u32 = 31;

/// One calendar day's sales for a store
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailySalesRecord {
    /// Day of month, 1..=31
    pub day: u32,
    /// Sales amount, non-negative
    pub amount: f64,
}

impl DailySalesRecord {
    /// Create a validated record
    pub fn new(day: u32, amount: f64) -> Result<Self> {
        let record = Self { day, amount };
        if !(1..=MAX_DAY).contains(&day) {
            return Err(ForecastError::InvalidRecord(format!(
                "day {} is outside 1..={}",
                day, MAX_DAY
            )));
        }
        if !record.has_valid_amount() {
            return Err(ForecastError::InvalidRecord(format!(
                "amount {} for day {} must be finite and non-negative",
                amount, day
            )));
        }
        Ok(record)
    }

    /// Whether both the day and the amount are in range
    pub fn is_valid(&self) -> bool {
        (1..=MAX_DAY).contains(&self.day) && self.has_valid_amount()
    }

    fn has_valid_amount(&self) -> bool {
        self.amount.is_finite() && self.amount >= 0.0
    }
}

/// Sales target for one store and month. An amount of zero means no goal is set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthlyGoal {
    pub amount: f64,
}

impl MonthlyGoal {
    /// Create a validated goal
    pub fn new(amount: f64) -> Result<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ForecastError::InvalidGoal(format!(
                "goal amount {} must be finite and non-negative",
                amount
            )));
        }
        Ok(Self { amount })
    }

    /// No goal tracking for this month
    pub fn none() -> Self {
        Self { amount: 0.0 }
    }

    /// Whether goal tracking applies
    pub fn is_set(&self) -> bool {
        self.amount > 0.0
    }
}

/// Ascending, de-duplicated per-day series for one month.
///
/// Only [`aggregate_daily`](crate::aggregator::aggregate_daily) (or
/// `collect()`) builds one, so the ordering and uniqueness always hold.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailySeries {
    days: Vec<DailySalesRecord>,
}

impl DailySeries {
    pub(crate) fn from_sorted(days: Vec<DailySalesRecord>) -> Self {
        debug_assert!(days.windows(2).all(|pair| pair[0].day < pair[1].day));
        Self { days }
    }

    /// Number of days with at least one recorded sale
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Sum of all recorded amounts
    pub fn total(&self) -> f64 {
        self.days.iter().map(|record| record.amount).sum()
    }

    /// Recorded amounts in chronological order
    pub fn amounts(&self) -> Vec<f64> {
        self.days.iter().map(|record| record.amount).collect()
    }

    /// `(day, amount)` pairs for regression
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.days
            .iter()
            .map(|record| (f64::from(record.day), record.amount))
            .collect()
    }

    /// Latest day with a recorded sale
    pub fn last_day(&self) -> Option<u32> {
        self.days.last().map(|record| record.day)
    }

    pub fn as_slice(&self) -> &[DailySalesRecord] {
        &self.days
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailySalesRecord> {
        self.days.iter()
    }
}

impl<'a> IntoIterator for &'a DailySeries {
    type Item = &'a DailySalesRecord;
    type IntoIter = std::slice::Iter<'a, DailySalesRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
