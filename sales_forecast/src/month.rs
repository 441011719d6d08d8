//! Month context: calendar length, elapsed days and where the month sits
//! relative to today.

use crate::error::{ForecastError, Result};
use crate::records::MAX_DAY;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Clock abstracts access to the current date so month resolution stays deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a given date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Position of the viewed month relative to the current month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthPhase {
    Past,
    Current,
    Future,
}

/// Calendar facts about the month being forecast.
///
/// Only built through [`MonthContext::resolve`] or [`MonthContext::from_parts`],
/// so elapsed days never exceed the month length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthContext {
    year: i32,
    month: u32,
    days_in_month: u32,
    days_elapsed: u32,
    phase: MonthPhase,
}

impl MonthContext {
    /// Resolve `year`/`month` against `today`.
    ///
    /// Current month: elapsed is today's day of month. Past month: the whole
    /// month has elapsed. Future month: nothing has elapsed.
    pub fn resolve(year: i32, month: u32, today: NaiveDate) -> Result<Self> {
        let days_in_month = days_in_month(year, month)?;

        let (phase, days_elapsed) = match (year, month).cmp(&(today.year(), today.month())) {
            Ordering::Less => (MonthPhase::Past, days_in_month),
            Ordering::Equal => (MonthPhase::Current, today.day()),
            Ordering::Greater => (MonthPhase::Future, 0),
        };

        Ok(Self {
            year,
            month,
            days_in_month,
            days_elapsed,
            phase,
        })
    }

    /// Resolve against the date reported by `clock`
    pub fn resolve_with<C: Clock + ?Sized>(clock: &C, year: i32, month: u32) -> Result<Self> {
        Self::resolve(year, month, clock.today())
    }

    /// Build a context from explicit counts. A month whose elapsed days reach
    /// its length is treated as past, anything else as current.
    pub fn from_parts(year: i32, month: u32, days_in_month: u32, days_elapsed: u32) -> Result<Self> {
        validate_month(month)?;
        if !(1..=MAX_DAY).contains(&days_in_month) {
            return Err(ForecastError::InvalidMonth(format!(
                "days_in_month {} is outside 1..={}",
                days_in_month, MAX_DAY
            )));
        }
        if days_elapsed > days_in_month {
            return Err(ForecastError::InvalidMonth(format!(
                "days_elapsed {} exceeds days_in_month {}",
                days_elapsed, days_in_month
            )));
        }

        let phase = if days_elapsed == days_in_month {
            MonthPhase::Past
        } else {
            MonthPhase::Current
        };

        Ok(Self {
            year,
            month,
            days_in_month,
            days_elapsed,
            phase,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    pub fn days_elapsed(&self) -> u32 {
        self.days_elapsed
    }

    pub fn phase(&self) -> MonthPhase {
        self.phase
    }

    /// Days left after the elapsed ones, never negative
    pub fn days_remaining(&self) -> u32 {
        self.days_in_month.saturating_sub(self.days_elapsed)
    }

    /// Share of the month already elapsed, 0.0..=1.0
    pub fn expected_pace_fraction(&self) -> f64 {
        if self.days_in_month == 0 {
            return 0.0;
        }
        f64::from(self.days_elapsed) / f64::from(self.days_in_month)
    }
}

fn validate_month(month: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(ForecastError::InvalidMonth(format!(
            "month {} is outside 1..=12",
            month
        )));
    }
    Ok(())
}

/// Number of days in the given month, leap years included
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    validate_month(month)?;

    let unrepresentable =
        || ForecastError::InvalidMonth(format!("{}-{:02} is not a representable date", year, month));

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(unrepresentable)?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or_else(unrepresentable)?;

    let days = next_first.signed_duration_since(first).num_days();
    u32::try_from(days).map_err(|_| unrepresentable())
}
