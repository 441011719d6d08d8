//! Daily sales aggregation
//!
//! Folds raw records for one month (several entries per day, any order)
//! into a [`DailySeries`]: one entry per day that had sales, ascending.
//! Days without sales stay absent; the engine decides how they count.

use crate::records::{DailySalesRecord, DailySeries};
use std::collections::BTreeMap;

/// Sum amounts per day and order the result by day.
///
/// Never fails. Rows with an out-of-range day or a negative/non-finite
/// amount are skipped with a warning, as are rows that would push a day's
/// or the month's total past the largest finite amount.
pub fn aggregate_daily(records: &[DailySalesRecord]) -> DailySeries {
    records.iter().copied().collect()
}

impl FromIterator<DailySalesRecord> for DailySeries {
    fn from_iter<I: IntoIterator<Item = DailySalesRecord>>(iter: I) -> Self {
        let mut per_day: BTreeMap<u32, f64> = BTreeMap::new();
        let mut raw = 0usize;
        let mut skipped = 0usize;
        let mut month_total = 0.0;

        for record in iter {
            raw += 1;
            if !record.is_valid() {
                skipped += 1;
                tracing::warn!(
                    day = record.day,
                    amount = record.amount,
                    "skipping invalid daily sales record"
                );
                continue;
            }

            let day_total = per_day.get(&record.day).copied().unwrap_or(0.0) + record.amount;
            if !day_total.is_finite() || !(month_total + record.amount).is_finite() {
                skipped += 1;
                tracing::warn!(
                    day = record.day,
                    amount = record.amount,
                    "skipping daily sales record that overflows the running total"
                );
                continue;
            }
            per_day.insert(record.day, day_total);
            month_total += record.amount;
        }

        tracing::trace!(raw, skipped, days = per_day.len(), "aggregated daily sales");

        DailySeries::from_sorted(
            per_day
                .into_iter()
                .map(|(day, amount)| DailySalesRecord { day, amount })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day: u32, amount: f64) -> DailySalesRecord {
        DailySalesRecord { day, amount }
    }

    #[test]
    fn empty_input_yields_empty_series() {
        let series = aggregate_daily(&[]);
        assert!(series.is_empty());
        assert_eq!(series.total(), 0.0);
        assert_eq!(series.last_day(), None);
    }

    #[test]
    fn sums_duplicates_and_sorts() {
        let series = aggregate_daily(&[
            record(3, 100.0),
            record(1, 50.0),
            record(3, 25.0),
            record(2, 0.0),
        ]);

        assert_eq!(
            series.as_slice(),
            &[record(1, 50.0), record(2, 0.0), record(3, 125.0)]
        );
        assert_eq!(series.last_day(), Some(3));
    }

    #[test]
    fn skips_invalid_rows() {
        let series = aggregate_daily(&[record(0, 10.0), record(4, -3.0), record(4, 7.0)]);
        assert_eq!(series.as_slice(), &[record(4, 7.0)]);
    }

    #[test]
    fn skips_rows_that_overflow() {
        let series = aggregate_daily(&[record(1, f64::MAX), record(1, f64::MAX), record(2, 5.0)]);
        assert_eq!(series.as_slice(), &[record(1, f64::MAX), record(2, 5.0)]);
        assert!(series.total().is_finite());

        let series = aggregate_daily(&[record(1, f64::MAX), record(2, f64::MAX)]);
        assert_eq!(series.len(), 1);
        assert!(series.total().is_finite());
    }
}
