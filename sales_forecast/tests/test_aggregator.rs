use pretty_assertions::assert_eq;
use sales_forecast::{aggregate_daily, DailySalesRecord, DailySeries};

fn record(day: u32, amount: f64) -> DailySalesRecord {
    DailySalesRecord { day, amount }
}

#[test]
fn test_aggregates_transactions_per_day() {
    let raw = vec![
        record(12, 80.0),
        record(3, 120.0),
        record(12, 20.0),
        record(1, 45.5),
        record(3, 30.0),
        record(12, 100.0),
    ];

    let series = aggregate_daily(&raw);

    assert_eq!(
        series.as_slice(),
        &[record(1, 45.5), record(3, 150.0), record(12, 200.0)]
    );
    assert_eq!(series.len(), 3);
    assert_eq!(series.total(), 395.5);
    assert_eq!(series.amounts(), vec![45.5, 150.0, 200.0]);
    assert_eq!(series.points(), vec![(1.0, 45.5), (3.0, 150.0), (12.0, 200.0)]);
    assert_eq!(series.last_day(), Some(12));
}

#[test]
fn test_days_without_sales_are_absent() {
    let series = aggregate_daily(&[record(2, 10.0), record(9, 10.0)]);
    let days: Vec<u32> = series.iter().map(|r| r.day).collect();
    assert_eq!(days, vec![2, 9]);
}

#[test]
fn test_zero_sale_days_are_kept() {
    let series = aggregate_daily(&[record(2, 0.0), record(3, 15.0)]);
    assert_eq!(series.len(), 2);
    assert_eq!(series.total(), 15.0);
}

#[test]
fn test_empty_input() {
    let series = aggregate_daily(&[]);
    assert!(series.is_empty());
    assert_eq!(series, DailySeries::default());
}

#[test]
fn test_input_is_not_modified() {
    let raw = vec![record(5, 1.0), record(1, 2.0), record(5, 3.0)];
    let before = raw.clone();

    let _ = aggregate_daily(&raw);

    assert_eq!(raw, before);
}

#[test]
fn test_collect_into_series() {
    let series: DailySeries = vec![record(4, 10.0), record(2, 5.0), record(4, 1.0)]
        .into_iter()
        .collect();

    assert_eq!(series.as_slice(), &[record(2, 5.0), record(4, 11.0)]);
}

#[test]
fn test_invalid_rows_are_skipped() {
    let series = aggregate_daily(&[
        record(0, 100.0),
        record(32, 100.0),
        record(7, -50.0),
        record(7, f64::NAN),
        record(7, 25.0),
    ]);

    assert_eq!(series.as_slice(), &[record(7, 25.0)]);
}

#[test]
fn test_records_deserialize_from_json() {
    let raw: Vec<DailySalesRecord> =
        serde_json::from_str(r#"[{"day": 2, "amount": 10.5}, {"day": 1, "amount": 4}]"#).unwrap();

    let series = aggregate_daily(&raw);
    assert_eq!(series.as_slice(), &[record(1, 4.0), record(2, 10.5)]);
}
