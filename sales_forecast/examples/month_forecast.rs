//! Month forecast example
//!
//! Builds a half-month of store sales, evaluates it against a goal and
//! prints the dashboard figures plus the JSON report.
//!
//! Run with `RUST_LOG=sales_forecast=debug` to see the engine's decisions.

use chrono::NaiveDate;
use sales_forecast::logging::init_tracing;
use sales_forecast::{
    DailySalesRecord, ForecastEngine, ForecastError, ForecastOutcome, MonthContext, MonthlyGoal,
};

fn main() -> Result<(), ForecastError> {
    init_tracing();

    let today = NaiveDate::from_ymd_opt(2024, 3, 16)
        .ok_or_else(|| ForecastError::InvalidMonth("bad example date".to_string()))?;
    let context = MonthContext::resolve(2024, 3, today)?;

    // Several tills report per day; the engine sums them
    let raw = [
        (1, 820.0),
        (1, 310.0),
        (2, 1040.0),
        (4, 990.0),
        (5, 1210.0),
        (6, 870.0),
        (6, 400.0),
        (8, 1330.0),
        (9, 1150.0),
        (11, 1420.0),
        (12, 1280.0),
        (13, 1510.0),
        (15, 1600.0),
    ];
    let records = raw
        .iter()
        .map(|&(day, amount)| DailySalesRecord::new(day, amount))
        .collect::<Result<Vec<_>, _>>()?;

    let goal = MonthlyGoal::new(30_000.0)?;
    let engine = ForecastEngine::default();
    let report = engine.evaluate(&records, &context, &goal);

    println!(
        "{}-{:02}: day {} of {}",
        context.year(),
        context.month(),
        context.days_elapsed(),
        context.days_in_month()
    );

    match &report.forecast {
        ForecastOutcome::Available(forecast) => {
            println!("  Sold so far:      {:.2}", forecast.total_so_far);
            println!("  Average per day:  {:.2}", forecast.average_per_day);
            println!("  Projected total:  {:.2}", forecast.projected_total);
            println!("  Confidence:       {}%", forecast.confidence_percent);
            println!("  Trend:            {}", forecast.trend);
            println!("  Goal projected:   {:.1}%", forecast.percent_of_goal_projected);
        }
        ForecastOutcome::Unavailable(reason) => println!("  No forecast: {}", reason),
    }

    if let Some(progress) = &report.goal {
        println!(
            "  Goal status:      {} ({})",
            progress.status,
            progress.status.dashboard_label()
        );
        println!("  Still missing:    {:.2}", progress.shortfall);
        println!("  Needed per day:   {:.2}", progress.required_daily_average);
    }

    println!("{}", report.to_json()?);

    Ok(())
}
