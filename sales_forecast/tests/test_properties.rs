//! Invariant sweeps over randomly generated months (seeded, so reproducible)

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sales_forecast::{
    aggregate_daily, BlendStrategy, DailySalesRecord, ForecastEngine, GoalStatus, MonthContext,
    MonthlyGoal,
};

const SEED: u64 = 0x5a1e_5eed;
const ROUNDS: usize = 500;

struct Scenario {
    context: MonthContext,
    records: Vec<DailySalesRecord>,
    goal: MonthlyGoal,
}

fn random_scenario(rng: &mut StdRng) -> Scenario {
    let year = rng.gen_range(2019..=2026);
    let month = rng.gen_range(1..=12);
    let length = sales_forecast::month::days_in_month(year, month).unwrap();
    let today = NaiveDate::from_ymd_opt(year, month, rng.gen_range(1..=length)).unwrap();
    let context = MonthContext::resolve(year, month, today).unwrap();

    // Mix of calm, trending and spiky months, some with days off
    let style = rng.gen_range(0..3);
    let base = rng.gen_range(0.0..5000.0);
    let mut records = Vec::new();
    for day in 1..=context.days_elapsed() {
        if rng.gen_bool(0.2) {
            continue;
        }
        let amount: f64 = match style {
            0 => base + rng.gen_range(-0.1..0.1) * base,
            1 => (base + f64::from(day) * rng.gen_range(-400.0..400.0)).max(0.0),
            _ => rng.gen_range(0.0..20_000.0),
        };
        // Split the day over a few transactions
        let parts: u32 = rng.gen_range(1..=3);
        for _ in 0..parts {
            records.push(DailySalesRecord::new(day, amount / f64::from(parts)).unwrap());
        }
    }

    let goal = if rng.gen_bool(0.2) {
        MonthlyGoal::none()
    } else {
        MonthlyGoal::new(rng.gen_range(1000.0..150_000.0)).unwrap()
    };

    Scenario {
        context,
        records,
        goal,
    }
}

#[test]
fn test_forecast_invariants() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let engine = ForecastEngine::default();

    for _ in 0..ROUNDS {
        let scenario = random_scenario(&mut rng);
        let series = aggregate_daily(&scenario.records);
        let outcome = engine.forecast(&series, &scenario.context, &scenario.goal);

        // Determinism
        assert_eq!(
            outcome,
            engine.forecast(&series, &scenario.context, &scenario.goal)
        );

        let Some(forecast) = outcome.result() else {
            assert!(series.is_empty() || scenario.context.days_remaining() == 0);
            continue;
        };

        assert!(forecast.total_so_far >= 0.0);
        assert!(forecast.average_per_day >= 0.0);
        assert!(forecast.projected_total >= forecast.total_so_far - 1e-6);
        assert!(forecast.projected_total.is_finite());
        assert!((30..=95).contains(&forecast.confidence_percent));
        assert!(forecast.percent_of_goal_projected.is_finite());
        if !scenario.goal.is_set() {
            assert_eq!(forecast.percent_of_goal_projected, 0.0);
        }

        for estimate in [
            Some(forecast.estimates.simple),
            forecast.estimates.moving_average,
            forecast.estimates.regression,
            forecast.estimates.weighted,
        ]
        .into_iter()
        .flatten()
        {
            assert!(estimate >= forecast.total_so_far - 1e-6);
        }

        if forecast.recorded_days < 3 {
            assert_eq!(forecast.blend, BlendStrategy::SimpleOnly);
            assert_eq!(forecast.projected_total, forecast.estimates.simple);
        }
    }
}

#[test]
fn test_goal_invariants() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 0xff);
    let engine = ForecastEngine::default();

    for _ in 0..ROUNDS {
        let scenario = random_scenario(&mut rng);
        let report = engine.evaluate(&scenario.records, &scenario.context, &scenario.goal);

        let Some(progress) = report.goal else {
            assert!(!scenario.goal.is_set());
            continue;
        };

        assert!(progress.shortfall >= 0.0);
        assert!(progress.surplus >= 0.0);
        assert!(progress.required_daily_average >= 0.0);
        if report.total_so_far() >= scenario.goal.amount {
            assert_eq!(progress.status, GoalStatus::Achieved);
        } else {
            assert_ne!(progress.status, GoalStatus::Achieved);
        }
    }
}
