//! # Sales Pace
//!
//! `sales_pace` bundles the store sales forecasting workspace:
//!
//! - [`forecast`]: daily sales aggregation, end-of-month projection and goal status
//! - [`math`]: the statistics and regression primitives behind it
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use sales_pace::forecast::{
//!     DailySalesRecord, ForecastEngine, MonthContext, MonthlyGoal, UnavailableReason,
//! };
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
//! let context = MonthContext::resolve(2024, 1, today).unwrap();
//! let records = [DailySalesRecord::new(1, 1000.0).unwrap()];
//!
//! let report = ForecastEngine::default().evaluate(&records, &context, &MonthlyGoal::none());
//! let forecast = report.forecast.result().unwrap();
//! assert_eq!(forecast.projected_total, 6200.0);
//!
//! let next_month = MonthContext::resolve(2024, 2, today).unwrap();
//! let report = ForecastEngine::default().evaluate(&records, &next_month, &MonthlyGoal::none());
//! assert_eq!(report.forecast.unavailable_reason(), Some(UnavailableReason::FutureMonth));
//! ```

pub use sales_forecast as forecast;
pub use sales_math as math;
