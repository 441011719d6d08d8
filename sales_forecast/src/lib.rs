//! # Sales Forecast
//!
//! Month-to-date sales forecasting and goal pace tracking for a retail store.
//!
//! ## Features
//!
//! - Aggregation of raw daily sales into a clean per-day series
//! - Four projection methods (simple average, moving average, linear
//!   regression, recency-weighted average) blended by data volume
//! - Heuristic confidence score and trend direction
//! - Goal status against a uniform expected pace
//! - Every threshold and weight configurable through [`ForecastConfig`]
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use sales_forecast::{DailySalesRecord, ForecastEngine, GoalStatus, MonthContext, MonthlyGoal};
//!
//! # fn main() -> Result<(), sales_forecast::ForecastError> {
//! let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
//! let context = MonthContext::resolve(2024, 6, today)?;
//!
//! let records = vec![
//!     DailySalesRecord::new(1, 900.0)?,
//!     DailySalesRecord::new(3, 1100.0)?,
//!     DailySalesRecord::new(3, 250.0)?,
//!     DailySalesRecord::new(8, 1300.0)?,
//! ];
//! let goal = MonthlyGoal::new(12_000.0)?;
//!
//! let report = ForecastEngine::default().evaluate(&records, &context, &goal);
//!
//! let forecast = report.forecast.result().expect("sales were recorded");
//! assert_eq!(forecast.total_so_far, 3550.0);
//! assert!(forecast.projected_total > forecast.total_so_far);
//! assert_eq!(report.goal.map(|g| g.status), Some(GoalStatus::OnPace));
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod confidence;
pub mod config;
pub mod engine;
pub mod error;
pub mod goal;
pub mod logging;
pub mod methods;
pub mod month;
pub mod records;
pub mod report;

// Re-export commonly used types
pub use crate::aggregator::aggregate_daily;
pub use crate::config::ForecastConfig;
pub use crate::engine::{
    BlendStrategy, ForecastEngine, ForecastOutcome, ForecastResult, MethodEstimates, Trend,
    UnavailableReason,
};
pub use crate::error::{ForecastError, Result};
pub use crate::goal::{GoalClassifier, GoalProgress, GoalStatus};
pub use crate::month::{Clock, FixedClock, MonthContext, MonthPhase, SystemClock};
pub use crate::records::{DailySalesRecord, DailySeries, MonthlyGoal};
pub use crate::report::MonthReport;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
