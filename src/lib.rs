//! # Revenue Forecast
//!
//! A Rust library for trend fitting and one-step forecasting on a monthly
//! revenue time series.
//!
//! ## Features
//!
//! - Time series data handling for monthly revenue observations
//! - Linear trend fitting (degree-1 least squares)
//! - Seasonal trend fitting (sinusoid plus drift, Levenberg-Marquardt)
//! - One-month-ahead forecasts under both models
//! - Two-panel chart rendering (raw series; trends overlay)
//!
//! ## Quick Start
//!
//! ```no_run
//! use revenue_forecast::analysis::run_analysis;
//! use revenue_forecast::data::monthly_revenue;
//! use revenue_forecast::plot::render_chart;
//!
//! # fn main() -> revenue_forecast::error::Result<()> {
//! let series = monthly_revenue();
//!
//! // Fit both trend models and forecast month 11
//! let report = run_analysis(&series)?;
//! println!("{}", report.summary());
//!
//! // Render the two-panel chart
//! render_chart(&series, &report, "revenue_forecast.png")?;
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod data;
pub mod error;
pub mod models;
pub mod plot;

// Re-export commonly used types
pub use crate::analysis::{run_analysis, AnalysisReport, FORECAST_MONTH};
pub use crate::data::{monthly_revenue, RevenueSeries};
pub use crate::error::ForecastError;
pub use crate::models::{FittedTrend, LinearTrend, SeasonalTrend, TrendModel};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
