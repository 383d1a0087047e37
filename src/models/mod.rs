//! Trend models for monthly revenue series
//!
//! Two models are provided:
//! - Linear trend (degree-1 least squares)
//! - Seasonal trend (sinusoid plus linear drift, nonlinear least squares)

use crate::data::RevenueSeries;
use crate::error::Result;
use std::fmt::Debug;

/// A fitted trend model that can be evaluated at arbitrary months
pub trait FittedTrend: Debug {
    /// Evaluate the fitted model at a single month
    fn predict(&self, month: f64) -> f64;

    /// Evaluate the fitted model at every month in the slice
    fn predict_series(&self, months: &[f64]) -> Vec<f64> {
        months.iter().map(|&m| self.predict(m)).collect()
    }

    /// Name of the model
    fn name(&self) -> &str;
}

/// A trend model that can be fitted to a revenue series
pub trait TrendModel: Debug + Clone {
    /// The type of fitted model produced
    type Fitted: FittedTrend;

    /// Fit the model to a revenue series
    fn fit(&self, series: &RevenueSeries) -> Result<Self::Fitted>;

    /// Name of the model
    fn name(&self) -> &str;
}

pub mod linear;
pub mod seasonal;

pub use linear::{FittedLinearTrend, LinearParams, LinearTrend};
pub use seasonal::{FittedSeasonalTrend, SeasonalParams, SeasonalTrend};
