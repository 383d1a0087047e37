//! Time series data handling for trend fitting

use crate::error::{ForecastError, Result};

/// Monthly revenue observations used by the analysis pipeline.
///
/// Holds two equal-length columns: a strictly increasing month index and
/// the revenue observed in that month (millions of currency units).
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueSeries {
    /// Month indices
    months: Vec<f64>,
    /// Observed revenue per month
    revenue: Vec<f64>,
}

impl RevenueSeries {
    /// Create a new series from month indices and observed revenue
    pub fn new(months: Vec<f64>, revenue: Vec<f64>) -> Result<Self> {
        if months.is_empty() {
            return Err(ForecastError::EmptyData);
        }

        if months.len() != revenue.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: months.len(),
                got: revenue.len(),
            });
        }

        if months.windows(2).any(|w| w[1] <= w[0]) {
            return Err(ForecastError::InvalidParameter(
                "month indices must be strictly increasing".to_string(),
            ));
        }

        Ok(Self { months, revenue })
    }

    /// Month indices of the series
    pub fn months(&self) -> &[f64] {
        &self.months
    }

    /// Observed revenue values of the series
    pub fn revenue(&self) -> &[f64] {
        &self.revenue
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.months.len()
    }

    /// Whether the series holds no observations
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Return a copy of the series with one observation appended.
    ///
    /// Used to inject a forecast back into the series as a
    /// pseudo-observation before refitting the seasonal curve.
    pub fn extended(&self, month: f64, value: f64) -> Result<Self> {
        let mut months = self.months.clone();
        let mut revenue = self.revenue.clone();
        months.push(month);
        revenue.push(value);

        Self::new(months, revenue)
    }
}

/// Builtin monthly revenue dataset: ten months of revenue rising from the
/// low forties to about sixty, with a mild seasonal ripple.
pub fn monthly_revenue() -> RevenueSeries {
    RevenueSeries {
        months: (1..=10).map(|m| m as f64).collect(),
        revenue: vec![43.1, 45.4, 49.8, 52.3, 51.0, 50.2, 53.7, 57.9, 60.8, 59.6],
    }
}
