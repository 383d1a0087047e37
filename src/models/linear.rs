//! Linear trend fitting by least squares

use crate::data::RevenueSeries;
use crate::error::{ForecastError, Result};
use crate::models::{FittedTrend, TrendModel};
use nalgebra::{DMatrix, DVector};

/// Coefficients of the fitted line `y = slope * t + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearParams {
    /// Revenue change per month
    pub slope: f64,
    /// Revenue level at month zero
    pub intercept: f64,
}

impl LinearParams {
    /// Evaluate the line at the given month
    pub fn eval(&self, month: f64) -> f64 {
        self.slope * month + self.intercept
    }
}

/// Degree-1 least-squares trend model
#[derive(Debug, Clone, Default)]
pub struct LinearTrend;

impl LinearTrend {
    /// Create a new linear trend model
    pub fn new() -> Self {
        Self
    }
}

/// Fitted linear trend
#[derive(Debug, Clone)]
pub struct FittedLinearTrend {
    params: LinearParams,
}

impl FittedLinearTrend {
    /// Fitted line coefficients
    pub fn params(&self) -> LinearParams {
        self.params
    }
}

impl TrendModel for LinearTrend {
    type Fitted = FittedLinearTrend;

    fn fit(&self, series: &RevenueSeries) -> Result<Self::Fitted> {
        let n = series.len();
        if n < 2 {
            return Err(ForecastError::InsufficientData { needed: 2, got: n });
        }

        let months = series.months();

        // Design matrix [t, 1]; solved via SVD like a standard polyfit
        let design = DMatrix::from_fn(n, 2, |row, col| if col == 0 { months[row] } else { 1.0 });
        let observed = DVector::from_column_slice(series.revenue());

        let solution = design
            .svd(true, true)
            .solve(&observed, f64::EPSILON)
            .map_err(|e| ForecastError::ComputationError(e.to_string()))?;

        Ok(FittedLinearTrend {
            params: LinearParams {
                slope: solution[0],
                intercept: solution[1],
            },
        })
    }

    fn name(&self) -> &str {
        "Linear trend"
    }
}

impl FittedTrend for FittedLinearTrend {
    fn predict(&self, month: f64) -> f64 {
        self.params.eval(month)
    }

    fn name(&self) -> &str {
        "Linear trend"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_from_line(slope: f64, intercept: f64, n: usize) -> RevenueSeries {
        let months: Vec<f64> = (1..=n).map(|m| m as f64).collect();
        let revenue: Vec<f64> = months.iter().map(|&t| slope * t + intercept).collect();
        RevenueSeries::new(months, revenue).unwrap()
    }

    #[test]
    fn recovers_exact_line() {
        let series = series_from_line(2.0, 40.0, 10);
        let fitted = LinearTrend::new().fit(&series).unwrap();

        let params = fitted.params();
        assert!((params.slope - 2.0).abs() < 1e-6);
        assert!((params.intercept - 40.0).abs() < 1e-6);

        // Extrapolation matches the generating line
        assert!((fitted.predict(11.0) - (2.0 * 11.0 + 40.0)).abs() < 1e-6);
    }

    #[test]
    fn constant_series_has_zero_slope() {
        let months: Vec<f64> = (1..=10).map(|m| m as f64).collect();
        let revenue = vec![50.0; 10];
        let series = RevenueSeries::new(months, revenue).unwrap();

        let fitted = LinearTrend::new().fit(&series).unwrap();
        assert!(fitted.params().slope.abs() < 1e-9);
        assert!((fitted.params().intercept - 50.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_single_point() {
        let series = RevenueSeries::new(vec![1.0], vec![42.0]).unwrap();
        let err = LinearTrend::new().fit(&series).unwrap_err();
        assert!(matches!(
            err,
            ForecastError::InsufficientData { needed: 2, got: 1 }
        ));
    }

    #[test]
    fn predict_series_evaluates_every_month() {
        let series = series_from_line(1.5, 10.0, 6);
        let fitted = LinearTrend::new().fit(&series).unwrap();

        let values = fitted.predict_series(series.months());
        assert_eq!(values.len(), 6);
        for (&month, &value) in series.months().iter().zip(values.iter()) {
            assert!((value - (1.5 * month + 10.0)).abs() < 1e-6);
        }
    }
}
