//! Seasonal trend fitting by nonlinear least squares
//!
//! Models the series as a sinusoid riding on a linear drift:
//! `y = baseline + amplitude * sin(frequency * t + phase) + drift * t`.
//! The five parameters are fitted with the Levenberg-Marquardt algorithm
//! starting from a data-derived initial guess.

use crate::data::RevenueSeries;
use crate::error::{ForecastError, Result};
use crate::models::{FittedTrend, TrendModel};
use levenberg_marquardt::{LeastSquaresProblem, LevenbergMarquardt};
use nalgebra::storage::Owned;
use nalgebra::{DMatrix, DVector, Dyn};
use statrs::statistics::Statistics;
use std::f64::consts::PI;

/// Number of free parameters in the seasonal model
pub const SEASONAL_PARAM_COUNT: usize = 5;

/// Coefficients of the fitted seasonal curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalParams {
    /// Average revenue level
    pub baseline: f64,
    /// Strength of the seasonal swing
    pub amplitude: f64,
    /// Angular frequency of the seasonal cycle
    pub frequency: f64,
    /// Phase shift locating the seasonal peak
    pub phase: f64,
    /// Linear growth per month
    pub drift: f64,
}

impl SeasonalParams {
    /// Evaluate the seasonal curve at the given month
    pub fn eval(&self, month: f64) -> f64 {
        self.baseline + self.amplitude * (self.frequency * month + self.phase).sin()
            + self.drift * month
    }

    fn to_vector(self) -> DVector<f64> {
        DVector::from_column_slice(&[
            self.baseline,
            self.amplitude,
            self.frequency,
            self.phase,
            self.drift,
        ])
    }

    fn from_vector(v: &DVector<f64>) -> Self {
        Self {
            baseline: v[0],
            amplitude: v[1],
            frequency: v[2],
            phase: v[3],
            drift: v[4],
        }
    }
}

/// Sinusoid-plus-drift trend model
#[derive(Debug, Clone, Default)]
pub struct SeasonalTrend {
    /// Explicit starting point for the optimizer, if any
    guess: Option<SeasonalParams>,
}

impl SeasonalTrend {
    /// Create a model that derives its initial guess from the series
    pub fn new() -> Self {
        Self { guess: None }
    }

    /// Create a model that starts the optimizer from the given parameters
    pub fn with_guess(guess: SeasonalParams) -> Self {
        Self { guess: Some(guess) }
    }

    /// Data-derived starting point for the optimizer.
    ///
    /// Baseline starts at the series mean, amplitude at half the observed
    /// spread, frequency at one cycle over the series length, phase and
    /// drift at zero. Convergence and the final parameters depend on this
    /// choice.
    pub fn initial_guess(series: &RevenueSeries) -> SeasonalParams {
        let revenue = series.revenue();

        SeasonalParams {
            baseline: revenue.mean(),
            amplitude: (revenue.max() - revenue.min()) / 2.0,
            frequency: 2.0 * PI / series.len() as f64,
            phase: 0.0,
            drift: 0.0,
        }
    }
}

/// Fitted seasonal trend
#[derive(Debug, Clone)]
pub struct FittedSeasonalTrend {
    params: SeasonalParams,
}

impl FittedSeasonalTrend {
    /// Fitted curve coefficients
    pub fn params(&self) -> SeasonalParams {
        self.params
    }
}

impl TrendModel for SeasonalTrend {
    type Fitted = FittedSeasonalTrend;

    fn fit(&self, series: &RevenueSeries) -> Result<Self::Fitted> {
        let n = series.len();
        if n < SEASONAL_PARAM_COUNT {
            return Err(ForecastError::InsufficientData {
                needed: SEASONAL_PARAM_COUNT,
                got: n,
            });
        }

        let guess = self
            .guess
            .unwrap_or_else(|| SeasonalTrend::initial_guess(series));

        let problem = SeasonalFitProblem {
            months: series.months(),
            revenue: series.revenue(),
            params: guess.to_vector(),
        };

        let (problem, report) = LevenbergMarquardt::new().minimize(problem);
        if !report.termination.was_successful() {
            return Err(ForecastError::FitNonConvergence(format!(
                "{:?}",
                report.termination
            )));
        }

        Ok(FittedSeasonalTrend {
            params: SeasonalParams::from_vector(&problem.params),
        })
    }

    fn name(&self) -> &str {
        "Seasonal trend (sine)"
    }
}

impl FittedTrend for FittedSeasonalTrend {
    fn predict(&self, month: f64) -> f64 {
        self.params.eval(month)
    }

    fn name(&self) -> &str {
        "Seasonal trend (sine)"
    }
}

/// Least-squares problem handed to the Levenberg-Marquardt solver
struct SeasonalFitProblem<'a> {
    months: &'a [f64],
    revenue: &'a [f64],
    params: DVector<f64>,
}

impl LeastSquaresProblem<f64, Dyn, Dyn> for SeasonalFitProblem<'_> {
    type ResidualStorage = Owned<f64, Dyn>;
    type JacobianStorage = Owned<f64, Dyn, Dyn>;
    type ParameterStorage = Owned<f64, Dyn>;

    fn set_params(&mut self, params: &DVector<f64>) {
        self.params.copy_from(params);
    }

    fn params(&self) -> DVector<f64> {
        self.params.clone()
    }

    fn residuals(&self) -> Option<DVector<f64>> {
        let params = SeasonalParams::from_vector(&self.params);
        Some(DVector::from_iterator(
            self.months.len(),
            self.months
                .iter()
                .zip(self.revenue.iter())
                .map(|(&t, &y)| params.eval(t) - y),
        ))
    }

    fn jacobian(&self) -> Option<DMatrix<f64>> {
        let params = SeasonalParams::from_vector(&self.params);
        let mut jacobian = DMatrix::zeros(self.months.len(), SEASONAL_PARAM_COUNT);

        for (row, &t) in self.months.iter().enumerate() {
            let angle = params.frequency * t + params.phase;
            jacobian[(row, 0)] = 1.0;
            jacobian[(row, 1)] = angle.sin();
            jacobian[(row, 2)] = params.amplitude * t * angle.cos();
            jacobian[(row, 3)] = params.amplitude * angle.cos();
            jacobian[(row, 4)] = t;
        }

        Some(jacobian)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_from_params(params: SeasonalParams, n: usize) -> RevenueSeries {
        let months: Vec<f64> = (1..=n).map(|m| m as f64).collect();
        let revenue: Vec<f64> = months.iter().map(|&t| params.eval(t)).collect();
        RevenueSeries::new(months, revenue).unwrap()
    }

    #[test]
    fn recovers_pure_sinusoid_from_default_guess() {
        // One full cycle over ten months keeps the default frequency
        // guess on target
        let truth = SeasonalParams {
            baseline: 50.0,
            amplitude: 4.0,
            frequency: 2.0 * PI / 10.0,
            phase: 0.3,
            drift: 0.0,
        };
        let series = series_from_params(truth, 10);

        let fitted = SeasonalTrend::new().fit(&series).unwrap();
        let params = fitted.params();

        // The fitted curve must reproduce the generator everywhere,
        // regardless of which equivalent (amplitude, phase) pair the
        // optimizer landed on
        for &t in series.months() {
            assert!((params.eval(t) - truth.eval(t)).abs() < 1e-3);
        }
        assert!((params.eval(11.0) - truth.eval(11.0)).abs() < 1e-2);
        assert!((params.amplitude.abs() - truth.amplitude).abs() < 1e-3);
    }

    #[test]
    fn recovers_sinusoid_with_drift() {
        let truth = SeasonalParams {
            baseline: 48.0,
            amplitude: 3.5,
            frequency: 0.6,
            phase: 0.4,
            drift: 1.8,
        };
        let series = series_from_params(truth, 10);

        // Start near the generating parameters to verify the optimizer
        // sharpens a rough guess into the exact coefficients
        let rough = SeasonalParams {
            baseline: 45.0,
            amplitude: 3.0,
            frequency: 0.65,
            phase: 0.2,
            drift: 1.5,
        };
        let fitted = SeasonalTrend::with_guess(rough).fit(&series).unwrap();
        let params = fitted.params();

        for &t in series.months() {
            let expected = truth.eval(t);
            assert!(((params.eval(t) - expected) / expected).abs() < 1e-3);
        }
        assert!((params.drift - truth.drift).abs() < 1e-3);
    }

    #[test]
    fn constant_series_fits_with_zero_amplitude() {
        let months: Vec<f64> = (1..=10).map(|m| m as f64).collect();
        let series = RevenueSeries::new(months, vec![50.0; 10]).unwrap();

        let fitted = SeasonalTrend::new().fit(&series).unwrap();
        let params = fitted.params();

        assert!(params.amplitude.abs() < 1e-6);
        assert!(params.drift.abs() < 1e-6);
        assert!((params.baseline - 50.0).abs() < 1e-6);
    }

    #[test]
    fn fits_minimum_of_five_points() {
        let truth = SeasonalParams {
            baseline: 50.0,
            amplitude: 4.0,
            frequency: 2.0 * PI / 5.0,
            phase: 0.2,
            drift: 0.0,
        };
        let series = series_from_params(truth, 5);

        let fitted = SeasonalTrend::new().fit(&series).unwrap();
        for &t in series.months() {
            assert!((fitted.params().eval(t) - truth.eval(t)).abs() < 1e-3);
        }
    }

    #[test]
    fn rejects_fewer_than_five_points() {
        let months: Vec<f64> = (1..=4).map(|m| m as f64).collect();
        let series = RevenueSeries::new(months, vec![50.0, 51.0, 52.0, 53.0]).unwrap();

        let err = SeasonalTrend::new().fit(&series).unwrap_err();
        assert!(matches!(
            err,
            ForecastError::InsufficientData { needed: 5, got: 4 }
        ));
    }

    #[test]
    fn initial_guess_follows_series_statistics() {
        let months: Vec<f64> = (1..=10).map(|m| m as f64).collect();
        let revenue = vec![40.0, 42.0, 44.0, 46.0, 48.0, 50.0, 52.0, 54.0, 56.0, 58.0];
        let series = RevenueSeries::new(months, revenue).unwrap();

        let guess = SeasonalTrend::initial_guess(&series);
        assert!((guess.baseline - 49.0).abs() < 1e-9);
        assert!((guess.amplitude - 9.0).abs() < 1e-9);
        assert!((guess.frequency - 2.0 * PI / 10.0).abs() < 1e-12);
        assert_eq!(guess.phase, 0.0);
        assert_eq!(guess.drift, 0.0);
    }
}
