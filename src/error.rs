//! Error types for the revenue_forecast crate

use thiserror::Error;

/// Errors that can occur during fitting, forecasting or rendering
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Input series is empty
    #[error("empty input series")]
    EmptyData,

    /// Insufficient data points for the operation
    #[error("insufficient data: need at least {needed} points, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Dimension mismatch between data columns
    #[error("dimension mismatch: expected {expected} values, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Numerical failure in a fitting primitive
    #[error("computation error: {0}")]
    ComputationError(String),

    /// The nonlinear optimizer terminated without converging
    #[error("fit did not converge: {0}")]
    FitNonConvergence(String),

    /// Chart rendering failed
    #[error("plot error: {0}")]
    PlotError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
