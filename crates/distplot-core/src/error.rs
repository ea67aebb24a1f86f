//! Error types for distribution statistics
//!
//! Provides a unified error type for all distplot crates.

use thiserror::Error;

/// Core error type for distribution statistics
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid scalar parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        tracing::debug!("{operation} called with an empty sample");
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for invalid quantile
    pub fn invalid_quantile(p: f64) -> Self {
        Self::InvalidParameter(format!("Quantile {p} must be in [0, 1]"))
    }

    /// Create an error for a bandwidth that is not strictly positive and finite
    pub fn invalid_bandwidth(bandwidth: f64) -> Self {
        Self::InvalidParameter(format!(
            "Bandwidth {bandwidth} must be finite and strictly positive"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }
}
