//! Quantile summary types

use serde::{Deserialize, Serialize};
use std::fmt;

/// The 25th, 50th and 75th percentiles of a sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Quartiles {
    /// First quartile (25th percentile)
    pub q1: f64,
    /// Median (50th percentile)
    pub q2: f64,
    /// Third quartile (75th percentile)
    pub q3: f64,
}

impl Quartiles {
    /// Interquartile range `q3 - q1`
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Alias for `q2`
    pub fn median(&self) -> f64 {
        self.q2
    }
}

impl fmt::Display for Quartiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Q1={:.3}, median={:.3}, Q3={:.3} (IQR={:.3})",
            self.q1,
            self.q2,
            self.q3,
            self.iqr()
        )
    }
}
