//! Box-plot result and configuration types

use serde::{Deserialize, Serialize};
use std::fmt;

/// How whisker ends are placed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhiskerMethod {
    /// Whiskers reach the most extreme values inside the Tukey fences;
    /// values outside the fences are outliers
    #[default]
    Tukey,
    /// Whiskers reach the sample minimum and maximum; no outliers
    MinMax,
}

/// Outlier fences `[q1 - k * IQR, q3 + k * IQR]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TukeyFences {
    /// Lower fence
    pub lower: f64,
    /// Upper fence
    pub upper: f64,
}

impl TukeyFences {
    /// Compute fences from the quartiles and a fence factor
    pub fn new(q1: f64, q3: f64, factor: f64) -> Self {
        let iqr = q3 - q1;
        Self {
            lower: q1 - factor * iqr,
            upper: q3 + factor * iqr,
        }
    }

    /// Check if a value lies inside the closed fence interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Summary statistics drawn by a box plot
///
/// For any non-empty sample:
/// `min <= whisker_low <= q1 <= median <= q3 <= whisker_high <= max`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotStats {
    /// Smallest observation
    pub min: f64,
    /// First quartile
    pub q1: f64,
    /// Median
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    /// Largest observation
    pub max: f64,
    /// Lower whisker end
    pub whisker_low: f64,
    /// Upper whisker end
    pub whisker_high: f64,
    /// Observations outside the fences, ascending
    pub outliers: Vec<f64>,
}

impl BoxPlotStats {
    /// Interquartile range `q3 - q1`
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Check if a value was classified as an outlier
    pub fn is_outlier(&self, value: f64) -> bool {
        self.outliers.binary_search_by(|x| x.total_cmp(&value)).is_ok()
    }

    /// Check if any observation was classified as an outlier
    pub fn has_outliers(&self) -> bool {
        !self.outliers.is_empty()
    }
}

impl fmt::Display for BoxPlotStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoxPlot(whiskers=[{:.3}, {:.3}], box=[{:.3}, {:.3}], median={:.3}, outliers={})",
            self.whisker_low,
            self.whisker_high,
            self.q1,
            self.q3,
            self.median,
            self.outliers.len()
        )
    }
}
