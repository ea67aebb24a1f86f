//! Automatic bin-count selection
//!
//! Every rule falls back to Sturges' rule when its bin width would be zero,
//! negative or non-finite, or when it asks for more than [`MAX_BINS`] bins.

use crate::builders::MAX_BINS;
use distplot_core::utils::population_std_dev;
use distplot_core::{Result, Sample};
use distplot_quantile::QuantileExt;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Sturges' rule for a sample of size `n`: `ceil(log2(n) + 1)`
///
/// An empty sample yields a single bin.
pub fn sturges_count(n: usize) -> usize {
    if n == 0 {
        debug!("sturges bin count of empty sample, returning 1");
        return 1;
    }
    ((n as f64).log2() + 1.0).ceil().to_usize().unwrap_or(1).max(1)
}

/// Sturges' rule for unsorted data
///
/// # Examples
///
/// ```rust
/// use distplot_histogram::sturges;
///
/// assert_eq!(sturges(&[1.0, 1.0, 1.0, 1.0]), 3);
/// assert_eq!(sturges(&[0.0; 100]), 8);
/// ```
pub fn sturges(data: &[f64]) -> usize {
    sturges_count(data.len())
}

/// Convert a bin width into a bin count over `range`
///
/// Returns `None` when the width cannot be used as a divisor or the count
/// exceeds [`MAX_BINS`].
fn count_for_width(range: f64, bin_width: f64) -> Option<usize> {
    if !(bin_width.is_finite() && bin_width > 0.0) {
        return None;
    }
    let count = (range / bin_width).ceil();
    if !count.is_finite() {
        return None;
    }
    let count = count.to_usize()?.max(1);
    if count > MAX_BINS {
        debug!(count, max = MAX_BINS, "rule bin count above limit");
        return None;
    }
    Some(count)
}

/// Freedman-Diaconis rule for a validated sample
///
/// Uses the bin width `h = 2 * IQR * n^(-1/3)` and returns
/// `ceil((max - min) / h)`. Falls back to Sturges' rule when the IQR is zero.
pub fn freedman_diaconis_sample(sample: &Sample) -> Result<usize> {
    let n = sample.len();
    let iqr = sample.iqr()?;
    if iqr <= 0.0 {
        debug!(n, "zero IQR, falling back to sturges bin count");
        return Ok(sturges_count(n));
    }

    let bin_width = 2.0 * iqr * (n as f64).powf(-1.0 / 3.0);
    let range = sample.range().unwrap_or(0.0);
    Ok(count_for_width(range, bin_width).unwrap_or_else(|| {
        debug!(bin_width, "unusable Freedman-Diaconis width, falling back to sturges");
        sturges_count(n)
    }))
}

/// Freedman-Diaconis rule for unsorted data
///
/// # Examples
///
/// ```rust
/// use distplot_histogram::freedman_diaconis;
///
/// // Zero IQR falls back to Sturges' rule
/// assert_eq!(freedman_diaconis(&[1.0, 1.0, 1.0, 1.0]).unwrap(), 3);
/// ```
pub fn freedman_diaconis(data: &[f64]) -> Result<usize> {
    freedman_diaconis_sample(&Sample::from_slice(data)?)
}

/// Scott's rule for a validated sample
///
/// Uses the bin width `h = 3.5 * σ * n^(-1/3)` with the population standard
/// deviation. Falls back to Sturges' rule when `σ` is zero.
pub fn scott_sample(sample: &Sample) -> usize {
    let n = sample.len();
    if n == 0 {
        return sturges_count(n);
    }

    let sigma = population_std_dev(sample.values());
    let bin_width = 3.5 * sigma * (n as f64).powf(-1.0 / 3.0);
    let range = sample.range().unwrap_or(0.0);
    count_for_width(range, bin_width).unwrap_or_else(|| {
        debug!(bin_width, "unusable Scott width, falling back to sturges");
        sturges_count(n)
    })
}

/// Scott's rule for unsorted data
pub fn scott(data: &[f64]) -> Result<usize> {
    Ok(scott_sample(&Sample::from_slice(data)?))
}

/// Rule used to choose a histogram bin count from the data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinRule {
    /// `ceil(log2(n) + 1)`
    Sturges,
    /// Width `2 * IQR * n^(-1/3)`
    #[default]
    FreedmanDiaconis,
    /// Width `3.5 * σ * n^(-1/3)`
    Scott,
}

impl BinRule {
    /// Compute the bin count this rule selects for a sample
    pub fn bin_count(&self, sample: &Sample) -> Result<usize> {
        match self {
            BinRule::Sturges => Ok(sturges_count(sample.len())),
            BinRule::FreedmanDiaconis => freedman_diaconis_sample(sample),
            BinRule::Scott => Ok(scott_sample(sample)),
        }
    }

    /// Name of this rule for debugging/logging
    pub fn name(&self) -> &'static str {
        match self {
            BinRule::Sturges => "sturges",
            BinRule::FreedmanDiaconis => "freedman-diaconis",
            BinRule::Scott => "scott",
        }
    }
}
