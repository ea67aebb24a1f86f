//! Order-statistic interpolation
//!
//! Quantiles are computed with linear interpolation between adjacent order
//! statistics (Hyndman & Fan type 7, the default of R and NumPy):
//!
//! ```text
//! h = (n - 1) * p
//! Q(p) = x[floor(h)] + (h - floor(h)) * (x[ceil(h)] - x[floor(h)])
//! ```

use crate::types::Quartiles;
use distplot_core::{Error, Result, Sample};
use tracing::debug;

/// Check that a probability is a finite value in `[0, 1]`
pub fn check_probability(p: f64) -> Result<()> {
    // NaN fails the range check as well
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_quantile(p));
    }
    Ok(())
}

/// Compute a quantile of ascending-sorted data
///
/// The caller guarantees `sorted` is in ascending order and finite, as
/// returned by [`Sample::sorted`].
///
/// - `p = 0` returns the minimum and `p = 1` the maximum.
/// - A single observation is returned for every `p`.
/// - An empty slice returns `0.0`.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    check_probability(p)?;

    let n = sorted.len();
    if n == 0 {
        debug!("quantile of empty sample, returning 0");
        return Ok(0.0);
    }
    if n == 1 || p == 0.0 {
        return Ok(sorted[0]);
    }
    if p == 1.0 {
        return Ok(sorted[n - 1]);
    }

    let index = (n - 1) as f64 * p;
    let lower = index.floor() as usize;
    let upper = (index.ceil() as usize).min(n - 1);
    let weight = index - index.floor();

    let lo = sorted[lower];
    if weight == 0.0 || lower == upper {
        return Ok(lo);
    }
    let hi = sorted[upper];

    let gap = hi - lo;
    let value = if gap.is_finite() {
        lo + gap * weight
    } else {
        // lo < 0 < hi here, so both terms grow with the weight
        lo * (1.0 - weight) + hi * weight
    };
    // Clamping keeps the result monotone in p across segment boundaries
    Ok(value.clamp(lo, hi))
}

/// Compute the quartiles of ascending-sorted data
pub fn quartiles_sorted(sorted: &[f64]) -> Result<Quartiles> {
    Ok(Quartiles {
        q1: quantile_sorted(sorted, 0.25)?,
        q2: quantile_sorted(sorted, 0.5)?,
        q3: quantile_sorted(sorted, 0.75)?,
    })
}

/// Compute a quantile of unsorted data
///
/// The caller's slice is left untouched; a sorted copy is made internally.
///
/// # Examples
///
/// ```rust
/// use distplot_quantile::quantile;
///
/// let data = [5.0, 1.0, 4.0, 2.0, 3.0];
/// assert_eq!(quantile(&data, 0.5).unwrap(), 3.0);
/// assert_eq!(quantile(&data, 0.25).unwrap(), 2.0);
/// assert!(quantile(&data, 1.5).is_err());
/// ```
pub fn quantile(data: &[f64], p: f64) -> Result<f64> {
    let sample = Sample::from_slice(data)?;
    quantile_sorted(sample.sorted(), p)
}

/// Compute several quantiles of unsorted data with a single sort
pub fn quantiles(data: &[f64], probabilities: &[f64]) -> Result<Vec<f64>> {
    let sample = Sample::from_slice(data)?;
    probabilities
        .iter()
        .map(|&p| quantile_sorted(sample.sorted(), p))
        .collect()
}

/// Compute the 25th, 50th and 75th percentiles of unsorted data
pub fn quartiles(data: &[f64]) -> Result<Quartiles> {
    let sample = Sample::from_slice(data)?;
    quartiles_sorted(sample.sorted())
}

/// Compute the interquartile range `Q3 - Q1` of unsorted data
///
/// Returns `0.0` for an empty sample.
pub fn iqr(data: &[f64]) -> Result<f64> {
    Ok(quartiles(data)?.iqr())
}

/// Quantile operations on a validated [`Sample`]
///
/// These reuse the sample's cached sort, so computing several statistics on
/// the same sample sorts it only once.
pub trait QuantileExt {
    /// Compute a single quantile
    fn quantile(&self, p: f64) -> Result<f64>;

    /// Compute the quartiles
    fn quartiles(&self) -> Result<Quartiles>;

    /// Compute the interquartile range
    fn iqr(&self) -> Result<f64> {
        Ok(self.quartiles()?.iqr())
    }

    /// Compute the median
    fn median(&self) -> Result<f64> {
        self.quantile(0.5)
    }
}

impl QuantileExt for Sample {
    fn quantile(&self, p: f64) -> Result<f64> {
        quantile_sorted(self.sorted(), p)
    }

    fn quartiles(&self) -> Result<Quartiles> {
        quartiles_sorted(self.sorted())
    }
}
