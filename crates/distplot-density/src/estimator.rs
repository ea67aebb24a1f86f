//! Gaussian kernel density estimation

use crate::kernel::gaussian_kernel;
use crate::types::{DensityCurve, DensityPoint};
use distplot_core::{Error, Result, Sample};
use distplot_spread::Bandwidth;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default number of evaluation points
pub const DEFAULT_NUM_POINTS: usize = 100;

/// Default domain extension on each side, as a fraction of the sample range
pub const DEFAULT_PADDING: f64 = 0.1;

fn check_bandwidth(bandwidth: f64) -> Result<()> {
    if !(bandwidth.is_finite() && bandwidth > 0.0) {
        return Err(Error::invalid_bandwidth(bandwidth));
    }
    Ok(())
}

/// Density at `x` of the Gaussian KDE over `values`
fn density_at(values: &[f64], inv_bandwidth: f64, scale: f64, x: f64) -> f64 {
    let sum: f64 = values
        .iter()
        .map(|&xi| gaussian_kernel((x - xi) * inv_bandwidth))
        .sum();
    sum * scale
}

/// Evenly spaced points over `[lo, hi]`, ending exactly at `hi`
fn grid(lo: f64, hi: f64, num_points: usize) -> Vec<f64> {
    if num_points == 1 {
        return vec![lo];
    }
    let step = (hi - lo) / (num_points - 1) as f64;
    let last = num_points - 1;
    (0..num_points)
        .map(|i| if i == last { hi } else { lo + i as f64 * step })
        .collect()
}

/// Evaluate a Gaussian KDE of a validated sample
///
/// The evaluation domain is `[min - padding * range, max + padding * range]`,
/// collapsing to a single repeated point when the sample is constant.
///
/// # Errors
///
/// - `InvalidParameter` for a non-positive or non-finite bandwidth, zero
///   evaluation points, or a negative/non-finite padding
/// - `InsufficientData` for an empty sample
/// - `Computation` if the estimate overflows
#[instrument(skip(sample), fields(n = sample.len()))]
pub fn kde_with_padding(
    sample: &Sample,
    bandwidth: f64,
    num_points: usize,
    padding: f64,
) -> Result<DensityCurve> {
    check_bandwidth(bandwidth)?;
    if num_points == 0 {
        return Err(Error::InvalidParameter(
            "Density estimate needs at least one evaluation point".to_string(),
        ));
    }
    if !(padding.is_finite() && padding >= 0.0) {
        return Err(Error::InvalidParameter(format!(
            "Domain padding {padding} must be finite and non-negative"
        )));
    }
    let (Some(min), Some(max)) = (sample.min(), sample.max()) else {
        return Err(Error::empty_input("kde"));
    };

    let range = max - min;
    if range == 0.0 {
        debug!(value = min, "constant sample, density domain collapses to one point");
    }
    let xs = grid(min - padding * range, max + padding * range, num_points);

    let values = sample.values();
    let inv_bandwidth = 1.0 / bandwidth;
    let scale = 1.0 / (values.len() as f64 * bandwidth);

    #[cfg(feature = "parallel")]
    let ys: Vec<f64> = xs
        .par_iter()
        .map(|&x| density_at(values, inv_bandwidth, scale, x))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let ys: Vec<f64> = xs
        .iter()
        .map(|&x| density_at(values, inv_bandwidth, scale, x))
        .collect();

    if ys.iter().any(|y| !y.is_finite()) {
        return Err(Error::Computation(format!(
            "Density estimate with bandwidth {bandwidth} is not finite"
        )));
    }

    let points = xs
        .into_iter()
        .zip(ys)
        .map(|(x, y)| DensityPoint { x, y })
        .collect();
    Ok(DensityCurve::new(points, bandwidth))
}

/// Evaluate a Gaussian KDE of a validated sample with the default padding
pub fn kde_sample(sample: &Sample, bandwidth: f64, num_points: usize) -> Result<DensityCurve> {
    kde_with_padding(sample, bandwidth, num_points, DEFAULT_PADDING)
}

/// Evaluate a Gaussian KDE of unsorted data at `num_points` evenly spaced points
///
/// # Examples
///
/// ```rust
/// use distplot_density::kde;
/// use distplot_spread::silverman;
///
/// let data = [1.0, 1.1, 1.2, 2.0, 2.1, 2.2, 5.0];
/// let curve = kde(&data, silverman(&data).unwrap(), 100).unwrap();
/// assert_eq!(curve.len(), 100);
/// assert!(curve.ys().iter().all(|&y| y >= 0.0));
///
/// // A zero bandwidth is rejected rather than dividing by zero
/// assert!(kde(&data, 0.0, 100).is_err());
/// ```
pub fn kde(data: &[f64], bandwidth: f64, num_points: usize) -> Result<DensityCurve> {
    kde_sample(&Sample::from_slice(data)?, bandwidth, num_points)
}

/// Evaluate a Gaussian KDE of unsorted data at a single point
pub fn kde_evaluate(data: &[f64], bandwidth: f64, x: f64) -> Result<f64> {
    check_bandwidth(bandwidth)?;
    if !x.is_finite() {
        return Err(Error::InvalidParameter(format!(
            "Evaluation point {x} must be finite"
        )));
    }
    let sample = Sample::from_slice(data)?;
    if sample.is_empty() {
        return Err(Error::empty_input("kde_evaluate"));
    }
    let scale = 1.0 / (sample.len() as f64 * bandwidth);
    let y = density_at(sample.values(), 1.0 / bandwidth, scale, x);
    if !y.is_finite() {
        return Err(Error::Computation(format!(
            "Density estimate with bandwidth {bandwidth} is not finite"
        )));
    }
    Ok(y)
}

/// Configured density estimator
///
/// # Examples
///
/// ```rust
/// use distplot_core::Sample;
/// use distplot_density::DensityEstimator;
/// use distplot_spread::Bandwidth;
///
/// let sample = Sample::new(vec![1.0, 2.0, 2.5, 3.0, 4.0]).unwrap();
/// let curve = DensityEstimator::new()
///     .num_points(64)
///     .bandwidth(Bandwidth::Fixed(0.5))
///     .estimate(&sample)
///     .unwrap();
/// assert_eq!(curve.len(), 64);
/// assert_eq!(curve.bandwidth(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityEstimator {
    bandwidth: Bandwidth,
    num_points: usize,
    padding: f64,
}

impl Default for DensityEstimator {
    fn default() -> Self {
        Self {
            bandwidth: Bandwidth::Silverman,
            num_points: DEFAULT_NUM_POINTS,
            padding: DEFAULT_PADDING,
        }
    }
}

impl DensityEstimator {
    /// Create an estimator using Silverman's bandwidth and 100 points
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bandwidth selection
    pub fn bandwidth(mut self, bandwidth: Bandwidth) -> Self {
        self.bandwidth = bandwidth;
        self
    }

    /// Set the number of evaluation points
    pub fn num_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }

    /// Set the domain padding as a fraction of the sample range
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Estimate the density of a sample
    ///
    /// A sample without spread has a zero Silverman bandwidth; this is
    /// reported as `Computation` instead of being passed to the kernel.
    pub fn estimate(&self, sample: &Sample) -> Result<DensityCurve> {
        if sample.is_empty() {
            return Err(Error::empty_input("density estimate"));
        }
        let bandwidth = self.bandwidth.select(sample)?;
        if bandwidth == 0.0 {
            return Err(Error::Computation(format!(
                "{} bandwidth is zero for a sample without spread",
                self.bandwidth.name()
            )));
        }
        kde_with_padding(sample, bandwidth, self.num_points, self.padding)
    }
}
