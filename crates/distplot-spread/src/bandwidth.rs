//! Kernel bandwidth selection

use distplot_core::utils::population_std_dev;
use distplot_core::{Error, Result, Sample};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scale factor of Silverman's rule for a Gaussian kernel
pub const SILVERMAN_FACTOR: f64 = 1.06;

/// Bandwidth returned for an empty sample
pub const EMPTY_SAMPLE_BANDWIDTH: f64 = 1.0;

/// Silverman's rule of thumb for a validated sample
///
/// `h = 1.06 * σ * n^(-1/5)` where `σ` is the population standard deviation.
///
/// An empty sample returns [`EMPTY_SAMPLE_BANDWIDTH`]. A sample with zero
/// spread (a single observation, or all observations equal) returns `0.0`,
/// which the density estimator rejects; callers must guard against it.
pub fn silverman_sample(sample: &Sample) -> f64 {
    let n = sample.len();
    if n == 0 {
        debug!("silverman bandwidth of empty sample, returning {EMPTY_SAMPLE_BANDWIDTH}");
        return EMPTY_SAMPLE_BANDWIDTH;
    }

    let sigma = population_std_dev(sample.values());
    let bandwidth = SILVERMAN_FACTOR * sigma * (n as f64).powf(-0.2);
    if bandwidth == 0.0 {
        debug!(n, "silverman bandwidth is zero for a sample without spread");
    }
    bandwidth
}

/// Silverman's rule of thumb for unsorted data
///
/// # Examples
///
/// ```rust
/// use distplot_spread::silverman;
///
/// assert_eq!(silverman(&[]).unwrap(), 1.0);
/// assert_eq!(silverman(&[5.0]).unwrap(), 0.0);
/// assert!(silverman(&[1.0, 2.0, 3.0]).unwrap() > 0.0);
/// ```
pub fn silverman(data: &[f64]) -> Result<f64> {
    let sample = Sample::from_slice(data)?;
    Ok(silverman_sample(&sample))
}

/// How the smoothing bandwidth of a density estimate is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bandwidth {
    /// Silverman's rule of thumb
    #[default]
    Silverman,
    /// A caller-supplied bandwidth
    Fixed(f64),
}

impl Bandwidth {
    /// Resolve the bandwidth for a sample
    ///
    /// A fixed bandwidth must be finite and strictly positive. Silverman's
    /// rule is returned as computed, including the degenerate `0.0`.
    pub fn select(&self, sample: &Sample) -> Result<f64> {
        match *self {
            Bandwidth::Silverman => Ok(silverman_sample(sample)),
            Bandwidth::Fixed(h) => {
                if !h.is_finite() || h <= 0.0 {
                    return Err(Error::invalid_bandwidth(h));
                }
                Ok(h)
            }
        }
    }

    /// Name of this selection method for debugging/logging
    pub fn name(&self) -> &'static str {
        match self {
            Bandwidth::Silverman => "silverman",
            Bandwidth::Fixed(_) => "fixed",
        }
    }
}
