//! Validated sample of real-valued observations

use crate::error::{Error, Result};
use crate::utils::sorted;
use serde::{Deserialize, Serialize};

/// A finite sample of observations with a cached ascending order
///
/// Finiteness is checked once at construction so that the statistics built on
/// top of a `Sample` never see NaN or infinite values. The sorted copy is
/// computed once and shared by every statistic evaluated on the sample.
///
/// An empty sample is valid: each statistic documents its own fallback for it.
///
/// # Examples
///
/// ```rust
/// use distplot_core::Sample;
///
/// let sample = Sample::new(vec![3.0, 1.0, 2.0]).unwrap();
/// assert_eq!(sample.sorted(), &[1.0, 2.0, 3.0]);
/// assert_eq!(sample.values(), &[3.0, 1.0, 2.0]);
/// assert_eq!(sample.range(), Some(2.0));
///
/// assert!(Sample::new(vec![1.0, f64::NAN]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Sample {
    values: Vec<f64>,
    sorted: Vec<f64>,
}

impl Sample {
    /// Create a sample, rejecting NaN and infinite observations
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "sample contains non-finite value {} at index {index}",
                values[index]
            )));
        }
        let sorted = sorted(&values);
        Ok(Self { values, sorted })
    }

    /// Create a sample from a borrowed slice
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        Self::new(values.to_vec())
    }

    /// Observations in their original order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Observations in ascending order
    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the sample has no observations
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest observation
    pub fn min(&self) -> Option<f64> {
        self.sorted.first().copied()
    }

    /// Largest observation
    pub fn max(&self) -> Option<f64> {
        self.sorted.last().copied()
    }

    /// Distance between the largest and smallest observation
    pub fn range(&self) -> Option<f64> {
        Some(self.max()? - self.min()?)
    }

    /// Check if every observation has the same value
    ///
    /// Empty samples are not considered constant.
    pub fn is_constant(&self) -> bool {
        matches!(self.range(), Some(r) if r == 0.0)
    }
}

impl TryFrom<Vec<f64>> for Sample {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for Sample {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl From<Sample> for Vec<f64> {
    fn from(sample: Sample) -> Self {
        sample.values
    }
}

impl AsRef<[f64]> for Sample {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}
