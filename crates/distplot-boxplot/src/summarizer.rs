//! Box-plot summarizer

use crate::types::{BoxPlotStats, TukeyFences, WhiskerMethod};
use distplot_core::{Error, Result, Sample};
use distplot_quantile::QuantileExt;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Conventional Tukey fence factor
pub const DEFAULT_FENCE_FACTOR: f64 = 1.5;

/// Computes [`BoxPlotStats`] from a sample
///
/// # Examples
///
/// ```rust
/// use distplot_boxplot::{BoxPlotSummarizer, WhiskerMethod};
/// use distplot_core::Sample;
///
/// let sample = Sample::new(vec![1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
///
/// let stats = BoxPlotSummarizer::new().summarize(&sample).unwrap();
/// assert_eq!(stats.whisker_high, 4.0);
/// assert_eq!(stats.outliers, vec![100.0]);
///
/// let stats = BoxPlotSummarizer::new()
///     .method(WhiskerMethod::MinMax)
///     .summarize(&sample)
///     .unwrap();
/// assert_eq!(stats.whisker_high, 100.0);
/// assert!(stats.outliers.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxPlotSummarizer {
    method: WhiskerMethod,
    fence_factor: f64,
}

impl Default for BoxPlotSummarizer {
    fn default() -> Self {
        Self {
            method: WhiskerMethod::default(),
            fence_factor: DEFAULT_FENCE_FACTOR,
        }
    }
}

impl BoxPlotSummarizer {
    /// Create a summarizer using Tukey whiskers with the 1.5 IQR fences
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the whisker method
    pub fn method(mut self, method: WhiskerMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the fence factor used by the Tukey method
    pub fn fence_factor(mut self, fence_factor: f64) -> Self {
        self.fence_factor = fence_factor;
        self
    }

    /// The configured whisker method
    pub fn whisker_method(&self) -> WhiskerMethod {
        self.method
    }

    /// Compute box-plot statistics
    ///
    /// An empty sample returns all-zero statistics with no outliers.
    pub fn summarize(&self, sample: &Sample) -> Result<BoxPlotStats> {
        if !(self.fence_factor.is_finite() && self.fence_factor >= 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Fence factor {} must be finite and non-negative",
                self.fence_factor
            )));
        }

        let (Some(min), Some(max)) = (sample.min(), sample.max()) else {
            debug!("box plot of empty sample, returning zero statistics");
            return Ok(BoxPlotStats::default());
        };
        let quartiles = sample.quartiles()?;
        let (q1, median, q3) = (quartiles.q1, quartiles.q2, quartiles.q3);

        let (whisker_low, whisker_high, outliers) = match self.method {
            WhiskerMethod::MinMax => (min, max, Vec::new()),
            WhiskerMethod::Tukey => {
                let fences = TukeyFences::new(q1, q3, self.fence_factor);
                let (inside, outliers): (Vec<f64>, Vec<f64>) =
                    sample.sorted().iter().partition(|&&x| fences.contains(x));

                // Collapse onto the box when nothing in-fence extends past it
                let low = inside.first().copied().filter(|&x| x < q1).unwrap_or(q1);
                let high = inside.last().copied().filter(|&x| x > q3).unwrap_or(q3);
                (low.clamp(min, max), high.clamp(min, max), outliers)
            }
        };

        Ok(BoxPlotStats {
            min,
            q1,
            median,
            q3,
            max,
            whisker_low,
            whisker_high,
            outliers,
        })
    }
}

/// Compute box-plot statistics of unsorted data
///
/// # Examples
///
/// ```rust
/// use distplot_boxplot::{summarize, WhiskerMethod};
///
/// let stats = summarize(&[1.0, 2.0, 3.0, 4.0, 100.0], WhiskerMethod::Tukey).unwrap();
/// assert_eq!((stats.q1, stats.median, stats.q3), (2.0, 3.0, 4.0));
/// assert_eq!(stats.whisker_low, 1.0);
/// ```
pub fn summarize(data: &[f64], method: WhiskerMethod) -> Result<BoxPlotStats> {
    BoxPlotSummarizer::new()
        .method(method)
        .summarize(&Sample::from_slice(data)?)
}
