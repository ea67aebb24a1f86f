//! Combined statistics for a single sample

use distplot_boxplot::{BoxPlotStats, BoxPlotSummarizer};
use distplot_core::{Error, Result, Sample};
use distplot_density::{DensityCurve, DensityEstimator};
use distplot_histogram::{BinSpec, Histogram, HistogramBuilder};
use distplot_quantile::{QuantileExt, Quartiles};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for every statistic drawn from one sample
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Box-plot whisker configuration
    pub box_plot: BoxPlotSummarizer,
    /// How histogram bins are chosen
    pub bins: BinSpec,
    /// Density estimate configuration
    pub density: DensityEstimator,
}

/// Box plot, histogram and density curve of one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionProfile {
    /// Box-plot statistics
    pub box_plot: BoxPlotStats,
    /// Histogram bins
    pub histogram: Histogram,
    /// Density curve, absent when the sample is empty or has no spread
    pub density: Option<DensityCurve>,
}

/// A validated sample from which plot statistics are derived
///
/// The sample is checked for non-finite values and sorted once; every
/// statistic reuses that sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution {
    sample: Sample,
}

impl Distribution {
    /// Create a distribution, rejecting NaN and infinite observations
    pub fn new(values: Vec<f64>) -> Result<Self> {
        Ok(Self {
            sample: Sample::new(values)?,
        })
    }

    /// Create a distribution from a borrowed slice
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        Self::new(values.to_vec())
    }

    /// The underlying sample
    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    /// Quartiles of the sample
    pub fn quartiles(&self) -> Result<Quartiles> {
        self.sample.quartiles()
    }

    /// Box-plot statistics
    pub fn box_plot(&self, summarizer: &BoxPlotSummarizer) -> Result<BoxPlotStats> {
        summarizer.summarize(&self.sample)
    }

    /// Histogram for a bin count, explicit edges or a bin rule
    pub fn histogram(&self, bins: impl Into<BinSpec>) -> Result<Histogram> {
        bins.into().build(&self.sample)
    }

    /// Density curve
    pub fn density(&self, estimator: &DensityEstimator) -> Result<DensityCurve> {
        estimator.estimate(&self.sample)
    }

    /// Compute every statistic in `config`
    ///
    /// A density estimate that cannot be drawn (empty sample, or a zero
    /// bandwidth for a sample without spread) is reported as `None`; any
    /// other failure is returned as an error.
    pub fn profile(&self, config: &PlotConfig) -> Result<DistributionProfile> {
        let density = match self.density(&config.density) {
            Ok(curve) => Some(curve),
            Err(err @ (Error::InsufficientData { .. } | Error::Computation(_))) => {
                debug!(%err, "no density curve for this sample");
                None
            }
            Err(err) => return Err(err),
        };

        Ok(DistributionProfile {
            box_plot: self.box_plot(&config.box_plot)?,
            histogram: self.histogram(config.bins.clone())?,
            density,
        })
    }
}

impl TryFrom<Vec<f64>> for Distribution {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}
