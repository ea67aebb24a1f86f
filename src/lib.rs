//! Distribution statistics for box, violin, histogram and density plots
//!
//! This crate re-exports the distplot workspace crates and adds
//! [`Distribution`], which validates and sorts a sample once and then derives
//! every plot statistic from it.
//!
//! | Crate | Provides |
//! |-------|----------|
//! | `distplot-core` | [`Sample`], [`Error`], [`Result`] |
//! | `distplot-quantile` | [`quantile`], [`quartiles`], [`iqr`] |
//! | `distplot-spread` | [`silverman`], [`Bandwidth`] |
//! | `distplot-histogram` | [`histogram`], [`sturges`], [`freedman_diaconis`] |
//! | `distplot-boxplot` | [`summarize`], [`BoxPlotStats`] |
//! | `distplot-density` | [`kde`], [`DensityCurve`] |
//!
//! # Example
//!
//! ```rust
//! use distplot::prelude::*;
//!
//! let dist = Distribution::from_slice(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
//!
//! let stats = dist.box_plot(&BoxPlotSummarizer::new()).unwrap();
//! assert_eq!(stats.outliers, vec![100.0]);
//!
//! let hist = dist.histogram(BinRule::Sturges).unwrap();
//! assert_eq!(hist.binned_count(), 5);
//!
//! let curve = dist.density(&DensityEstimator::new()).unwrap();
//! assert_eq!(curve.len(), 100);
//! ```

pub mod profile;

pub use distplot_boxplot::{
    summarize, BoxPlotStats, BoxPlotSummarizer, TukeyFences, WhiskerMethod, DEFAULT_FENCE_FACTOR,
};
pub use distplot_core::{utils, Error, Result, Sample};
pub use distplot_density::{
    gaussian_kernel, kde, kde_evaluate, kde_sample, kde_with_padding, DensityCurve,
    DensityEstimator, DensityPoint,
};
pub use distplot_histogram::{
    freedman_diaconis, histogram, scott, sturges, BinRule, BinSpec, ExplicitEdgesBuilder,
    FixedWidthBuilder, Histogram, HistogramBin, HistogramBuilder, MAX_BINS,
};
pub use distplot_quantile::{iqr, quantile, quantiles, quartiles, QuantileExt, Quartiles};
pub use distplot_spread::{silverman, Bandwidth};

pub use profile::{Distribution, DistributionProfile, PlotConfig};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BinRule, BinSpec, BoxPlotStats, BoxPlotSummarizer, DensityCurve, DensityEstimator,
        Distribution, Error, Histogram, HistogramBuilder, PlotConfig, QuantileExt, Result, Sample,
        WhiskerMethod,
    };
    pub use distplot_spread::Bandwidth;
}
