//! Core traits for histogram building

use crate::types::Histogram;
use distplot_core::{Result, Sample};

/// Trait for building histograms from sample data
pub trait HistogramBuilder {
    /// Build a histogram from a validated sample
    fn build(&self, sample: &Sample) -> Result<Histogram>;

    /// Build a histogram from unsorted data
    ///
    /// Validates the data first; non-finite values are rejected.
    fn build_slice(&self, data: &[f64]) -> Result<Histogram> {
        self.build(&Sample::from_slice(data)?)
    }

    /// Get the target number of bins (if known before seeing the data)
    fn target_bins(&self) -> Option<usize> {
        None
    }
}
