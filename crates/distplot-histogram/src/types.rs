//! Core types for histogram representation

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub lower_edge: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub upper_edge: f64,
    /// Number of values in this bin
    pub count: usize,
    /// Density (count / (total_count * bin_width))
    pub density: f64,
}

impl HistogramBin {
    /// Create a new histogram bin
    ///
    /// The density is zero when the bin has no width or the sample is empty.
    pub fn new(lower_edge: f64, upper_edge: f64, count: usize, total_count: usize) -> Self {
        let width = upper_edge - lower_edge;
        let density = if width > 0.0 && total_count > 0 {
            count as f64 / total_count as f64 / width
        } else {
            0.0
        };

        Self {
            lower_edge,
            upper_edge,
            count,
            density,
        }
    }

    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        self.lower_edge + self.width() / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.upper_edge - self.lower_edge
    }

    /// Check if a value falls within the half-open interval of this bin
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower_edge && value < self.upper_edge
    }

    /// Get the relative frequency (count / total_count)
    pub fn frequency(&self, total_count: usize) -> f64 {
        if total_count > 0 {
            self.count as f64 / total_count as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}, density={:.3}",
            self.lower_edge, self.upper_edge, self.count, self.density
        )
    }
}

/// A contiguous sequence of histogram bins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// The bins that make up the histogram
    bins: Vec<HistogramBin>,
    /// Total number of data points
    total_count: usize,
}

impl Histogram {
    /// Create a new histogram
    pub fn new(bins: Vec<HistogramBin>, total_count: usize) -> Self {
        Self { bins, total_count }
    }

    /// A histogram with no bins
    pub fn empty() -> Self {
        Self::new(vec![], 0)
    }

    /// Get the bins
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Consume the histogram and return its bins
    pub fn into_bins(self) -> Vec<HistogramBin> {
        self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram has no bins
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Get the size of the sample the histogram was built from
    ///
    /// With explicit edges this can exceed the sum of counts when some
    /// observations lie outside the edges.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Get the number of observations that landed in a bin
    pub fn binned_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Get the maximum density in the histogram
    pub fn max_density(&self) -> f64 {
        self.bins.iter().map(|bin| bin.density).fold(0.0, f64::max)
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Find which bin contains a given value
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        // Last bin includes its right boundary
        if let Some(last) = self.bins.last() {
            if value == last.upper_edge {
                return Some(self.bins.len() - 1);
            }
        }

        self.bins.iter().position(|bin| bin.contains(value))
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Get densities as a vector
    pub fn densities(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.density).collect()
    }

    /// Get bin centers as a vector
    pub fn centers(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.center()).collect()
    }

    /// Get bin edges (including rightmost edge)
    pub fn edges(&self) -> Vec<f64> {
        let Some(last) = self.bins.last() else {
            return vec![];
        };

        let mut edges: Vec<f64> = self.bins.iter().map(|bin| bin.lower_edge).collect();
        edges.push(last.upper_edge);
        edges
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.bins.first(), self.bins.last()) {
            (Some(first), Some(last)) => write!(
                f,
                "Histogram({} bins, n={}, range=[{:.3}, {:.3}])",
                self.len(),
                self.total_count,
                first.lower_edge,
                last.upper_edge
            ),
            _ => write!(f, "Histogram(empty)"),
        }
    }
}
