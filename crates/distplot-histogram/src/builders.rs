//! Histogram building strategies

use crate::rules::BinRule;
use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use distplot_core::{Error, Result, Sample};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Width of the single bin emitted for a constant sample
pub const DEFAULT_NOMINAL_WIDTH: f64 = 1.0;

/// Largest number of equal-width bins a histogram may request
///
/// Bin-count rules that exceed it fall back to Sturges' rule.
pub const MAX_BINS: usize = 10_000;

/// `num_bins + 1` evenly spaced edges over `[min, max]`
///
/// Adjacent edges that round to the same value are merged, so the result may
/// hold fewer bins than requested but its edges are strictly increasing.
fn equal_width_edges(min: f64, max: f64, num_bins: usize) -> Vec<f64> {
    let n = num_bins as f64;
    let range = max - min;
    let mut edges: Vec<f64> = (0..=num_bins)
        .map(|i| {
            if i == num_bins {
                return max;
            }
            let edge = if range.is_finite() {
                min + i as f64 * (range / n)
            } else {
                // min < 0 < max when the range overflows
                let t = i as f64 / n;
                min * (1.0 - t) + max * t
            };
            edge.min(max)
        })
        .collect();
    edges.dedup();
    edges
}

/// Reject histograms whose bins have no finite width or density
fn check_finite(histogram: Histogram) -> Result<Histogram> {
    if let Some(bin) = histogram
        .bins()
        .iter()
        .find(|bin| !(bin.width().is_finite() && bin.density.is_finite()))
    {
        return Err(Error::Computation(format!(
            "Histogram bin [{:e}, {:e}] has no finite width or density",
            bin.lower_edge, bin.upper_edge
        )));
    }
    Ok(histogram)
}

/// Fixed-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins spanning
/// `[min, max]` of the sample. Every bin is half-open except the last, which
/// is closed so that the maximum is always counted.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedWidthBuilder {
    num_bins: usize,
    nominal_width: f64,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins,
            nominal_width: DEFAULT_NOMINAL_WIDTH,
        }
    }

    /// Set the width of the bin used when every observation is equal
    pub fn with_nominal_width(mut self, nominal_width: f64) -> Self {
        self.nominal_width = nominal_width;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.num_bins == 0 {
            return Err(Error::InvalidParameter(
                "Histogram needs at least one bin".to_string(),
            ));
        }
        if self.num_bins > MAX_BINS {
            return Err(Error::InvalidParameter(format!(
                "Histogram bin count {} exceeds the limit of {MAX_BINS}",
                self.num_bins
            )));
        }
        if !(self.nominal_width.is_finite() && self.nominal_width > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "Nominal bin width {} must be finite and strictly positive",
                self.nominal_width
            )));
        }
        Ok(())
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build(&self, sample: &Sample) -> Result<Histogram> {
        self.validate()?;

        let sorted = sample.sorted();
        let (Some(min), Some(max)) = (sample.min(), sample.max()) else {
            debug!("histogram of empty sample, returning no bins");
            return Ok(Histogram::empty());
        };
        let total = sorted.len();

        if max == min {
            // A zero-width bin cannot carry a density; widen the nominal bin
            // where half of it would vanish next to a large value
            let half = (self.nominal_width / 2.0).max(min.abs() * f64::EPSILON);
            debug!(value = min, width = self.nominal_width, "constant sample, emitting a single nominal bin");
            let bin = HistogramBin::new(min - half, min + half, total, total);
            return check_finite(Histogram::new(vec![bin], total));
        }

        let edges = equal_width_edges(min, max, self.num_bins);
        let num_bins = edges.len() - 1;
        if num_bins < self.num_bins {
            debug!(requested = self.num_bins, num_bins, "merged bins narrower than the value spacing");
        }

        // Single pass through sorted data
        let last = num_bins - 1;
        let mut counts = vec![0usize; num_bins];
        let mut current_bin = 0;
        for &value in sorted {
            while current_bin < last && value >= edges[current_bin + 1] {
                current_bin += 1;
            }
            counts[current_bin] += 1;
        }

        let bins = edges
            .windows(2)
            .zip(counts)
            .map(|(pair, count)| HistogramBin::new(pair[0], pair[1], count, total))
            .collect();

        check_finite(Histogram::new(bins, total))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}

/// Histogram builder over caller-supplied bin edges
///
/// Edges are sorted and de-duplicated before use. Observations outside
/// `[first edge, last edge]` are not counted; the caller is responsible for
/// edges that span the data.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplicitEdgesBuilder {
    edges: Vec<f64>,
}

impl ExplicitEdgesBuilder {
    /// Create a builder, validating and sorting the edges
    pub fn new(edges: Vec<f64>) -> Result<Self> {
        if edges.iter().any(|e| !e.is_finite()) {
            return Err(Error::InvalidParameter(
                "Histogram edges must be finite".to_string(),
            ));
        }
        let mut edges = distplot_core::utils::sorted(&edges);
        edges.dedup();
        if edges.len() < 2 {
            return Err(Error::InvalidParameter(format!(
                "Histogram needs at least 2 distinct edges, got {}",
                edges.len()
            )));
        }
        Ok(Self { edges })
    }

    /// The sorted, de-duplicated edges
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Index of the bin an observation falls into
    fn bin_index(&self, value: f64) -> Option<usize> {
        let last_edge = self.edges.len() - 1;
        // Number of edges at or below the value
        match self.edges.partition_point(|&e| e <= value) {
            0 => None,
            i if i <= last_edge => Some(i - 1),
            _ if value == self.edges[last_edge] => Some(last_edge - 1),
            _ => None,
        }
    }
}

impl HistogramBuilder for ExplicitEdgesBuilder {
    fn build(&self, sample: &Sample) -> Result<Histogram> {
        let total = sample.len();
        let mut counts = vec![0usize; self.edges.len() - 1];
        let mut outside = 0usize;
        for &value in sample.sorted() {
            match self.bin_index(value) {
                Some(i) => counts[i] += 1,
                None => outside += 1,
            }
        }
        if outside > 0 {
            debug!(outside, "observations outside the explicit histogram edges");
        }

        let bins = self
            .edges
            .windows(2)
            .zip(counts)
            .map(|(pair, count)| HistogramBin::new(pair[0], pair[1], count, total))
            .collect();

        check_finite(Histogram::new(bins, total))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.edges.len() - 1)
    }
}

impl HistogramBuilder for BinRule {
    fn build(&self, sample: &Sample) -> Result<Histogram> {
        let num_bins = self.bin_count(sample)?;
        debug!(rule = self.name(), num_bins, "selected histogram bin count");
        FixedWidthBuilder::new(num_bins).build(sample)
    }
}

/// How histogram bins are specified
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinSpec {
    /// A number of equal-width bins over `[min, max]`
    Count(usize),
    /// Explicit bin edges
    Edges(Vec<f64>),
    /// A bin count chosen by a rule
    Rule(BinRule),
}

impl Default for BinSpec {
    fn default() -> Self {
        BinSpec::Rule(BinRule::default())
    }
}

impl From<usize> for BinSpec {
    fn from(count: usize) -> Self {
        BinSpec::Count(count)
    }
}

impl From<Vec<f64>> for BinSpec {
    fn from(edges: Vec<f64>) -> Self {
        BinSpec::Edges(edges)
    }
}

impl From<&[f64]> for BinSpec {
    fn from(edges: &[f64]) -> Self {
        BinSpec::Edges(edges.to_vec())
    }
}

impl From<BinRule> for BinSpec {
    fn from(rule: BinRule) -> Self {
        BinSpec::Rule(rule)
    }
}

impl HistogramBuilder for BinSpec {
    fn build(&self, sample: &Sample) -> Result<Histogram> {
        match self {
            BinSpec::Count(count) => FixedWidthBuilder::new(*count).build(sample),
            BinSpec::Edges(edges) => ExplicitEdgesBuilder::new(edges.clone())?.build(sample),
            BinSpec::Rule(rule) => rule.build(sample),
        }
    }

    fn target_bins(&self) -> Option<usize> {
        match self {
            BinSpec::Count(count) => Some(*count),
            BinSpec::Edges(edges) => ExplicitEdgesBuilder::new(edges.clone())
                .ok()
                .and_then(|builder| builder.target_bins()),
            BinSpec::Rule(_) => None,
        }
    }
}
