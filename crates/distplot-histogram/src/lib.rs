//! Histogram construction for distribution plots
//!
//! This crate partitions a sample into contiguous bins and selects bin counts
//! automatically.
//!
//! # Key Features
//!
//! - **Equal-width bins** over the sample's `[min, max]`, with a closed last bin
//! - **Explicit edges** supplied by the caller
//! - **Bin-count rules**: Sturges, Freedman-Diaconis and Scott
//! - **No division by zero**: constant samples get a single nominal-width bin,
//!   and zero-width rules fall back to Sturges
//! - **Bounded output**: at most [`MAX_BINS`] equal-width bins; bins narrower
//!   than the spacing of representable values are merged, and a bin whose
//!   width or density is not finite is reported as `Error::Computation`
//!
//! # Examples
//!
//! ## Fixed Number of Bins
//!
//! ```rust
//! use distplot_histogram::histogram;
//!
//! let data: Vec<f64> = (0..=10).map(f64::from).collect();
//! let hist = histogram(&data, 5).unwrap();
//!
//! assert_eq!(hist.len(), 5);
//! assert_eq!(hist.counts(), vec![2, 2, 2, 2, 3]); // 10 lands in the closed last bin
//! for bin in hist.bins() {
//!     println!("  {bin}");
//! }
//! ```
//!
//! ## Automatic Bin Count
//!
//! ```rust
//! use distplot_histogram::{histogram, BinRule};
//!
//! let data = vec![1.0, 2.0, 2.5, 3.0, 3.2, 3.5, 9.0];
//! let hist = histogram(&data, BinRule::FreedmanDiaconis).unwrap();
//! assert_eq!(hist.binned_count(), data.len());
//! ```
//!
//! ## Explicit Edges
//!
//! ```rust
//! use distplot_histogram::histogram;
//!
//! let hist = histogram(&[0.5, 1.5, 2.5], vec![0.0, 1.0, 3.0]).unwrap();
//! assert_eq!(hist.counts(), vec![1, 2]);
//! ```

pub mod builders;
pub mod rules;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::{
    BinSpec, ExplicitEdgesBuilder, FixedWidthBuilder, DEFAULT_NOMINAL_WIDTH, MAX_BINS,
};
pub use rules::{
    freedman_diaconis, freedman_diaconis_sample, scott, scott_sample, sturges, sturges_count,
    BinRule,
};
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};

pub use distplot_core::{Error, Result};

/// Build a histogram from unsorted data
///
/// `bins` is a bin count, a vector of explicit edges, a [`BinRule`], or a
/// [`BinSpec`].
pub fn histogram(data: &[f64], bins: impl Into<BinSpec>) -> Result<Histogram> {
    bins.into().build_slice(data)
}
