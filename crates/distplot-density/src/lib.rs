//! Kernel density estimation for violin and density plots
//!
//! Evaluates a Gaussian kernel density estimate
//!
//! ```text
//! f(x) = 1 / (n h) * Σ K((x - x_i) / h),   K(z) = exp(-z²/2) / sqrt(2π)
//! ```
//!
//! at evenly spaced points over `[min - 0.1 range, max + 0.1 range]`.
//!
//! Each call costs `O(num_points * n)` and is recomputed from scratch. With
//! the `parallel` feature the evaluation grid is split across a rayon thread
//! pool; results are identical to the sequential path.
//!
//! # Examples
//!
//! ```rust
//! use distplot_core::Sample;
//! use distplot_density::DensityEstimator;
//!
//! let sample = Sample::new(vec![1.0, 2.0, 2.5, 3.0, 7.0]).unwrap();
//! let curve = DensityEstimator::new().estimate(&sample).unwrap();
//!
//! assert_eq!(curve.len(), 100);
//! println!("{curve}");
//! ```

pub mod estimator;
pub mod kernel;
pub mod types;

pub use estimator::{
    kde, kde_evaluate, kde_sample, kde_with_padding, DensityEstimator, DEFAULT_NUM_POINTS,
    DEFAULT_PADDING,
};
pub use kernel::{gaussian_kernel, INV_SQRT_2PI};
pub use types::{DensityCurve, DensityPoint};

pub use distplot_core::{Error, Result};
pub use distplot_spread::Bandwidth;
