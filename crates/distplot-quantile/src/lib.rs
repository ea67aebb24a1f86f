//! Quantile estimation for distribution plots
//!
//! Provides linear-interpolation quantiles (Hyndman & Fan type 7), quartiles
//! and the interquartile range. These feed the box-plot summarizer and the
//! Freedman-Diaconis bin-count rule.
//!
//! # Degenerate Inputs
//!
//! - Empty samples return `0.0` for every statistic.
//! - Probabilities outside `[0, 1]` (or NaN) fail with
//!   [`Error::InvalidParameter`](distplot_core::Error::InvalidParameter).
//!
//! # Examples
//!
//! ```rust
//! use distplot_core::Sample;
//! use distplot_quantile::{quartiles, QuantileExt};
//!
//! let q = quartiles(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
//! assert_eq!((q.q1, q.q2, q.q3), (2.0, 3.0, 4.0));
//! assert_eq!(q.iqr(), 2.0);
//!
//! // Several statistics on one sample share a single sort
//! let sample = Sample::new(vec![9.0, 1.0, 5.0]).unwrap();
//! assert_eq!(sample.median().unwrap(), 5.0);
//! assert_eq!(sample.quantile(1.0).unwrap(), 9.0);
//! ```

pub mod estimator;
pub mod types;

pub use estimator::{
    check_probability, iqr, quantile, quantile_sorted, quantiles, quartiles, quartiles_sorted,
    QuantileExt,
};
pub use types::Quartiles;

pub use distplot_core::{Error, Result};
