//! Spread measurements for distribution plots
//!
//! Currently this crate provides kernel bandwidth selection for density
//! estimates:
//!
//! - [`silverman`]: Silverman's rule of thumb, `1.06 * σ * n^(-1/5)`
//! - [`Bandwidth`]: configuration choosing between Silverman and a fixed value
//!
//! The population standard deviation it builds on lives in
//! [`distplot_core::utils::population_std_dev`].

pub mod bandwidth;

pub use bandwidth::{
    silverman, silverman_sample, Bandwidth, EMPTY_SAMPLE_BANDWIDTH, SILVERMAN_FACTOR,
};
pub use distplot_core::utils::population_std_dev;
