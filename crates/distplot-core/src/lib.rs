//! Core types for distribution statistics
//!
//! This crate provides the pieces every other distplot crate builds on:
//!
//! - [`Sample`]: a finite, pre-sorted sample validated once at construction
//! - [`Error`] / [`Result`]: the shared error taxonomy
//! - [`utils`]: sorting and moment helpers
//!
//! # Error Taxonomy
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | `InvalidParameter` | A scalar argument is out of range or non-finite |
//! | `InvalidInput` | The sample contains NaN or infinite values |
//! | `InsufficientData` | The sample is too small and no fallback value exists |
//! | `Computation` | A zero-width or zero-bandwidth path would produce NaN/Inf |
//!
//! Empty and constant samples are not errors in general. Each statistic
//! documents the fallback value it returns for them.

pub mod error;
pub mod sample;
pub mod utils;

pub use error::{Error, Result};
pub use sample::Sample;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
