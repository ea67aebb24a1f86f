//! Box-plot summary statistics
//!
//! Computes the five-number summary, whisker ends and outliers drawn by box
//! and violin plots.
//!
//! | Method | Whiskers | Outliers |
//! |--------|----------|----------|
//! | `Tukey` (default) | Most extreme values within `[Q1 - 1.5 IQR, Q3 + 1.5 IQR]` | Values outside the fences |
//! | `MinMax` | Sample minimum and maximum | None |
//!
//! Whiskers are clamped to `[min, max]`, so
//! `min <= whisker_low <= q1 <= median <= q3 <= whisker_high <= max`
//! holds for every non-empty sample, including samples of one to three values.

pub mod summarizer;
pub mod types;

pub use summarizer::{summarize, BoxPlotSummarizer, DEFAULT_FENCE_FACTOR};
pub use types::{BoxPlotStats, TukeyFences, WhiskerMethod};

pub use distplot_core::{Error, Result};
