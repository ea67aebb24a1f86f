//! Utility functions for working with data slices

use ordered_float::OrderedFloat;
use statrs::statistics::Statistics;

/// Sort data and return a new vector
///
/// NaN values are placed at the end; callers working with a validated
/// [`Sample`](crate::Sample) never see them.
///
/// # Examples
///
/// ```rust
/// use distplot_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by_key(|&x| OrderedFloat(x));
    sorted
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use distplot_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().mean()
}

/// Calculate the population standard deviation (divides by `n`)
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use distplot_core::utils::population_std_dev;
///
/// let sd = population_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
/// assert!((sd - 2.0).abs() < 1e-12);
/// assert_eq!(population_std_dev(&[5.0]), 0.0);
/// ```
pub fn population_std_dev(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().population_std_dev()
}
