//! Property-based tests for plot statistics
//!
//! These check the ordering, conservation and non-negativity guarantees
//! over arbitrary finite samples, including large offsets, values near
//! `f64::MAX` and tight clusters with far outliers.

mod common;

use distplot::prelude::*;
use distplot::{
    freedman_diaconis, histogram, kde, quantile, scott, TukeyFences, DEFAULT_FENCE_FACTOR, MAX_BINS,
};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

fn finite_sample(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6f64, 1..max_len)
}

/// A small spread on a large offset, where adjacent floats are far apart
fn offset_sample() -> impl Strategy<Value = Vec<f64>> {
    (1.0e15..1.0e16f64, prop::collection::vec(0.0..64.0f64, 1..60))
        .prop_map(|(offset, spread)| spread.into_iter().map(|x| offset + x).collect())
}

/// Values anywhere in the finite range of `f64`
fn extreme_sample() -> impl Strategy<Value = Vec<f64>> {
    let value = (0.0..1.0f64, any::<bool>()).prop_map(|(x, negative)| {
        if negative {
            -x * f64::MAX
        } else {
            x * f64::MAX
        }
    });
    prop::collection::vec(value, 1..40)
}

/// A tight cluster and one far outlier: a tiny IQR over a wide range
fn clustered_sample() -> impl Strategy<Value = Vec<f64>> {
    (prop::collection::vec(0.0..1.0e-6f64, 4..80), 1.0e3..1.0e9f64).prop_map(
        |(cluster, outlier)| {
            let mut values: Vec<f64> = cluster.into_iter().map(|x| 1.0 + x).collect();
            values.push(outlier);
            values
        },
    )
}

fn hard_sample() -> impl Strategy<Value = Vec<f64>> {
    prop_oneof![offset_sample(), extreme_sample(), clustered_sample()]
}

fn check_histogram(hist: &Histogram, n: usize) -> std::result::Result<(), TestCaseError> {
    prop_assert!(!hist.is_empty());
    prop_assert!(hist.len() <= MAX_BINS);
    prop_assert_eq!(hist.binned_count(), n);
    for bin in hist.bins() {
        prop_assert!(bin.lower_edge < bin.upper_edge, "{}", bin);
        prop_assert!(bin.lower_edge.is_finite() && bin.upper_edge.is_finite(), "{}", bin);
        prop_assert!(bin.width().is_finite() && bin.density.is_finite(), "{}", bin);
    }
    for pair in hist.bins().windows(2) {
        prop_assert_eq!(pair[0].upper_edge, pair[1].lower_edge);
    }
    Ok(())
}

/// Histograms of representable data either satisfy every bin invariant or
/// report a bin wider than `f64` can hold
fn check_histogram_result(
    result: distplot::Result<Histogram>,
    n: usize,
) -> std::result::Result<(), TestCaseError> {
    match result {
        Ok(hist) => check_histogram(&hist, n),
        Err(Error::Computation(_)) => Ok(()),
        Err(err) => Err(TestCaseError::fail(format!("unexpected error: {err}"))),
    }
}

proptest! {
    // Property: whisker and quartile ordering holds for both methods
    #[test]
    fn prop_box_plot_ordering(data in finite_sample(200), tukey in any::<bool>()) {
        let method = if tukey { WhiskerMethod::Tukey } else { WhiskerMethod::MinMax };
        let dist = Distribution::new(data).unwrap();
        let s = dist.box_plot(&BoxPlotSummarizer::new().method(method)).unwrap();

        prop_assert!(s.min <= s.whisker_low);
        prop_assert!(s.whisker_low <= s.q1);
        prop_assert!(s.q1 <= s.median);
        prop_assert!(s.median <= s.q3);
        prop_assert!(s.q3 <= s.whisker_high);
        prop_assert!(s.whisker_high <= s.max);
    }

    // Property: every Tukey outlier lies strictly outside the fences
    #[test]
    fn prop_outliers_outside_fences(data in finite_sample(200)) {
        let dist = Distribution::new(data).unwrap();
        let s = dist.box_plot(&BoxPlotSummarizer::new()).unwrap();
        let fences = TukeyFences::new(s.q1, s.q3, DEFAULT_FENCE_FACTOR);

        for &x in &s.outliers {
            prop_assert!(!fences.contains(x), "{} is inside [{}, {}]", x, fences.lower, fences.upper);
        }
        prop_assert!(s.outliers.windows(2).all(|w| w[0] <= w[1]));

        for &x in dist.sample().sorted() {
            if !s.is_outlier(x) {
                prop_assert!(s.whisker_low <= x && x <= s.whisker_high);
            }
        }
    }

    // Property: quantiles are monotone in p and stay within [min, max]
    #[test]
    fn prop_quantile_monotone(data in finite_sample(100), a in 0.0..=1.0f64, b in 0.0..=1.0f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let q_lo = quantile(&data, lo).unwrap();
        let q_hi = quantile(&data, hi).unwrap();
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        prop_assert!(q_lo <= q_hi);
        prop_assert!(min <= q_lo && q_hi <= max);
    }

    // Property: equal-width bins are contiguous and count every value
    #[test]
    fn prop_histogram_conserves_count(data in finite_sample(300), bins in 1usize..40) {
        let hist = histogram(&data, bins).unwrap();

        prop_assert_eq!(hist.binned_count(), data.len());
        prop_assert_eq!(hist.total_count(), data.len());
        for pair in hist.bins().windows(2) {
            prop_assert_eq!(pair[0].upper_edge, pair[1].lower_edge);
        }
        prop_assert!(hist.densities().iter().all(|d| d.is_finite() && *d >= 0.0));
    }

    // Property: every automatic rule produces a finite, count-preserving histogram
    #[test]
    fn prop_bin_rules_conserve_count(data in finite_sample(300)) {
        for rule in [BinRule::Sturges, BinRule::FreedmanDiaconis, BinRule::Scott] {
            let hist = histogram(&data, rule).unwrap();
            prop_assert!(!hist.is_empty());
            prop_assert_eq!(hist.binned_count(), data.len());
        }
    }

    // Property: large offsets and tight clusters always bin cleanly
    #[test]
    fn prop_offset_and_clustered_histograms(
        data in prop_oneof![offset_sample(), clustered_sample()],
        bins in 1usize..64,
    ) {
        check_histogram(&histogram(&data, bins).unwrap(), data.len())?;
        for rule in [BinRule::Sturges, BinRule::FreedmanDiaconis, BinRule::Scott] {
            check_histogram(&histogram(&data, rule).unwrap(), data.len())?;
        }
    }

    // Property: bin edges stay finite and strictly increasing at any magnitude
    #[test]
    fn prop_hard_histograms_keep_bin_invariants(data in hard_sample(), bins in 1usize..64) {
        check_histogram_result(histogram(&data, bins), data.len())?;
        for rule in [BinRule::Sturges, BinRule::FreedmanDiaconis, BinRule::Scott] {
            check_histogram_result(histogram(&data, rule), data.len())?;
        }
    }

    // Property: rule-derived bin counts are bounded
    #[test]
    fn prop_rule_bin_counts_bounded(data in hard_sample()) {
        let fd = freedman_diaconis(&data).unwrap();
        let sc = scott(&data).unwrap();
        prop_assert!((1..=MAX_BINS).contains(&fd), "freedman-diaconis gave {}", fd);
        prop_assert!((1..=MAX_BINS).contains(&sc), "scott gave {}", sc);
    }

    // Property: quantiles stay finite, monotone and within range at any magnitude
    #[test]
    fn prop_hard_quantiles(data in hard_sample(), a in 0.0..=1.0f64, b in 0.0..=1.0f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let q_lo = quantile(&data, lo).unwrap();
        let q_hi = quantile(&data, hi).unwrap();
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        prop_assert!(q_lo.is_finite() && q_hi.is_finite());
        prop_assert!(q_lo <= q_hi);
        prop_assert!(min <= q_lo && q_hi <= max);
    }

    // Property: whisker ordering holds at any magnitude
    #[test]
    fn prop_hard_box_plot_ordering(data in hard_sample()) {
        let dist = Distribution::new(data).unwrap();
        let s = dist.box_plot(&BoxPlotSummarizer::new()).unwrap();

        prop_assert!(s.min <= s.whisker_low && s.whisker_low <= s.q1);
        prop_assert!(s.q1 <= s.median && s.median <= s.q3);
        prop_assert!(s.q3 <= s.whisker_high && s.whisker_high <= s.max);
    }

    // Property: density values are finite and non-negative
    #[test]
    fn prop_kde_non_negative(data in finite_sample(100), bandwidth in 0.01..100.0f64) {
        let curve = kde(&data, bandwidth, 50).unwrap();

        prop_assert_eq!(curve.len(), 50);
        prop_assert!(curve.ys().iter().all(|y| y.is_finite() && *y >= 0.0));
        prop_assert!(curve.xs().windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn test_normal_sample_has_few_outliers() {
    common::init_tracing();
    let dist = Distribution::new(common::normal_sample(10_000, 0.0, 1.0, 11)).unwrap();
    let stats = dist.box_plot(&BoxPlotSummarizer::new()).unwrap();

    // About 0.7% of a normal sample lies beyond the 1.5 IQR fences
    let fraction = stats.outliers.len() as f64 / 10_000.0;
    assert!(fraction > 0.002 && fraction < 0.02, "outlier fraction {fraction}");
}
