//! End-to-end checks of the documented behaviour on small samples

mod common;

use approx::assert_relative_eq;
use distplot::prelude::*;
use distplot::{freedman_diaconis, histogram, kde, quantile, silverman, sturges, summarize};

#[test]
fn test_median_and_quartiles_of_five() {
    common::init_tracing();
    let data = [1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(quantile(&data, 0.5).unwrap(), 3.0);
    assert_eq!(quantile(&data, 0.25).unwrap(), 2.0);
    assert_eq!(quantile(&data, 0.75).unwrap(), 4.0);
}

#[test]
fn test_single_high_outlier() {
    common::init_tracing();
    let stats = summarize(&[1.0, 2.0, 3.0, 4.0, 100.0], WhiskerMethod::Tukey).unwrap();
    assert_eq!((stats.q1, stats.q3), (2.0, 4.0));
    assert_eq!(stats.iqr(), 2.0);
    assert_eq!(stats.outliers, vec![100.0]);
    assert_eq!(stats.whisker_high, 4.0);
}

#[test]
fn test_zero_iqr_falls_back_to_sturges() {
    common::init_tracing();
    let data = [1.0, 1.0, 1.0, 1.0];
    assert_eq!(sturges(&data), 3);
    assert_eq!(freedman_diaconis(&data).unwrap(), 3);
}

#[test]
fn test_five_bins_over_zero_to_ten() {
    common::init_tracing();
    let data: Vec<f64> = (0..=10).map(f64::from).collect();
    let hist = histogram(&data, 5).unwrap();

    assert_eq!(hist.len(), 5);
    assert_eq!(hist.edges(), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    for bin in hist.bins() {
        assert_relative_eq!(bin.width(), 2.0);
    }
    assert_eq!(hist.find_bin(10.0), Some(4));
    assert_eq!(hist.counts(), vec![2, 2, 2, 2, 3]);
}

#[test]
fn test_degenerate_bandwidths() {
    common::init_tracing();
    assert_eq!(silverman(&[]).unwrap(), 1.0);
    assert_eq!(silverman(&[5.0]).unwrap(), 0.0);

    // The zero bandwidth is rejected rather than turned into NaN
    assert!(kde(&[5.0], 0.0, 10).is_err());
    let dist = Distribution::from_slice(&[5.0]).unwrap();
    assert!(matches!(
        dist.density(&DensityEstimator::new()),
        Err(Error::Computation(_))
    ));
}

#[test]
fn test_non_finite_values_are_rejected_up_front() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let data = [1.0, bad, 3.0];
        assert!(matches!(Sample::from_slice(&data), Err(Error::InvalidInput(_))));
        assert!(quantile(&data, 0.5).is_err());
        assert!(histogram(&data, 3).is_err());
        assert!(summarize(&data, WhiskerMethod::Tukey).is_err());
    }
}

#[test]
fn test_bimodal_density_has_two_peaks() {
    common::init_tracing();
    let dist = Distribution::new(common::bimodal_sample(2000, 7)).unwrap();
    let curve = dist
        .density(&DensityEstimator::new().num_points(200))
        .unwrap();

    let ys = curve.ys();
    let peaks = ys
        .windows(3)
        .filter(|w| w[1] > w[0] && w[1] > w[2])
        .count();
    assert_eq!(peaks, 2);
    assert_relative_eq!(curve.trapezoid_integral(), 1.0, epsilon = 0.05);
}

#[test]
fn test_profile_shares_one_sample() {
    common::init_tracing();
    let data = common::normal_sample(500, 0.0, 1.0, 3);
    let dist = Distribution::from_slice(&data).unwrap();
    let profile = dist.profile(&PlotConfig::default()).unwrap();

    assert_eq!(profile.histogram.binned_count(), data.len());
    assert_eq!(profile.box_plot.min, dist.sample().sorted()[0]);
    let curve = profile.density.unwrap();
    assert!(curve.points().iter().all(|p| p.y >= 0.0));
}

#[test]
fn test_plot_config_from_json() {
    let config: PlotConfig = serde_json::from_str(
        r#"{
            "box_plot": { "method": "min_max" },
            "bins": { "rule": "sturges" },
            "density": { "num_points": 32, "bandwidth": { "fixed": 0.5 } }
        }"#,
    )
    .unwrap();

    let dist = Distribution::new(common::ramp(16)).unwrap();
    let profile = dist.profile(&config).unwrap();
    assert!(profile.box_plot.outliers.is_empty());
    assert_eq!(profile.histogram.len(), 5);
    let curve = profile.density.unwrap();
    assert_eq!(curve.len(), 32);
    assert_eq!(curve.bandwidth(), 0.5);
}
