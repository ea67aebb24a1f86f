//! Density curve representation

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single evaluation of a density estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityPoint {
    /// Evaluation point
    pub x: f64,
    /// Estimated density at `x` (never negative)
    pub y: f64,
}

/// A density estimate sampled at evenly spaced points
///
/// The curve approximates a probability density but is not renormalized; its
/// integral over the evaluation domain is typically slightly below one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityCurve {
    points: Vec<DensityPoint>,
    bandwidth: f64,
}

impl DensityCurve {
    /// Create a curve from evaluated points and the bandwidth that produced them
    pub fn new(points: Vec<DensityPoint>, bandwidth: f64) -> Self {
        Self { points, bandwidth }
    }

    /// The evaluated points in ascending `x` order
    pub fn points(&self) -> &[DensityPoint] {
        &self.points
    }

    /// Consume the curve and return its points
    pub fn into_points(self) -> Vec<DensityPoint> {
        self.points
    }

    /// Smoothing bandwidth used for the estimate
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Number of evaluation points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the curve has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Evaluation points as a vector
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Density values as a vector
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Largest density value, or zero for an empty curve
    pub fn max_density(&self) -> f64 {
        self.points.iter().map(|p| p.y).fold(0.0, f64::max)
    }

    /// Area under the curve by the trapezoidal rule
    pub fn trapezoid_integral(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1].x - w[0].x) * (w[0].y + w[1].y) / 2.0)
            .sum()
    }
}

impl fmt::Display for DensityCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => write!(
                f,
                "DensityCurve({} points, bandwidth={:.4}, domain=[{:.3}, {:.3}])",
                self.len(),
                self.bandwidth,
                first.x,
                last.x
            ),
            _ => write!(f, "DensityCurve(empty, bandwidth={:.4})", self.bandwidth),
        }
    }
}
