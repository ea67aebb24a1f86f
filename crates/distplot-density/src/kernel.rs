//! Smoothing kernels

/// `1 / sqrt(2π)`, the peak of the standard normal density
pub const INV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal density `exp(-z²/2) / sqrt(2π)`
#[inline]
pub fn gaussian_kernel(z: f64) -> f64 {
    (-0.5 * z * z).exp() * INV_SQRT_2PI
}
