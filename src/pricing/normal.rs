//! Standard normal distribution helpers.

use statrs::distribution::{Continuous, ContinuousCDF, Normal};

/// Standard normal cumulative distribution function N(x).
///
/// Evaluated by `statrs` through `erfc`.
#[must_use]
pub fn norm_cdf(x: f64) -> f64 {
    Normal::standard().cdf(x)
}

/// Standard normal probability density function φ(x).
#[must_use]
pub fn norm_pdf(x: f64) -> f64 {
    Normal::standard().pdf(x)
}
