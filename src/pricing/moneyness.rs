//! The (a, d1, d2) triple shared by every closed-form formula.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Scaled volatility `a = σ√t` and the standardized log-moneyness terms.
///
/// The three values are only ever built together by [`Moneyness::compute`],
/// so `d2 == d1 - a` holds for every instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Moneyness {
    a: f64,
    d1: f64,
    d2: f64,
    sqrt_time: f64,
}

impl Moneyness {
    /// Computes the triple for one volatility.
    ///
    /// d1 = [ln(S/K) + (b + σ²/2)t] / (σ√t), d2 = d1 - σ√t
    ///
    /// # Arguments
    /// - `spot`: Underlying price (S)
    /// - `strike`: Strike price (K), non-zero
    /// - `carry`: Effective rate b as a decimal (r, or r_d - r_f for FX)
    /// - `time`: Year fraction (t)
    /// - `vol`: Volatility as a decimal (σ)
    ///
    /// # Returns
    /// `None` when σ√t is zero (zero volatility, zero time, or underflow),
    /// which callers treat as the intrinsic-value branch.
    #[must_use]
    pub fn compute(spot: f64, strike: f64, carry: f64, time: f64, vol: f64) -> Option<Self> {
        let sqrt_time = time.sqrt();
        let a = vol * sqrt_time;
        if a <= 0.0 {
            return None;
        }

        let d1 = ((spot / strike).ln() + (carry + 0.5 * vol * vol) * time) / a;
        let d2 = d1 - a;
        trace!("moneyness: a={a}, d1={d1}, d2={d2}");

        Some(Self {
            a,
            d1,
            d2,
            sqrt_time,
        })
    }

    /// Scaled volatility σ√t.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// (ln(S/K) + (b + σ²/2)·t) / (σ√t)
    #[must_use]
    pub fn d1(&self) -> f64 {
        self.d1
    }

    /// d1 - σ√t
    #[must_use]
    pub fn d2(&self) -> f64 {
        self.d2
    }

    /// √t, kept for the theta denominator.
    #[must_use]
    pub fn sqrt_time(&self) -> f64 {
        self.sqrt_time
    }
}
