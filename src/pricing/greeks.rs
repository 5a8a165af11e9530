//! Price and sensitivity outputs for a European call/put pair.

use serde::{Deserialize, Serialize};

/// Rho in the shape of the model that produced it.
///
/// Values are per 1 percentage point change in the rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Rho {
    /// Single risk-free rate (Black-Scholes).
    Equity {
        /// Call rho.
        call: f64,
        /// Put rho.
        put: f64,
    },
    /// Domestic and foreign rates (Garman-Kohlhagen).
    Fx {
        /// Call sensitivity to the domestic rate.
        call_domestic: f64,
        /// Put sensitivity to the domestic rate.
        put_domestic: f64,
        /// Call sensitivity to the foreign rate.
        call_foreign: f64,
        /// Put sensitivity to the foreign rate.
        put_foreign: f64,
    },
}

impl Rho {
    /// Equity call rho, `None` for FX.
    #[must_use]
    pub fn call(&self) -> Option<f64> {
        match self {
            Rho::Equity { call, .. } => Some(*call),
            Rho::Fx { .. } => None,
        }
    }

    /// Equity put rho, `None` for FX.
    #[must_use]
    pub fn put(&self) -> Option<f64> {
        match self {
            Rho::Equity { put, .. } => Some(*put),
            Rho::Fx { .. } => None,
        }
    }

    /// FX `(call, put)` domestic rho, `None` for equity.
    #[must_use]
    pub fn domestic(&self) -> Option<(f64, f64)> {
        match self {
            Rho::Fx {
                call_domestic,
                put_domestic,
                ..
            } => Some((*call_domestic, *put_domestic)),
            Rho::Equity { .. } => None,
        }
    }

    /// FX `(call, put)` foreign rho, `None` for equity.
    #[must_use]
    pub fn foreign(&self) -> Option<(f64, f64)> {
        match self {
            Rho::Fx {
                call_foreign,
                put_foreign,
                ..
            } => Some((*call_foreign, *put_foreign)),
            Rho::Equity { .. } => None,
        }
    }
}

/// Prices and Greeks for a call/put pair at one volatility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// Call premium in quote currency.
    pub call_price: f64,
    /// Put premium in quote currency.
    pub put_price: f64,
    /// ∂call/∂S.
    pub call_delta: f64,
    /// ∂put/∂S.
    pub put_delta: f64,
    /// ∂call/∂K.
    pub call_dual_delta: f64,
    /// ∂put/∂K.
    pub put_dual_delta: f64,
    /// Call time decay per calendar day.
    pub call_theta: f64,
    /// Put time decay per calendar day.
    pub put_theta: f64,
    /// ∂price/∂σ, identical for call and put.
    pub vega: f64,
    /// ∂²price/∂S², identical for call and put.
    pub gamma: f64,
    /// Rate sensitivities.
    pub rho: Rho,
    /// Risk-neutral probability that the call finishes in the money, N(d2).
    pub exercise_probability: f64,
}

impl Greeks {
    /// Outputs when σ√t is zero: prices collapse to undiscounted intrinsic
    /// value, deltas to step functions, and every other sensitivity to zero.
    pub(crate) fn intrinsic(spot: f64, strike: f64, rho: Rho) -> Self {
        let call_itm = spot > strike;
        let put_itm = spot < strike;
        let step = |itm: bool| if itm { 1.0 } else { 0.0 };

        Self {
            call_price: (spot - strike).max(0.0),
            put_price: (strike - spot).max(0.0),
            call_delta: step(call_itm),
            put_delta: if put_itm { -1.0 } else { 0.0 },
            call_dual_delta: if call_itm { -1.0 } else { 0.0 },
            put_dual_delta: step(put_itm),
            call_theta: 0.0,
            put_theta: 0.0,
            vega: 0.0,
            gamma: 0.0,
            rho,
            exercise_probability: step(call_itm),
        }
    }
}
