//! # greeks-rs
//!
//! European option pricing, Greeks and implied volatility for equities
//! (Black-Scholes) and currencies (Garman-Kohlhagen).
//!
//! ## Quick Start
//!
//! ```ignore
//! use greeks_rs::prelude::*;
//!
//! let terms = EquityTerms::new(81.0, 80.0, 6.0, 60.0)?;
//! let valuation = Valuation::equity(terms, &ValuationRequest::new().with_volatility(30.0))?;
//!
//! assert!((valuation.call_price().unwrap() - 4.842294).abs() < 1e-6);
//! assert!((valuation.gamma().unwrap() - 0.039305).abs() < 1e-6);
//! ```
//!
//! ## Inputs
//!
//! | Input | Units |
//! |-------|-------|
//! | underlying, strike | quote currency, strike must be non-zero |
//! | rates | annual percent (6.0 = 6%) |
//! | days to expiration | calendar days, divided by 365 |
//! | volatility | annual percent (30.0 = 30%) |
//!
//! ## Implied Volatility
//!
//! The solver is a bounded bisection on `[0, 500]` percent. Convergence means
//! the model call price rounds to the observed price at a caller-chosen
//! number of decimals. When the budget is exhausted the solver either returns
//! its last estimate flagged `converged = false` or, with
//! [`pricing::ConvergencePolicy::Strict`], fails with
//! [`pricing::PricingError::ConvergenceFailure`].
//!
//! ## Logging
//!
//! The crate emits `tracing` events (`trace` for every evaluation, `debug`
//! for solver results, `warn` for non-converged searches) and never installs
//! a subscriber.

pub mod pricing;

pub mod prelude;

pub use pricing::{
    BlackScholes, EquityTerms, FxTerms, GarmanKohlhagen, Greeks, Model, PricingError,
    PricingModel, Valuation, ValuationRequest,
};
