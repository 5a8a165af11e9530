//! Closed-form European option pricing and implied volatility.
//!
//! This module prices a European call/put pair and its Greeks under two
//! models and inverts the call price to recover implied volatility.
//!
//! # Models
//!
//! - [`BlackScholes`]: options on non-dividend-paying equities, one
//!   risk-free rate.
//! - [`GarmanKohlhagen`]: currency options, domestic and foreign rates.
//!
//! Both implement [`PricingModel`], and [`Model`] wraps either one when the
//! choice is made at run time.
//!
//! # Units
//!
//! Rates and volatilities are supplied and returned in percent (20.0 means
//! 20%). Time is supplied in calendar days and converted with a 365-day
//! year. Prices are in the quote currency of the underlying.
//!
//! # Implied Volatility
//!
//! [`bisect`] halves the volatility bracket `[0, 500]` until the model call
//! price, rounded to a caller-supplied [`Precision`], equals the observed
//! price. The bracket and iteration budget live in [`SolverConfig`].
//!
//! # Example
//!
//! ```ignore
//! use greeks_rs::pricing::{FxTerms, Precision, Valuation, ValuationRequest};
//!
//! let terms = FxTerms::new(1.4565, 1.45, 1.0, 2.0, 30.0)?;
//! let priced = Valuation::fx(terms, &ValuationRequest::new().with_volatility(20.0))?;
//! println!("call: {:?}", priced.call_price());
//!
//! let request = ValuationRequest::new()
//!     .with_call_price(0.021)
//!     .with_precision(Precision::from_quote("0.021")?);
//! let solved = Valuation::fx(terms, &request)?;
//! println!("IV: {:?}%", solved.implied_volatility());
//! ```

mod black_scholes;
mod error;
mod garman_kohlhagen;
mod greeks;
mod model;
mod moneyness;
mod normal;
mod solver;
mod terms;
mod valuation;

pub use black_scholes::BlackScholes;
pub use error::PricingError;
pub use garman_kohlhagen::GarmanKohlhagen;
pub use greeks::{Greeks, Rho};
pub use model::{Model, PricingModel};
pub use moneyness::Moneyness;
pub use normal::{norm_cdf, norm_pdf};
pub use solver::{ConvergencePolicy, ImpliedVolatility, Precision, SolverConfig, bisect};
pub use terms::{ContractTerms, DAYS_PER_YEAR, EquityTerms, FxTerms};
pub use valuation::{Valuation, ValuationReport, ValuationRequest};
