//! The pricing-model seam shared by the equity and FX closed forms.

use super::black_scholes::BlackScholes;
use super::error::{PricingError, ensure_non_negative};
use super::garman_kohlhagen::GarmanKohlhagen;
use super::greeks::Greeks;
use super::moneyness::Moneyness;
use super::solver::{ImpliedVolatility, Precision, SolverConfig, bisect};
use serde::{Deserialize, Serialize};

/// Converts a volatility percentage into a validated decimal fraction.
pub(crate) fn volatility_fraction(volatility: f64) -> Result<f64, PricingError> {
    ensure_non_negative("volatility", volatility).map(|v| v / 100.0)
}

/// A closed-form European option model.
///
/// Volatilities are passed in percent (20.0 means 20%).
pub trait PricingModel {
    /// Short human-readable model name.
    fn name(&self) -> &'static str;

    /// The (a, d1, d2) triple, `None` in the intrinsic-value branch.
    ///
    /// # Errors
    /// [`PricingError::InvalidInput`] for a negative or non-finite volatility.
    fn moneyness(&self, volatility: f64) -> Result<Option<Moneyness>, PricingError>;

    /// Prices and every Greek at `volatility`.
    ///
    /// # Errors
    /// [`PricingError::InvalidInput`] for a negative or non-finite volatility.
    fn greeks(&self, volatility: f64) -> Result<Greeks, PricingError>;

    /// Call price alone, the objective inverted by the solver.
    ///
    /// # Errors
    /// [`PricingError::InvalidInput`] for a negative or non-finite volatility.
    fn call_price(&self, volatility: f64) -> Result<f64, PricingError>;

    /// Put-call parity diagnostic for a pair of observed prices.
    ///
    /// Zero means the observed pair is consistent with the model's
    /// discounting; the value is not an input to pricing.
    ///
    /// # Errors
    /// [`PricingError::InvalidInput`] for a negative or non-finite price.
    fn put_call_parity(&self, call_price: f64, put_price: f64) -> Result<f64, PricingError>;

    /// Volatility (percent) whose call price matches `call_price` at
    /// `precision`.
    ///
    /// # Errors
    /// See [`bisect`].
    fn implied_volatility(
        &self,
        call_price: f64,
        precision: Precision,
        config: &SolverConfig,
    ) -> Result<ImpliedVolatility, PricingError> {
        bisect(|vol| self.call_price(vol), call_price, precision, config)
    }
}

/// Either model, for callers that choose at run time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Model {
    /// Equity options.
    BlackScholes(BlackScholes),
    /// Currency options.
    GarmanKohlhagen(GarmanKohlhagen),
}

impl From<BlackScholes> for Model {
    fn from(model: BlackScholes) -> Self {
        Model::BlackScholes(model)
    }
}

impl From<GarmanKohlhagen> for Model {
    fn from(model: GarmanKohlhagen) -> Self {
        Model::GarmanKohlhagen(model)
    }
}

impl PricingModel for Model {
    fn name(&self) -> &'static str {
        match self {
            Model::BlackScholes(m) => m.name(),
            Model::GarmanKohlhagen(m) => m.name(),
        }
    }

    fn moneyness(&self, volatility: f64) -> Result<Option<Moneyness>, PricingError> {
        match self {
            Model::BlackScholes(m) => m.moneyness(volatility),
            Model::GarmanKohlhagen(m) => m.moneyness(volatility),
        }
    }

    fn greeks(&self, volatility: f64) -> Result<Greeks, PricingError> {
        match self {
            Model::BlackScholes(m) => m.greeks(volatility),
            Model::GarmanKohlhagen(m) => m.greeks(volatility),
        }
    }

    fn call_price(&self, volatility: f64) -> Result<f64, PricingError> {
        match self {
            Model::BlackScholes(m) => m.call_price(volatility),
            Model::GarmanKohlhagen(m) => m.call_price(volatility),
        }
    }

    fn put_call_parity(&self, call_price: f64, put_price: f64) -> Result<f64, PricingError> {
        match self {
            Model::BlackScholes(m) => m.put_call_parity(call_price, put_price),
            Model::GarmanKohlhagen(m) => m.put_call_parity(call_price, put_price),
        }
    }
}
