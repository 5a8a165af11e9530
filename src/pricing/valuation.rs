//! Valuation holder: contract terms plus every output computed for them.
//!
//! A [`Valuation`] is computed completely at construction from a
//! [`ValuationRequest`] and never mutated afterwards. Each output is an
//! `Option`: `None` means the request did not ask for it, which keeps a
//! legitimately zero Greek distinguishable from one that was never computed.

use super::black_scholes::BlackScholes;
use super::error::{PricingError, ensure_non_negative};
use super::garman_kohlhagen::GarmanKohlhagen;
use super::greeks::Greeks;
use super::model::PricingModel;
use super::moneyness::Moneyness;
use super::solver::{ImpliedVolatility, Precision, SolverConfig};
use super::terms::{EquityTerms, FxTerms};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inputs selecting which outputs a valuation computes.
///
/// - `volatility` (percent) requests prices and Greeks.
/// - `call_price` requests the implied volatility of that observed price.
/// - `call_price` together with `put_price` also requests the put-call
///   parity diagnostic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValuationRequest {
    /// Volatility in percent.
    pub volatility: Option<f64>,
    /// Observed market call price.
    pub call_price: Option<f64>,
    /// Observed market put price.
    pub put_price: Option<f64>,
    /// Rounding precision for the implied volatility search. `None` derives
    /// it from the observed call price, see [`Precision::from_price`].
    pub precision: Option<Precision>,
    /// Solver bracket, budget and policy.
    pub solver: SolverConfig,
}

impl ValuationRequest {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the volatility in percent.
    #[must_use]
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the observed call price.
    #[must_use]
    pub fn with_call_price(mut self, call_price: f64) -> Self {
        self.call_price = Some(call_price);
        self
    }

    /// Sets the observed put price.
    #[must_use]
    pub fn with_put_price(mut self, put_price: f64) -> Self {
        self.put_price = Some(put_price);
        self
    }

    /// Overrides the implied volatility precision derived from the call price.
    #[must_use]
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Sets the solver configuration.
    #[must_use]
    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }
}

/// A model, its terms, and the outputs computed for one request.
#[derive(Debug, Clone)]
pub struct Valuation<M> {
    model: M,
    volatility: Option<f64>,
    moneyness: Option<Moneyness>,
    greeks: Option<Greeks>,
    observed_call: Option<f64>,
    observed_put: Option<f64>,
    implied_volatility: Option<ImpliedVolatility>,
    put_call_parity: Option<f64>,
}

impl Valuation<BlackScholes> {
    /// Values an equity option under Black-Scholes.
    ///
    /// # Errors
    /// See [`Valuation::new`].
    pub fn equity(terms: EquityTerms, request: &ValuationRequest) -> Result<Self, PricingError> {
        Self::new(BlackScholes::new(terms), request)
    }
}

impl Valuation<GarmanKohlhagen> {
    /// Values a currency option under Garman-Kohlhagen.
    ///
    /// # Errors
    /// See [`Valuation::new`].
    pub fn fx(terms: FxTerms, request: &ValuationRequest) -> Result<Self, PricingError> {
        Self::new(GarmanKohlhagen::new(terms), request)
    }
}

impl<M: PricingModel> Valuation<M> {
    /// Computes every output the request asks for.
    ///
    /// The implied volatility search targets the observed call price rounded
    /// to `request.precision`, or to the decimals the price itself carries
    /// when no precision was set.
    ///
    /// # Errors
    /// Any validation or solver error; no partial valuation is returned.
    pub fn new(model: M, request: &ValuationRequest) -> Result<Self, PricingError> {
        let (moneyness, greeks) = match request.volatility {
            Some(volatility) => (
                model.moneyness(volatility)?,
                Some(model.greeks(volatility)?),
            ),
            None => (None, None),
        };

        let observed_call = request
            .call_price
            .map(|price| ensure_non_negative("call price", price))
            .transpose()?;
        let observed_put = request
            .put_price
            .map(|price| ensure_non_negative("put price", price))
            .transpose()?;

        let implied_volatility = match observed_call {
            Some(call) => {
                let precision = match request.precision {
                    Some(precision) => precision,
                    None => Precision::from_price(call)?,
                };
                Some(model.implied_volatility(
                    precision.round(call),
                    precision,
                    &request.solver,
                )?)
            }
            None => None,
        };

        let put_call_parity = match (observed_call, observed_put) {
            (Some(call), Some(put)) => Some(model.put_call_parity(call, put)?),
            _ => None,
        };

        debug!(
            "{} valuation: volatility={:?}, implied={:?}, parity={:?}",
            model.name(),
            request.volatility,
            implied_volatility.map(|iv| iv.volatility),
            put_call_parity
        );

        Ok(Self {
            model,
            volatility: request.volatility,
            moneyness,
            greeks,
            observed_call,
            observed_put,
            implied_volatility,
            put_call_parity,
        })
    }

    /// The model and terms this valuation was computed for.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Volatility supplied with the request, in percent.
    #[must_use]
    pub fn volatility(&self) -> Option<f64> {
        self.volatility
    }

    /// The (a, d1, d2) triple, `None` without volatility or when σ√t is zero.
    #[must_use]
    pub fn moneyness(&self) -> Option<&Moneyness> {
        self.moneyness.as_ref()
    }

    /// All model outputs at the supplied volatility.
    #[must_use]
    pub fn greeks(&self) -> Option<&Greeks> {
        self.greeks.as_ref()
    }

    /// Observed call price when one was supplied, otherwise the model price.
    ///
    /// With both a volatility and an observed call in the request this is the
    /// observed price; the model price stays in [`Greeks::call_price`].
    #[must_use]
    pub fn call_price(&self) -> Option<f64> {
        self.observed_call
            .or_else(|| self.greeks.map(|g| g.call_price))
    }

    /// Observed put price when one was supplied, otherwise the model price.
    ///
    /// The model price stays in [`Greeks::put_price`].
    #[must_use]
    pub fn put_price(&self) -> Option<f64> {
        self.observed_put.or_else(|| self.greeks.map(|g| g.put_price))
    }

    /// Call delta.
    #[must_use]
    pub fn call_delta(&self) -> Option<f64> {
        self.greeks.map(|g| g.call_delta)
    }

    /// Put delta.
    #[must_use]
    pub fn put_delta(&self) -> Option<f64> {
        self.greeks.map(|g| g.put_delta)
    }

    /// Call dual delta (∂C/∂K).
    #[must_use]
    pub fn call_dual_delta(&self) -> Option<f64> {
        self.greeks.map(|g| g.call_dual_delta)
    }

    /// Put dual delta (∂P/∂K).
    #[must_use]
    pub fn put_dual_delta(&self) -> Option<f64> {
        self.greeks.map(|g| g.put_dual_delta)
    }

    /// Call theta per calendar day.
    #[must_use]
    pub fn call_theta(&self) -> Option<f64> {
        self.greeks.map(|g| g.call_theta)
    }

    /// Put theta per calendar day.
    #[must_use]
    pub fn put_theta(&self) -> Option<f64> {
        self.greeks.map(|g| g.put_theta)
    }

    /// Vega, shared by call and put.
    #[must_use]
    pub fn vega(&self) -> Option<f64> {
        self.greeks.map(|g| g.vega)
    }

    /// Gamma, shared by call and put.
    #[must_use]
    pub fn gamma(&self) -> Option<f64> {
        self.greeks.map(|g| g.gamma)
    }

    /// Equity call rho; `None` for FX valuations.
    #[must_use]
    pub fn call_rho(&self) -> Option<f64> {
        self.greeks.and_then(|g| g.rho.call())
    }

    /// Equity put rho; `None` for FX valuations.
    #[must_use]
    pub fn put_rho(&self) -> Option<f64> {
        self.greeks.and_then(|g| g.rho.put())
    }

    /// FX call domestic rho; `None` for equity valuations.
    #[must_use]
    pub fn call_rho_domestic(&self) -> Option<f64> {
        self.greeks.and_then(|g| g.rho.domestic()).map(|(call, _)| call)
    }

    /// FX put domestic rho; `None` for equity valuations.
    #[must_use]
    pub fn put_rho_domestic(&self) -> Option<f64> {
        self.greeks.and_then(|g| g.rho.domestic()).map(|(_, put)| put)
    }

    /// FX call foreign rho; `None` for equity valuations.
    #[must_use]
    pub fn call_rho_foreign(&self) -> Option<f64> {
        self.greeks.and_then(|g| g.rho.foreign()).map(|(call, _)| call)
    }

    /// FX put foreign rho; `None` for equity valuations.
    #[must_use]
    pub fn put_rho_foreign(&self) -> Option<f64> {
        self.greeks.and_then(|g| g.rho.foreign()).map(|(_, put)| put)
    }

    /// Probability the call finishes in the money.
    #[must_use]
    pub fn exercise_probability(&self) -> Option<f64> {
        self.greeks.map(|g| g.exercise_probability)
    }

    /// Implied volatility in percent.
    ///
    /// Check [`Valuation::implied_volatility_result`] for whether the search
    /// converged.
    #[must_use]
    pub fn implied_volatility(&self) -> Option<f64> {
        self.implied_volatility.map(|iv| iv.volatility)
    }

    /// Full solver outcome, including iteration count and convergence flag.
    #[must_use]
    pub fn implied_volatility_result(&self) -> Option<&ImpliedVolatility> {
        self.implied_volatility.as_ref()
    }

    /// Put-call parity diagnostic for the observed call/put pair.
    #[must_use]
    pub fn put_call_parity(&self) -> Option<f64> {
        self.put_call_parity
    }

    /// Serializable summary of the valuation.
    #[must_use]
    pub fn report(&self) -> ValuationReport {
        ValuationReport {
            model: self.model.name().to_string(),
            volatility: self.volatility,
            greeks: self.greeks,
            call_price: self.observed_call,
            put_price: self.observed_put,
            implied_volatility: self.implied_volatility,
            put_call_parity: self.put_call_parity,
        }
    }
}

/// Plain-data snapshot of a [`Valuation`] for JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationReport {
    /// Model name.
    pub model: String,
    /// Volatility supplied with the request, in percent.
    pub volatility: Option<f64>,
    /// Model outputs at that volatility.
    pub greeks: Option<Greeks>,
    /// Observed call price.
    pub call_price: Option<f64>,
    /// Observed put price.
    pub put_price: Option<f64>,
    /// Solver outcome for the observed call price.
    pub implied_volatility: Option<ImpliedVolatility>,
    /// Parity diagnostic for the observed pair.
    pub put_call_parity: Option<f64>,
}

impl ValuationReport {
    /// Serializes the report to JSON.
    pub fn to_json(&self) -> Result<String, PricingError> {
        serde_json::to_string(self).map_err(|error| PricingError::SerializationError {
            message: error.to_string(),
        })
    }

    /// Deserializes a report from JSON.
    pub fn from_json(data: &str) -> Result<Self, PricingError> {
        serde_json::from_str(data).map_err(|error| PricingError::DeserializationError {
            message: error.to_string(),
        })
    }
}
