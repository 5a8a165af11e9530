//! Black-Scholes pricing model and Greeks calculation.
//!
//! European options on non-dividend-paying stocks. Formulas use N for the
//! standard normal CDF and φ for its density:
//!
//! - call = S·N(d1) - K·e^(-rt)·N(d2)
//! - put  = K·e^(-rt)·N(-d2) - S·N(-d1)

use super::error::{PricingError, ensure_non_negative};
use super::greeks::{Greeks, Rho};
use super::model::{PricingModel, volatility_fraction};
use super::moneyness::Moneyness;
use super::normal::{norm_cdf, norm_pdf};
use super::terms::{ContractTerms, DAYS_PER_YEAR, EquityTerms};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Black-Scholes pricing model bound to one set of equity terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlackScholes {
    terms: EquityTerms,
}

impl BlackScholes {
    /// Creates the model for `terms`.
    #[must_use]
    pub fn new(terms: EquityTerms) -> Self {
        Self { terms }
    }

    /// Contract terms this model prices.
    #[must_use]
    pub fn terms(&self) -> &EquityTerms {
        &self.terms
    }

    /// Discount factor e^(-rt) applied to the strike.
    fn discount(&self) -> f64 {
        (-self.terms.interest_rate() * self.terms.time_to_expiry()).exp()
    }

    fn compute_moneyness(&self, vol: f64) -> Option<Moneyness> {
        Moneyness::compute(
            self.terms.underlying_price(),
            self.terms.strike_price(),
            self.terms.interest_rate(),
            self.terms.time_to_expiry(),
            vol,
        )
    }

    /// Returns `[call, put]` prices.
    fn price(&self, m: &Moneyness) -> [f64; 2] {
        let spot = self.terms.underlying_price();
        let strike = self.terms.strike_price();
        let discount = self.discount();

        let call = spot * norm_cdf(m.d1()) - strike * discount * norm_cdf(m.d2());
        let put = strike * discount * norm_cdf(-m.d2()) - spot * norm_cdf(-m.d1());
        [call, put]
    }

    /// Delta: N(d1) for calls, -N(-d1) for puts.
    fn delta(&self, m: &Moneyness) -> [f64; 2] {
        [norm_cdf(m.d1()), -norm_cdf(-m.d1())]
    }

    /// Dual delta (∂price/∂K): -e^(-rt)·N(d2) and e^(-rt)·N(-d2).
    fn dual_delta(&self, m: &Moneyness) -> [f64; 2] {
        let discount = self.discount();
        [-norm_cdf(m.d2()) * discount, norm_cdf(-m.d2()) * discount]
    }

    /// Vega per one volatility percentage point: S·φ(d1)·√t / 100.
    fn vega(&self, m: &Moneyness) -> f64 {
        self.terms.underlying_price() * norm_pdf(m.d1()) * m.sqrt_time() / 100.0
    }

    /// Theta per calendar day.
    fn theta(&self, m: &Moneyness, vol: f64) -> [f64; 2] {
        let spot = self.terms.underlying_price();
        let strike = self.terms.strike_price();
        let rate = self.terms.interest_rate();
        let discount = self.discount();

        let decay = -spot * norm_pdf(m.d1()) * vol / (2.0 * m.sqrt_time());
        let call = decay - rate * strike * discount * norm_cdf(m.d2());
        let put = decay + rate * strike * discount * norm_cdf(-m.d2());
        [call / DAYS_PER_YEAR, put / DAYS_PER_YEAR]
    }

    /// Rho per one rate percentage point.
    fn rho(&self, m: &Moneyness) -> Rho {
        let scaled = self.terms.strike_price() * self.terms.time_to_expiry() * self.discount();
        Rho::Equity {
            call: scaled * norm_cdf(m.d2()) / 100.0,
            put: -scaled * norm_cdf(-m.d2()) / 100.0,
        }
    }

    /// Γ = φ(d1) / (S·σ√t)
    fn gamma(&self, m: &Moneyness) -> f64 {
        norm_pdf(m.d1()) / (self.terms.underlying_price() * m.a())
    }
}

impl PricingModel for BlackScholes {
    fn name(&self) -> &'static str {
        "Black-Scholes"
    }

    fn moneyness(&self, volatility: f64) -> Result<Option<Moneyness>, PricingError> {
        let vol = volatility_fraction(volatility)?;
        Ok(self.compute_moneyness(vol))
    }

    fn greeks(&self, volatility: f64) -> Result<Greeks, PricingError> {
        let vol = volatility_fraction(volatility)?;
        let Some(m) = self.compute_moneyness(vol) else {
            trace!("black-scholes: degenerate σ√t, using intrinsic value");
            return Ok(Greeks::intrinsic(
                self.terms.underlying_price(),
                self.terms.strike_price(),
                Rho::Equity {
                    call: 0.0,
                    put: 0.0,
                },
            ));
        };

        let [call_price, put_price] = self.price(&m);
        let [call_delta, put_delta] = self.delta(&m);
        let [call_dual_delta, put_dual_delta] = self.dual_delta(&m);
        let [call_theta, put_theta] = self.theta(&m, vol);

        Ok(Greeks {
            call_price,
            put_price,
            call_delta,
            put_delta,
            call_dual_delta,
            put_dual_delta,
            call_theta,
            put_theta,
            vega: self.vega(&m),
            gamma: self.gamma(&m),
            rho: self.rho(&m),
            exercise_probability: norm_cdf(m.d2()),
        })
    }

    fn call_price(&self, volatility: f64) -> Result<f64, PricingError> {
        let vol = volatility_fraction(volatility)?;
        Ok(match self.compute_moneyness(vol) {
            Some(m) => self.price(&m)[0],
            None => self.terms.call_intrinsic(),
        })
    }

    /// C - P - S + K / (1 + r)^t
    fn put_call_parity(&self, call_price: f64, put_price: f64) -> Result<f64, PricingError> {
        ensure_non_negative("call price", call_price)?;
        ensure_non_negative("put price", put_price)?;

        let t = self.terms.time_to_expiry();
        Ok(call_price - put_price - self.terms.underlying_price()
            + self.terms.strike_price() / (1.0 + self.terms.interest_rate()).powf(t))
    }
}
