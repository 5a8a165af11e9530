//! Garman-Kohlhagen pricing model for European currency options.
//!
//! Black-Scholes with the foreign interest rate acting as a continuous
//! dividend yield on the underlying currency:
//!
//! - call = S·e^(-r_f·t)·N(d1) - K·e^(-r_d·t)·N(d2)
//! - put  = K·e^(-r_d·t)·N(-d2) - S·e^(-r_f·t)·N(-d1)

use super::error::{PricingError, ensure_non_negative};
use super::greeks::{Greeks, Rho};
use super::model::{PricingModel, volatility_fraction};
use super::moneyness::Moneyness;
use super::normal::{norm_cdf, norm_pdf};
use super::terms::{ContractTerms, DAYS_PER_YEAR, FxTerms};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Garman-Kohlhagen pricing model bound to one set of FX terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GarmanKohlhagen {
    terms: FxTerms,
}

impl GarmanKohlhagen {
    /// Creates the model for `terms`.
    #[must_use]
    pub fn new(terms: FxTerms) -> Self {
        Self { terms }
    }

    /// Contract terms this model prices.
    #[must_use]
    pub fn terms(&self) -> &FxTerms {
        &self.terms
    }

    fn domestic_discount(&self) -> f64 {
        (-self.terms.domestic_rate() * self.terms.time_to_expiry()).exp()
    }

    fn foreign_discount(&self) -> f64 {
        (-self.terms.foreign_rate() * self.terms.time_to_expiry()).exp()
    }

    fn compute_moneyness(&self, vol: f64) -> Option<Moneyness> {
        Moneyness::compute(
            self.terms.underlying_price(),
            self.terms.strike_price(),
            self.terms.domestic_rate() - self.terms.foreign_rate(),
            self.terms.time_to_expiry(),
            vol,
        )
    }

    fn price(&self, m: &Moneyness) -> [f64; 2] {
        let spot = self.terms.underlying_price() * self.foreign_discount();
        let strike = self.terms.strike_price() * self.domestic_discount();

        let call = spot * norm_cdf(m.d1()) - strike * norm_cdf(m.d2());
        let put = strike * norm_cdf(-m.d2()) - spot * norm_cdf(-m.d1());
        [call, put]
    }

    fn delta(&self, m: &Moneyness) -> [f64; 2] {
        let discount = self.foreign_discount();
        [norm_cdf(m.d1()) * discount, -norm_cdf(-m.d1()) * discount]
    }

    fn dual_delta(&self, m: &Moneyness) -> [f64; 2] {
        let discount = self.domestic_discount();
        [-norm_cdf(m.d2()) * discount, norm_cdf(-m.d2()) * discount]
    }

    /// Vega per unit volatility: S·e^(-r_f·t)·φ(d1)·√t.
    fn vega(&self, m: &Moneyness) -> f64 {
        self.terms.underlying_price() * self.foreign_discount() * norm_pdf(m.d1()) * m.sqrt_time()
    }

    /// Theta per calendar day.
    fn theta(&self, m: &Moneyness, vol: f64) -> [f64; 2] {
        let spot = self.terms.underlying_price() * self.foreign_discount();
        let strike = self.terms.strike_price() * self.domestic_discount();
        let rd = self.terms.domestic_rate();
        let rf = self.terms.foreign_rate();

        let decay = -spot * norm_pdf(m.d1()) * vol / (2.0 * m.sqrt_time());
        let call = decay + rf * spot * norm_cdf(m.d1()) - rd * strike * norm_cdf(m.d2());
        let put = decay - rf * spot * norm_cdf(-m.d1()) + rd * strike * norm_cdf(-m.d2());
        [call / DAYS_PER_YEAR, put / DAYS_PER_YEAR]
    }

    /// Domestic and foreign rho per one rate percentage point.
    fn rho(&self, m: &Moneyness) -> Rho {
        let t = self.terms.time_to_expiry();
        let strike = self.terms.strike_price() * t * self.domestic_discount();
        let spot = self.terms.underlying_price() * t * self.foreign_discount();

        Rho::Fx {
            call_domestic: strike * norm_cdf(m.d2()) / 100.0,
            put_domestic: -strike * norm_cdf(-m.d2()) / 100.0,
            call_foreign: -spot * norm_cdf(m.d1()) / 100.0,
            put_foreign: spot * norm_cdf(-m.d1()) / 100.0,
        }
    }

    fn gamma(&self, m: &Moneyness) -> f64 {
        norm_pdf(m.d1()) * self.foreign_discount() / (self.terms.underlying_price() * m.a())
    }
}

impl PricingModel for GarmanKohlhagen {
    fn name(&self) -> &'static str {
        "Garman-Kohlhagen"
    }

    fn moneyness(&self, volatility: f64) -> Result<Option<Moneyness>, PricingError> {
        let vol = volatility_fraction(volatility)?;
        Ok(self.compute_moneyness(vol))
    }

    fn greeks(&self, volatility: f64) -> Result<Greeks, PricingError> {
        let vol = volatility_fraction(volatility)?;
        let Some(m) = self.compute_moneyness(vol) else {
            trace!("garman-kohlhagen: degenerate σ√t, using intrinsic value");
            return Ok(Greeks::intrinsic(
                self.terms.underlying_price(),
                self.terms.strike_price(),
                Rho::Fx {
                    call_domestic: 0.0,
                    put_domestic: 0.0,
                    call_foreign: 0.0,
                    put_foreign: 0.0,
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

    /// C - P - S / (1 + r_f)^t + K / (1 + r_d)^t
    fn put_call_parity(&self, call_price: f64, put_price: f64) -> Result<f64, PricingError> {
        ensure_non_negative("call price", call_price)?;
        ensure_non_negative("put price", put_price)?;

        let t = self.terms.time_to_expiry();
        Ok(call_price - put_price
            - self.terms.underlying_price() / (1.0 + self.terms.foreign_rate()).powf(t)
            + self.terms.strike_price() / (1.0 + self.terms.domestic_rate()).powf(t))
    }
}
