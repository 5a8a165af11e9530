//! Contract terms for equity and FX options.
//!
//! Terms are supplied in market units (rates as annual percentages, time as
//! calendar days) and normalized exactly once at construction: rates are
//! divided by 100 and days by 365. Accessors return the normalized values.

use super::error::{PricingError, ensure_finite, ensure_non_negative};
use serde::{Deserialize, Serialize};

/// Calendar days per year used to turn days to expiration into a year fraction.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Behaviour shared by every set of contract terms.
pub trait ContractTerms {
    /// Spot price of the underlying (S).
    fn underlying_price(&self) -> f64;

    /// Strike price (K), never zero.
    fn strike_price(&self) -> f64;

    /// Time to expiration as a year fraction (t).
    fn time_to_expiry(&self) -> f64;

    /// Undiscounted call payoff `max(0, S - K)`.
    fn call_intrinsic(&self) -> f64 {
        (self.underlying_price() - self.strike_price()).max(0.0)
    }

    /// Undiscounted put payoff `max(0, K - S)`.
    fn put_intrinsic(&self) -> f64 {
        (self.strike_price() - self.underlying_price()).max(0.0)
    }
}

fn validate_prices(underlying_price: f64, strike_price: f64) -> Result<(), PricingError> {
    ensure_finite("underlying price", underlying_price)?;
    if underlying_price <= 0.0 {
        return Err(PricingError::InvalidInput {
            field: "underlying price",
            value: underlying_price,
            reason: "must be positive",
        });
    }

    ensure_finite("strike price", strike_price)?;
    if strike_price == 0.0 {
        return Err(PricingError::ZeroStrike);
    }
    if strike_price < 0.0 {
        return Err(PricingError::InvalidInput {
            field: "strike price",
            value: strike_price,
            reason: "must be positive",
        });
    }

    Ok(())
}

/// Rates at or below -100% make the discount base `1 + r` non-positive.
fn validate_rate(field: &'static str, rate: f64) -> Result<f64, PricingError> {
    ensure_finite(field, rate)?;
    if rate <= -100.0 {
        return Err(PricingError::InvalidInput {
            field,
            value: rate,
            reason: "must be above -100%",
        });
    }
    Ok(rate)
}

/// Terms of a European option on a non-dividend-paying stock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityTerms {
    underlying_price: f64,
    strike_price: f64,
    interest_rate: f64,
    time_to_expiry: f64,
}

impl EquityTerms {
    /// Creates equity terms.
    ///
    /// # Arguments
    /// - `underlying_price`: Spot price, strictly positive
    /// - `strike_price`: Strike, strictly positive
    /// - `interest_rate`: Risk-free rate in percent (6 means 6%), above -100
    /// - `days_to_expiration`: Calendar days until expiry, non-negative
    ///
    /// # Errors
    /// [`PricingError::ZeroStrike`] for a zero strike and
    /// [`PricingError::InvalidInput`] for any other inadmissible value.
    pub fn new(
        underlying_price: f64,
        strike_price: f64,
        interest_rate: f64,
        days_to_expiration: f64,
    ) -> Result<Self, PricingError> {
        validate_prices(underlying_price, strike_price)?;
        validate_rate("interest rate", interest_rate)?;
        ensure_non_negative("days to expiration", days_to_expiration)?;

        Ok(Self {
            underlying_price,
            strike_price,
            interest_rate: interest_rate / 100.0,
            time_to_expiry: days_to_expiration / DAYS_PER_YEAR,
        })
    }

    /// Risk-free rate as a decimal fraction.
    #[must_use]
    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }
}

impl ContractTerms for EquityTerms {
    fn underlying_price(&self) -> f64 {
        self.underlying_price
    }

    fn strike_price(&self) -> f64 {
        self.strike_price
    }

    fn time_to_expiry(&self) -> f64 {
        self.time_to_expiry
    }
}

/// `[underlying, strike, rate %, days]`
impl TryFrom<[f64; 4]> for EquityTerms {
    type Error = PricingError;

    fn try_from(args: [f64; 4]) -> Result<Self, Self::Error> {
        Self::new(args[0], args[1], args[2], args[3])
    }
}

/// Terms of a European option on a currency pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FxTerms {
    underlying_price: f64,
    strike_price: f64,
    domestic_rate: f64,
    foreign_rate: f64,
    time_to_expiry: f64,
}

impl FxTerms {
    /// Creates FX terms.
    ///
    /// # Arguments
    /// - `underlying_price`: Spot exchange rate, strictly positive
    /// - `strike_price`: Strike exchange rate, strictly positive
    /// - `domestic_rate`: Domestic risk-free rate in percent, above -100
    /// - `foreign_rate`: Foreign risk-free rate in percent, above -100
    /// - `days_to_expiration`: Calendar days until expiry, non-negative
    ///
    /// # Errors
    /// [`PricingError::ZeroStrike`] for a zero strike and
    /// [`PricingError::InvalidInput`] for any other inadmissible value.
    pub fn new(
        underlying_price: f64,
        strike_price: f64,
        domestic_rate: f64,
        foreign_rate: f64,
        days_to_expiration: f64,
    ) -> Result<Self, PricingError> {
        validate_prices(underlying_price, strike_price)?;
        validate_rate("domestic rate", domestic_rate)?;
        validate_rate("foreign rate", foreign_rate)?;
        ensure_non_negative("days to expiration", days_to_expiration)?;

        Ok(Self {
            underlying_price,
            strike_price,
            domestic_rate: domestic_rate / 100.0,
            foreign_rate: foreign_rate / 100.0,
            time_to_expiry: days_to_expiration / DAYS_PER_YEAR,
        })
    }

    /// Domestic rate as a decimal fraction.
    #[must_use]
    pub fn domestic_rate(&self) -> f64 {
        self.domestic_rate
    }

    /// Foreign rate as a decimal fraction.
    #[must_use]
    pub fn foreign_rate(&self) -> f64 {
        self.foreign_rate
    }
}

impl ContractTerms for FxTerms {
    fn underlying_price(&self) -> f64 {
        self.underlying_price
    }

    fn strike_price(&self) -> f64 {
        self.strike_price
    }

    fn time_to_expiry(&self) -> f64 {
        self.time_to_expiry
    }
}

/// `[underlying, strike, domestic rate %, foreign rate %, days]`
impl TryFrom<[f64; 5]> for FxTerms {
    type Error = PricingError;

    fn try_from(args: [f64; 5]) -> Result<Self, Self::Error> {
        Self::new(args[0], args[1], args[2], args[3], args[4])
    }
}
