//! Bisection solver for implied volatility.
//!
//! The solver inverts any monotonically increasing objective (a model's call
//! price as a function of volatility) over a fixed bracket. Convergence is a
//! rounded-equality test at a caller-supplied decimal precision rather than an
//! absolute epsilon, so a price quoted to three decimals is matched to three
//! decimals.

use super::error::{PricingError, ensure_finite};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Number of decimal places used to compare a trial price with the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precision {
    decimals: u32,
}

impl Precision {
    /// Six decimals, the rounding applied to observed call prices.
    pub const DEFAULT: Precision = Precision { decimals: 6 };

    /// Largest precision that still scales an `f64` price without overflow
    /// in practice.
    pub const MAX_DECIMALS: u32 = 15;

    /// Creates a precision of `decimals` places.
    ///
    /// # Errors
    /// [`PricingError::InvalidPrecision`] above [`Precision::MAX_DECIMALS`].
    pub fn decimals(decimals: u32) -> Result<Self, PricingError> {
        if decimals > Self::MAX_DECIMALS {
            return Err(PricingError::InvalidPrecision {
                message: format!(
                    "{decimals} decimals exceeds maximum of {}",
                    Self::MAX_DECIMALS
                ),
            });
        }
        Ok(Self { decimals })
    }

    /// Derives the precision from a plain decimal quote such as `"0.021"`.
    ///
    /// Trailing zeros count (`"3.0"` is one decimal). Quotes in scientific
    /// notation are rejected.
    ///
    /// # Errors
    /// [`PricingError::InvalidPrecision`] when the quote is not a plain
    /// decimal literal.
    pub fn from_quote(quote: &str) -> Result<Self, PricingError> {
        let quote = quote.trim();
        let unsigned = quote.strip_prefix(['-', '+']).unwrap_or(quote);
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty())
            || !is_digits(whole)
            || !is_digits(fraction)
        {
            return Err(PricingError::InvalidPrecision {
                message: format!("'{quote}' is not a plain decimal number"),
            });
        }

        let decimals = u32::try_from(fraction.len()).map_err(|_| PricingError::InvalidPrecision {
            message: format!("'{quote}' has too many decimals"),
        })?;
        Self::decimals(decimals)
    }

    /// Derives the precision from an observed price.
    ///
    /// The price is rounded to [`Precision::DEFAULT`] and the fractional
    /// digits of its shortest decimal form are counted. A whole number counts
    /// as one decimal, so `3.0` matches to one place and `0.021` to three.
    ///
    /// # Errors
    /// [`PricingError::InvalidInput`] for a non-finite price.
    pub fn from_price(price: f64) -> Result<Self, PricingError> {
        ensure_finite("call price", price)?;
        let rounded = format!("{}", Self::DEFAULT.round(price));
        let decimals = rounded
            .split_once('.')
            .map_or(1, |(_, fraction)| fraction.len());
        let decimals = u32::try_from(decimals).map_err(|_| PricingError::InvalidPrecision {
            message: format!("'{rounded}' has too many decimals"),
        })?;
        Self::decimals(decimals)
    }

    /// Number of decimal places.
    #[must_use]
    pub fn places(&self) -> u32 {
        self.decimals
    }

    /// Rounds `value` half away from zero at this precision.
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        let scale = self.scale();
        (value * scale).round() / scale
    }

    /// Returns true when `a` and `b` round to the same value.
    #[must_use]
    pub fn matches(&self, a: f64, b: f64) -> bool {
        let scale = self.scale();
        (a * scale).round() == (b * scale).round()
    }

    fn scale(&self) -> f64 {
        10f64.powi(self.decimals as i32)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What the solver does when the iteration budget runs out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConvergencePolicy {
    /// Return the last midpoint flagged as not converged.
    #[default]
    BestEffort,
    /// Fail with [`PricingError::ConvergenceFailure`].
    Strict,
}

/// Configuration for the bisection solver.
///
/// Bounds are volatility percentages (500.0 means 500%).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Maximum bisection steps.
    pub max_iterations: u32,
    /// Lower volatility bound in percent.
    pub low: f64,
    /// Upper volatility bound in percent.
    pub high: f64,
    /// Outcome when the budget is exhausted.
    pub policy: ConvergencePolicy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            low: 0.0,
            high: 500.0,
            policy: ConvergencePolicy::BestEffort,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the volatility bracket in percent.
    #[must_use]
    pub fn with_bounds(mut self, low: f64, high: f64) -> Self {
        self.low = low;
        self.high = high;
        self
    }

    /// Sets the non-convergence policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ConvergencePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Shorthand for [`ConvergencePolicy::Strict`].
    #[must_use]
    pub fn strict(self) -> Self {
        self.with_policy(ConvergencePolicy::Strict)
    }

    fn validate(&self) -> Result<(), PricingError> {
        if !self.low.is_finite() || self.low < 0.0 {
            return Err(PricingError::InvalidInput {
                field: "solver lower bound",
                value: self.low,
                reason: "must be finite and non-negative",
            });
        }
        if !self.high.is_finite() || self.high <= self.low {
            return Err(PricingError::InvalidInput {
                field: "solver upper bound",
                value: self.high,
                reason: "must be finite and above the lower bound",
            });
        }
        if self.max_iterations == 0 {
            return Err(PricingError::InvalidInput {
                field: "solver max iterations",
                value: 0.0,
                reason: "must be at least one",
            });
        }
        Ok(())
    }
}

/// Outcome of an implied volatility search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpliedVolatility {
    /// Volatility in percent (20.0 = 20%).
    pub volatility: f64,
    /// Objective evaluations performed.
    pub iterations: u32,
    /// False when the result is a best-effort estimate.
    pub converged: bool,
}

impl ImpliedVolatility {
    /// Volatility as a decimal fraction (0.2 for 20%).
    #[must_use]
    pub fn as_decimal(&self) -> f64 {
        self.volatility / 100.0
    }
}

/// Finds the input in `[config.low, config.high]` whose objective value
/// matches `target` at `precision`.
///
/// The objective must be increasing in its argument. A target outside the
/// objective's range over the bracket can never match; the search then walks
/// to the nearest bracket end and reports `converged = false` (or fails under
/// [`ConvergencePolicy::Strict`]).
///
/// # Arguments
/// - `objective`: Price as a function of volatility in percent
/// - `target`: Observed price to reproduce
/// - `precision`: Decimal places of the equality test
/// - `config`: Bracket, budget, and policy
///
/// # Errors
/// Invalid target or configuration, any error from `objective`, or
/// [`PricingError::ConvergenceFailure`] under the strict policy.
pub fn bisect<F>(
    mut objective: F,
    target: f64,
    precision: Precision,
    config: &SolverConfig,
) -> Result<ImpliedVolatility, PricingError>
where
    F: FnMut(f64) -> Result<f64, PricingError>,
{
    config.validate()?;
    if !target.is_finite() || target < 0.0 {
        return Err(PricingError::InvalidInput {
            field: "target price",
            value: target,
            reason: "must be finite and non-negative",
        });
    }

    let mut low = config.low;
    let mut high = config.high;
    let mut mid = (low + high) / 2.0;
    let mut iterations = 0;

    while iterations < config.max_iterations {
        iterations += 1;
        mid = (low + high) / 2.0;
        let estimate = objective(mid)?;
        trace!(
            "bisection step {}: low={}, high={}, mid={}, estimate={}",
            iterations, low, high, mid, estimate
        );

        if precision.matches(estimate, target) {
            debug!(
                "implied volatility {} found in {} iterations for target {}",
                mid, iterations, target
            );
            return Ok(ImpliedVolatility {
                volatility: mid,
                iterations,
                converged: true,
            });
        }

        // Once the bracket cannot be split further every remaining step
        // would evaluate the same midpoint.
        if mid <= low || mid >= high {
            break;
        }

        if estimate > target {
            high = mid;
        } else {
            low = mid;
        }
    }

    match config.policy {
        ConvergencePolicy::BestEffort => {
            warn!(
                "bisection did not match target {} after {} iterations, returning {}",
                target, iterations, mid
            );
            Ok(ImpliedVolatility {
                volatility: mid,
                iterations,
                converged: false,
            })
        }
        ConvergencePolicy::Strict => Err(PricingError::ConvergenceFailure {
            iterations,
            last_volatility: mid,
        }),
    }
}
