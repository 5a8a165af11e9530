//! Error types for option pricing and implied volatility inversion.

use std::fmt;

/// Errors raised while validating contract terms, pricing, or solving.
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Strike price of exactly zero; log-moneyness is undefined.
    ZeroStrike,

    /// A numeric input is outside its admissible domain.
    InvalidInput {
        /// Name of the offending input.
        field: &'static str,
        /// Value that was supplied.
        value: f64,
        /// What the input must satisfy.
        reason: &'static str,
    },

    /// A decimal precision could not be derived from a price quote.
    InvalidPrecision {
        /// Description of the rejected quote.
        message: String,
    },

    /// Bisection exhausted its budget under the strict convergence policy.
    ConvergenceFailure {
        /// Number of iterations attempted.
        iterations: u32,
        /// Last volatility estimate (percent) before giving up.
        last_volatility: f64,
    },

    /// A valuation report could not be serialized.
    SerializationError {
        /// Underlying serializer message.
        message: String,
    },

    /// A valuation report could not be deserialized.
    DeserializationError {
        /// Underlying deserializer message.
        message: String,
    },
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::ZeroStrike => write!(f, "strike price cannot be zero"),
            PricingError::InvalidInput {
                field,
                value,
                reason,
            } => {
                write!(f, "invalid {field}: {value} ({reason})")
            }
            PricingError::InvalidPrecision { message } => {
                write!(f, "invalid precision: {message}")
            }
            PricingError::ConvergenceFailure {
                iterations,
                last_volatility,
            } => {
                write!(
                    f,
                    "solver did not converge after {iterations} iterations, last volatility: {last_volatility:.6}%"
                )
            }
            PricingError::SerializationError { message } => {
                write!(f, "serialization error: {message}")
            }
            PricingError::DeserializationError { message } => {
                write!(f, "deserialization error: {message}")
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Rejects NaN and infinities before they reach the closed forms.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::InvalidInput {
            field,
            value,
            reason: "must be finite",
        })
    }
}

/// Finite and `>= 0`.
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64, PricingError> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(PricingError::InvalidInput {
            field,
            value,
            reason: "must not be negative",
        });
    }
    Ok(value)
}
