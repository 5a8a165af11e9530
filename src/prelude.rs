//! Convenience re-exports of the commonly used types.

pub use crate::pricing::{
    BlackScholes, ContractTerms, ConvergencePolicy, EquityTerms, FxTerms, GarmanKohlhagen,
    Greeks, ImpliedVolatility, Model, Moneyness, Precision, PricingError, PricingModel, Rho,
    SolverConfig, Valuation, ValuationReport, ValuationRequest, bisect,
};
