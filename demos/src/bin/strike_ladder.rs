//! Example pricing a ladder of strikes and inverting quoted call prices.
//!
//! This example shows how to:
//! 1. Price equity and FX options across strikes with explicit volatilities
//! 2. Parse textual market quotes and derive the solver precision from them
//! 3. Recover implied volatility and check put-call parity on quoted pairs
//! 4. Export valuation reports as JSON

use greeks_rs::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

/// One row of the printed ladder.
#[derive(Debug, Serialize)]
struct LadderRow {
    strike: f64,
    call_price: f64,
    put_price: f64,
    call_delta: f64,
    gamma: f64,
    vega: f64,
}

/// Prices `strikes` under Black-Scholes at a flat volatility.
fn equity_ladder(
    spot: f64,
    rate: f64,
    days: f64,
    volatility: f64,
    strikes: &[f64],
) -> Result<Vec<LadderRow>, PricingError> {
    let request = ValuationRequest::new().with_volatility(volatility);
    strikes
        .iter()
        .map(|&strike| {
            let valuation = Valuation::equity(EquityTerms::new(spot, strike, rate, days)?, &request)?;
            let greeks = valuation
                .greeks()
                .copied()
                .ok_or(PricingError::InvalidInput {
                    field: "volatility",
                    value: volatility,
                    reason: "required for greeks",
                })?;
            Ok(LadderRow {
                strike,
                call_price: greeks.call_price,
                put_price: greeks.put_price,
                call_delta: greeks.call_delta,
                gamma: greeks.gamma,
                vega: greeks.vega,
            })
        })
        .collect()
}

/// Solves implied volatility for a quoted FX call, matching the quote's own decimals.
fn fx_implied_volatility(
    terms: FxTerms,
    call_quote: &str,
    put_quote: Option<&str>,
) -> Result<ValuationReport, Box<dyn std::error::Error>> {
    let call_price: f64 = call_quote.trim().parse()?;
    let mut request = ValuationRequest::new()
        .with_call_price(call_price)
        .with_precision(Precision::from_quote(call_quote)?);
    if let Some(put_quote) = put_quote {
        request = request.with_put_price(put_quote.trim().parse()?);
    }

    let valuation = Valuation::fx(terms, &request)?;
    match valuation.implied_volatility_result() {
        Some(iv) if iv.converged => info!(
            "quote {} -> implied volatility {:.4}% after {} iterations",
            call_quote, iv.volatility, iv.iterations
        ),
        Some(iv) => warn!(
            "quote {} is outside the attainable price range, boundary estimate {:.4}%",
            call_quote, iv.volatility
        ),
        None => {}
    }
    Ok(valuation.report())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Starting strike ladder example");

    let strikes = [70.0, 75.0, 80.0, 85.0, 90.0];
    let ladder = equity_ladder(81.0, 6.0, 60.0, 30.0, &strikes)?;
    for row in &ladder {
        info!(
            "K={:>6.2} call={:>9.6} put={:>9.6} delta={:>8.6} gamma={:>8.6} vega={:>8.6}",
            row.strike, row.call_price, row.put_price, row.call_delta, row.gamma, row.vega
        );
    }
    info!("ladder JSON: {}", serde_json::to_string(&ladder)?);

    let terms = FxTerms::new(1.4565, 1.45, 1.0, 2.0, 30.0)?;
    for (call, put) in [("0.021", None), ("0.0359", Some("0.0306")), ("1.5", None)] {
        let report = fx_implied_volatility(terms, call, put)?;
        info!("report: {}", report.to_json()?);
    }

    if let Err(e) = EquityTerms::new(81.0, 0.0, 6.0, 60.0) {
        warn!("rejected contract: {}", e);
    }

    info!("Example completed successfully");
    Ok(())
}
