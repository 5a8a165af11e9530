use greeks_rs::prelude::*;

#[test]
fn test_zero_strike_always_domain_error() {
    assert_eq!(
        EquityTerms::new(81.0, 0.0, 6.0, 60.0),
        Err(PricingError::ZeroStrike)
    );
    assert_eq!(
        FxTerms::try_from([1.4565, 0.0, 1.0, 2.0, 30.0]),
        Err(PricingError::ZeroStrike)
    );
    assert_eq!(
        PricingError::ZeroStrike.to_string(),
        "strike price cannot be zero"
    );
}

#[test]
fn test_zero_volatility_collapses_to_intrinsic() {
    for (spot, strike) in [(81.0, 80.0), (79.0, 80.0), (80.0, 80.0)] {
        let terms = EquityTerms::new(spot, strike, 6.0, 60.0).unwrap();
        let valuation =
            Valuation::equity(terms, &ValuationRequest::new().with_volatility(0.0)).unwrap();

        assert_eq!(valuation.call_price(), Some(f64::max(0.0, spot - strike)));
        assert_eq!(valuation.put_price(), Some(f64::max(0.0, strike - spot)));
        assert_eq!(valuation.vega(), Some(0.0));
        assert_eq!(valuation.gamma(), Some(0.0));
        assert!(valuation.moneyness().is_none());
    }
}

#[test]
fn test_zero_time_collapses_to_intrinsic() {
    for (spot, strike) in [(1.50, 1.45), (1.40, 1.45)] {
        let terms = FxTerms::new(spot, strike, 1.0, 2.0, 0.0).unwrap();
        let valuation =
            Valuation::fx(terms, &ValuationRequest::new().with_volatility(20.0)).unwrap();

        assert_eq!(valuation.call_price(), Some(f64::max(0.0, spot - strike)));
        assert_eq!(valuation.put_price(), Some(f64::max(0.0, strike - spot)));
        assert_eq!(valuation.vega(), Some(0.0));

        let call_delta = if spot > strike { 1.0 } else { 0.0 };
        let put_delta = if spot < strike { -1.0 } else { 0.0 };
        assert_eq!(valuation.call_delta(), Some(call_delta));
        assert_eq!(valuation.put_delta(), Some(put_delta));
    }
}

#[test]
fn test_invalid_inputs_rejected_at_boundary() {
    assert!(EquityTerms::new(f64::NAN, 80.0, 6.0, 60.0).is_err());
    assert!(EquityTerms::new(0.0, 80.0, 6.0, 60.0).is_err());
    assert!(EquityTerms::new(81.0, 80.0, 6.0, -1.0).is_err());
    assert!(FxTerms::new(1.4565, 1.45, f64::INFINITY, 2.0, 30.0).is_err());

    let terms = EquityTerms::new(81.0, 80.0, 6.0, 60.0).unwrap();
    let request = ValuationRequest::new().with_volatility(-10.0);
    assert!(matches!(
        Valuation::equity(terms, &request),
        Err(PricingError::InvalidInput {
            field: "volatility",
            ..
        })
    ));
}
