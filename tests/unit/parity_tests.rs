use greeks_rs::prelude::*;

const TOLERANCE: f64 = 1e-9;

#[test]
fn test_equity_forward_parity_identity() {
    for (spot, strike, rate, days, vol) in [
        (81.0, 80.0, 6.0, 60.0, 30.0),
        (100.0, 120.0, 2.5, 365.0, 45.0),
        (52.0, 60.0, 5.0, 30.0, 95.0),
        (10.0, 9.0, 0.0, 7.0, 5.0),
    ] {
        let terms = EquityTerms::new(spot, strike, rate, days).unwrap();
        let greeks = BlackScholes::new(terms).greeks(vol).unwrap();

        let t = terms.time_to_expiry();
        let forward = spot - strike * (-terms.interest_rate() * t).exp();
        assert!(
            (greeks.call_price - greeks.put_price - forward).abs() < TOLERANCE,
            "parity broken for S={spot} K={strike}"
        );
    }
}

#[test]
fn test_fx_forward_parity_identity() {
    for (spot, strike, rd, rf, days, vol) in [
        (1.4565, 1.45, 1.0, 2.0, 30.0, 20.0),
        (110.0, 105.0, 0.5, 4.0, 180.0, 12.0),
        (0.65, 0.70, 4.5, 0.1, 90.0, 8.0),
    ] {
        let terms = FxTerms::new(spot, strike, rd, rf, days).unwrap();
        let greeks = GarmanKohlhagen::new(terms).greeks(vol).unwrap();

        let t = terms.time_to_expiry();
        let forward =
            spot * (-terms.foreign_rate() * t).exp() - strike * (-terms.domestic_rate() * t).exp();
        assert!(
            (greeks.call_price - greeks.put_price - forward).abs() < TOLERANCE,
            "parity broken for S={spot} K={strike}"
        );
    }
}

#[test]
fn test_fx_parity_diagnostic_reference() {
    let terms = FxTerms::new(1.4565, 1.45, 1.0, 2.0, 30.0).unwrap();
    let request = ValuationRequest::new()
        .with_call_price(0.036_133_685_584_059_827)
        .with_put_price(0.030_851_333_789_832_069);
    let valuation = Valuation::fx(terms, &request).unwrap();

    assert!((valuation.put_call_parity().unwrap() + 3.433_431_599_675_352e-5).abs() < TOLERANCE);
}

#[test]
fn test_parity_finite_for_every_admissible_rate() {
    assert!(EquityTerms::new(81.0, 80.0, -150.0, 60.0).is_err());
    assert!(FxTerms::new(1.4565, 1.45, 1.0, -120.0, 30.0).is_err());

    for rate in [-99.0, -50.0, -0.5, 0.0, 6.0, 250.0] {
        let terms = EquityTerms::new(81.0, 80.0, rate, 60.0).unwrap();
        let request = ValuationRequest::new()
            .with_call_price(4.0)
            .with_put_price(3.0);
        let parity = Valuation::equity(terms, &request)
            .unwrap()
            .put_call_parity()
            .unwrap();
        assert!(parity.is_finite(), "parity not finite at r={rate}%");

        let fx = GarmanKohlhagen::new(FxTerms::new(1.4565, 1.45, rate, rate, 30.0).unwrap());
        assert!(fx.put_call_parity(0.03, 0.02).unwrap().is_finite());
    }
}
