use greeks_rs::prelude::*;

const TOLERANCE: f64 = 1e-6;

#[test]
fn test_fx_reference_valuation() {
    let terms = FxTerms::try_from([1.4565, 1.45, 1.0, 2.0, 30.0]).unwrap();
    let valuation = Valuation::fx(terms, &ValuationRequest::new().with_volatility(20.0)).unwrap();

    assert!((valuation.call_price().unwrap() - 0.035_914).abs() < TOLERANCE);
    assert!((valuation.put_price().unwrap() - 0.030_615).abs() < TOLERANCE);
    assert!((valuation.vega().unwrap() - 0.165_603).abs() < TOLERANCE);
    assert!((valuation.gamma().unwrap() - 4.748_866).abs() < TOLERANCE);
    assert!((valuation.call_delta().unwrap() - 0.535_905).abs() < TOLERANCE);
    assert!((valuation.put_delta().unwrap() + 0.462_453).abs() < TOLERANCE);
}

#[test]
fn test_fx_reference_implied_volatility() {
    let terms = FxTerms::new(1.4565, 1.45, 1.0, 2.0, 30.0).unwrap();
    let request = ValuationRequest::new().with_call_price(0.021);
    let valuation = Valuation::fx(terms, &request).unwrap();

    let iv = valuation.implied_volatility_result().unwrap();
    assert!(iv.converged);
    assert_eq!(iv.volatility, 10.742_187_5);
    assert_eq!(iv.iterations, 9);
}

#[test]
fn test_equity_reference_valuation() {
    let terms = EquityTerms::try_from([81.0, 80.0, 6.0, 60.0]).unwrap();
    let valuation =
        Valuation::equity(terms, &ValuationRequest::new().with_volatility(30.0)).unwrap();

    assert!((valuation.call_price().unwrap() - 4.842_294).abs() < TOLERANCE);
    assert!((valuation.put_price().unwrap() - 3.057_131).abs() < TOLERANCE);
    assert!((valuation.call_delta().unwrap() - 0.596_399).abs() < TOLERANCE);
    assert!((valuation.gamma().unwrap() - 0.039_305).abs() < TOLERANCE);
    assert!((valuation.vega().unwrap() - 0.127_172).abs() < TOLERANCE);
    assert!((valuation.call_rho().unwrap() - 0.071_451).abs() < TOLERANCE);
    assert!((valuation.put_rho().unwrap() + 0.058_765).abs() < TOLERANCE);
}

#[test]
fn test_equity_reference_implied_volatility() {
    let terms = EquityTerms::new(52.0, 60.0, 5.0, 30.0).unwrap();
    let request = ValuationRequest::new().with_call_price(3.0);
    let valuation = Valuation::equity(terms, &request).unwrap();

    assert_eq!(valuation.implied_volatility(), Some(95.703_125));
    assert!(valuation.implied_volatility_result().unwrap().converged);
}

#[test]
fn test_equity_reference_parity() {
    let terms = EquityTerms::new(81.0, 80.0, 6.0, 60.0).unwrap();
    let request = ValuationRequest::new()
        .with_call_price(4.842_294)
        .with_put_price(3.057_131);
    let valuation = Valuation::equity(terms, &request).unwrap();

    assert!((valuation.put_call_parity().unwrap() - 0.022_545).abs() < TOLERANCE);
}

#[test]
fn test_runtime_model_selection() {
    let models = [
        Model::from(BlackScholes::new(
            EquityTerms::new(81.0, 80.0, 6.0, 60.0).unwrap(),
        )),
        Model::from(GarmanKohlhagen::new(
            FxTerms::new(1.4565, 1.45, 1.0, 2.0, 30.0).unwrap(),
        )),
    ];
    let expected = [(30.0, 4.842_294), (20.0, 0.035_914)];

    for (model, (vol, call)) in models.into_iter().zip(expected) {
        let valuation = Valuation::new(model, &ValuationRequest::new().with_volatility(vol)).unwrap();
        assert!(
            (valuation.call_price().unwrap() - call).abs() < TOLERANCE,
            "{} call price",
            valuation.model().name()
        );
    }
}
