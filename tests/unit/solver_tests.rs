use greeks_rs::prelude::*;

#[test]
fn test_call_price_strictly_increasing_in_volatility() {
    let equity = BlackScholes::new(EquityTerms::new(52.0, 60.0, 5.0, 30.0).unwrap());
    let fx = GarmanKohlhagen::new(FxTerms::new(1.4565, 1.45, 1.0, 2.0, 30.0).unwrap());

    for model in [Model::from(equity), Model::from(fx)] {
        let mut previous = model.call_price(10.0).unwrap();
        for step in 1..=98 {
            let vol = 10.0 + step as f64 * 5.0;
            let price = model.call_price(vol).unwrap();
            assert!(
                price > previous,
                "{} call price not increasing at {vol}%",
                model.name()
            );
            previous = price;
        }
    }
}

#[test]
fn test_call_price_increasing_from_small_volatilities() {
    // At-the-money forward contracts keep time value at any volatility.
    let equity = BlackScholes::new(EquityTerms::new(100.0, 100.0, 0.0, 30.0).unwrap());
    let fx = GarmanKohlhagen::new(FxTerms::new(1.45, 1.45, 2.0, 2.0, 30.0).unwrap());
    let vols = [0.01, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 50.0, 250.0, 500.0];

    for model in [Model::from(equity), Model::from(fx)] {
        let prices: Vec<f64> = vols.iter().map(|&v| model.call_price(v).unwrap()).collect();
        for (pair, vol) in prices.windows(2).zip(&vols[1..]) {
            assert!(
                pair[1] > pair[0],
                "{} call price not increasing at {vol}%",
                model.name()
            );
        }
    }

    // Away from the money prices may flatten in floating point but never fall.
    let otm = Model::from(BlackScholes::new(EquityTerms::new(52.0, 60.0, 5.0, 30.0).unwrap()));
    let mut previous = otm.call_price(0.01).unwrap();
    for vol in [0.1, 1.0, 5.0, 10.0] {
        let price = otm.call_price(vol).unwrap();
        assert!(price >= previous, "call price fell at {vol}%");
        previous = price;
    }
}

#[test]
fn test_round_trip_recovers_volatility() {
    let cases = [
        (Model::from(BlackScholes::new(EquityTerms::new(81.0, 80.0, 6.0, 60.0).unwrap())), 30.0),
        (Model::from(BlackScholes::new(EquityTerms::new(100.0, 90.0, 3.0, 180.0).unwrap())), 55.0),
        (Model::from(GarmanKohlhagen::new(FxTerms::new(1.4565, 1.45, 1.0, 2.0, 30.0).unwrap())), 20.0),
        (Model::from(GarmanKohlhagen::new(FxTerms::new(1.10, 1.12, 3.0, 1.0, 120.0).unwrap())), 9.0),
    ];

    for (model, vol) in cases {
        let price = Precision::DEFAULT.round(model.call_price(vol).unwrap());
        let result = model
            .implied_volatility(price, Precision::DEFAULT, &SolverConfig::default())
            .unwrap();

        assert!(result.converged);
        let recovered = model.call_price(result.volatility).unwrap();
        assert!(Precision::DEFAULT.matches(recovered, price));
        assert!(
            (result.volatility - vol).abs() < 1e-2,
            "{}: recovered {} for {vol}",
            model.name(),
            result.volatility
        );
    }
}

#[test]
fn test_target_below_intrinsic_returns_lower_bound() {
    let model = BlackScholes::new(EquityTerms::new(81.0, 80.0, 6.0, 60.0).unwrap());
    let result = model
        .implied_volatility(0.5, Precision::decimals(2).unwrap(), &SolverConfig::default())
        .unwrap();

    assert!(!result.converged);
    assert_eq!(result.volatility, 0.0);
}

#[test]
fn test_target_above_maximum_returns_upper_bound() {
    let model = BlackScholes::new(EquityTerms::new(81.0, 80.0, 6.0, 60.0).unwrap());
    let result = model
        .implied_volatility(80.0, Precision::decimals(2).unwrap(), &SolverConfig::default())
        .unwrap();

    assert!(!result.converged);
    assert_eq!(result.volatility, 500.0);
}

#[test]
fn test_strict_policy_reports_non_convergence() {
    let terms = EquityTerms::new(81.0, 80.0, 6.0, 60.0).unwrap();
    let request = ValuationRequest::new()
        .with_call_price(80.0)
        .with_solver(SolverConfig::new().strict());

    assert!(matches!(
        Valuation::equity(terms, &request),
        Err(PricingError::ConvergenceFailure {
            last_volatility,
            ..
        }) if last_volatility == 500.0
    ));
}

#[test]
fn test_generic_bisect_over_custom_objective() {
    let model = GarmanKohlhagen::new(FxTerms::new(1.4565, 1.45, 1.0, 2.0, 30.0).unwrap());
    let mut evaluations = 0;
    let result = bisect(
        |vol| {
            evaluations += 1;
            model.call_price(vol)
        },
        0.021,
        Precision::decimals(3).unwrap(),
        &SolverConfig::default(),
    )
    .unwrap();

    assert_eq!(result.volatility, 10.742_187_5);
    assert_eq!(evaluations, result.iterations);
}
