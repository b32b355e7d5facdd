//! Tests for Greek estimation.

use super::*;
use crate::error::PricingError;
use crate::mc::{PathPricer, SimulationParameters};
use crate::path_dependent::OptionKind;
use crate::rng::RandomDrawBuffer;
use approx::assert_relative_eq;

fn params(kind: OptionKind) -> SimulationParameters {
    SimulationParameters {
        spot: 100.0,
        rate: 0.01,
        volatility: 0.2,
        maturity: 1.0,
        kind,
        n_paths: 10_000,
        n_steps: 50,
    }
}

// =============================================================================
// ValuationResult
// =============================================================================

mod valuation_result_tests {
    use super::*;

    #[test]
    fn test_to_array_order() {
        let result = ValuationResult {
            price: 1.0,
            delta: 2.0,
            gamma: 3.0,
            theta: 4.0,
            rho: 5.0,
            vega: 6.0,
        };
        assert_eq!(result.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let array: [f64; 6] = result.into();
        assert_eq!(array[5], 6.0);
    }

    #[test]
    fn test_labelled() {
        let result = ValuationResult {
            theta: -3.0,
            ..Default::default()
        };
        let labelled: Vec<(&str, f64)> = result.labelled().collect();
        assert_eq!(labelled.len(), 6);
        assert_eq!(labelled[3], ("theta", -3.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(ValuationResult::default().is_finite());
        let bad = ValuationResult {
            gamma: f64::NAN,
            ..Default::default()
        };
        assert!(!bad.is_finite());
    }
}

// =============================================================================
// Repricer
// =============================================================================

mod repricer_tests {
    use super::*;

    #[test]
    fn test_reprice_matches_path_pricer() {
        let base = params(OptionKind::Call);
        let draws = RandomDrawBuffer::generate(42, base.n_paths, base.n_steps).unwrap();
        let repricer = Repricer::new(&base, &draws);

        let bumped = base.with_market(100.5, 0.012, 0.21, 0.9);
        assert_eq!(
            repricer.reprice(100.5, 0.012, 0.21, 0.9),
            PathPricer::price(&bumped, &draws)
        );
    }

    #[test]
    fn test_reprice_zero_maturity_short_circuit() {
        let base = params(OptionKind::Put);
        let draws = RandomDrawBuffer::generate(1, base.n_paths, base.n_steps).unwrap();
        let repricer = Repricer::new(&base, &draws);

        assert_eq!(repricer.reprice(100.0, 0.01, 0.2, 0.0), 0.0);
        assert_eq!(repricer.reprice(100.0, 0.01, 0.2, BUMP_FLOOR), 0.0);
        assert!(repricer.reprice(100.0, 0.01, 0.2, 1.0 / 365.0) > 0.0);
    }
}

// =============================================================================
// GreekEstimator
// =============================================================================

mod estimator_tests {
    use super::*;

    #[test]
    fn test_deterministic_bit_identical() {
        let p = params(OptionKind::Call);
        let a = GreekEstimator::default().estimate_all(&p, 42).unwrap();
        let b = GreekEstimator::default().estimate_all(&p, 42).unwrap();
        assert_eq!(a.to_array(), b.to_array());
    }

    #[test]
    fn test_different_seeds_differ() {
        let p = params(OptionKind::Call);
        let a = GreekEstimator::default().estimate_all(&p, 1).unwrap();
        let b = GreekEstimator::default().estimate_all(&p, 2).unwrap();
        assert_ne!(a.price, b.price);
    }

    #[test]
    fn test_matches_manual_crn_differences() {
        let p = params(OptionKind::Put);
        let seed = 11;
        let result = GreekEstimator::default().estimate_all(&p, seed).unwrap();

        let draws = RandomDrawBuffer::generate(seed, p.n_paths, p.n_steps).unwrap();
        let bumps = GreekBumpSizes::resolve(&BumpOverrides::default(), p.spot);
        let price = |s: f64, r: f64, v: f64, t: f64| {
            PathPricer::price(&p.with_market(s, r, v, t), &draws)
        };

        let base = price(p.spot, p.rate, p.volatility, p.maturity);
        let up = price(p.spot + bumps.spot, p.rate, p.volatility, p.maturity);
        let dn = price(p.spot - bumps.spot, p.rate, p.volatility, p.maturity);
        assert_eq!(result.price, base);
        assert_eq!(result.delta, (up - dn) / (2.0 * bumps.spot));
        assert_eq!(
            result.gamma,
            (up - 2.0 * base + dn) / (bumps.spot * bumps.spot)
        );

        let up = price(p.spot, p.rate + bumps.rate, p.volatility, p.maturity);
        let dn = price(p.spot, p.rate - bumps.rate, p.volatility, p.maturity);
        assert_eq!(result.rho, (up - dn) / (2.0 * bumps.rate));

        let up = price(p.spot, p.rate, p.volatility + bumps.volatility, p.maturity);
        let dn = price(p.spot, p.rate, p.volatility - bumps.volatility, p.maturity);
        assert_eq!(result.vega, (up - dn) / (2.0 * bumps.volatility));

        let up = price(p.spot, p.rate, p.volatility, p.maturity + bumps.time);
        let dn = price(p.spot, p.rate, p.volatility, p.maturity - bumps.time);
        assert_eq!(result.theta, -(up - dn) / (2.0 * bumps.time));
    }

    #[test]
    fn test_call_greeks_signs() {
        let p = params(OptionKind::Call);
        let result = GreekEstimator::default().estimate_all(&p, 42).unwrap();

        assert!(result.price > 0.0);
        assert!(result.delta > 0.0, "delta = {}", result.delta);
        assert!(result.vega > 0.0, "vega = {}", result.vega);
        assert!(result.theta < 0.0, "theta = {}", result.theta);
        assert!(result.rho > 0.0, "rho = {}", result.rho);
        assert!(result.is_finite());
    }

    #[test]
    fn test_put_greeks_signs() {
        let p = params(OptionKind::Put);
        let result = GreekEstimator::default().estimate_all(&p, 42).unwrap();

        assert!(result.price > 0.0);
        assert!(result.delta > 0.0, "delta = {}", result.delta);
        assert!(result.vega > 0.0, "vega = {}", result.vega);
        assert!(result.theta < 0.0, "theta = {}", result.theta);
        assert!(result.rho < 0.0, "rho = {}", result.rho);
    }

    #[test]
    fn test_delta_is_price_over_spot() {
        // Homogeneous payoff on fixed draws: V(λS) = λV(S).
        for kind in [OptionKind::Call, OptionKind::Put] {
            let p = params(kind);
            let result = GreekEstimator::default().estimate_all(&p, 3).unwrap();
            assert_relative_eq!(result.delta, result.price / p.spot, max_relative = 1e-6);
            assert!(result.gamma.abs() < 1e-4, "gamma = {}", result.gamma);
        }
    }

    #[test]
    fn test_zero_maturity() {
        let p = SimulationParameters {
            maturity: 0.0,
            ..params(OptionKind::Call)
        };
        let result = GreekEstimator::default().estimate_all(&p, 42).unwrap();

        assert_eq!(result.price, 0.0);
        assert_eq!(result.delta, 0.0);
        assert_eq!(result.gamma, 0.0);
        assert_eq!(result.rho, 0.0);
        assert_eq!(result.vega, 0.0);
        // The upward maturity bump still runs a real simulation.
        assert!(result.theta < 0.0);
        assert!(result.is_finite());
    }

    #[test]
    fn test_custom_bumps_are_used() {
        let p = params(OptionKind::Call);
        let overrides = BumpOverrides {
            spot: 1.0,
            rate: 1e-3,
            volatility: 1e-2,
            time: 1.0 / 52.0,
        };
        let custom = GreekEstimator::new(overrides).estimate_all(&p, 8).unwrap();
        let default = GreekEstimator::default().estimate_all(&p, 8).unwrap();

        assert_eq!(custom.price, default.price);
        assert_ne!(custom.vega, default.vega);
        assert_relative_eq!(custom.vega, default.vega, max_relative = 0.05);
    }

    #[test]
    fn test_large_spot_bump_is_floored() {
        let p = SimulationParameters {
            spot: 0.5,
            ..params(OptionKind::Call)
        };
        let overrides = BumpOverrides {
            spot: 1.0,
            ..Default::default()
        };
        let result = GreekEstimator::new(overrides).estimate_all(&p, 4).unwrap();
        assert!(result.is_finite());

        let draws = RandomDrawBuffer::generate(4, p.n_paths, p.n_steps).unwrap();
        let at_spot = |s: f64| PathPricer::price(&SimulationParameters { spot: s, ..p }, &draws);
        let (up, base, dn) = (at_spot(1.5), at_spot(0.5), at_spot(BUMP_FLOOR));
        assert_eq!(result.delta, (up - dn) / 2.0);
        assert_eq!(result.gamma, (up - 2.0 * base + dn) / 1.0);
    }

    #[test]
    fn test_small_volatility_bump_is_floored() {
        let p = SimulationParameters {
            volatility: 5e-5,
            n_paths: 2_000,
            n_steps: 20,
            ..params(OptionKind::Call)
        };
        let result = GreekEstimator::default().estimate_all(&p, 6).unwrap();

        let draws = RandomDrawBuffer::generate(6, p.n_paths, p.n_steps).unwrap();
        let at_vol = |v: f64| {
            PathPricer::price(&SimulationParameters { volatility: v, ..p }, &draws)
        };
        let up = at_vol(p.volatility + DEFAULT_VOLATILITY_BUMP);
        let dn = at_vol(BUMP_FLOOR);
        assert_eq!(result.vega, (up - dn) / (2.0 * DEFAULT_VOLATILITY_BUMP));
        assert!(result.is_finite());
    }

    #[test]
    fn test_with_stats_reports_base_estimate() {
        let p = params(OptionKind::Call);
        let (result, base) = GreekEstimator::default().estimate_with_stats(&p, 42).unwrap();
        assert_eq!(result.price, base.price);
        assert!(base.std_error > 0.0);
    }

    #[test]
    fn test_free_function_matches_estimator() {
        let p = params(OptionKind::Put);
        let overrides = BumpOverrides::default();
        let a = estimate_all(&p, 9, &overrides).unwrap();
        let b = GreekEstimator::new(overrides).estimate_all(&p, 9).unwrap();
        assert_eq!(a, b);
    }
}

// =============================================================================
// Validation and output buffer
// =============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_zero_spot_rejected() {
        let p = SimulationParameters {
            spot: 0.0,
            ..params(OptionKind::Call)
        };
        let result = GreekEstimator::default().estimate_all(&p, 1);
        assert!(matches!(
            result,
            Err(PricingError::InvalidMarketParameters { name: "spot", .. })
        ));
    }

    #[test]
    fn test_zero_paths_rejected() {
        let p = SimulationParameters {
            n_paths: 0,
            ..params(OptionKind::Call)
        };
        assert!(matches!(
            GreekEstimator::default().estimate_all(&p, 1),
            Err(PricingError::InvalidSamplingParameters { .. })
        ));
    }

    #[test]
    fn test_short_buffer_untouched() {
        let p = params(OptionKind::Call);
        let mut out = [7.0; 5];
        let result = GreekEstimator::default().estimate_into(&p, 1, &mut out);
        assert!(matches!(result, Err(PricingError::InvalidOutputBuffer(_))));
        assert_eq!(out, [7.0; 5]);
    }

    #[test]
    fn test_buffer_checked_before_market() {
        let p = SimulationParameters {
            spot: -1.0,
            ..params(OptionKind::Call)
        };
        let mut out: [f64; 0] = [];
        assert!(matches!(
            GreekEstimator::default().estimate_into(&p, 1, &mut out),
            Err(PricingError::InvalidOutputBuffer(_))
        ));
    }

    #[test]
    fn test_invalid_market_leaves_buffer_untouched() {
        let p = SimulationParameters {
            volatility: 0.0,
            ..params(OptionKind::Put)
        };
        let mut out = [-1.0; 6];
        assert!(GreekEstimator::default()
            .estimate_into(&p, 1, &mut out)
            .is_err());
        assert_eq!(out, [-1.0; 6]);
    }

    #[test]
    fn test_estimate_into_writes_first_six() {
        let p = SimulationParameters {
            n_paths: 500,
            n_steps: 10,
            ..params(OptionKind::Call)
        };
        let mut out = [f64::NAN; 8];
        GreekEstimator::default()
            .estimate_into(&p, 5, &mut out)
            .unwrap();

        let expected = GreekEstimator::default().estimate_all(&p, 5).unwrap();
        assert_eq!(&out[..6], &expected.to_array());
        assert!(out[6].is_nan() && out[7].is_nan());
    }
}

// =============================================================================
// Property-based tests
// =============================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn kind_strategy() -> impl Strategy<Value = OptionKind> {
        prop_oneof![Just(OptionKind::Call), Just(OptionKind::Put)]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_price_non_negative(
            spot in 0.01..1_000.0_f64,
            rate in -0.1..0.2_f64,
            volatility in 0.01..1.5_f64,
            maturity in 0.0..5.0_f64,
            kind in kind_strategy(),
            n_paths in 1..64_usize,
            n_steps in 1..16_usize,
            seed in any::<u64>(),
        ) {
            let p = SimulationParameters {
                spot, rate, volatility, maturity, kind, n_paths, n_steps,
            };
            let result = GreekEstimator::default().estimate_all(&p, seed).unwrap();
            prop_assert!(result.price >= 0.0);
            prop_assert!(result.is_finite());
        }

        #[test]
        fn test_repeatable(
            seed in any::<u64>(),
            kind in kind_strategy(),
        ) {
            let p = SimulationParameters { n_paths: 32, n_steps: 8, ..params(kind) };
            let a = GreekEstimator::default().estimate_all(&p, seed).unwrap();
            let b = GreekEstimator::default().estimate_all(&p, seed).unwrap();
            prop_assert_eq!(a.to_array(), b.to_array());
        }

        #[test]
        fn test_zero_maturity_prices_zero(
            spot in 0.01..1_000.0_f64,
            volatility in 0.01..1.5_f64,
            kind in kind_strategy(),
        ) {
            let p = SimulationParameters {
                spot,
                volatility,
                maturity: 0.0,
                n_paths: 16,
                n_steps: 4,
                ..params(kind)
            };
            let result = GreekEstimator::default().estimate_all(&p, 1).unwrap();
            prop_assert_eq!(result.price, 0.0);
            prop_assert!(result.is_finite());
        }
    }
}
