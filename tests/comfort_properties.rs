//! Property-based tests for the comfort models
//!
//! Invariants that should hold across the usual indoor and outdoor input ranges:
//! - PMV and SET converge and stay finite
//! - PPD stays between 5 % and 100 %
//! - the cooling effect stays in [0, 40] K and reproduces the elevated air speed SET in
//!   still air
//! - adaptive neutral temperatures rise with the running mean
//! - UTCI is defined exactly on its validity domain

use ladybug_core::comfort::adaptive::{self, AdaptiveOptions};
use ladybug_core::comfort::{pmv, set, utci};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_pmv_converges(
        ta in 10.0..40.0_f64,
        tr in 10.0..40.0_f64,
        vel in 0.0..2.0_f64,
        rh in 0.0..100.0_f64,
        met in 0.5..4.0_f64,
        clo in 0.0..2.0_f64,
    ) {
        let result = pmv::pmv(ta, tr, vel, rh, met, clo, 0.0);
        prop_assert!(result.is_ok(), "PMV failed for {:?}", (ta, tr, vel, rh, met, clo));
        let result = result.unwrap();
        prop_assert!(result.pmv.is_finite());
        prop_assert!(result.ppd >= 5.0 - 1e-9 && result.ppd <= 100.0);
    }

    #[test]
    fn prop_pmv_increases_with_air_temperature(
        ta in 12.0..36.0_f64,
        rh in 10.0..90.0_f64,
        met in 0.8..2.0_f64,
        clo in 0.3..1.5_f64,
    ) {
        let cool = pmv::pmv(ta, ta, 0.1, rh, met, clo, 0.0).unwrap();
        let warm = pmv::pmv(ta + 1.0, ta + 1.0, 0.1, rh, met, clo, 0.0).unwrap();
        prop_assert!(warm.pmv > cool.pmv);
    }

    #[test]
    fn prop_set_converges(
        ta in 10.0..40.0_f64,
        tr in 10.0..40.0_f64,
        vel in 0.0..2.0_f64,
        rh in 0.0..100.0_f64,
        met in 0.5..4.0_f64,
        clo in 0.0..2.0_f64,
    ) {
        let result = set::pierce_set(ta, tr, vel, rh, met, clo, 0.0);
        prop_assert!(result.is_ok(), "SET failed for {:?}", (ta, tr, vel, rh, met, clo));
        prop_assert!(result.unwrap().is_finite());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_cooling_effect_matches_still_air_set(
        ta in 18.0..34.0_f64,
        tr in 18.0..36.0_f64,
        vel in 0.16..2.0_f64,
        rh in 0.0..100.0_f64,
        met in 0.8..2.0_f64,
        clo in 0.3..1.2_f64,
    ) {
        let result = set::pmv_elevated_air_speed(ta, tr, vel, rh, met, clo, 0.0);
        prop_assert!(result.is_ok(), "no cooling effect for {:?}", (ta, tr, vel, rh, met, clo));
        let result = result.unwrap();
        let still = set::pierce_set(
            result.adjusted_air_temperature,
            result.adjusted_radiant_temperature,
            set::STILL_AIR_SPEED,
            rh,
            met,
            clo,
            0.0,
        )
        .unwrap();
        if result.cooling_effect > 0.0 {
            prop_assert!((still - result.set).abs() < 0.01);
        } else {
            // Air movement that does not cool leaves the still-air SET at or below it
            prop_assert!(still <= result.set + 0.01);
        }
    }

    #[test]
    fn prop_cooling_effect_bounded(
        ta in 10.0..40.0_f64,
        tr in 10.0..40.0_f64,
        vel in 0.0..2.0_f64,
        rh in 0.0..100.0_f64,
        met in 0.5..4.0_f64,
        clo in 0.0..2.0_f64,
    ) {
        let result = set::pmv_elevated_air_speed(ta, tr, vel, rh, met, clo, 0.0);
        prop_assert!(
            result.is_ok(),
            "elevated air speed failed for {:?}",
            (ta, tr, vel, rh, met, clo)
        );
        let result = result.unwrap();
        prop_assert!((0.0..=40.0).contains(&result.cooling_effect));
        let adjusted = ta - result.cooling_effect;
        prop_assert!((result.adjusted_air_temperature - adjusted).abs() < 1e-12);
        prop_assert!(result.pmv.is_finite());
    }

    #[test]
    fn prop_still_air_has_no_cooling_effect(
        ta in 18.0..34.0_f64,
        vel in 0.0..0.15_f64,
        rh in 20.0..80.0_f64,
    ) {
        let result = set::pmv_elevated_air_speed(ta, ta, vel, rh, 1.1, 0.6, 0.0).unwrap();
        let plain = pmv::pmv(ta, ta, vel, rh, 1.1, 0.6, 0.0).unwrap();
        prop_assert_eq!(result.cooling_effect, 0.0);
        prop_assert_eq!(result.pmv, plain.pmv);
    }
}

proptest! {
    #[test]
    fn prop_adaptive_neutral_rises_with_running_mean(
        rm in 10.0..33.0_f64,
        step in 0.01..0.5_f64,
    ) {
        let options = AdaptiveOptions::default();
        let lower = adaptive::ashrae55(24.0, 24.0, rm, 0.1, &options);
        let higher = adaptive::ashrae55(24.0, 24.0, rm + step, 0.1, &options);
        prop_assert!(higher.comfort_temperature > lower.comfort_temperature);

        let lower = adaptive::en15251(24.0, 24.0, rm, 0.1, &options);
        let higher = adaptive::en15251(24.0, 24.0, rm + step, 0.1, &options);
        prop_assert!(higher.comfort_temperature >= lower.comfort_temperature);
    }

    #[test]
    fn prop_adaptive_band_contains_neutral(
        ta in 15.0..35.0_f64,
        tr in 15.0..35.0_f64,
        rm in 0.0..40.0_f64,
        vel in 0.0..1.5_f64,
    ) {
        let options = AdaptiveOptions::default();
        for result in [
            adaptive::ashrae55(ta, tr, rm, vel, &options),
            adaptive::en15251(ta, tr, rm, vel, &options),
        ] {
            prop_assert!(result.lower_limit < result.comfort_temperature);
            prop_assert!(result.comfort_temperature < result.upper_limit);
            prop_assert_eq!(result.acceptable, result.direction == 0);
        }
    }

    #[test]
    fn prop_utci_defined_on_domain(
        ta in -60.0..60.0_f64,
        delta in -40.0..80.0_f64,
        va in 0.0..20.0_f64,
        rh in 0.0..100.0_f64,
    ) {
        let tr = ta + delta;
        let inside = (-50.0..=50.0).contains(&ta) && (-30.0..=70.0).contains(&(tr - ta));
        let result = utci::utci(ta, tr, va, rh);
        prop_assert_eq!(result.is_some(), inside);
        if let Some(result) = result {
            prop_assert!(result.utci.is_finite());
            prop_assert_eq!(result.comfortable, result.stress == utci::ThermalStress::NoStress);
        }
    }
}
