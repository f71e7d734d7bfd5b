//! Fanger's Predicted Mean Vote and Predicted Percentage Dissatisfied.
//!
//! Steady-state heat balance of ISO 7730 / ASHRAE-55. The clothing surface temperature
//! is found by fixed-point iteration; the remaining terms are closed-form.

#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

use crate::comfort::check_inputs;
use crate::math::{exp, powf, powi, sqrt};
use crate::psychrometrics::saturated_vapor_pressure_kpa;
use crate::{Error, Result};

/// Iteration cap of the clothing surface temperature loop.
pub const MAX_ITERATIONS: usize = 150;

/// Convergence tolerance of the clothing surface temperature loop (scaled kelvin).
const TOLERANCE: f64 = 0.00015;

/// W/m² per met as used by the Fanger equations.
const MET_TO_WATTS: f64 = 58.15;

/// Thermal sensation vote and the predicted share of dissatisfied occupants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PmvResult {
    /// Predicted Mean Vote, -3 (cold) to +3 (hot).
    pub pmv: f64,
    /// Predicted Percentage Dissatisfied, 5 to 100.
    pub ppd: f64,
    /// Clothing surface temperature, °C.
    pub clothing_temperature: f64,
}

/// Predicted Percentage Dissatisfied for a PMV value.
///
/// # Example
/// ```
/// # use ladybug_core::comfort::pmv::ppd;
/// assert!((ppd(0.0) - 5.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn ppd(pmv: f64) -> f64 {
    100.0 - 95.0 * exp(-0.03353 * powi(pmv, 4) - 0.2179 * powi(pmv, 2))
}

/// Calculates PMV and PPD.
///
/// # Arguments
/// * `air_temperature` - Dry-bulb air temperature in °C
/// * `radiant_temperature` - Mean radiant temperature in °C
/// * `air_speed` - Relative air speed in m/s
/// * `relative_humidity` - Relative humidity in percent
/// * `metabolic_rate` - Metabolic rate in met
/// * `clothing` - Clothing insulation in clo
/// * `external_work` - External work in met, usually 0
///
/// # Errors
/// Returns `InvalidParameter` for negative air speed, metabolic rate or clothing, or
/// humidity outside 0..=100. Returns `NonConvergence` if the clothing surface
/// temperature does not settle within [`MAX_ITERATIONS`].
///
/// # Example
/// ```
/// use ladybug_core::comfort::pmv::pmv;
///
/// let result = pmv(22.0, 22.0, 0.1, 60.0, 1.2, 0.5, 0.0).unwrap();
/// assert!((result.pmv - (-0.75)).abs() < 0.01);
/// assert!((result.ppd - 16.9).abs() < 0.1);
/// ```
pub fn pmv(
    air_temperature: f64,
    radiant_temperature: f64,
    air_speed: f64,
    relative_humidity: f64,
    metabolic_rate: f64,
    clothing: f64,
    external_work: f64,
) -> Result<PmvResult> {
    check_inputs(air_speed, relative_humidity, metabolic_rate, clothing)?;
    let ta = air_temperature;

    // Pa
    let pa = relative_humidity * 10.0 * saturated_vapor_pressure_kpa(ta);
    let icl = 0.155 * clothing;
    let m = metabolic_rate * MET_TO_WATTS;
    let mw = m - external_work * MET_TO_WATTS;
    let fcl = if icl <= 0.078 {
        1.0 + 1.29 * icl
    } else {
        1.05 + 0.645 * icl
    };
    let hcf = 12.1 * sqrt(air_speed);
    let taa = ta + 273.0;
    let tra = radiant_temperature + 273.0;
    let tcla = taa + (35.5 - ta) / (3.5 * icl + 0.1);

    let p1 = icl * fcl;
    let p2 = p1 * 3.96;
    let p3 = p1 * 100.0;
    let p4 = p1 * taa;
    let p5 = 308.7 - 0.028 * mw + p2 * powi(tra / 100.0, 4);

    let mut xn = tcla / 100.0;
    let mut xf = tcla / 50.0;
    let mut hc = hcf;
    let mut iterations = 0;
    while (xn - xf).abs() > TOLERANCE {
        xf = (xf + xn) / 2.0;
        let hcn = 2.38 * powf((100.0 * xf - taa).abs(), 0.25);
        hc = hcf.max(hcn);
        xn = (p5 + p4 * hc - p2 * powi(xf, 4)) / (100.0 + p3 * hc);
        iterations += 1;
        if iterations > MAX_ITERATIONS {
            log::warn!(
                "PMV clothing temperature did not converge for ta={ta}, tr={radiant_temperature}"
            );
            return Err(Error::non_convergence("PMV", MAX_ITERATIONS));
        }
    }
    let tcl = 100.0 * xn - 273.0;

    // Heat losses: skin diffusion, sweating, latent and dry respiration, radiation, convection
    let hl1 = 3.05 * 0.001 * (5733.0 - 6.99 * mw - pa);
    let hl2 = if mw > MET_TO_WATTS {
        0.42 * (mw - MET_TO_WATTS)
    } else {
        0.0
    };
    let hl3 = 1.7 * 0.00001 * m * (5867.0 - pa);
    let hl4 = 0.0014 * m * (34.0 - ta);
    let hl5 = 3.96 * fcl * (powi(xn, 4) - powi(tra / 100.0, 4));
    let hl6 = fcl * hc * (tcl - ta);

    let ts = 0.303 * exp(-0.036 * m) + 0.028;
    let vote = ts * (mw - hl1 - hl2 - hl3 - hl4 - hl5 - hl6);
    Ok(PmvResult {
        pmv: vote,
        ppd: ppd(vote),
        clothing_temperature: tcl,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-7;

    fn check(inputs: (f64, f64, f64, f64, f64, f64), expected_pmv: f64, expected_ppd: f64) {
        let (ta, tr, vel, rh, met, clo) = inputs;
        let result = pmv(ta, tr, vel, rh, met, clo, 0.0).unwrap();
        assert!(
            (result.pmv - expected_pmv).abs() < EPSILON,
            "PMV {} != {expected_pmv} for {inputs:?}",
            result.pmv
        );
        assert!((result.ppd - expected_ppd).abs() < 1e-6, "PPD {}", result.ppd);
    }

    #[test]
    fn test_reference_conditions() {
        check((22.0, 22.0, 0.1, 60.0, 1.2, 0.5), -0.752_287_04, 16.918_638_77);
        check((26.0, 26.0, 0.15, 50.0, 1.1, 0.5), 0.053_619_78, 5.059_523_29);
        check((30.0, 30.0, 0.2, 70.0, 1.5, 0.3), 1.675_609_44, 60.441_940_06);
        check((18.0, 18.0, 0.0, 40.0, 1.0, 1.0), -1.462_067_54, 48.844_546_87);
        check((24.0, 24.0, 0.1, 50.0, 1.2, 0.0), -1.902_812_06, 72.190_748_07);
    }

    #[test]
    fn test_neutral_band() {
        // Slightly cool at 25.5 °C for 0.5 clo and seated activity, neutral crossing above it
        check((25.5, 25.5, 0.1, 50.0, 1.0, 0.5), -0.216_034_39, 5.968_081_99);
        check((27.0, 27.0, 0.1, 50.0, 1.0, 0.5), 0.342_251_16, 7.436_681_89);
    }

    #[test]
    fn test_ppd() {
        assert!((ppd(0.0) - 5.0).abs() < 1e-12);
        assert!((ppd(0.5) - 10.225_024_55).abs() < 1e-6);
        assert_eq!(ppd(0.5), ppd(-0.5));
        assert!(ppd(3.0) > 99.0);
    }

    #[test]
    fn test_monotonic_in_temperature() {
        let mut previous = f64::NEG_INFINITY;
        for t in 15..=35 {
            let t = f64::from(t);
            let vote = pmv(t, t, 0.1, 50.0, 1.1, 0.7, 0.0).unwrap().pmv;
            assert!(vote > previous);
            previous = vote;
        }
    }

    #[test]
    fn test_clothing_temperature_between_skin_and_air() {
        let result = pmv(20.0, 20.0, 0.1, 50.0, 1.2, 1.0, 0.0).unwrap();
        assert!(result.clothing_temperature > 20.0);
        assert!(result.clothing_temperature < 35.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(pmv(22.0, 22.0, -0.1, 50.0, 1.0, 0.5, 0.0).is_err());
        assert!(pmv(22.0, 22.0, 0.1, 120.0, 1.0, 0.5, 0.0).is_err());
        assert!(pmv(22.0, 22.0, 0.1, 50.0, -1.0, 0.5, 0.0).is_err());
        assert!(pmv(22.0, 22.0, 0.1, 50.0, 1.0, f64::NAN, 0.0).is_err());
    }
}
