//! Moist-air helpers shared by the comfort models.
//!
//! Temperatures are dry-bulb °C, relative humidity is in percent.

#![allow(clippy::unreadable_literal)]

use crate::error::check_range;
use crate::math::{exp, ln};
use crate::{Error, Result};

/// Ratio of the molecular weights of water vapour and dry air.
const MOLECULAR_WEIGHT_RATIO: f64 = 0.621945;

/// Hardy (1998) ITS-90 coefficients for saturation over liquid water.
const HARDY: [f64; 8] = [
    -2.8365744E3,
    -6.028076559E3,
    1.954263612E1,
    -2.737830188E-2,
    1.6261698E-5,
    7.0229056E-10,
    -1.8680009E-13,
    2.7150305,
];

/// Magnus coefficients (Sonntag 1990).
const MAGNUS_B: f64 = 17.62;
const MAGNUS_C: f64 = 243.12;

/// Saturation vapour pressure over water in hPa (Hardy ITS-90 formulation).
///
/// # Example
/// ```
/// # use ladybug_core::psychrometrics::saturated_vapor_pressure_hpa;
/// let es = saturated_vapor_pressure_hpa(20.0);
/// assert!((es - 23.39).abs() < 0.01);
/// ```
#[must_use]
pub fn saturated_vapor_pressure_hpa(temperature: f64) -> f64 {
    let tk = temperature + 273.15;
    let mut exponent = HARDY[7] * ln(tk);
    let mut power = 1.0 / (tk * tk);
    for coefficient in &HARDY[..7] {
        exponent += coefficient * power;
        power *= tk;
    }
    exp(exponent) * 0.01
}

/// Saturation vapour pressure in torr, the form used by the two-node SET* model.
#[must_use]
pub fn saturated_vapor_pressure_torr(temperature: f64) -> f64 {
    exp(18.6686 - 4030.183 / (temperature + 235.0))
}

/// Saturation vapour pressure in kPa, the Antoine form used by PMV.
#[must_use]
pub fn saturated_vapor_pressure_kpa(temperature: f64) -> f64 {
    exp(16.6536 - 4030.183 / (temperature + 235.0))
}

/// Humidity ratio in kg of water per kg of dry air.
///
/// # Errors
/// Returns `InvalidParameter` if `relative_humidity` is outside 0..=100 or the vapour
/// pressure reaches the total pressure.
pub fn humidity_ratio(temperature: f64, relative_humidity: f64, pressure: f64) -> Result<f64> {
    check_range("relative humidity", relative_humidity, 0.0, 100.0)?;
    let vapor_pressure =
        relative_humidity / 100.0 * saturated_vapor_pressure_hpa(temperature) * 100.0;
    if pressure.is_nan() || pressure <= vapor_pressure {
        return Err(Error::invalid_parameter("pressure", pressure));
    }
    Ok(MOLECULAR_WEIGHT_RATIO * vapor_pressure / (pressure - vapor_pressure))
}

/// Dew point temperature, °C, from the Magnus approximation.
///
/// # Errors
/// Returns `InvalidParameter` if `relative_humidity` is not in (0, 100].
pub fn dew_point(temperature: f64, relative_humidity: f64) -> Result<f64> {
    if relative_humidity.is_nan() || relative_humidity <= 0.0 || relative_humidity > 100.0 {
        return Err(Error::invalid_parameter("relative humidity", relative_humidity));
    }
    let gamma = ln(relative_humidity / 100.0) + MAGNUS_B * temperature / (MAGNUS_C + temperature);
    Ok(MAGNUS_C * gamma / (MAGNUS_B - gamma))
}

/// Moist-air specific enthalpy in kJ per kg of dry air.
#[must_use]
pub fn enthalpy(temperature: f64, humidity_ratio: f64) -> f64 {
    1.006 * temperature + humidity_ratio * (2501.0 + 1.86 * temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-8;

    #[test]
    fn test_hardy_vapor_pressure() {
        assert!((saturated_vapor_pressure_hpa(20.0) - 23.392_623_958_6).abs() < EPSILON);
        assert!((saturated_vapor_pressure_hpa(0.0) - 6.112_129_107_0).abs() < EPSILON);
        // Boiling point at standard pressure
        assert!((saturated_vapor_pressure_hpa(100.0) - 1013.25).abs() < 1.0);
    }

    #[test]
    fn test_torr_vapor_pressure() {
        assert!((saturated_vapor_pressure_torr(20.0) - 17.530_825_426_2).abs() < EPSILON);
        assert!((saturated_vapor_pressure_torr(37.0) - 47.075_407_706_6).abs() < EPSILON);
        // kPa and torr forms describe the same curve
        let ratio =
            saturated_vapor_pressure_kpa(30.0) * 1000.0 / saturated_vapor_pressure_torr(30.0);
        assert!((ratio - 133.322).abs() < 0.01);
    }

    #[test]
    fn test_humidity_ratio() {
        let w = humidity_ratio(20.0, 50.0, 101_325.0).unwrap();
        assert!((w - 0.007_263_178_0).abs() < EPSILON);
        assert_eq!(humidity_ratio(20.0, 0.0, 101_325.0).unwrap(), 0.0);
        assert!(humidity_ratio(20.0, 101.0, 101_325.0).is_err());
        assert!(humidity_ratio(20.0, 50.0, 10.0).is_err());
    }

    #[test]
    fn test_dew_point() {
        assert!((dew_point(20.0, 50.0).unwrap() - 9.255_174_599).abs() < EPSILON);
        assert!((dew_point(25.0, 100.0).unwrap() - 25.0).abs() < 1e-12);
        assert!(dew_point(20.0, 0.0).is_err());
        assert!(dew_point(20.0, f64::NAN).is_err());
    }

    #[test]
    fn test_enthalpy() {
        let w = humidity_ratio(20.0, 50.0, 101_325.0).unwrap();
        assert!((enthalpy(20.0, w) - 38.555_398_504).abs() < 1e-6);
        assert_eq!(enthalpy(0.0, 0.0), 0.0);
    }
}
