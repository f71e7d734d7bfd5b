//! Universal Thermal Climate Index.
//!
//! Sixth-order polynomial approximation of the UTCI-Fiala multi-node model in air
//! temperature, mean radiant temperature difference, wind speed at 10 m and vapour
//! pressure (Bröde et al., 2012). The approximation is only defined for air temperatures
//! between -50 and 50 °C and radiant differences between -30 and 70 K; outside that
//! domain no value is returned.

use crate::psychrometrics::saturated_vapor_pressure_hpa;

pub mod coefficients;
use coefficients::UTCI_COEFFICIENTS;

/// Wind speed range accepted by the regression, m/s.
const WIND_SPEED_RANGE: (f64, f64) = (0.5, 17.0);

/// Thermal stress category derived from a UTCI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThermalStress {
    /// Below -13 °C.
    StrongCold,
    /// -13 °C to 0 °C.
    ModerateCold,
    /// 0 °C to 9 °C.
    SlightCold,
    /// 9 °C to 26 °C.
    NoStress,
    /// 26 °C to 28 °C.
    SlightHeat,
    /// 28 °C to 32 °C.
    ModerateHeat,
    /// Above 32 °C.
    StrongHeat,
}

impl ThermalStress {
    /// Classifies a UTCI value.
    #[must_use]
    pub fn from_utci(utci: f64) -> Self {
        if utci < -13.0 {
            Self::StrongCold
        } else if utci < 0.0 {
            Self::ModerateCold
        } else if utci < 9.0 {
            Self::SlightCold
        } else if utci <= 26.0 {
            Self::NoStress
        } else if utci <= 28.0 {
            Self::SlightHeat
        } else if utci <= 32.0 {
            Self::ModerateHeat
        } else {
            Self::StrongHeat
        }
    }

    /// Signed category, -3 (strong cold) to +3 (strong heat).
    #[must_use]
    pub const fn category(self) -> i8 {
        match self {
            Self::StrongCold => -3,
            Self::ModerateCold => -2,
            Self::SlightCold => -1,
            Self::NoStress => 0,
            Self::SlightHeat => 1,
            Self::ModerateHeat => 2,
            Self::StrongHeat => 3,
        }
    }
}

/// UTCI value with its classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtciResult {
    /// Universal Thermal Climate Index, °C.
    pub utci: f64,
    /// Stress category.
    pub stress: ThermalStress,
    /// True when no thermal stress is expected.
    pub comfortable: bool,
    /// -1 for cold stress, 0 for none, 1 for heat stress.
    pub stress_range: i8,
}

/// Calculates the UTCI.
///
/// # Arguments
/// * `air_temperature` - Dry-bulb air temperature in °C
/// * `radiant_temperature` - Mean radiant temperature in °C
/// * `wind_speed` - Wind speed at 10 m in m/s, clamped to 0.5..=17
/// * `relative_humidity` - Relative humidity in percent
///
/// Returns `None` outside the validity domain of the approximation.
///
/// # Example
/// ```
/// use ladybug_core::comfort::utci::{utci, ThermalStress};
///
/// let result = utci(20.0, 20.0, 1.0, 50.0).unwrap();
/// assert!((result.utci - 19.4).abs() < 0.01);
/// assert_eq!(result.stress, ThermalStress::NoStress);
///
/// assert!(utci(-51.0, -51.0, 1.0, 50.0).is_none());
/// ```
#[must_use]
pub fn utci(
    air_temperature: f64,
    radiant_temperature: f64,
    wind_speed: f64,
    relative_humidity: f64,
) -> Option<UtciResult> {
    let delta = radiant_temperature - air_temperature;
    if !(-50.0..=50.0).contains(&air_temperature) || !(-30.0..=70.0).contains(&delta) {
        log::debug!(
            "UTCI undefined for air temperature {air_temperature} °C, radiant difference {delta} K"
        );
        return None;
    }
    let wind_speed = wind_speed.clamp(WIND_SPEED_RANGE.0, WIND_SPEED_RANGE.1);
    // kPa
    let vapor_pressure =
        saturated_vapor_pressure_hpa(air_temperature) * relative_humidity / 100.0 / 10.0;

    let value = air_temperature + polynomial(air_temperature, wind_speed, delta, vapor_pressure);
    let stress = ThermalStress::from_utci(value);
    Some(UtciResult {
        utci: value,
        stress,
        comfortable: stress == ThermalStress::NoStress,
        stress_range: stress.category().signum(),
    })
}

fn powers(x: f64) -> [f64; 7] {
    let mut powers = [1.0; 7];
    for n in 1..7 {
        powers[n] = powers[n - 1] * x;
    }
    powers
}

fn polynomial(ta: f64, va: f64, delta: f64, pa: f64) -> f64 {
    let (ta, va, delta, pa) = (powers(ta), powers(va), powers(delta), powers(pa));
    let mut sum = 0.0;
    let mut k = 0;
    for p in 0..7 {
        for d in 0..7 - p {
            for v in 0..7 - p - d {
                for t in 0..7 - p - d - v {
                    sum += UTCI_COEFFICIENTS[k] * ta[t] * va[v] * delta[d] * pa[p];
                    k += 1;
                }
            }
        }
    }
    sum
}
