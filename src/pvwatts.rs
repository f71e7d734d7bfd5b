//! PVWatts photovoltaic system model.
//!
//! Hourly AC output of a fixed PV array from its plane-of-array irradiance: cover
//! transmittance loss on the beam component, the Sandia module and cell temperature
//! model, the PVFORM DC power model and the PVFORM part-load inverter curve.
//!
//! The overall DC-to-AC derate is split between a DC loss factor
//! (`derate / nominal inverter efficiency`) and the inverter, so that at full load the AC
//! output equals `DC output * derate`.

#![allow(clippy::unreadable_literal)]

use crate::error::{check_non_negative, check_range};
use crate::irradiance::PoaIrradiance;
use crate::math::{exp, polynomial, radians_to_degrees};
use crate::{Error, Result};

/// Cell temperature at which the nameplate rating applies, °C.
pub const REFERENCE_CELL_TEMPERATURE: f64 = 25.0;

/// Power temperature coefficient, 1/°C.
pub const POWER_TEMPERATURE_COEFFICIENT: f64 = -0.005;

/// Irradiance at which the nameplate rating applies, W/m².
pub const REFERENCE_IRRADIANCE: f64 = 1000.0;

/// Below this effective irradiance (W/m²) DC power falls off quadratically.
pub const LOW_LIGHT_THRESHOLD: f64 = 125.0;

/// Inverter efficiency at full load on the PVFORM relative-efficiency curve.
const PVFORM_FULL_LOAD_EFFICIENCY: f64 = 0.91;

/// PVFORM relative inverter efficiency, cubic in the loading fraction.
const INVERTER_CURVE: [f64; 4] = [0.774, 0.663, -0.952, 0.426];

/// Cover transmittance, 5th order in the angle of incidence (degrees).
const TRANSMITTANCE: [f64; 6] = [1.0, -2.438e-3, 3.103e-4, -1.246e-5, 2.112e-7, -1.359e-9];

/// Module construction and mounting, selecting the Sandia thermal coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleType {
    /// Glass/cell/polymer sheet, open rack.
    GlassPolymerOpenRack,
    /// Glass/cell/glass, open rack.
    GlassGlassOpenRack,
    /// Polymer/thin-film/steel, open rack.
    PolymerThinFilmSteelOpenRack,
    /// Glass/cell/polymer sheet, insulated back (building integrated).
    GlassPolymerInsulatedBack,
}

impl ModuleType {
    /// Sandia coefficients `(a, b, ΔT)`: `a` and `b` for the module temperature, `ΔT` the
    /// cell-to-module difference at 1000 W/m².
    #[must_use]
    pub const fn thermal_coefficients(self) -> (f64, f64, f64) {
        match self {
            Self::GlassPolymerOpenRack => (-3.56, -0.0750, 3.0),
            Self::GlassGlassOpenRack => (-3.47, -0.0594, 3.0),
            Self::PolymerThinFilmSteelOpenRack => (-3.58, -0.113, 3.0),
            Self::GlassPolymerInsulatedBack => (-2.81, -0.0455, 0.0),
        }
    }
}

impl TryFrom<u8> for ModuleType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::GlassPolymerOpenRack),
            1 => Ok(Self::GlassGlassOpenRack),
            2 => Ok(Self::PolymerThinFilmSteelOpenRack),
            3 => Ok(Self::GlassPolymerInsulatedBack),
            _ => Err(Error::invalid_module_type(value)),
        }
    }
}

/// PV system configuration.
///
/// # Example
/// ```
/// use ladybug_core::pvwatts::{ModuleType, PvSystem};
///
/// let system = PvSystem::new(ModuleType::try_from(0).unwrap(), 4.0, 0.77).unwrap();
/// assert_eq!(system.inverter_efficiency(), 0.92);
/// assert!((system.ac_rating() - 3.68).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PvSystem {
    module_type: ModuleType,
    dc_rating: f64,
    derate: f64,
    inverter_efficiency: f64,
}

impl PvSystem {
    /// Default nominal inverter efficiency.
    pub const DEFAULT_INVERTER_EFFICIENCY: f64 = 0.92;

    /// Creates a system from its module type, nameplate DC rating (kW) and overall
    /// DC-to-AC derate factor (0..=1).
    ///
    /// # Errors
    /// Returns `InvalidParameter` for a negative rating or a derate outside 0..=1.
    pub fn new(module_type: ModuleType, dc_rating: f64, derate: f64) -> Result<Self> {
        check_non_negative("DC rating", dc_rating)?;
        check_range("DC-to-AC derate", derate, 0.0, 1.0)?;
        Ok(Self {
            module_type,
            dc_rating,
            derate,
            inverter_efficiency: Self::DEFAULT_INVERTER_EFFICIENCY,
        })
    }

    /// Overrides the nominal inverter efficiency.
    ///
    /// # Errors
    /// Returns `InvalidParameter` unless the efficiency is in (0, 1].
    pub fn with_inverter_efficiency(mut self, efficiency: f64) -> Result<Self> {
        check_range("inverter efficiency", efficiency, f64::MIN_POSITIVE, 1.0)?;
        self.inverter_efficiency = efficiency;
        Ok(self)
    }

    /// Module type.
    #[must_use]
    pub const fn module_type(&self) -> ModuleType {
        self.module_type
    }

    /// Nameplate DC rating, kW.
    #[must_use]
    pub const fn dc_rating(&self) -> f64 {
        self.dc_rating
    }

    /// Overall DC-to-AC derate factor.
    #[must_use]
    pub const fn derate(&self) -> f64 {
        self.derate
    }

    /// Nominal inverter efficiency.
    #[must_use]
    pub const fn inverter_efficiency(&self) -> f64 {
        self.inverter_efficiency
    }

    /// Inverter AC rating, kW.
    #[must_use]
    pub fn ac_rating(&self) -> f64 {
        self.dc_rating * self.inverter_efficiency
    }
}

/// Hourly system output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PvOutput {
    /// Module back-surface temperature, °C.
    pub module_temperature: f64,
    /// Cell temperature, °C.
    pub cell_temperature: f64,
    /// Irradiance reaching the cells after cover transmittance loss, W/m².
    pub effective_irradiance: f64,
    /// DC power at the inverter input, kW.
    pub dc_power: f64,
    /// AC power, kW.
    pub ac_power: f64,
}

/// Fraction of beam irradiance transmitted through the module cover; 0 from 90° on.
#[must_use]
pub fn cover_transmittance(angle_of_incidence: f64) -> f64 {
    if angle_of_incidence >= 90.0 {
        return 0.0;
    }
    polynomial(&TRANSMITTANCE, angle_of_incidence).clamp(0.0, 1.0)
}

/// Inverter efficiency at a loading fraction (DC input over DC rating) for a nominal
/// efficiency.
///
/// Below 10 % load the efficiency falls linearly to 0.
#[must_use]
pub fn inverter_efficiency(loading: f64, nominal: f64) -> f64 {
    let relative = if loading >= 0.1 {
        polynomial(&INVERTER_CURVE, loading)
    } else {
        polynomial(&INVERTER_CURVE, 0.1) * loading.max(0.0) / 0.1
    };
    relative * nominal / PVFORM_FULL_LOAD_EFFICIENCY
}

/// Runs the system model for one hour.
///
/// # Arguments
/// * `system` - System configuration
/// * `poa` - Plane-of-array irradiance, see [`crate::irradiance::poa_irradiance`]
/// * `ambient_temperature` - Dry-bulb temperature, °C
/// * `wind_speed` - Wind speed at 10 m, m/s
///
/// # Example
/// ```
/// use ladybug_core::pvwatts::{self, ModuleType, PvSystem};
/// use ladybug_core::{irradiance, SurfaceOrientation};
///
/// let surface = SurfaceOrientation::new(30.0, 180.0).unwrap();
/// let poa = irradiance::poa_irradiance(30.0, 180.0, &surface, 800.0, 100.0, 0.2);
/// let system = PvSystem::new(ModuleType::GlassPolymerOpenRack, 4.0, 0.77).unwrap();
/// let output = pvwatts::pvwatts(&system, &poa, 25.0, 1.0);
/// assert!((output.ac_power - 2.4844).abs() < 1e-3);
/// ```
#[must_use]
pub fn pvwatts(
    system: &PvSystem,
    poa: &PoaIrradiance,
    ambient_temperature: f64,
    wind_speed: f64,
) -> PvOutput {
    let (a, b, delta_t) = system.module_type.thermal_coefficients();
    let module_temperature = poa.total * exp(a + b * wind_speed) + ambient_temperature;
    let cell_temperature = module_temperature + poa.total / REFERENCE_IRRADIANCE * delta_t;

    let effective_irradiance = poa.beam
        * cover_transmittance(radians_to_degrees(poa.angle_of_incidence))
        + poa.sky_diffuse
        + poa.ground_reflected;

    let mut output = PvOutput {
        module_temperature,
        cell_temperature,
        effective_irradiance,
        dc_power: 0.0,
        ac_power: 0.0,
    };
    if poa.total <= 0.0 || effective_irradiance <= 0.0 || system.dc_rating <= 0.0 {
        return output;
    }

    let temperature_factor =
        1.0 + POWER_TEMPERATURE_COEFFICIENT * (cell_temperature - REFERENCE_CELL_TEMPERATURE);
    let dc_power = if effective_irradiance > LOW_LIGHT_THRESHOLD {
        effective_irradiance / REFERENCE_IRRADIANCE * system.dc_rating * temperature_factor
    } else {
        0.008 * effective_irradiance * effective_irradiance / REFERENCE_IRRADIANCE
            * system.dc_rating
            * temperature_factor
    };
    let dc_power = dc_power * system.derate / system.inverter_efficiency;

    let loading = dc_power / system.dc_rating;
    let ac_power = if loading > 1.0 {
        system.ac_rating()
    } else {
        (dc_power * inverter_efficiency(loading, system.inverter_efficiency))
            .min(system.ac_rating())
    };

    output.dc_power = dc_power;
    output.ac_power = ac_power.max(0.0);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SurfaceOrientation;
    use crate::irradiance::poa_irradiance;

    const EPSILON: f64 = 1e-6;

    fn south_poa() -> PoaIrradiance {
        let surface = SurfaceOrientation::new(30.0, 180.0).unwrap();
        poa_irradiance(30.0, 180.0, &surface, 800.0, 100.0, 0.2)
    }

    fn system(module_type: u8, dc_rating: f64, derate: f64) -> PvSystem {
        PvSystem::new(ModuleType::try_from(module_type).unwrap(), dc_rating, derate).unwrap()
    }

    #[test]
    fn test_clear_sky_open_rack() {
        let output = pvwatts(&system(0, 4.0, 0.77), &south_poa(), 25.0, 1.0);
        assert!((output.module_temperature - 49.383_175_31).abs() < EPSILON);
        assert!((output.cell_temperature - 52.155_677_88).abs() < EPSILON);
        assert!((output.effective_irradiance - 924.167_523_61).abs() < EPSILON);
        assert!((output.dc_power - 2.673_860_31).abs() < EPSILON);
        assert!((output.ac_power - 2.484_393_81).abs() < EPSILON);
    }

    #[test]
    fn test_insulated_back_runs_hotter() {
        let output = pvwatts(&system(3, 4.0, 0.77), &south_poa(), 25.0, 1.0);
        assert!((output.module_temperature - 78.164_631_71).abs() < EPSILON);
        assert_eq!(output.cell_temperature, output.module_temperature);
        assert!((output.ac_power - 2.116_222_93).abs() < EPSILON);
    }

    #[test]
    fn test_oblique_glass_glass() {
        let surface = SurfaceOrientation::new(45.0, 180.0).unwrap();
        let poa = poa_irradiance(60.0, 120.0, &surface, 300.0, 150.0, 0.2);
        let output = pvwatts(&system(1, 5.0, 0.77), &poa, 10.0, 3.0);
        assert!((output.effective_irradiance - 361.109_193_72).abs() < EPSILON);
        assert!((output.cell_temperature - 20.521_880_91).abs() < EPSILON);
        assert!((output.ac_power - 1.406_619_33).abs() < EPSILON);
    }

    #[test]
    fn test_low_light_branch() {
        let surface = SurfaceOrientation::new(45.0, 180.0).unwrap();
        let poa = poa_irradiance(95.0, 120.0, &surface, 0.0, 20.0, 0.2);
        let output = pvwatts(&system(2, 4.0, 0.77), &poa, 5.0, 2.0);
        assert!((output.dc_power - 0.009_077_486_41).abs() < 1e-9);
        assert!((output.ac_power - 0.000_173_111_66).abs() < 1e-9);
    }

    #[test]
    fn test_inverter_saturates() {
        let poa = PoaIrradiance {
            total: 1200.0,
            beam: 1100.0,
            sky_diffuse: 100.0,
            ground_reflected: 0.0,
            angle_of_incidence: 0.0,
            global_horizontal: 1200.0,
            clearness_bin: 8,
            diffuse: crate::irradiance::PerezDiffuse::default(),
        };
        let output = pvwatts(&system(0, 4.0, 1.0), &poa, 25.0, 5.0);
        assert!(output.dc_power > 4.0);
        assert!((output.ac_power - 3.68).abs() < 1e-12);
    }

    #[test]
    fn test_no_sun_no_power() {
        let surface = SurfaceOrientation::new(30.0, 180.0).unwrap();
        let poa = poa_irradiance(100.0, 0.0, &surface, 0.0, 0.0, 0.2);
        let output = pvwatts(&system(0, 4.0, 0.77), &poa, 20.0, 1.0);
        assert_eq!(output.ac_power, 0.0);
        assert_eq!(output.dc_power, 0.0);
        assert_eq!(output.module_temperature, 20.0);
    }

    #[test]
    fn test_transmittance_and_inverter_curve() {
        assert_eq!(cover_transmittance(0.0), 1.0);
        assert!((cover_transmittance(60.0) - 0.959_833_6).abs() < EPSILON);
        assert!((cover_transmittance(80.0) - 0.608_940_8).abs() < EPSILON);
        assert_eq!(cover_transmittance(90.0), 0.0);

        assert!((inverter_efficiency(1.0, 0.92) - 0.921_010_99).abs() < EPSILON);
        assert!((inverter_efficiency(0.1, 0.92) - 0.840_340_13).abs() < EPSILON);
        assert!((inverter_efficiency(0.05, 0.92) - 0.420_170_07).abs() < EPSILON);
        assert_eq!(inverter_efficiency(0.0, 0.92), 0.0);
    }

    #[test]
    fn test_module_type_validation() {
        assert_eq!(ModuleType::try_from(4), Err(Error::invalid_module_type(4)));
        assert!(PvSystem::new(ModuleType::GlassGlassOpenRack, -1.0, 0.77).is_err());
        assert!(PvSystem::new(ModuleType::GlassGlassOpenRack, 4.0, 1.2).is_err());
        assert!(
            system(0, 4.0, 0.77)
                .with_inverter_efficiency(0.0)
                .is_err()
        );
    }
}
