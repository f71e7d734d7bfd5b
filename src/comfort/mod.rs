//! Thermal comfort models.
//!
//! * [`pmv`]: Fanger PMV/PPD for indoor steady-state conditions
//! * [`set`]: Pierce two-node SET* and PMV corrected for elevated air speed
//! * [`adaptive`]: ASHRAE-55 and EN-15251 adaptive comfort for naturally ventilated spaces
//! * [`utci`]: Universal Thermal Climate Index for outdoor conditions
//!
//! Temperatures are °C, air speed m/s, relative humidity percent, metabolic rate met and
//! clothing insulation clo.

pub mod adaptive;
pub mod pmv;
pub mod set;
pub mod solver;
pub mod utci;

use crate::Result;
use crate::error::{check_non_negative, check_range};

/// Validates the inputs shared by the heat-balance models.
fn check_inputs(
    air_speed: f64,
    relative_humidity: f64,
    metabolic_rate: f64,
    clothing: f64,
) -> Result<()> {
    check_non_negative("air speed", air_speed)?;
    check_range("relative humidity", relative_humidity, 0.0, 100.0)?;
    check_non_negative("metabolic rate", metabolic_rate)?;
    check_non_negative("clothing insulation", clothing)
}
