//! # Ladybug Core
//!
//! Numeric core for environmental building analysis: sun position, sky luminance, solar
//! irradiance on tilted planes, photovoltaic yield and thermal comfort.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! Every routine is a pure function of scalar inputs (degrees, °C, W/m², m/s, percent),
//! so hourly series over a year can be evaluated in any order or in parallel.
//!
//! ## Modules
//!
//! - [`time`]: fixed 365-day calendar, hour-of-year conversions, simplified Julian date
//! - [`noaa`], [`sunpath`], [`sky`]: three sun position formulations, selectable through
//!   [`Ephemeris`] and [`sun_position`]
//! - [`sky`]: Perez/Preetham sky luminance and chromaticity, Tregenza and Reinhart patches
//! - [`irradiance`]: Perez 1990 plane-of-array transposition
//! - [`pvwatts`]: PVWatts DC and inverter model
//! - [`comfort`]: PMV/PPD, SET*, adaptive comfort and UTCI
//! - [`psychrometrics`]: vapour pressure, humidity ratio, dew point, enthalpy
//!
//! ## Features
//!
//! - `std` (default): native `f64` math
//! - `chrono` (default): entry points taking `chrono::DateTime<Tz>`
//! - `libm`: `no_std` builds with pure Rust math
//!
//! ```toml
//! # Default: std + chrono
//! ladybug-core = "0.1"
//!
//! # Minimal std (no chrono)
//! ladybug-core = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! ladybug-core = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Sun Position
//! ```rust
//! use ladybug_core::{sun_position, Ephemeris, Location};
//!
//! // Boston, June 21st 2013 at noon local standard time
//! let boston = Location::new(42.36, -71.06, -5.0).unwrap();
//! let position = sun_position(Ephemeris::Noaa, &boston, 2013, 6, 21, 12.0).unwrap();
//!
//! println!("Azimuth: {:.3}°", position.azimuth());
//! println!("Altitude: {:.3}°", position.altitude());
//! assert!(position.is_up());
//! ```
//!
//! ### Irradiance and PV Output
//! ```rust
//! use ladybug_core::pvwatts::{self, ModuleType, PvSystem};
//! use ladybug_core::{irradiance, SurfaceOrientation};
//!
//! let roof = SurfaceOrientation::new(30.0, 180.0).unwrap();
//! let poa = irradiance::poa_irradiance(30.0, 180.0, &roof, 800.0, 100.0, 0.2);
//! let system = PvSystem::new(ModuleType::GlassPolymerOpenRack, 4.0, 0.77).unwrap();
//! let output = pvwatts::pvwatts(&system, &poa, 25.0, 1.0);
//!
//! println!("POA: {:.1} W/m², AC: {:.3} kW", poa.total, output.ac_power);
//! ```
//!
//! ### Thermal Comfort
//! ```rust
//! use ladybug_core::comfort::{pmv, set, utci};
//!
//! let indoor = pmv::pmv(22.0, 22.0, 0.1, 60.0, 1.2, 0.5, 0.0).unwrap();
//! let breeze = set::pmv_elevated_air_speed(29.0, 29.0, 0.8, 50.0, 1.2, 0.5, 0.0).unwrap();
//! let outdoor = utci::utci(30.0, 50.0, 0.5, 50.0);
//!
//! println!("PMV {:.2}, PPD {:.1} %", indoor.pmv, indoor.ppd);
//! println!("Cooling effect of the breeze: {:.2} K", breeze.cooling_effect);
//! assert!(outdoor.is_some());
//! ```
//!
//! ## Conventions
//!
//! Azimuth runs clockwise from north in [0, 360). Altitude is measured up from the
//! horizon and zenith is `90 - altitude`. Direction vectors use x east, y north, z up.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
    clippy::too_many_arguments, // Comfort models take the standard seven scalar inputs
)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub use crate::error::{Error, Result};
pub use crate::types::{Ephemeris, Location, SunPosition, SurfaceOrientation, Vector3, sun_position};

// Sun position modules
pub mod noaa;
pub mod sky;
pub mod sunpath;

// Solar energy modules
pub mod irradiance;
pub mod pvwatts;

// Comfort modules
pub mod comfort;
pub mod psychrometrics;

pub mod error;
pub mod time;
pub mod types;

mod math;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_comfort_chain() {
        let poa = irradiance::poa_irradiance(
            60.0,
            120.0,
            &SurfaceOrientation::new(45.0, 180.0).unwrap(),
            300.0,
            150.0,
            0.2,
        );
        assert!(poa.total > 0.0);

        let utci = comfort::utci::utci(25.0, 25.0, 1.0, 50.0).unwrap();
        assert!(utci.comfortable);

        let w = psychrometrics::humidity_ratio(25.0, 50.0, 101_325.0).unwrap();
        assert!(w > 0.0 && w < 0.02);
    }
}
