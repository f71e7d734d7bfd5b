//! Plane-of-array irradiance with the Perez 1990 anisotropic sky.
//!
//! Splits direct-normal and diffuse-horizontal irradiance into beam, sky-diffuse and
//! ground-reflected components on a tilted surface. The sky-diffuse part combines an
//! isotropic term, circumsolar brightening and horizon brightening, weighted by
//! coefficients picked from eight sky-clearness bins.
//!
//! Reference: Perez, R., Ineichen, P., Seals, R., Michalsky, J., Stewart, R. (1990).
//! Modeling daylight availability and irradiance components from direct and global
//! irradiance. Solar Energy 44(5), 271-289 ("allsitescomposite1990" coefficients).
//!
//! The calculation is total: a sun below the horizon is treated as grazing at the north
//! horizon, and all quantities are in W/m² and degrees.

#![allow(clippy::unreadable_literal)]

use crate::SurfaceOrientation;
use crate::math::{acos, cos, degrees_to_radians, powf, radians_to_degrees, sin};

/// Solar constant used for the sky brightness, W/m².
pub const SOLAR_CONSTANT: f64 = 1367.0;

/// Above this sun zenith (degrees) the sky is treated as isotropic.
pub const ISOTROPIC_ZENITH_LIMIT: f64 = 87.5;

/// Lower edges of sky-clearness bins 2 to 8.
const CLEARNESS_BIN_EDGES: [f64; 7] = [1.065, 1.23, 1.5, 1.95, 2.8, 4.5, 6.2];

/// Circumsolar coefficients f11, f12, f13 per clearness bin.
const F1: [[f64; 3]; 8] = [
    [-0.0083117, 0.5877285, -0.0620636],
    [0.1299457, 0.6825954, -0.1513752],
    [0.3296958, 0.4868735, -0.2210958],
    [0.5682053, 0.1874525, -0.2951290],
    [0.8730280, -0.3920403, -0.3616149],
    [1.1326077, -1.2367284, -0.4118494],
    [1.0601591, -1.5999137, -0.3589221],
    [0.6777470, -0.3272588, -0.2504286],
];

/// Horizon coefficients f21, f22, f23 per clearness bin.
const F2: [[f64; 3]; 8] = [
    [-0.0596012, 0.0721249, -0.0220216],
    [-0.0189325, 0.0659650, -0.0288748],
    [0.0554140, -0.0639588, -0.0260542],
    [0.1088631, -0.1519229, -0.0139754],
    [0.2255647, -0.4620442, 0.0012448],
    [0.2877813, -0.8230357, 0.0558651],
    [0.2642124, -1.1272340, 0.1310694],
    [0.1561313, -1.3765031, 0.2506212],
];

/// Components of the Perez sky-diffuse irradiance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerezDiffuse {
    /// Isotropic background.
    pub isotropic: f64,
    /// Circumsolar brightening.
    pub circumsolar: f64,
    /// Horizon brightening (may be negative).
    pub horizon: f64,
}

impl PerezDiffuse {
    /// Total sky-diffuse irradiance.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.isotropic + self.circumsolar + self.horizon
    }
}

/// Plane-of-array irradiance and its components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoaIrradiance {
    /// Total irradiance on the plane.
    pub total: f64,
    /// Beam component, `DNI * cos(AOI)`, never negative.
    pub beam: f64,
    /// Sky-diffuse component.
    pub sky_diffuse: f64,
    /// Ground-reflected component.
    pub ground_reflected: f64,
    /// Angle of incidence of the beam on the plane, radians.
    pub angle_of_incidence: f64,
    /// Global horizontal irradiance derived from DNI and DHI.
    pub global_horizontal: f64,
    /// Perez sky-clearness bin, 1 (overcast) to 8 (clear).
    pub clearness_bin: u8,
    /// Breakdown of the sky-diffuse component.
    pub diffuse: PerezDiffuse,
}

/// Angle of incidence in degrees (0..=180) between the sun direction and the normal of a
/// surface; all inputs in degrees.
#[must_use]
pub fn angle_of_incidence(
    sun_zenith: f64,
    sun_azimuth: f64,
    surface_tilt: f64,
    surface_azimuth: f64,
) -> f64 {
    let zenith = degrees_to_radians(sun_zenith);
    let tilt = degrees_to_radians(surface_tilt);
    let cos_aoi = cos(zenith) * cos(tilt)
        + sin(zenith) * sin(tilt) * cos(degrees_to_radians(sun_azimuth - surface_azimuth));
    radians_to_degrees(acos(cos_aoi.clamp(-1.0, 1.0))).clamp(0.0, 180.0)
}

/// Kasten-Young relative optical air mass for a sun zenith in degrees.
#[must_use]
pub fn air_mass(sun_zenith: f64) -> f64 {
    1.0 / (cos(degrees_to_radians(sun_zenith)) + 0.15 / powf(93.9 - sun_zenith, 1.253))
}

/// Perez sky clearness ε; 0 when there is no diffuse irradiance.
#[must_use]
pub fn sky_clearness(dni: f64, dhi: f64, sun_zenith: f64) -> f64 {
    if dhi <= 0.0 {
        return 0.0;
    }
    let kappa = 5.534e-6 * sun_zenith * sun_zenith * sun_zenith;
    ((dhi + dni) / dhi + kappa) / (1.0 + kappa)
}

/// Clearness bin (1..=8) for a sky clearness ε.
#[must_use]
pub fn clearness_bin(clearness: f64) -> u8 {
    let below = CLEARNESS_BIN_EDGES
        .iter()
        .filter(|&&edge| clearness >= edge)
        .count();
    below as u8 + 1
}

/// Computes the plane-of-array irradiance.
///
/// # Arguments
/// * `sun_zenith`, `sun_azimuth` - Sun position in degrees (azimuth clockwise from north)
/// * `surface` - Plane tilt and azimuth
/// * `dni` - Direct normal irradiance
/// * `dhi` - Diffuse horizontal irradiance
/// * `albedo` - Ground reflectance (0..=1)
///
/// # Example
/// ```
/// use ladybug_core::{irradiance, SurfaceOrientation};
///
/// let surface = SurfaceOrientation::new(30.0, 180.0).unwrap();
/// let poa = irradiance::poa_irradiance(30.0, 180.0, &surface, 800.0, 100.0, 0.2);
/// assert!((poa.total - 924.1675).abs() < 1e-3);
/// assert_eq!(poa.beam, 800.0);
/// ```
#[must_use]
pub fn poa_irradiance(
    sun_zenith: f64,
    sun_azimuth: f64,
    surface: &SurfaceOrientation,
    dni: f64,
    dhi: f64,
    albedo: f64,
) -> PoaIrradiance {
    let (sun_zenith, sun_azimuth) = if sun_zenith > 90.0 {
        (90.0, 0.0)
    } else {
        (sun_zenith, sun_azimuth)
    };
    let zenith = degrees_to_radians(sun_zenith);
    let tilt = degrees_to_radians(surface.tilt());

    let global_horizontal = dhi + dni * cos(zenith);
    let aoi = angle_of_incidence(sun_zenith, sun_azimuth, surface.tilt(), surface.azimuth());
    let cos_aoi = cos(degrees_to_radians(aoi));
    let beam = (dni * cos_aoi).max(0.0);

    let bin = clearness_bin(sky_clearness(dni, dhi, sun_zenith));
    let diffuse = perez_diffuse(bin, dhi, sun_zenith, tilt, cos_aoi);
    let sky_diffuse = diffuse.total();

    let ground_reflected = (dni * cos(zenith) + sky_diffuse) * albedo * (1.0 - cos(tilt)) / 2.0;

    let mut total = beam + ground_reflected + sky_diffuse;
    if total < 0.0 || (dni <= 0.0 && dhi <= 0.0) {
        total = 0.0;
    }

    PoaIrradiance {
        total,
        beam,
        sky_diffuse,
        ground_reflected,
        angle_of_incidence: degrees_to_radians(aoi),
        global_horizontal,
        clearness_bin: bin,
        diffuse,
    }
}

fn perez_diffuse(bin: u8, dhi: f64, sun_zenith: f64, tilt: f64, cos_aoi: f64) -> PerezDiffuse {
    if sun_zenith >= ISOTROPIC_ZENITH_LIMIT {
        return PerezDiffuse {
            isotropic: dhi * (1.0 + cos(tilt)) / 2.0,
            ..PerezDiffuse::default()
        };
    }

    let zenith = degrees_to_radians(sun_zenith);
    let brightness = dhi * air_mass(sun_zenith) / SOLAR_CONSTANT;
    let index = usize::from(bin - 1);
    let [f11, f12, f13] = F1[index];
    let [f21, f22, f23] = F2[index];
    let f1 = (f11 + brightness * f12 + zenith * f13).max(0.0);
    let f2 = f21 + brightness * f22 + zenith * f23;

    let a = cos_aoi.max(0.0);
    let b = cos(degrees_to_radians(85.0)).max(cos(zenith));

    PerezDiffuse {
        isotropic: dhi * (1.0 - f1) * (1.0 + cos(tilt)) / 2.0,
        circumsolar: dhi * f1 * a / b,
        horizon: dhi * f2 * sin(tilt),
    }
}
