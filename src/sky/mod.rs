//! Perez all-weather luminance sky with the Preetham zenith model.
//!
//! A [`SkyContext`] is computed once per timestamp and site: it fixes the sun position
//! and the turbidity-dependent distribution coefficients. Sky luminance and chromaticity
//! (CIE Yxy) can then be queried for any direction of the dome.
//!
//! References:
//! - Perez, R., Seals, R., Michalsky, J. (1993). All-weather model for sky luminance
//!   distribution. Solar Energy 50(3), 235-245.
//! - Preetham, A. J., Shirley, P., Smits, B. (1999). A practical analytic model for
//!   daylight. SIGGRAPH '99.

#![allow(clippy::unreadable_literal)]

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::{check_coordinates, check_time_zone};
use crate::math::{
    PI, acos, asin, atan2, cos, degrees_to_radians, exp, radians_to_degrees, sin, tan,
};
use crate::{Error, Result, SunPosition};

pub mod patches;

/// Width of the twilight band (radians below the horizontal) over which the light color
/// fades from the sky color at the sun to the night color.
pub const TWILIGHT_WIDTH: f64 = 0.2;

/// Luminance and chromaticity used once the sun has set.
pub const NIGHT_SKY: Yxy = Yxy::new(0.2, 0.2, 0.5);

/// CIE XYZ to linear sRGB (D65).
const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.240479, -1.53715, -0.498535],
    [-0.969256, 1.875992, 0.041556],
    [0.055648, -0.204043, 1.057311],
];

/// Zenith chromaticity x: rows multiply T², T, 1; columns θs³, θs², θs, 1.
const ZENITH_X: [[f64; 4]; 3] = [
    [0.00166, -0.00375, 0.00209, 0.0],
    [-0.02903, 0.06377, -0.03202, 0.00394],
    [0.11693, -0.21196, 0.06052, 0.25886],
];

/// Zenith chromaticity y, laid out like [`ZENITH_X`].
const ZENITH_Y: [[f64; 4]; 3] = [
    [0.00275, -0.00610, 0.00317, 0.0],
    [-0.04214, 0.08970, -0.04153, 0.00516],
    [0.15346, -0.26756, 0.06670, 0.26688],
];

/// Distribution coefficients A..E as (slope, intercept) in turbidity.
const LUMINANCE_DISTRIBUTION: [(f64, f64); 5] = [
    (0.1787, -1.4630),
    (-0.3554, 0.4275),
    (-0.0227, 5.3251),
    (0.1206, -2.5771),
    (-0.0670, 0.3703),
];

const X_DISTRIBUTION: [(f64, f64); 5] = [
    (-0.0193, -0.2592),
    (-0.0665, 0.0008),
    (-0.0004, 0.2125),
    (-0.0641, -0.8989),
    (-0.0033, 0.0452),
];

const Y_DISTRIBUTION: [(f64, f64); 5] = [
    (-0.0167, -0.2608),
    (-0.0950, 0.0092),
    (-0.0079, 0.2102),
    (-0.0441, -1.6537),
    (-0.0109, 0.0529),
];

/// CIE Yxy color: luminance `luminance` with chromaticity coordinates `x`, `y`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Yxy {
    /// Luminance Y (kcd/m² for the zenith model, relative elsewhere).
    pub luminance: f64,
    /// Chromaticity x.
    pub x: f64,
    /// Chromaticity y.
    pub y: f64,
}

impl Yxy {
    /// Creates a color from luminance and chromaticity.
    #[must_use]
    pub const fn new(luminance: f64, x: f64, y: f64) -> Self {
        Self { luminance, x, y }
    }

    /// Converts to CIE XYZ tristimulus values.
    #[must_use]
    pub fn to_xyz(&self) -> [f64; 3] {
        let Self { luminance, x, y } = *self;
        [x * luminance / y, luminance, (1.0 - x - y) * luminance / y]
    }

    /// Converts to linear RGB. Components are not clamped and may be negative for
    /// chromaticities outside the sRGB gamut.
    #[must_use]
    pub fn to_rgb(&self) -> Rgb {
        let xyz = self.to_xyz();
        let row = |r: [f64; 3]| r[0] * xyz[0] + r[1] * xyz[1] + r[2] * xyz[2];
        Rgb {
            r: row(XYZ_TO_RGB[0]),
            g: row(XYZ_TO_RGB[1]),
            b: row(XYZ_TO_RGB[2]),
        }
    }

    fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            luminance: self.luminance * (1.0 - t) + other.luminance * t,
            x: self.x * (1.0 - t) + other.x * t,
            y: self.y * (1.0 - t) + other.y * t,
        }
    }
}

/// Linear RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
}

/// The five Perez gradation coefficients A..E for one channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerezCoefficients(pub [f64; 5]);

impl PerezCoefficients {
    fn linear_in(turbidity: f64, table: &[(f64, f64); 5]) -> Self {
        Self(table.map(|(slope, intercept)| slope * turbidity + intercept))
    }

    /// Coefficients for luminance Y.
    #[must_use]
    pub fn luminance(turbidity: f64) -> Self {
        Self::linear_in(turbidity, &LUMINANCE_DISTRIBUTION)
    }

    /// Coefficients for chromaticity x.
    #[must_use]
    pub fn chromaticity_x(turbidity: f64) -> Self {
        Self::linear_in(turbidity, &X_DISTRIBUTION)
    }

    /// Coefficients for chromaticity y.
    #[must_use]
    pub fn chromaticity_y(turbidity: f64) -> Self {
        Self::linear_in(turbidity, &Y_DISTRIBUTION)
    }
}

/// Perez gradation function for a view direction at `zenith` lying `gamma` radians
/// from the sun.
#[must_use]
pub fn perez(zenith: f64, gamma: f64, coefficients: &PerezCoefficients) -> f64 {
    let [a, b, c, d, e] = coefficients.0;
    let cos_gamma = cos(gamma);
    (1.0 + a * exp(b / cos(zenith))) * (1.0 + c * exp(d * gamma) + e * cos_gamma * cos_gamma)
}

/// Absolute zenith luminance and chromaticity for a turbidity and sun zenith (radians).
#[must_use]
pub fn zenith_color(turbidity: f64, sun_zenith: f64) -> Yxy {
    let chi = (4.0 / 9.0 - turbidity / 120.0) * (PI - 2.0 * sun_zenith);
    let luminance = (4.0453 * turbidity - 4.9710) * tan(chi) - 0.2155 * turbidity + 2.4192;

    let t = [turbidity * turbidity, turbidity, 1.0];
    let theta = [
        sun_zenith * sun_zenith * sun_zenith,
        sun_zenith * sun_zenith,
        sun_zenith,
        1.0,
    ];
    let chromaticity = |matrix: &[[f64; 4]; 3]| -> f64 {
        matrix
            .iter()
            .zip(t)
            .map(|(row, weight)| weight * row.iter().zip(theta).map(|(m, th)| m * th).sum::<f64>())
            .sum()
    };

    Yxy::new(luminance, chromaticity(&ZENITH_X), chromaticity(&ZENITH_Y))
}

/// Sun zenith and azimuth (radians), solar time (hours) and declination (radians) from
/// the low-precision formula of the sky model.
fn sun_angles(
    day_of_year: u32,
    hour: f64,
    time_zone: f64,
    latitude: f64,
    longitude: f64,
) -> (f64, f64, f64, f64) {
    let day = f64::from(day_of_year);
    let lat = degrees_to_radians(latitude);
    let solar_time = hour + 0.170 * sin(4.0 * PI * (day - 80.0) / 373.0)
        - 0.129 * sin(2.0 * PI * (day - 8.0) / 355.0)
        + (longitude - time_zone * 15.0) / 15.0;
    let declination = 0.4093 * sin(2.0 * PI * (day - 81.0) / 368.0);
    let hour_angle = PI * solar_time / 12.0 - PI;

    let altitude = asin(
        (sin(lat) * sin(declination) + cos(lat) * cos(declination) * cos(hour_angle))
            .clamp(-1.0, 1.0),
    );
    let mut azimuth = atan2(
        -cos(declination) * sin(hour_angle),
        cos(lat) * sin(declination) - sin(lat) * cos(declination) * cos(hour_angle),
    );
    if azimuth < 0.0 {
        azimuth += 2.0 * PI;
    }
    (PI / 2.0 - altitude, azimuth, solar_time, declination)
}

/// Sun position from the sky model's own ephemeris.
///
/// `hour` is local standard time; `time_zone` is the UTC offset in hours.
#[must_use]
pub fn sun_position(
    day_of_year: u32,
    hour: f64,
    time_zone: f64,
    latitude: f64,
    longitude: f64,
) -> SunPosition {
    let (zenith, azimuth, _, _) = sun_angles(day_of_year, hour, time_zone, latitude, longitude);
    SunPosition::from_altitude(90.0 - radians_to_degrees(zenith), radians_to_degrees(azimuth))
}

/// Sky state for one timestamp and site.
///
/// # Example
/// ```
/// use ladybug_core::sky::SkyContext;
///
/// // Boston, June 21st at noon, clear sky
/// let sky = SkyContext::new(172, 2013, 12.0, -5.0, 42.36, -71.06, 3.0).unwrap();
/// let zenith = sky.sky_color(0.0, 0.0);
/// assert!((zenith.luminance - sky.zenith().luminance).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyContext {
    turbidity: f64,
    sun_zenith: f64,
    sun_azimuth: f64,
    solar_time: f64,
    declination: f64,
    zenith: Yxy,
    coefficients: [PerezCoefficients; 3],
    normalization: [f64; 3],
}

impl SkyContext {
    /// Computes the sun position and sky coefficients.
    ///
    /// # Arguments
    /// * `day_of_year` - 1..=365, or 366 in years divisible by 4
    /// * `year` - Calendar year, only used to validate the day of year
    /// * `hour` - Local standard time as a decimal hour
    /// * `time_zone` - UTC offset in hours
    /// * `latitude`, `longitude` - Site coordinates in degrees
    /// * `turbidity` - Linke turbidity, at least 1 (clear skies are around 2 to 3)
    ///
    /// # Errors
    /// Returns `InvalidDateTime`, `InvalidTurbidity` or a coordinate error.
    pub fn new(
        day_of_year: u32,
        year: i32,
        hour: f64,
        time_zone: f64,
        latitude: f64,
        longitude: f64,
        turbidity: f64,
    ) -> Result<Self> {
        let days_in_year = if year % 4 == 0 { 366 } else { 365 };
        if !(1..=days_in_year).contains(&day_of_year) {
            return Err(Error::invalid_datetime("day of year outside the given year"));
        }
        if !turbidity.is_finite() || turbidity < 1.0 {
            return Err(Error::invalid_turbidity(turbidity));
        }
        check_coordinates(latitude, longitude)?;
        check_time_zone(time_zone)?;

        let (sun_zenith, sun_azimuth, solar_time, declination) =
            sun_angles(day_of_year, hour, time_zone, latitude, longitude);
        let coefficients = [
            PerezCoefficients::luminance(turbidity),
            PerezCoefficients::chromaticity_x(turbidity),
            PerezCoefficients::chromaticity_y(turbidity),
        ];
        let normalization = coefficients.map(|c| perez(0.0, sun_zenith, &c));

        Ok(Self {
            turbidity,
            sun_zenith,
            sun_azimuth,
            solar_time,
            declination,
            zenith: zenith_color(turbidity, sun_zenith),
            coefficients,
            normalization,
        })
    }

    /// Turbidity the sky was built for.
    #[must_use]
    pub const fn turbidity(&self) -> f64 {
        self.turbidity
    }

    /// Sun zenith in radians.
    #[must_use]
    pub const fn sun_zenith(&self) -> f64 {
        self.sun_zenith
    }

    /// Sun azimuth in radians, clockwise from north in [0, 2π).
    #[must_use]
    pub const fn sun_azimuth(&self) -> f64 {
        self.sun_azimuth
    }

    /// Solar time in hours.
    #[must_use]
    pub const fn solar_time(&self) -> f64 {
        self.solar_time
    }

    /// Solar declination in radians.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Sun position in degrees.
    #[must_use]
    pub fn sun_position(&self) -> SunPosition {
        SunPosition::from_altitude(
            90.0 - radians_to_degrees(self.sun_zenith),
            radians_to_degrees(self.sun_azimuth),
        )
    }

    /// Absolute zenith luminance and chromaticity.
    #[must_use]
    pub const fn zenith(&self) -> Yxy {
        self.zenith
    }

    /// Sky color in the direction (`azimuth`, `zenith`), both in radians.
    ///
    /// Each channel is the zenith value scaled by the gradation at the view direction
    /// relative to the gradation at the zenith, so `sky_color(_, 0.0)` returns
    /// [`Self::zenith`].
    #[must_use]
    pub fn sky_color(&self, azimuth: f64, zenith: f64) -> Yxy {
        let cos_gamma = sin(zenith) * sin(self.sun_zenith) * cos(azimuth - self.sun_azimuth)
            + cos(zenith) * cos(self.sun_zenith);
        let gamma = acos(cos_gamma.clamp(-1.0, 1.0));

        let channel = |i: usize, zenith_value: f64| {
            zenith_value * perez(zenith, gamma, &self.coefficients[i]) / self.normalization[i]
        };
        Yxy::new(
            channel(0, self.zenith.luminance),
            channel(1, self.zenith.x),
            channel(2, self.zenith.y),
        )
    }

    /// Color of the sunlight.
    ///
    /// The sky color at the sun while it is well above the horizon, [`NIGHT_SKY`] once it
    /// has set, and a linear blend of the two while the sun zenith is within
    /// [`TWILIGHT_WIDTH`] of 90°.
    #[must_use]
    pub fn light_color(&self) -> Rgb {
        let horizon = PI / 2.0;
        if self.sun_zenith > horizon {
            return NIGHT_SKY.to_rgb();
        }
        let day = self.sky_color(self.sun_azimuth, self.sun_zenith);
        if self.sun_zenith > horizon - TWILIGHT_WIDTH {
            let blend = (horizon - self.sun_zenith) / TWILIGHT_WIDTH;
            return NIGHT_SKY.lerp(day, blend).to_rgb();
        }
        day.to_rgb()
    }

    /// Samples the upper hemisphere on a uniform grid.
    ///
    /// The grid has `resolution` zenith rows starting at the zenith (step π/2 divided by
    /// `resolution`) and `4 * resolution` azimuth columns starting at north (step 2π
    /// divided by `4 * resolution`). Samples are not weighted by solid angle.
    #[must_use]
    pub fn full_sky(&self, resolution: usize) -> SkyGrid {
        let columns = 4 * resolution;
        let mut values = Vec::with_capacity(resolution * columns);
        for row in 0..resolution {
            let zenith = row as f64 * (PI / 2.0) / resolution as f64;
            for column in 0..columns {
                let azimuth = column as f64 * 2.0 * PI / columns as f64;
                values.push(self.sky_color(azimuth, zenith));
            }
        }
        SkyGrid { resolution, values }
    }

    /// Arithmetic mean of [`Self::full_sky`] per channel.
    ///
    /// # Errors
    /// Returns `InvalidParameter` for a resolution of 0.
    pub fn sky_average(&self, resolution: usize) -> Result<Yxy> {
        if resolution == 0 {
            return Err(Error::invalid_parameter("sky resolution", 0.0));
        }
        let grid = self.full_sky(resolution);
        let count = grid.values.len() as f64;
        let sum = grid.values.iter().fold(Yxy::default(), |acc, c| Yxy {
            luminance: acc.luminance + c.luminance,
            x: acc.x + c.x,
            y: acc.y + c.y,
        });
        Ok(Yxy::new(sum.luminance / count, sum.x / count, sum.y / count))
    }
}

/// Hemisphere samples from [`SkyContext::full_sky`], row-major by zenith.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyGrid {
    resolution: usize,
    values: Vec<Yxy>,
}

impl SkyGrid {
    /// Number of zenith rows.
    #[must_use]
    pub const fn resolution(&self) -> usize {
        self.resolution
    }

    /// Number of azimuth columns (`4 * resolution`).
    #[must_use]
    pub const fn columns(&self) -> usize {
        4 * self.resolution
    }

    /// Sample at a zenith row and azimuth column.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<Yxy> {
        if column >= self.columns() {
            return None;
        }
        self.values.get(row * self.columns() + column).copied()
    }

    /// All samples, row-major.
    #[must_use]
    pub fn values(&self) -> &[Yxy] {
        &self.values
    }
}
