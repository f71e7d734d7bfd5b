//! Core data types shared by the solar, sky and irradiance models.

use crate::error::{check_coordinates, check_range, check_time_zone};
use crate::math::{cos, degrees_to_radians, normalize_degrees_0_to_360, sin, sqrt};
use crate::{Result, noaa, sky, sunpath, time};

/// Sun position in horizontal coordinates.
///
/// - Azimuth: 0° = North, measured clockwise to 360°
/// - Zenith angle: 0° = directly overhead, 90° = horizon, 180° = nadir
/// - Altitude: 90° = directly overhead, 0° = horizon, -90° = nadir
///
/// The zenith angle is always derived from the altitude, so
/// `zenith() == 90.0 - altitude()` holds exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    azimuth: f64,
    altitude: f64,
    zenith: f64,
}

impl SunPosition {
    /// Creates a sun position from altitude and azimuth in degrees.
    ///
    /// The azimuth is normalized to [0, 360) and the altitude clamped to [-90, 90].
    ///
    /// # Example
    /// ```
    /// # use ladybug_core::SunPosition;
    /// let position = SunPosition::from_altitude(60.0, -90.0);
    /// assert_eq!(position.azimuth(), 270.0);
    /// assert_eq!(position.zenith(), 30.0);
    /// ```
    #[must_use]
    pub fn from_altitude(altitude: f64, azimuth: f64) -> Self {
        let altitude = altitude.clamp(-90.0, 90.0);
        Self {
            azimuth: normalize_degrees_0_to_360(azimuth),
            altitude,
            zenith: 90.0 - altitude,
        }
    }

    /// Azimuth angle in degrees (0° to 360°, 0° = North, increasing clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Zenith angle in degrees (0° to 180°).
    #[must_use]
    pub const fn zenith(&self) -> f64 {
        self.zenith
    }

    /// Altitude (elevation) angle in degrees (-90° to 90°).
    #[must_use]
    pub const fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Whether the sun is above the horizon.
    #[must_use]
    pub fn is_up(&self) -> bool {
        self.altitude > 0.0
    }

    /// Unit vector pointing from the observer towards the sun (x = east, y = north, z = up).
    #[must_use]
    pub fn to_vector(&self) -> Vector3 {
        let altitude = degrees_to_radians(self.altitude);
        let azimuth = degrees_to_radians(self.azimuth);
        Vector3::new(
            cos(altitude) * sin(azimuth),
            cos(altitude) * cos(azimuth),
            sin(altitude),
        )
    }
}

/// Site location: latitude and longitude in degrees and UTC offset in hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    latitude: f64,
    longitude: f64,
    time_zone: f64,
}

impl Location {
    /// Creates a validated location.
    ///
    /// # Errors
    /// Returns `InvalidLatitude`, `InvalidLongitude` or `InvalidParameter` (time zone
    /// outside -12..=14 hours).
    ///
    /// # Example
    /// ```
    /// # use ladybug_core::Location;
    /// let boston = Location::new(42.36, -71.06, -5.0).unwrap();
    /// assert_eq!(boston.time_zone(), -5.0);
    /// assert!(Location::new(95.0, 0.0, 0.0).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64, time_zone: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        check_time_zone(time_zone)?;
        Ok(Self {
            latitude,
            longitude,
            time_zone,
        })
    }

    /// Latitude in degrees, positive north.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, positive east.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Offset of local standard time from UTC in hours.
    #[must_use]
    pub const fn time_zone(&self) -> f64 {
        self.time_zone
    }
}

/// Orientation of a planar surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceOrientation {
    tilt: f64,
    azimuth: f64,
}

impl SurfaceOrientation {
    /// Creates an orientation from tilt (degrees from horizontal, 0..=180) and azimuth
    /// (degrees clockwise from north, normalized to [0, 360)).
    ///
    /// # Errors
    /// Returns `InvalidParameter` for a tilt outside 0..=180 degrees.
    pub fn new(tilt: f64, azimuth: f64) -> Result<Self> {
        check_range("surface tilt", tilt, 0.0, 180.0)?;
        Ok(Self {
            tilt,
            azimuth: normalize_degrees_0_to_360(azimuth),
        })
    }

    /// A horizontal, upward-facing surface.
    #[must_use]
    pub const fn horizontal() -> Self {
        Self {
            tilt: 0.0,
            azimuth: 180.0,
        }
    }

    /// Tilt from horizontal in degrees.
    #[must_use]
    pub const fn tilt(&self) -> f64 {
        self.tilt
    }

    /// Azimuth the surface faces, degrees clockwise from north.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }
}

/// A point or direction in 3-D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    /// X component (east).
    pub x: f64,
    /// Y component (north).
    pub y: f64,
    /// Z component (up).
    pub z: f64,
}

impl Vector3 {
    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Rotates counter-clockwise about the X axis by `angle` radians.
    #[must_use]
    pub fn rotate_x(self, angle: f64) -> Self {
        let (s, c) = (sin(angle), cos(angle));
        Self::new(self.x, self.y * c - self.z * s, self.y * s + self.z * c)
    }

    /// Rotates counter-clockwise about the Z axis by `angle` radians.
    #[must_use]
    pub fn rotate_z(self, angle: f64) -> Self {
        let (s, c) = (sin(angle), cos(angle));
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c, self.z)
    }

    /// Multiplies every component by `factor`.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl core::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

/// Which of the three sun position implementations to use.
///
/// The implementations share their physics but not their numerics; results differ in the
/// second decimal of a degree. Each one is kept as its own code path so the sky and
/// sun-path models reproduce the numbers their callers were built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ephemeris {
    /// Almanac algorithm with atmospheric refraction, see [`crate::noaa`].
    Noaa,
    /// Equation-of-time algorithm of the sun-path diagram, see [`crate::sunpath`].
    /// Always evaluated on the year 2013.
    Sunpath,
    /// Low-precision formula of the luminance sky model, see [`crate::sky`].
    PerezSky,
}

/// Computes the sun position with the selected implementation.
///
/// `hour` is local standard time as a decimal hour.
///
/// # Errors
/// Returns `InvalidDateTime` for an invalid month or day.
///
/// # Example
/// ```
/// # use ladybug_core::{sun_position, Ephemeris, Location};
/// let boston = Location::new(42.36, -71.06, -5.0).unwrap();
/// let noaa = sun_position(Ephemeris::Noaa, &boston, 2013, 6, 21, 12.0).unwrap();
/// let sky = sun_position(Ephemeris::PerezSky, &boston, 2013, 6, 21, 12.0).unwrap();
/// assert!((noaa.altitude() - sky.altitude()).abs() < 1.0);
/// ```
pub fn sun_position(
    ephemeris: Ephemeris,
    location: &Location,
    year: i32,
    month: u32,
    day: u32,
    hour: f64,
) -> Result<SunPosition> {
    let day_of_year = time::day_of_year(month, day)?;
    let position = match ephemeris {
        Ephemeris::Noaa => noaa::sun_position(
            location.latitude,
            location.longitude,
            location.time_zone,
            year,
            month,
            day,
            hour,
        ),
        Ephemeris::Sunpath => sunpath::SunpathConfig::new(*location)
            .solar_context(month, day, hour, false)?
            .position(),
        Ephemeris::PerezSky => sky::sun_position(
            day_of_year,
            hour,
            location.time_zone,
            location.latitude,
            location.longitude,
        ),
    };
    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_sun_position_zenith_identity() {
        for altitude in [-95.0, -45.0, 0.0, 12.345, 89.9, 90.0] {
            let position = SunPosition::from_altitude(altitude, 10.0);
            assert_eq!(position.zenith(), 90.0 - position.altitude());
            assert!((0.0..=180.0).contains(&position.zenith()));
        }
    }

    #[test]
    fn test_sun_vector() {
        let overhead = SunPosition::from_altitude(90.0, 0.0).to_vector();
        assert!((overhead.z - 1.0).abs() < EPSILON);

        let east = SunPosition::from_altitude(0.0, 90.0).to_vector();
        assert!((east.x - 1.0).abs() < EPSILON);
        assert!(east.y.abs() < EPSILON);

        let south = SunPosition::from_altitude(30.0, 180.0).to_vector();
        assert!((south.length() - 1.0).abs() < EPSILON);
        assert!(south.y < 0.0);
    }

    #[test]
    fn test_surface_orientation() {
        let surface = SurfaceOrientation::new(30.0, -90.0).unwrap();
        assert_eq!(surface.azimuth(), 270.0);
        assert!(SurfaceOrientation::new(-1.0, 0.0).is_err());
        assert!(SurfaceOrientation::new(181.0, 0.0).is_err());
        assert_eq!(SurfaceOrientation::horizontal().tilt(), 0.0);
    }

    #[test]
    fn test_vector_rotation() {
        let v = Vector3::new(0.0, 1.0, 0.0).rotate_z(core::f64::consts::FRAC_PI_2);
        assert!((v.x + 1.0).abs() < EPSILON);
        assert!(v.y.abs() < EPSILON);

        let up = Vector3::new(0.0, 1.0, 0.0).rotate_x(core::f64::consts::FRAC_PI_2);
        assert!((up.z - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_ephemeris_dispatch_agrees_roughly() {
        let location = Location::new(42.36, -71.06, -5.0).unwrap();
        let noaa = sun_position(Ephemeris::Noaa, &location, 2013, 6, 21, 12.0).unwrap();
        let sunpath = sun_position(Ephemeris::Sunpath, &location, 2013, 6, 21, 12.0).unwrap();
        let sky = sun_position(Ephemeris::PerezSky, &location, 2013, 6, 21, 12.0).unwrap();

        assert!((noaa.zenith() - 19.132_389).abs() < 1e-4);
        assert!((sunpath.zenith() - 19.143_797).abs() < 1e-4);
        assert!((noaa.zenith() - sky.zenith()).abs() < 0.5);
        assert!((noaa.azimuth() - sky.azimuth()).abs() < 2.0);
        assert!(sun_position(Ephemeris::Noaa, &location, 2013, 13, 1, 12.0).is_err());
    }
}
