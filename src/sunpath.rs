//! Sun-path diagram solar geometry.
//!
//! Sun position from the NOAA spreadsheet equations (equation of time, apparent
//! longitude, corrected obliquity), always evaluated on the calendar of 2013. Clock time is
//! converted to true solar time unless the caller passes solar time directly. The module
//! also maps a position onto a sun-path diagram: a point on a sphere of given radius around
//! a center, rotated for the diagram's north direction.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::error::check_range;
use crate::math::{
    PI, acos, asin, cos, degrees_to_radians, floor, normalize, normalize_degrees_0_to_360, powi,
    radians_to_degrees, sin, tan,
};
use crate::time::check_day;
use crate::{Location, Result, SunPosition, Vector3};

/// Year on which every sun-path calculation is evaluated.
pub const SUNPATH_YEAR: i32 = 2013;

const MINUTES_PER_DAY: f64 = 1440.0;

/// Site and diagram settings for sun-path calculations.
///
/// # Example
/// ```
/// # use ladybug_core::{Location, Vector3};
/// # use ladybug_core::sunpath::SunpathConfig;
/// let config = SunpathConfig::new(Location::new(40.0, 0.0, 0.0).unwrap())
///     .with_north_angle(10.0)
///     .with_center(Vector3::new(5.0, 5.0, 0.0))
///     .with_scale(100.0)
///     .unwrap();
/// assert_eq!(config.scale(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunpathConfig {
    location: Location,
    north_angle: f64,
    center: Vector3,
    scale: f64,
}

impl SunpathConfig {
    /// Creates a configuration with north along +Y, the origin as center and unit scale.
    #[must_use]
    pub const fn new(location: Location) -> Self {
        Self {
            location,
            north_angle: 0.0,
            center: Vector3::new(0.0, 0.0, 0.0),
            scale: 1.0,
        }
    }

    /// Sets the diagram's north direction in degrees, counter-clockwise from +Y.
    #[must_use]
    pub const fn with_north_angle(mut self, degrees: f64) -> Self {
        self.north_angle = degrees;
        self
    }

    /// Sets the diagram center.
    #[must_use]
    pub const fn with_center(mut self, center: Vector3) -> Self {
        self.center = center;
        self
    }

    /// Sets the diagram radius.
    ///
    /// # Errors
    /// Returns `InvalidParameter` unless the scale is positive and finite.
    pub fn with_scale(mut self, scale: f64) -> Result<Self> {
        check_range("sun-path scale", scale, f64::MIN_POSITIVE, f64::MAX)?;
        self.scale = scale;
        Ok(self)
    }

    /// Site location.
    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    /// North angle in degrees.
    #[must_use]
    pub const fn north_angle(&self) -> f64 {
        self.north_angle
    }

    /// Diagram radius.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Computes the solar geometry for a month, day and decimal hour.
    ///
    /// With `solar_time` set, `hour` is already true solar time and no equation-of-time
    /// or longitude correction is applied. The day is clamped to the month length.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` for a month outside 1..=12 or day 0.
    pub fn solar_context(
        &self,
        month: u32,
        day: u32,
        hour: f64,
        solar_time: bool,
    ) -> Result<SolarContext> {
        let day = check_day(day, month)?;
        let (latitude, longitude, time_zone) = (
            self.location.latitude(),
            self.location.longitude(),
            self.location.time_zone(),
        );

        let jc = julian_century(SUNPATH_YEAR, month, day, hour - time_zone);

        let geom_mean_long =
            normalize_degrees_0_to_360(280.46646 + jc * (36000.76983 + jc * 0.0003032));
        let geom_mean_anom = 357.52911 + jc * (35999.05029 - 0.0001537 * jc);
        let eccent = 0.016708634 - jc * (0.000042037 + 0.0000001267 * jc);
        let anom = degrees_to_radians(geom_mean_anom);
        let center = sin(anom) * (1.914602 - jc * (0.004817 + 0.000014 * jc))
            + sin(2.0 * anom) * (0.019993 - 0.000101 * jc)
            + sin(3.0 * anom) * 0.000289;
        let true_long = geom_mean_long + center;
        let node = degrees_to_radians(125.04 - 1934.136 * jc);
        let apparent_long = true_long - 0.00569 - 0.00478 * sin(node);
        let mean_obliq = 23.0
            + (26.0 + (21.448 - jc * (46.815 + jc * (0.00059 - jc * 0.001813))) / 60.0) / 60.0;
        let obliq_corr = mean_obliq + 0.00256 * cos(node);

        let declination =
            asin(sin(degrees_to_radians(obliq_corr)) * sin(degrees_to_radians(apparent_long)));

        let var_y = powi(tan(degrees_to_radians(obliq_corr / 2.0)), 2);
        let long = degrees_to_radians(geom_mean_long);
        let equation_of_time = 4.0
            * radians_to_degrees(
                var_y * sin(2.0 * long) - 2.0 * eccent * sin(anom)
                    + 4.0 * eccent * var_y * sin(anom) * cos(2.0 * long)
                    - 0.5 * var_y * var_y * sin(4.0 * long)
                    - 1.25 * eccent * eccent * sin(2.0 * anom),
            );

        let true_solar_minutes = if solar_time {
            hour * 60.0
        } else {
            normalize(
                hour * 60.0 + equation_of_time + 4.0 * longitude - 60.0 * time_zone,
                MINUTES_PER_DAY,
            )
        };
        let hour_angle = true_solar_minutes / 4.0 - 180.0;

        let lat = degrees_to_radians(latitude);
        let cos_zenith = (sin(lat) * sin(declination)
            + cos(lat) * cos(declination) * cos(degrees_to_radians(hour_angle)))
        .clamp(-1.0, 1.0);
        let zenith = acos(cos_zenith);

        Ok(SolarContext {
            zenith,
            altitude: PI / 2.0 - zenith,
            azimuth: azimuth(lat, declination, zenith, hour_angle),
            hour_angle,
            solar_time: true_solar_minutes / 60.0,
            declination,
            equation_of_time,
        })
    }

    /// Maps a solar context onto the sun-path diagram.
    ///
    /// The unit north vector is tilted up by the altitude, turned clockwise by the
    /// azimuth (corrected for the diagram north angle), scaled and moved to the center.
    #[must_use]
    pub fn sun_point(&self, context: &SolarContext) -> Vector3 {
        sun_point(
            context.altitude,
            context.azimuth,
            self.center,
            self.scale,
            degrees_to_radians(self.north_angle),
        )
    }
}

/// Solar geometry for one timestamp, all angles in radians unless noted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarContext {
    /// Zenith angle.
    pub zenith: f64,
    /// Altitude above the horizon (`π/2 - zenith`).
    pub altitude: f64,
    /// Azimuth clockwise from north in [0, 2π).
    pub azimuth: f64,
    /// Hour angle in degrees, [-180, 180) for clock time.
    pub hour_angle: f64,
    /// True solar time in hours.
    pub solar_time: f64,
    /// Declination.
    pub declination: f64,
    /// Equation of time in minutes.
    pub equation_of_time: f64,
}

impl SolarContext {
    /// The position in degrees as a [`SunPosition`].
    #[must_use]
    pub fn position(&self) -> SunPosition {
        SunPosition::from_altitude(
            radians_to_degrees(self.altitude),
            radians_to_degrees(self.azimuth),
        )
    }
}

/// Places a sun on a diagram sphere; angles in radians.
#[must_use]
pub fn sun_point(
    altitude: f64,
    azimuth: f64,
    center: Vector3,
    scale: f64,
    north_angle: f64,
) -> Vector3 {
    Vector3::new(0.0, 1.0, 0.0)
        .rotate_x(altitude)
        .rotate_z(-azimuth + north_angle)
        .scale(scale)
        + center
}

/// Julian century from J2000 for a Gregorian date via the integer day number.
fn julian_century(year: i32, month: u32, day: u32, hour_utc: f64) -> f64 {
    let month = f64::from(month);
    let a = floor((14.0 - month) / 12.0);
    let y = f64::from(year) + 4800.0 - a;
    let m = month + 12.0 * a - 3.0;
    let julian_day_number = f64::from(day) + floor((153.0 * m + 2.0) / 5.0) + 365.0 * y
        + floor(y / 4.0)
        - floor(y / 100.0)
        + floor(y / 400.0)
        - 32045.0;
    let julian_day = julian_day_number - 0.5 + hour_utc / 24.0;
    (julian_day - 2_451_545.0) / 36_525.0
}

/// Azimuth in radians from north, clockwise.
///
/// Solar noon and midnight are decided directly from latitude and declination since the
/// general formula divides by `sin(zenith)`.
fn azimuth(lat: f64, declination: f64, zenith: f64, hour_angle: f64) -> f64 {
    if hour_angle == 0.0 {
        return if lat >= declination { PI } else { 0.0 };
    }
    if hour_angle == 180.0 || hour_angle == -180.0 {
        return if lat >= -declination { 0.0 } else { PI };
    }

    let ratio = ((sin(lat) * cos(zenith) - sin(declination)) / (cos(lat) * sin(zenith)))
        .clamp(-1.0, 1.0);
    let angle = radians_to_degrees(acos(ratio));
    let azimuth = if hour_angle > 0.0 {
        normalize_degrees_0_to_360(angle + 180.0)
    } else {
        normalize_degrees_0_to_360(540.0 - angle)
    };
    degrees_to_radians(azimuth)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-3;

    fn config(latitude: f64, longitude: f64, time_zone: f64) -> SunpathConfig {
        SunpathConfig::new(Location::new(latitude, longitude, time_zone).unwrap())
    }

    #[test]
    fn test_equinox_clock_time() {
        let context = config(0.0, 0.0, 0.0)
            .solar_context(3, 20, 12.0, false)
            .unwrap();
        let position = context.position();
        assert!((position.zenith() - 1.84954).abs() < EPSILON);
        assert!((position.azimuth() - 89.47107).abs() < EPSILON);
        assert!((context.equation_of_time - (-7.39784)).abs() < EPSILON);
        assert!((context.solar_time - 11.87670).abs() < EPSILON);
    }

    #[test]
    fn test_solar_noon_faces_south() {
        let context = config(40.0, 0.0, 0.0)
            .solar_context(6, 21, 12.0, true)
            .unwrap();
        assert_eq!(context.hour_angle, 0.0);
        assert_eq!(context.azimuth, PI);
        assert!((radians_to_degrees(context.altitude) - 73.43541).abs() < EPSILON);
    }

    #[test]
    fn test_morning_solar_time() {
        let context = config(40.0, 0.0, 0.0)
            .solar_context(6, 21, 9.0, true)
            .unwrap();
        let position = context.position();
        assert!((position.azimuth() - 99.82505).abs() < EPSILON);
        assert!((position.altitude() - 48.81954).abs() < EPSILON);
    }

    #[test]
    fn test_southern_hemisphere_clock_time() {
        let position = config(-33.87, 151.21, 10.0)
            .solar_context(12, 21, 9.0, false)
            .unwrap()
            .position();
        assert!((position.zenith() - 39.07209).abs() < EPSILON);
        assert!((position.azimuth() - 86.16626).abs() < EPSILON);
    }

    #[test]
    fn test_solar_midnight_faces_north() {
        let context = config(40.0, 0.0, 0.0)
            .solar_context(6, 21, 0.0, true)
            .unwrap();
        assert_eq!(context.hour_angle, -180.0);
        assert_eq!(context.azimuth, 0.0);
        assert!(context.altitude < 0.0);
    }

    #[test]
    fn test_sun_point_mapping() {
        let config = config(40.0, 0.0, 0.0)
            .with_center(Vector3::new(1.0, 2.0, 3.0))
            .with_scale(10.0)
            .unwrap();

        // Sun due east on the horizon
        let east = sun_point(0.0, PI / 2.0, Vector3::default(), 1.0, 0.0);
        assert!((east.x - 1.0).abs() < 1e-12);
        assert!(east.y.abs() < 1e-12);

        let context = config.solar_context(6, 21, 12.0, true).unwrap();
        let point = config.sun_point(&context);
        let offset = Vector3::new(point.x - 1.0, point.y - 2.0, point.z - 3.0);
        assert!((offset.length() - 10.0).abs() < 1e-9);
        assert!((offset.z - 10.0 * sin(context.altitude)).abs() < 1e-9);
        assert!(offset.y < 0.0);

        // Rotating the diagram north turns the sun with it
        let turned = config.with_north_angle(90.0).sun_point(&context);
        assert!((turned.x - 1.0 - offset.y.abs()).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(config(0.0, 0.0, 0.0).solar_context(13, 1, 12.0, false).is_err());
        assert!(config(0.0, 0.0, 0.0).solar_context(1, 0, 12.0, false).is_err());
        assert!(config(0.0, 0.0, 0.0).with_scale(0.0).is_err());
        // Day clamping: February 30th behaves like February 28th
        let clamped = config(10.0, 0.0, 0.0).solar_context(2, 30, 12.0, false).unwrap();
        let feb_28 = config(10.0, 0.0, 0.0).solar_context(2, 28, 12.0, false).unwrap();
        assert_eq!(clamped, feb_28);
    }
}
