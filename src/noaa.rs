//! Almanac sun position algorithm with atmospheric refraction.
//!
//! Follows Michalsky, 'The Astronomical Almanac's algorithm for approximate solar
//! position (1950-2050)', Solar Energy 40 (1988) pp. 227-235, as adapted by NOAA.
//! Accuracy is about 0.01° between 1950 and 2050. The day count uses the simplified
//! `year % 4` leap rule of [`crate::time::julian_day_simplified`].
//!
//! The calculation is total over real inputs: no argument is validated and every
//! `asin`/`acos` argument is clamped, so out-of-range coordinates give finite but
//! meaningless positions.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::too_many_arguments)]

use crate::SunPosition;
use crate::math::{
    PI, acos, asin, atan2, cos, degrees_to_radians, normalize, normalize_degrees_0_to_360,
    radians_to_degrees, sin,
};
use crate::time::julian_day_simplified;

/// Julian date of the J2000.0 epoch.
const J2000_JD: f64 = 2_451_545.0;

/// Full result of the almanac algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoaaSolarPosition {
    /// Refraction-corrected position.
    pub position: SunPosition,
    /// Solar declination in degrees.
    pub declination: f64,
    /// Hour angle in radians (not wrapped, may fall outside ±π).
    pub hour_angle: f64,
    /// Geometric elevation before refraction, in degrees.
    pub true_elevation: f64,
}

/// Calculates the refraction-corrected sun position.
///
/// # Arguments
/// * `latitude` - Observer latitude in degrees
/// * `longitude` - Observer longitude in degrees, positive east
/// * `time_zone` - Offset of local standard time from UTC in hours
/// * `year`, `month`, `day` - Civil date
/// * `hour` - Local standard time as a decimal hour
///
/// # Example
/// ```
/// use ladybug_core::noaa;
///
/// // Equator at the March 2013 equinox, noon UTC
/// let position = noaa::sun_position(0.0, 0.0, 0.0, 2013, 3, 20, 12.0);
/// assert!(position.zenith() < 2.0);
/// assert_eq!(position.zenith(), 90.0 - position.altitude());
/// ```
#[must_use]
pub fn sun_position(
    latitude: f64,
    longitude: f64,
    time_zone: f64,
    year: i32,
    month: u32,
    day: u32,
    hour: f64,
) -> SunPosition {
    solar_position(latitude, longitude, time_zone, year, month, day, hour).position
}

/// Calculates the sun position along with declination and hour angle.
///
/// See [`sun_position`] for the arguments.
#[must_use]
pub fn solar_position(
    latitude: f64,
    longitude: f64,
    time_zone: f64,
    year: i32,
    month: u32,
    day: u32,
    hour: f64,
) -> NoaaSolarPosition {
    let utc_hour = hour - time_zone;
    let n = julian_day_simplified(year, month, day, utc_hour) - J2000_JD;

    // Ecliptic coordinates
    let mean_longitude = normalize_degrees_0_to_360(280.460 + 0.9856474 * n);
    let mean_anomaly = degrees_to_radians(normalize_degrees_0_to_360(357.528 + 0.9856003 * n));
    let eccentricity = 0.016709 - 0.000000042 * n;
    let ecliptic_longitude = normalize_degrees_0_to_360(
        mean_longitude
            + radians_to_degrees(
                2.0 * eccentricity * sin(mean_anomaly)
                    + 1.25 * eccentricity * eccentricity * sin(2.0 * mean_anomaly),
            ),
    );
    let ascending_node = degrees_to_radians(125.04 - 0.052954 * n);
    let obliquity = degrees_to_radians(23.439 - 0.0000004 * n + 0.00256 * cos(ascending_node));
    let lambda = degrees_to_radians(ecliptic_longitude);

    // Celestial coordinates
    let mut right_ascension = atan2(cos(obliquity) * sin(lambda), cos(lambda));
    if right_ascension < 0.0 {
        right_ascension += 2.0 * PI;
    }
    let declination = asin(sin(obliquity) * sin(lambda));

    // Local coordinates
    let gmst = normalize(6.697375 + 0.0657098242 * n + utc_hour, 24.0);
    let lmst = normalize(gmst + longitude / 15.0, 24.0);
    let hour_angle = degrees_to_radians(lmst * 15.0) - right_ascension;

    let lat = degrees_to_radians(latitude);
    let sin_elevation = (sin(declination) * sin(lat)
        + cos(declination) * cos(lat) * cos(hour_angle))
    .clamp(-1.0, 1.0);
    let elevation = asin(sin_elevation);
    let elevation_degrees = radians_to_degrees(elevation);

    let altitude = (elevation_degrees + refraction(elevation_degrees)).min(90.0);
    let azimuth = azimuth(declination, elevation, lat, hour_angle);

    NoaaSolarPosition {
        position: SunPosition::from_altitude(altitude, radians_to_degrees(azimuth)),
        declination: radians_to_degrees(declination),
        hour_angle,
        true_elevation: elevation_degrees,
    }
}

/// Empirical refraction correction in degrees for a geometric elevation in degrees.
fn refraction(elevation: f64) -> f64 {
    if elevation > -0.56 {
        3.51561 * (0.1594 + 0.0196 * elevation + 0.00002 * elevation * elevation)
            / (1.0 + 0.505 * elevation + 0.0845 * elevation * elevation)
    } else {
        0.56
    }
}

/// Azimuth in radians clockwise from north.
///
/// The half angle comes from `acos` of the cosine-rule ratio; mornings (hour angle in
/// [-π, 0) or beyond π) keep it, afternoons mirror it to `2π - half`.
fn azimuth(declination: f64, elevation: f64, lat: f64, hour_angle: f64) -> f64 {
    let denominator = cos(elevation) * cos(lat);
    let half = if cos(declination) == 0.0 || denominator == 0.0 {
        PI
    } else {
        let ratio = (sin(declination) - sin(elevation) * sin(lat)) / denominator;
        if ratio <= -1.0 {
            PI
        } else if ratio >= 1.0 {
            0.0
        } else {
            acos(ratio)
        }
    };

    if (-PI..0.0).contains(&hour_angle) || hour_angle >= PI {
        half
    } else {
        2.0 * PI - half
    }
}

/// Calculates the sun position for a timezone-aware chrono datetime.
///
/// The UTC offset of the datetime is used as the time zone.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
///
/// # Example
/// ```
/// # #[cfg(feature = "chrono")] {
/// use chrono::{DateTime, FixedOffset};
/// use ladybug_core::noaa;
///
/// let datetime = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let result = noaa::solar_position_at(&datetime, 37.7749, -122.4194).unwrap();
/// assert!((result.position.zenith() - 20.938).abs() < 0.01);
/// # }
/// ```
#[cfg(feature = "chrono")]
pub fn solar_position_at<Tz: chrono::TimeZone>(
    datetime: &chrono::DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> crate::Result<NoaaSolarPosition> {
    use chrono::{Datelike, Offset};

    crate::error::check_coordinates(latitude, longitude)?;
    let time_zone = f64::from(datetime.offset().fix().local_minus_utc()) / 3600.0;
    let local = datetime.naive_local();
    Ok(solar_position(
        latitude,
        longitude,
        time_zone,
        local.year(),
        local.month(),
        local.day(),
        crate::time::decimal_hour(&local),
    ))
}
