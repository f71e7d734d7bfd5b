//! Calendar utilities for hourly simulation timestamps.
//!
//! All analysis data is indexed on a fixed 365-day year (February always has 28 days)
//! with hours numbered 1 to 24, so hour 24 is midnight at the end of a day and hour of
//! year 1 is the hour ending at 01:00 on January 1st. This module converts between
//! (month, day, hour) triples and hour-of-year indices, applies the input corrections the
//! simulation front ends expect, and provides the simplified civil-to-Julian conversion
//! used by the NOAA sun position algorithm.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::fmt;

use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{Datelike, Timelike};

/// Hours in the fixed analysis year.
pub const HOURS_PER_YEAR: u32 = 8760;

/// Day of year (zero-based) on which each month starts, non-leap.
pub const MONTH_START_DAY: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

const MONTH_NAMES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Julian date of 1949-01-01 00:00 UTC minus one day, the epoch of the NOAA day count.
const NOAA_EPOCH_JD: f64 = 2_432_916.5;

/// Wraps a month number into 1..=12, mapping 0 to 12.
///
/// # Example
/// ```
/// # use ladybug_core::time::check_month;
/// assert_eq!(check_month(0), 12);
/// assert_eq!(check_month(13), 1);
/// assert_eq!(check_month(6), 6);
/// ```
#[must_use]
pub const fn check_month(month: i32) -> u32 {
    match month.rem_euclid(12) {
        0 => 12,
        m => m.unsigned_abs(),
    }
}

/// Wraps an hour into 1..=24, mapping 0 to 24.
#[must_use]
pub const fn check_hour(hour: i32) -> u32 {
    match hour.rem_euclid(24) {
        0 => 24,
        h => h.unsigned_abs(),
    }
}

/// Clamps a day to the length of `month` in the fixed calendar.
///
/// February is clamped to 28, thirty-day months to 30 and everything else to 31.
///
/// # Errors
/// Returns `InvalidDateTime` for day 0 or a month outside 1..=12.
pub fn check_day(day: u32, month: u32) -> Result<u32> {
    if day == 0 {
        return Err(Error::invalid_datetime("day must be at least 1"));
    }
    let index = month_index(month)?;
    Ok(day.min(DAYS_IN_MONTH[index]))
}

fn month_index(month: u32) -> Result<usize> {
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_datetime("month must be between 1 and 12"));
    }
    Ok((month - 1) as usize)
}

/// Day of year (1..=365) for a month and day of the fixed calendar.
///
/// The day is corrected with [`check_day`] first, so February 30th maps to day 59.
///
/// # Errors
/// Returns `InvalidDateTime` for day 0 or a month outside 1..=12.
///
/// # Example
/// ```
/// # use ladybug_core::time::day_of_year;
/// assert_eq!(day_of_year(1, 1).unwrap(), 1);
/// assert_eq!(day_of_year(6, 21).unwrap(), 172);
/// assert_eq!(day_of_year(12, 31).unwrap(), 365);
/// ```
pub fn day_of_year(month: u32, day: u32) -> Result<u32> {
    let day = check_day(day, month)?;
    Ok(MONTH_START_DAY[month_index(month)?] + day)
}

/// Hour of year (1..=8760) for a month, day and hour (1..=24).
///
/// # Errors
/// Returns `InvalidDateTime` for an invalid month, day 0 or an hour outside 1..=24.
///
/// # Example
/// ```
/// # use ladybug_core::time::hour_of_year;
/// assert_eq!(hour_of_year(1, 1, 1).unwrap(), 1);
/// assert_eq!(hour_of_year(6, 21, 12).unwrap(), 4116);
/// assert_eq!(hour_of_year(12, 31, 24).unwrap(), 8760);
/// ```
pub fn hour_of_year(month: u32, day: u32, hour: u32) -> Result<u32> {
    if !(1..=24).contains(&hour) {
        return Err(Error::invalid_datetime("hour must be between 1 and 24"));
    }
    Ok((day_of_year(month, day)? - 1) * 24 + hour)
}

/// A (month, day, hour) timestamp of the fixed analysis calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarHour {
    month: u32,
    day: u32,
    hour: u32,
}

impl CalendarHour {
    /// Creates a timestamp, applying the month, day and hour corrections.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the day is 0.
    ///
    /// # Example
    /// ```
    /// # use ladybug_core::time::CalendarHour;
    /// let date = CalendarHour::new(2, 30, 0).unwrap();
    /// assert_eq!((date.month(), date.day(), date.hour()), (2, 28, 24));
    /// ```
    pub fn new(month: i32, day: u32, hour: i32) -> Result<Self> {
        let month = check_month(month);
        Ok(Self {
            month,
            day: check_day(day, month)?,
            hour: check_hour(hour),
        })
    }

    /// Creates a timestamp from an hour of year, see [`hour_to_date`].
    #[must_use]
    pub fn from_hour_of_year(hoy: u32) -> Self {
        hour_to_date(hoy)
    }

    /// Month (1..=12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Day of month.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Hour (1..=24).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Day of year (1..=365).
    #[must_use]
    pub const fn day_of_year(&self) -> u32 {
        MONTH_START_DAY[(self.month - 1) as usize] + self.day
    }

    /// Hour of year (1..=8760).
    #[must_use]
    pub const fn hour_of_year(&self) -> u32 {
        (self.day_of_year() - 1) * 24 + self.hour
    }
}

impl fmt::Display for CalendarHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:02}:00",
            self.day,
            MONTH_NAMES[(self.month - 1) as usize],
            self.hour
        )
    }
}

/// Converts an hour of year back to a calendar timestamp.
///
/// Hours on a day boundary map to hour 24 of the day that just ended. Multiples of 8760
/// (including 0) map to `31 DEC 24:00` and larger values wrap around the year.
///
/// # Example
/// ```
/// # use ladybug_core::time::hour_to_date;
/// assert_eq!(hour_to_date(4116).to_string(), "21 JUN 12:00");
/// assert_eq!(hour_to_date(24).to_string(), "1 JAN 24:00");
/// assert_eq!(hour_to_date(8760).to_string(), "31 DEC 24:00");
/// ```
#[must_use]
pub fn hour_to_date(hoy: u32) -> CalendarHour {
    let hoy = hoy % HOURS_PER_YEAR;
    if hoy == 0 {
        return CalendarHour {
            month: 12,
            day: 31,
            hour: 24,
        };
    }

    let month_index = MONTH_START_DAY
        .iter()
        .rposition(|&start| start * 24 < hoy)
        .unwrap_or(0);
    let hours_into_month = hoy - MONTH_START_DAY[month_index] * 24;
    let (day, hour) = if hours_into_month % 24 == 0 {
        (hours_into_month / 24, 24)
    } else {
        (hours_into_month / 24 + 1, hours_into_month % 24)
    };

    CalendarHour {
        month: month_index as u32 + 1,
        day,
        hour,
    }
}

/// Hours of year from `start` to `end` inclusive, wrapping across the year end.
///
/// # Example
/// ```
/// # use ladybug_core::time::{hours_in_range, CalendarHour};
/// let start = CalendarHour::new(12, 31, 23).unwrap();
/// let end = CalendarHour::new(1, 1, 2).unwrap();
/// assert_eq!(hours_in_range(start, end), vec![8759, 8760, 1, 2]);
/// ```
#[must_use]
pub fn hours_in_range(start: CalendarHour, end: CalendarHour) -> Vec<u32> {
    let (first, last) = (start.hour_of_year(), end.hour_of_year());
    if first <= last {
        (first..=last).collect()
    } else {
        (first..=HOURS_PER_YEAR).chain(1..=last).collect()
    }
}

/// Civil date to Julian date with the simplified `year % 4` leap rule.
///
/// Counts days from the 1949 epoch of the NOAA almanac algorithm. Century years are
/// treated as leap years, so dates after February 2100 drift by a day.
///
/// # Example
/// ```
/// # use ladybug_core::time::julian_day_simplified;
/// let jd = julian_day_simplified(2000, 1, 1, 12.0);
/// assert!((jd - 2_451_545.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn julian_day_simplified(year: i32, month: u32, day: u32, hour_utc: f64) -> f64 {
    let month_start = MONTH_START_DAY[(month.clamp(1, 12) - 1) as usize];
    let mut day_of_year = month_start + day;
    if year % 4 == 0 && month > 2 {
        day_of_year += 1;
    }
    let delta = year - 1949;
    let leap_days = delta / 4;
    NOAA_EPOCH_JD
        + f64::from(delta) * 365.0
        + f64::from(leap_days)
        + f64::from(day_of_year)
        + hour_utc / 24.0
}

/// Fractional hour of year of a chrono date or datetime on the fixed calendar.
///
/// February 29th is folded onto February 28th. Minutes and seconds are kept as the
/// fractional part, so 00:30 on January 1st is hour 0.5.
#[cfg(feature = "chrono")]
pub fn hour_of_year_from_datelike<D: Datelike + Timelike>(datetime: &D) -> f64 {
    let month = datetime.month();
    let day = if month == 2 {
        datetime.day().min(28)
    } else {
        datetime.day()
    };
    let day_of_year = MONTH_START_DAY[(month - 1) as usize] + day;
    f64::from((day_of_year - 1) * 24) + decimal_hour(datetime)
}

/// Hour of day as a decimal number (0.0..24.0).
#[cfg(feature = "chrono")]
pub fn decimal_hour<T: Timelike>(time: &T) -> f64 {
    f64::from(time.hour())
        + f64::from(time.minute()) / 60.0
        + f64::from(time.second()) / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_and_hour_wrapping() {
        assert_eq!(check_month(0), 12);
        assert_eq!(check_month(12), 12);
        assert_eq!(check_month(14), 2);
        assert_eq!(check_month(-1), 11);

        assert_eq!(check_hour(0), 24);
        assert_eq!(check_hour(24), 24);
        assert_eq!(check_hour(25), 1);
        assert_eq!(check_hour(13), 13);
    }

    #[test]
    fn test_day_clamping() {
        assert_eq!(check_day(30, 2).unwrap(), 28);
        assert_eq!(check_day(31, 4).unwrap(), 30);
        assert_eq!(check_day(35, 1).unwrap(), 31);
        assert_eq!(check_day(15, 9).unwrap(), 15);
        assert!(check_day(0, 1).is_err());
        assert!(check_day(1, 13).is_err());
    }

    #[test]
    fn test_hour_of_year() {
        assert_eq!(hour_of_year(1, 1, 24).unwrap(), 24);
        assert_eq!(hour_of_year(1, 2, 1).unwrap(), 25);
        assert_eq!(hour_of_year(3, 1, 1).unwrap(), 59 * 24 + 1);
        assert!(hour_of_year(1, 1, 0).is_err());
        assert!(hour_of_year(1, 1, 25).is_err());
    }

    #[test]
    fn test_hour_to_date_inverts_hour_of_year() {
        for hoy in 1..=HOURS_PER_YEAR {
            let date = hour_to_date(hoy);
            assert_eq!(date.hour_of_year(), hoy, "round trip failed for {date}");
        }
    }

    #[test]
    fn test_hour_to_date_boundaries() {
        let end_of_january = hour_to_date(744);
        assert_eq!(
            (end_of_january.month(), end_of_january.day(), end_of_january.hour()),
            (1, 31, 24)
        );
        let first_of_february = hour_to_date(745);
        assert_eq!(
            (first_of_february.month(), first_of_february.day(), first_of_february.hour()),
            (2, 1, 1)
        );
        assert_eq!(hour_to_date(0), hour_to_date(8760));
        assert_eq!(hour_to_date(8761), hour_to_date(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(CalendarHour::new(3, 5, 7).unwrap().to_string(), "5 MAR 07:00");
    }

    #[test]
    fn test_hours_in_range() {
        let start = CalendarHour::new(1, 1, 1).unwrap();
        let end = CalendarHour::new(1, 1, 3).unwrap();
        assert_eq!(hours_in_range(start, end), vec![1, 2, 3]);
        assert_eq!(hours_in_range(end, end), vec![3]);

        let all = hours_in_range(
            CalendarHour::new(2, 1, 1).unwrap(),
            CalendarHour::new(1, 31, 24).unwrap(),
        );
        assert_eq!(all.len(), HOURS_PER_YEAR as usize);
    }

    #[test]
    fn test_julian_day_leap_rule() {
        // 2013 is not a leap year: March 1st follows February 28th directly
        let feb_28 = julian_day_simplified(2013, 2, 28, 0.0);
        let mar_1 = julian_day_simplified(2013, 3, 1, 0.0);
        assert!((mar_1 - feb_28 - 1.0).abs() < 1e-9);

        // 2100 is treated as a leap year by the simplified rule
        let mar_1_2100 = julian_day_simplified(2100, 3, 1, 0.0);
        let feb_28_2100 = julian_day_simplified(2100, 2, 28, 0.0);
        assert!((mar_1_2100 - feb_28_2100 - 2.0).abs() < 1e-9);

        // Known value: 2013-03-20 12:00 UTC
        assert!((julian_day_simplified(2013, 3, 20, 12.0) - 2_456_372.0).abs() < 1e-9);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_hour_of_year_from_datelike() {
        use chrono::NaiveDate;

        let datetime = NaiveDate::from_ymd_opt(2024, 6, 21)
            .unwrap()
            .and_hms_opt(11, 30, 0)
            .unwrap();
        // Leap years are folded onto the fixed calendar
        assert!((hour_of_year_from_datelike(&datetime) - (171.0 * 24.0 + 11.5)).abs() < 1e-9);

        let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!((hour_of_year_from_datelike(&leap_day) - 58.0 * 24.0).abs() < 1e-9);
    }
}
