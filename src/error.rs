//! Error types for the environmental analysis routines.

use core::fmt;

/// Result of a fallible calculation.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during solar, irradiance and comfort calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Site latitude outside -90..=90 degrees.
    InvalidLatitude {
        /// Rejected latitude.
        value: f64,
    },
    /// Site longitude outside -180..=180 degrees.
    InvalidLongitude {
        /// Rejected longitude.
        value: f64,
    },
    /// Invalid calendar input (day, month, hour or day of year).
    InvalidDateTime {
        /// Which calendar constraint was violated.
        message: &'static str,
    },
    /// Invalid atmospheric turbidity for the sky model (must be at least 1).
    InvalidTurbidity {
        /// The invalid turbidity value provided.
        value: f64,
    },
    /// Unknown PV module mounting type index.
    InvalidModuleType {
        /// The module type index provided.
        value: u8,
    },
    /// A numeric input outside its physical or model domain.
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The invalid value provided.
        value: f64,
    },
    /// An iterative solver did not reach its tolerance within the iteration cap.
    NonConvergence {
        /// Name of the routine that gave up.
        routine: &'static str,
        /// Number of iterations performed.
        iterations: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => write!(f, "latitude {value}° outside -90°..=90°"),
            Self::InvalidLongitude { value } => {
                write!(f, "longitude {value}° outside -180°..=180°")
            }
            Self::InvalidDateTime { message } => write!(f, "invalid calendar input: {message}"),
            Self::InvalidTurbidity { value } => {
                write!(f, "invalid turbidity {value} (must be at least 1)")
            }
            Self::InvalidModuleType { value } => {
                write!(f, "invalid module type {value} (must be 0 to 3)")
            }
            Self::InvalidParameter { name, value } => write!(f, "invalid {name}: {value}"),
            Self::NonConvergence {
                routine,
                iterations,
            } => write!(f, "{routine} did not converge after {iterations} iterations"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Latitude out of range.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Longitude out of range.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Calendar input rejected, with the reason.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates an invalid turbidity error.
    #[must_use]
    pub const fn invalid_turbidity(value: f64) -> Self {
        Self::InvalidTurbidity { value }
    }

    /// Creates an invalid module type error.
    #[must_use]
    pub const fn invalid_module_type(value: u8) -> Self {
        Self::InvalidModuleType { value }
    }

    /// Creates an invalid parameter error.
    #[must_use]
    pub const fn invalid_parameter(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }

    /// Creates a non-convergence error.
    #[must_use]
    pub const fn non_convergence(routine: &'static str, iterations: usize) -> Self {
        Self::NonConvergence {
            routine,
            iterations,
        }
    }
}

/// Validates a site position: latitude in -90..=90 and longitude in -180..=180 degrees.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude`, latitude checked first. NaN is
/// rejected.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates a time zone offset in hours (-12 to +14).
///
/// # Errors
/// Returns `InvalidParameter` for offsets outside the civil range.
pub fn check_time_zone(time_zone: f64) -> Result<()> {
    if !(-12.0..=14.0).contains(&time_zone) {
        return Err(Error::invalid_parameter("time zone", time_zone));
    }
    Ok(())
}

/// Validates that a value is finite and not negative.
///
/// # Errors
/// Returns `InvalidParameter` naming `name` otherwise.
pub fn check_non_negative(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::invalid_parameter(name, value));
    }
    Ok(())
}

/// Validates that a value lies in the closed interval `[min, max]`.
///
/// # Errors
/// Returns `InvalidParameter` naming `name` otherwise (including NaN).
pub fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(Error::invalid_parameter(name, value));
    }
    Ok(())
}
