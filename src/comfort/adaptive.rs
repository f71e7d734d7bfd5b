//! Adaptive thermal comfort after ASHRAE-55 and EN-15251.
//!
//! The neutral operative temperature follows the prevailing outdoor running-mean
//! temperature. Each standard defines a linear model over a band of running means (10 to
//! 33.5 °C for ASHRAE-55, 10 to 30 °C for EN-15251). Above the band the running mean is
//! held at the upper limit. Below 10 °C neither standard applies; a Gaussian-weighted
//! fit that meets the linear model at 10 °C is used instead and should be read as an
//! estimate.
//!
//! Conditioned buildings shift the neutral temperature towards `0.09 * rm + 22.6`; the
//! conditioning level blends the two.

use crate::error::check_range;
use crate::math::{exp, ln, powi};
use crate::{Error, Result};

/// Lower end of both standards' running-mean band, °C.
const BAND_LOWER: f64 = 10.0;
/// Upper end of the ASHRAE-55 running-mean band, °C.
const ASHRAE_BAND_UPPER: f64 = 33.5;
/// Upper end of the EN-15251 running-mean band, °C.
const EN_BAND_UPPER: f64 = 30.0;

/// Exponential weight of the EN-15251 running mean.
pub const EN_RUNNING_MEAN_ALPHA: f64 = 0.8;

/// ASHRAE-55 acceptability limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AshraeAcceptability {
    /// 80 % of occupants satisfied, ±3.5 K.
    #[default]
    Eighty,
    /// 90 % of occupants satisfied, ±2.5 K.
    Ninety,
}

impl AshraeAcceptability {
    /// Half-width of the comfort band, K.
    #[must_use]
    pub const fn offset(self) -> f64 {
        match self {
            Self::Eighty => 3.5,
            Self::Ninety => 2.5,
        }
    }
}

/// EN-15251 building category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnComfortClass {
    /// High expectation: sensitive and fragile occupants.
    I,
    /// Normal expectation: new buildings and renovations.
    #[default]
    II,
    /// Moderate expectation: existing buildings.
    III,
}

impl EnComfortClass {
    /// Offsets `(below, above)` the comfort temperature, K.
    #[must_use]
    pub const fn offsets(self) -> (f64, f64) {
        match self {
            Self::I => (3.0, 2.0),
            Self::II => (4.0, 3.0),
            Self::III => (5.0, 4.0),
        }
    }
}

/// Settings shared by the adaptive models.
///
/// # Example
/// ```
/// use ladybug_core::comfort::adaptive::{AdaptiveOptions, AshraeAcceptability};
///
/// let options = AdaptiveOptions::default()
///     .with_acceptability(AshraeAcceptability::Ninety)
///     .with_conditioning(0.5)
///     .unwrap();
/// assert_eq!(options.conditioning(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AdaptiveOptions {
    acceptability: AshraeAcceptability,
    class: EnComfortClass,
    conditioning: f64,
}

impl AdaptiveOptions {
    /// Sets the ASHRAE-55 acceptability limit.
    #[must_use]
    pub const fn with_acceptability(mut self, acceptability: AshraeAcceptability) -> Self {
        self.acceptability = acceptability;
        self
    }

    /// Sets the EN-15251 category.
    #[must_use]
    pub const fn with_class(mut self, class: EnComfortClass) -> Self {
        self.class = class;
        self
    }

    /// Sets the conditioning level, 0 for free-running and 1 for fully conditioned.
    ///
    /// # Errors
    /// Returns `InvalidParameter` outside 0..=1.
    pub fn with_conditioning(mut self, conditioning: f64) -> Result<Self> {
        check_range("conditioning level", conditioning, 0.0, 1.0)?;
        self.conditioning = conditioning;
        Ok(self)
    }

    /// ASHRAE-55 acceptability limit.
    #[must_use]
    pub const fn acceptability(&self) -> AshraeAcceptability {
        self.acceptability
    }

    /// EN-15251 category.
    #[must_use]
    pub const fn class(&self) -> EnComfortClass {
        self.class
    }

    /// Conditioning level.
    #[must_use]
    pub const fn conditioning(&self) -> f64 {
        self.conditioning
    }
}

/// Outcome of an adaptive comfort evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveResult {
    /// Operative temperature, the mean of air and radiant temperature, °C.
    pub operative_temperature: f64,
    /// Neutral operative temperature, °C.
    pub comfort_temperature: f64,
    /// Operative minus neutral temperature, K.
    pub deviation: f64,
    /// Lower limit of the comfort band, °C.
    pub lower_limit: f64,
    /// Upper limit of the comfort band including any air speed allowance, °C.
    pub upper_limit: f64,
    /// True when the operative temperature lies strictly within the band.
    pub acceptable: bool,
    /// -1 too cold, 0 acceptable, 1 too warm.
    pub direction: i8,
}

impl AdaptiveResult {
    fn new(operative_temperature: f64, comfort_temperature: f64, lower: f64, upper: f64) -> Self {
        let acceptable = operative_temperature > lower && operative_temperature < upper;
        let direction = if acceptable {
            0
        } else if operative_temperature <= lower {
            -1
        } else {
            1
        };
        Self {
            operative_temperature,
            comfort_temperature,
            deviation: operative_temperature - comfort_temperature,
            lower_limit: lower,
            upper_limit: upper,
            acceptable,
            direction,
        }
    }
}

/// Fit used below the standards' running-mean band.
fn cold_climate_neutral(running_mean: f64) -> f64 {
    let x = running_mean - 22.0;
    24.024 + 0.295 * x * exp(-powi(x / 33.941125, 2))
}

fn neutral_temperature(
    running_mean: f64,
    upper_band: f64,
    free_running: fn(f64) -> f64,
    conditioning: f64,
    standard: &str,
) -> f64 {
    let (free, running_mean) = if running_mean < BAND_LOWER {
        log::warn!(
            "{standard} running mean {running_mean} °C below {BAND_LOWER} °C, extrapolating"
        );
        (cold_climate_neutral(running_mean), running_mean)
    } else {
        if running_mean > upper_band {
            log::warn!(
                "{standard} running mean {running_mean} °C above {upper_band} °C, clamping"
            );
        }
        let clamped = running_mean.min(upper_band);
        (free_running(clamped), clamped)
    };
    (1.0 - conditioning) * free + conditioning * (0.09 * running_mean + 22.6)
}

/// Evaluates ASHRAE-55 adaptive comfort.
///
/// # Arguments
/// * `air_temperature` - Indoor air temperature in °C
/// * `radiant_temperature` - Mean radiant temperature in °C
/// * `running_mean` - Prevailing mean outdoor temperature in °C
/// * `air_speed` - Indoor air speed in m/s
///
/// At operative temperatures of 25 °C and above, air speeds of 0.6 m/s or more raise the
/// upper limit by 1.2, 1.8 or 2.2 K.
///
/// # Example
/// ```
/// use ladybug_core::comfort::adaptive::{ashrae55, AdaptiveOptions};
///
/// let result = ashrae55(24.0, 26.0, 20.0, 0.1, &AdaptiveOptions::default());
/// assert!((result.comfort_temperature - 24.0).abs() < 1e-9);
/// assert!(result.acceptable);
/// ```
#[must_use]
pub fn ashrae55(
    air_temperature: f64,
    radiant_temperature: f64,
    running_mean: f64,
    air_speed: f64,
    options: &AdaptiveOptions,
) -> AdaptiveResult {
    let operative = (air_temperature + radiant_temperature) / 2.0;
    let comfort = neutral_temperature(
        running_mean,
        ASHRAE_BAND_UPPER,
        |rm| 0.31 * rm + 17.8,
        options.conditioning,
        "ASHRAE-55",
    );
    let cooling_effect = if operative >= 25.0 && air_speed >= 0.6 {
        if air_speed < 0.9 {
            1.2
        } else if air_speed < 1.2 {
            1.8
        } else {
            2.2
        }
    } else {
        0.0
    };
    let offset = options.acceptability.offset();
    AdaptiveResult::new(
        operative,
        comfort,
        comfort - offset,
        comfort + offset + cooling_effect,
    )
}

/// Evaluates EN-15251 adaptive comfort.
///
/// Arguments are as for [`ashrae55`]. From an operative temperature of 25 °C, air speeds
/// of 0.2 m/s or more raise the upper limit by `1.7856 * ln(v) + 2.9835` K.
#[must_use]
pub fn en15251(
    air_temperature: f64,
    radiant_temperature: f64,
    running_mean: f64,
    air_speed: f64,
    options: &AdaptiveOptions,
) -> AdaptiveResult {
    let operative = (air_temperature + radiant_temperature) / 2.0;
    let comfort = neutral_temperature(
        running_mean,
        EN_BAND_UPPER,
        |rm| 0.33 * rm + 18.8,
        options.conditioning,
        "EN-15251",
    );
    let cooling_effect = if air_speed >= 0.2 && operative >= 25.0 {
        1.7856 * ln(air_speed) + 2.9835
    } else {
        0.0
    };
    let (below, above) = options.class.offsets();
    AdaptiveResult::new(
        operative,
        comfort,
        comfort - below,
        comfort + above + cooling_effect,
    )
}

/// ASHRAE-55 prevailing mean outdoor temperature: the arithmetic mean of daily mean
/// temperatures, most recent day first. At most the 30 most recent days are used.
///
/// # Errors
/// Returns `InvalidParameter` with fewer than 7 days.
pub fn running_mean_ashrae(daily_means: &[f64]) -> Result<f64> {
    if daily_means.len() < 7 {
        return Err(Error::invalid_parameter("days of history", daily_means.len() as f64));
    }
    let days = &daily_means[..daily_means.len().min(30)];
    Ok(days.iter().sum::<f64>() / days.len() as f64)
}

/// EN-15251 running mean: daily mean temperatures, most recent day first, weighted by
/// powers of [`EN_RUNNING_MEAN_ALPHA`] and normalized by the sum of the weights.
///
/// # Errors
/// Returns `InvalidParameter` for an empty history.
///
/// # Example
/// ```
/// use ladybug_core::comfort::adaptive::running_mean_en15251;
///
/// let rm = running_mean_en15251(&[20.0, 20.0, 20.0]).unwrap();
/// assert!((rm - 20.0).abs() < 1e-12);
/// ```
pub fn running_mean_en15251(daily_means: &[f64]) -> Result<f64> {
    if daily_means.is_empty() {
        return Err(Error::invalid_parameter("days of history", 0.0));
    }
    let mut weight = 1.0;
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    for &temperature in daily_means {
        weighted_sum += weight * temperature;
        weight_sum += weight;
        weight *= EN_RUNNING_MEAN_ALPHA;
    }
    Ok(weighted_sum / weight_sum)
}
