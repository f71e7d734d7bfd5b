//! Pierce two-node model and Standard Effective Temperature (SET*).
//!
//! Gagge, Fobelets and Berglund, 'A standard predictive index of human response to the
//! thermal environment', ASHRAE Transactions 92 (1986). The body is simulated as a core
//! and a skin node for one hour of exposure, one step per minute; SET* is the air
//! temperature of a standard environment (50 % humidity, still air, standard clothing
//! for the activity) that gives the same skin heat loss.
//!
//! [`pmv_elevated_air_speed`] uses SET* to express the cooling of air movement above
//! 0.15 m/s as an equivalent drop in air and radiant temperature, as ASHRAE-55 does.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_lines)]

use crate::comfort::check_inputs;
use crate::comfort::pmv::{PmvResult, pmv};
use crate::comfort::solver::{bisect, secant};
use crate::math::{exp, powf, powi};
use crate::psychrometrics::saturated_vapor_pressure_torr;
use crate::{Error, Result};

/// Clothing area factor per clo of the standard environment.
const KCLO: f64 = 0.25;
/// Body weight, kg.
const BODY_WEIGHT: f64 = 69.9;
/// DuBois body surface area, m².
const BODY_SURFACE_AREA: f64 = 1.8258;
/// W/m² per met.
const MET_FACTOR: f64 = 58.2;
/// Stefan-Boltzmann constant, W/(m²K⁴).
const SBC: f64 = 0.000000056697;
/// Driving coefficient for regulatory sweating, g/(m²h K).
const CSW: f64 = 170.0;
/// Driving coefficient for vasodilation, L/(m²h K).
const CDIL: f64 = 120.0;
/// Driving coefficient for vasoconstriction.
const CSTR: f64 = 0.5;
/// Neutral skin temperature, °C.
const TEMP_SKIN_NEUTRAL: f64 = 33.7;
/// Neutral core temperature, °C.
const TEMP_CORE_NEUTRAL: f64 = 36.49;
/// Neutral mean body temperature, °C.
const TEMP_BODY_NEUTRAL: f64 = 36.49;
/// Neutral skin blood flow, L/(m²h).
const SKIN_BLOOD_FLOW_NEUTRAL: f64 = 6.3;
/// Simulated exposure, minutes.
const EXPOSURE_MINUTES: usize = 60;

/// Iteration cap of the clothing temperature loop within one simulated minute.
pub const CLOTHING_MAX_ITERATIONS: usize = 1000;
/// Iteration cap of the SET* search.
pub const SEARCH_MAX_ITERATIONS: usize = 100;

/// Air speed below which no cooling effect is applied, m/s.
pub const STILL_AIR_SPEED: f64 = 0.15;

/// Upper end of the cooling effect search interval, K.
const MAX_COOLING_EFFECT: f64 = 40.0;
/// SET* match tolerance of the cooling effect search, K.
const COOLING_EFFECT_TOLERANCE: f64 = 0.001;

/// Calculates the Standard Effective Temperature.
///
/// Arguments are as for [`pmv`](crate::comfort::pmv::pmv): air and mean radiant
/// temperature in °C, air speed in m/s, relative humidity in percent, metabolic rate and
/// external work in met, clothing in clo.
///
/// # Errors
/// Returns `InvalidParameter` for inputs outside their physical range and
/// `NonConvergence` if the clothing temperature or the SET* search fails to settle.
///
/// # Example
/// ```
/// use ladybug_core::comfort::set::pierce_set;
///
/// let set = pierce_set(25.0, 25.0, 0.1, 50.0, 1.2, 0.5, 0.0).unwrap();
/// assert!((set - 25.23).abs() < 0.01);
/// ```
pub fn pierce_set(
    air_temperature: f64,
    radiant_temperature: f64,
    air_speed: f64,
    relative_humidity: f64,
    metabolic_rate: f64,
    clothing: f64,
    external_work: f64,
) -> Result<f64> {
    check_inputs(air_speed, relative_humidity, metabolic_rate, clothing)?;
    let ta = air_temperature;
    let tr = radiant_temperature;
    let met = metabolic_rate;
    let clo = clothing;
    let wme = external_work * MET_FACTOR;

    // torr
    let vp = relative_humidity * saturated_vapor_pressure_torr(ta) / 100.0;
    let av = air_speed.max(0.1);

    let mut tsk = TEMP_SKIN_NEUTRAL;
    let mut tcr = TEMP_CORE_NEUTRAL;
    let mut skin_blood_flow = SKIN_BLOOD_FLOW_NEUTRAL;
    let mut alfa = 0.1;
    let mut esk = 0.1 * met;

    // atm
    let patm = 101.325 * 0.009869;
    let rcl = 0.155 * clo;
    let facl = 1.0 + 0.15 * clo;
    let lr = 2.2 / patm;
    let rm = met * MET_FACTOR;
    let mut m = rm;

    let (wcrit, icl) = if clo <= 0.0 {
        (0.38 * powf(av, -0.29), 1.0)
    } else {
        (0.59 * powf(av, -0.08), 0.45)
    };

    let chc = (3.0 * powf(patm, 0.53)).max(8.600001 * powf(av * patm, 0.53));
    let mut chr = 4.7;
    let mut ctc = chr + chc;
    let mut ra = 1.0 / (facl * ctc);
    let mut top = (chr * tr + chc * ta) / ctc;
    let mut tcl = top + (tsk - top) / (ctc * (ra + rcl));

    let mut tcl_old = tcl;
    let mut update_radiation = true;
    let mut dry = 0.0;
    let mut pwet = 0.0;

    for _ in 0..EXPOSURE_MINUTES {
        let mut iterations = 0;
        loop {
            if update_radiation {
                tcl_old = tcl;
                chr = 4.0 * SBC * powi((tcl + tr) / 2.0 + 273.15, 3) * 0.72;
                ctc = chr + chc;
                ra = 1.0 / (facl * ctc);
                top = (chr * tr + chc * ta) / ctc;
            }
            tcl = (ra * tsk + rcl * top) / (ra + rcl);
            update_radiation = true;
            iterations += 1;
            if (tcl - tcl_old).abs() <= 0.01 {
                break;
            }
            if iterations >= CLOTHING_MAX_ITERATIONS {
                log::warn!("SET* clothing temperature did not converge for ta={ta}, tr={tr}");
                return Err(Error::non_convergence("SET clothing temperature", iterations));
            }
        }
        update_radiation = false;

        // Heat flows, W/m²
        dry = (tsk - top) / (ra + rcl);
        let hfcs = (tcr - tsk) * (5.28 + 1.163 * skin_blood_flow);
        let eres = 0.0023 * m * (44.0 - vp);
        let cres = 0.0014 * m * (34.0 - ta);
        let scr = m - hfcs - eres - cres - wme;
        let ssk = hfcs - dry - esk;

        // Thermal capacities, W·min/K
        let tcsk = 0.97 * alfa * BODY_WEIGHT;
        let tccr = 0.97 * (1.0 - alfa) * BODY_WEIGHT;
        tsk += (ssk * BODY_SURFACE_AREA) / (tcsk * 60.0);
        tcr += scr * BODY_SURFACE_AREA / (tccr * 60.0);
        let tb = alfa * tsk + (1.0 - alfa) * tcr;

        // Thermoregulatory signals
        let skin_signal = tsk - TEMP_SKIN_NEUTRAL;
        let warm_skin = skin_signal.max(0.0);
        let cold_skin = (-skin_signal).max(0.0);
        let core_signal = tcr - TEMP_CORE_NEUTRAL;
        let warm_core = core_signal.max(0.0);
        let cold_core = (-core_signal).max(0.0);
        let warm_body = (tb - TEMP_BODY_NEUTRAL).max(0.0);

        skin_blood_flow = ((SKIN_BLOOD_FLOW_NEUTRAL + CDIL * warm_core) / (1.0 + CSTR * cold_skin))
            .clamp(0.5, 90.0);
        let regulatory_sweating = (CSW * warm_body * exp(warm_skin / 10.7)).min(500.0);
        let mut ersw = 0.68 * regulatory_sweating;

        let rea = 1.0 / (lr * facl * chc);
        let recl = rcl / (lr * icl);
        let emax = (saturated_vapor_pressure_torr(tsk) - vp) / (rea + recl);
        let mut prsw = ersw / emax;
        pwet = 0.06 + 0.94 * prsw;
        let mut edif = pwet * emax - ersw;
        if pwet > wcrit {
            pwet = wcrit;
            prsw = wcrit / 0.94;
            ersw = prsw * emax;
            edif = 0.06 * (1.0 - prsw) * emax;
        }
        if emax < 0.0 {
            edif = 0.0;
            ersw = 0.0;
            pwet = wcrit;
        }
        esk = ersw + edif;

        let shivering = 19.4 * cold_skin * cold_core;
        m = rm + shivering;
        alfa = 0.0417737 + 0.7451833 / (skin_blood_flow + 0.585417);
    }

    let hsk = dry + esk;
    let w = pwet;
    let pssk = saturated_vapor_pressure_torr(tsk);

    // Standard environment
    let chrs = chr;
    let chcs = if met < 0.85 {
        3.0
    } else {
        (5.66 * powf(met - 0.85, 0.39)).max(3.0)
    };
    let ctcs = chcs + chrs;
    let rclos = 1.52 / ((met - wme / MET_FACTOR) + 0.6944) - 0.1835;
    let rcls = 0.155 * rclos;
    let facls = 1.0 + KCLO * rclos;
    let fcls = 1.0 / (1.0 + 0.155 * facls * ctcs * rclos);
    let ims = 0.45;
    let icls = ims * chcs / ctcs * (1.0 - fcls) / (chcs / ctcs - fcls * ims);
    let ras = 1.0 / (facls * ctcs);
    let reas = 1.0 / (lr * facls * chcs);
    let recls = rcls / (lr * icls);
    let hds = 1.0 / (ras + rcls);
    let hes = 1.0 / (reas + recls);

    let balance = |x: f64| {
        hsk - hds * (tsk - x) - w * hes * (pssk - 0.5 * saturated_vapor_pressure_torr(x))
    };
    let delta = 0.0001;
    let mut x = tsk - hsk / hds;
    for _ in 0..SEARCH_MAX_ITERATIONS {
        let e1 = balance(x);
        let e2 = balance(x + delta);
        let next = x - delta * e1 / (e2 - e1);
        let dx = next - x;
        x = next;
        if dx.abs() <= 0.01 {
            return Ok(x);
        }
    }
    log::warn!("SET* search did not converge for ta={ta}, tr={tr}, vel={air_speed}");
    Err(Error::non_convergence("SET", SEARCH_MAX_ITERATIONS))
}

/// PMV at elevated air speed with its SET*-based cooling effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevatedAirSpeedResult {
    /// Predicted Mean Vote at the still-air equivalent condition.
    pub pmv: f64,
    /// Predicted Percentage Dissatisfied at the still-air equivalent condition.
    pub ppd: f64,
    /// SET* of the actual condition, °C.
    pub set: f64,
    /// Air temperature of the still-air equivalent condition, °C.
    pub adjusted_air_temperature: f64,
    /// Mean radiant temperature of the still-air equivalent condition, °C.
    pub adjusted_radiant_temperature: f64,
    /// Temperature drop that still air would need to match the SET* of the actual
    /// condition, K.
    pub cooling_effect: f64,
}

/// Calculates PMV and PPD including the cooling effect of elevated air speed.
///
/// Above [`STILL_AIR_SPEED`] the cooling effect `ce` solves
/// `SET*(ta, tr, vel) == SET*(ta - ce, tr - ce, 0.15)` on `[0, 40]`, by secant search with
/// bisection as fallback, and PMV is evaluated at the still-air equivalent. At or below
/// that speed PMV is evaluated directly with zero cooling effect.
///
/// The cooling effect is always in `[0, 40]`: air movement that raises SET* (hot air,
/// cold radiant surfaces) gives zero, and cooling beyond 40 K is clamped to 40.
///
/// # Errors
/// Propagates errors of [`pierce_set`] and [`pmv`].
///
/// # Example
/// ```
/// use ladybug_core::comfort::set::pmv_elevated_air_speed;
///
/// let result = pmv_elevated_air_speed(29.0, 29.0, 0.8, 50.0, 1.2, 0.5, 0.0).unwrap();
/// assert!((result.cooling_effect - 3.24).abs() < 0.01);
/// assert!(result.pmv.abs() < 0.5);
/// ```
pub fn pmv_elevated_air_speed(
    air_temperature: f64,
    radiant_temperature: f64,
    air_speed: f64,
    relative_humidity: f64,
    metabolic_rate: f64,
    clothing: f64,
    external_work: f64,
) -> Result<ElevatedAirSpeedResult> {
    let set = pierce_set(
        air_temperature,
        radiant_temperature,
        air_speed,
        relative_humidity,
        metabolic_rate,
        clothing,
        external_work,
    )?;

    let cooling_effect = if air_speed <= STILL_AIR_SPEED {
        0.0
    } else {
        let residual = |ce: f64| -> Result<f64> {
            Ok(set
                - pierce_set(
                    air_temperature - ce,
                    radiant_temperature - ce,
                    STILL_AIR_SPEED,
                    relative_humidity,
                    metabolic_rate,
                    clothing,
                    external_work,
                )?)
        };
        solve_cooling_effect(residual)?
    };

    let adjusted_air_temperature = air_temperature - cooling_effect;
    let adjusted_radiant_temperature = radiant_temperature - cooling_effect;
    let PmvResult { pmv, ppd, .. } = pmv(
        adjusted_air_temperature,
        adjusted_radiant_temperature,
        air_speed.min(STILL_AIR_SPEED),
        relative_humidity,
        metabolic_rate,
        clothing,
        external_work,
    )?;
    Ok(ElevatedAirSpeedResult {
        pmv,
        ppd,
        set,
        adjusted_air_temperature,
        adjusted_radiant_temperature,
        cooling_effect,
    })
}

/// Finds the cooling effect in `[0, MAX_COOLING_EFFECT]` where `residual` vanishes.
///
/// `residual(ce)` is the elevated SET* minus the still-air SET* at `ta - ce`. It rises
/// with `ce`, so a non-negative value at zero means the air movement does not cool and a
/// negative value at the upper bound means the cooling saturates there.
fn solve_cooling_effect<F>(residual: F) -> Result<f64>
where
    F: Fn(f64) -> Result<f64>,
{
    if residual(0.0)? >= 0.0 {
        return Ok(0.0);
    }
    if let Some(ce) = secant(0.0, MAX_COOLING_EFFECT, &residual, COOLING_EFFECT_TOLERANCE)
        .filter(|ce| (0.0..=MAX_COOLING_EFFECT).contains(ce))
    {
        return Ok(ce);
    }
    if residual(MAX_COOLING_EFFECT)? < 0.0 {
        log::warn!("cooling effect exceeds {MAX_COOLING_EFFECT} K; clamping");
        return Ok(MAX_COOLING_EFFECT);
    }
    log::warn!("cooling effect secant search failed; using bisection");
    bisect(0.0, MAX_COOLING_EFFECT, &residual, COOLING_EFFECT_TOLERANCE, 0.0)
}
