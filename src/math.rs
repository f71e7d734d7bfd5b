//! Float helpers for the solar and comfort models.
//!
//! Every transcendental function goes through this module so the crate builds on the
//! native `f64` methods under `std` and on `libm` otherwise.

#![allow(clippy::many_single_char_names)]

pub const PI: f64 = core::f64::consts::PI;

#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

#[inline]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Wraps an angle into [0, 360) degrees.
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    normalize(degrees, 360.0)
}

/// Floored modulo into `[0, period)` for a positive `period`.
pub fn normalize(value: f64, period: f64) -> f64 {
    let normalized = value % period;
    if normalized >= 0.0 {
        return normalized;
    }
    // Tiny negative remainders round up to the period itself
    let wrapped = normalized + period;
    if wrapped < period { wrapped } else { 0.0 }
}

/// Horner evaluation of `c[0] + c[1] x + c[2] x² + ...`; an empty slice gives 0.
pub fn polynomial(coeffs: &[f64], x: f64) -> f64 {
    coeffs
        .iter()
        .rev()
        .fold(0.0, |acc, &coeff| mul_add(acc, x, coeff))
}

/// Defines `fn $name(x) -> f64` as `x.$method()` under `std` and `libm::$libm(x)` otherwise.
macro_rules! unary {
    ($($name:ident => $method:ident / $libm:ident),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(x: f64) -> f64 {
                #[cfg(feature = "std")]
                return x.$method();

                #[cfg(not(feature = "std"))]
                return libm::$libm(x);
            }
        )*
    };
}

unary! {
    sin => sin / sin,
    cos => cos / cos,
    tan => tan / tan,
    asin => asin / asin,
    acos => acos / acos,
    sqrt => sqrt / sqrt,
    floor => floor / floor,
    exp => exp / exp,
    ln => ln / log,
}

#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

#[inline]
pub fn powf(x: f64, y: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.powf(y);

    #[cfg(not(feature = "std"))]
    return libm::pow(x, y);
}

/// `x * a + b` with a single rounding.
#[inline]
pub fn mul_add(x: f64, a: f64, b: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.mul_add(a, b);

    #[cfg(not(feature = "std"))]
    return libm::fma(x, a, b);
}

#[inline]
pub fn powi(x: f64, n: i32) -> f64 {
    #[cfg(feature = "std")]
    return x.powi(n);

    #[cfg(not(feature = "std"))]
    return libm::pow(x, f64::from(n));
}
