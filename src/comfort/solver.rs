//! One-dimensional root finding for the comfort models.
//!
//! The residual functions may themselves fail (an inner model not converging), so they
//! return [`Result`]. The secant search treats any failure as "no root found" and leaves
//! the decision to the caller; bisection propagates it.

use crate::{Error, Result};

/// Iteration cap of the secant search.
pub const SECANT_MAX_ITERATIONS: usize = 100;

/// Iteration cap of the bisection search.
pub const BISECTION_MAX_ITERATIONS: usize = 200;

/// Secant search for a root of `f`, starting from `a` and `b`.
///
/// Returns `None` if no point with `|f(x)| < epsilon` is found within
/// [`SECANT_MAX_ITERATIONS`], if an iterate is not finite, or if `f` fails.
///
/// # Example
/// ```
/// use ladybug_core::comfort::solver::secant;
///
/// let root = secant(0.0, 2.0, |x| Ok(x * x - 2.0), 1e-9).unwrap();
/// assert!((root - 2.0_f64.sqrt()).abs() < 1e-9);
/// ```
pub fn secant<F>(mut a: f64, mut b: f64, f: F, epsilon: f64) -> Option<f64>
where
    F: Fn(f64) -> Result<f64>,
{
    let mut fa = f(a).ok()?;
    if fa.abs() <= epsilon {
        return Some(a);
    }
    let mut fb = f(b).ok()?;
    if fb.abs() <= epsilon {
        return Some(b);
    }
    for _ in 0..SECANT_MAX_ITERATIONS {
        let slope = (fb - fa) / (b - a);
        let c = b - fb / slope;
        if !c.is_finite() {
            return None;
        }
        let fc = f(c).ok()?;
        if fc.abs() < epsilon {
            return Some(c);
        }
        (a, fa) = (b, fb);
        (b, fb) = (c, fc);
    }
    None
}

/// Bisection search for `f(x) == target` on `[a, b]`, stopping once the bracket is
/// narrower than `2 * epsilon`.
///
/// # Errors
/// Returns `NonConvergence` if the bracket does not contain a sign change of
/// `f(x) - target`, and propagates any failure of `f`.
///
/// # Example
/// ```
/// use ladybug_core::comfort::solver::bisect;
///
/// let root = bisect(0.0, 4.0, |x| Ok(x * x), 1e-6, 2.0).unwrap();
/// assert!((root - 2.0_f64.sqrt()).abs() < 1e-5);
/// ```
pub fn bisect<F>(mut a: f64, mut b: f64, f: F, epsilon: f64, target: f64) -> Result<f64>
where
    F: Fn(f64) -> Result<f64>,
{
    let mut fa = f(a)? - target;
    let fb = f(b)? - target;
    if fa * fb > 0.0 || fa.is_nan() || fb.is_nan() {
        return Err(Error::non_convergence("bisection", 0));
    }
    let mut iterations = 0;
    while (b - a).abs() > 2.0 * epsilon {
        if iterations == BISECTION_MAX_ITERATIONS {
            return Err(Error::non_convergence("bisection", iterations));
        }
        iterations += 1;
        let mid = (a + b) / 2.0;
        let fm = f(mid)? - target;
        if fm == 0.0 {
            return Ok(mid);
        }
        if fa * fm < 0.0 {
            b = mid;
        } else {
            a = mid;
            fa = fm;
        }
    }
    Ok((a + b) / 2.0)
}
