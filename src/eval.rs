//! Evaluation of a fitted cubic spline at observation points.
//!
//! [`splint`] locates the bracketing knot interval by walking a caller-owned
//! cursor forward from its previous position, which makes a sweep over
//! sorted observation points cost amortized O(1) per point.
//!
//! The cursor only moves forward. Before querying out of order, or before
//! starting a new sweep, the caller must set it back to `0`; otherwise the
//! bracket found may be to the right of the observation point, and the result
//! is an extrapolation of the wrong cubic.
//!
//! ```rust
//! use cspline::{eval, fit, Boundary};
//!
//! let x = [0.0_f64, 2.0, 5.0, 6.0, 8.0, 10.0];
//! let y = [0.0_f64, 1.0, 3.0, 6.0, 7.0, 10.0];
//! let y2 = fit::fit(&x, &y, Boundary::Natural, Boundary::Natural).unwrap();
//!
//! let mut cursor = 0;
//! let at_knot = eval::splint(&x, &y, &y2, 5.0, &mut cursor).unwrap();
//! assert_eq!(at_knot, 3.0);
//! assert_eq!(cursor, 1); // Bracket is [2.0, 5.0]
//! ```
use num_traits::Float;

use crate::SplineError;

/// Evaluate the spline at `loc`, starting the bracket search at `cursor` and leaving
/// `cursor` at the lower knot of the bracket that was used.
///
/// Observation points beyond the last knot are extrapolated with the last cubic,
/// and points before the first knot with the first cubic.
///
/// # Errors
/// * If `y` or `y2` differ in length from `x`
/// * If there are fewer than 2 knots
/// * If the bracket has zero width, which means two consecutive knots share an x value
#[inline]
pub fn splint<T: Float>(
    x: &[T],
    y: &[T],
    y2: &[T],
    loc: T,
    cursor: &mut usize,
) -> Result<T, SplineError> {
    let n = x.len();
    if y.len() != n || y2.len() != n {
        return Err(SplineError::LengthMismatch);
    }
    if n < 2 {
        return Err(SplineError::TooFewKnots { n });
    }

    // Maximum index for the lower knot of a bracket
    let last = n - 2;
    let mut klo = (*cursor).min(last);
    while klo < last && x[klo + 1] < loc {
        klo += 1;
    }
    *cursor = klo;

    segment(x, y, y2, klo, loc)
}

/// Evaluate the spline, terminating the process with a diagnostic on stderr
/// if evaluation fails.
///
/// This is the behavior of the classic routine, and is appropriate for
/// top-level programs that have no way to recover from bad knots.
#[cfg(feature = "std")]
pub fn splint_or_exit<T: Float>(x: &[T], y: &[T], y2: &[T], loc: T, cursor: &mut usize) -> T {
    match splint(x, y, y2, loc, cursor) {
        Ok(v) => v,
        Err(err) => exit_with(err),
    }
}

/// Report a spline error on stderr and exit with status 1.
#[cfg(feature = "std")]
pub fn exit_with(err: SplineError) -> ! {
    eprint!("{}", fatal_report(&err));
    std::process::exit(1)
}

/// The diagnostic printed before exiting on an unrecoverable spline error.
#[cfg(feature = "std")]
pub fn fatal_report(err: &SplineError) -> String {
    format!("Cubic spline run-time error...\n{err}\n...now exiting to system...\n")
}

/// Evaluate the cubic on the bracket `[x[klo], x[klo + 1]]`.
#[inline]
pub(crate) fn segment<T: Float>(
    x: &[T],
    y: &[T],
    y2: &[T],
    klo: usize,
    loc: T,
) -> Result<T, SplineError> {
    let khi = klo + 1;
    let (h, a, b) = weights(x, klo, loc)?;
    let two = T::one() + T::one();
    let six = two * two + two;

    Ok(a * y[klo]
        + b * y[khi]
        + ((a * a * a - a) * y2[klo] + (b * b * b - b) * y2[khi]) * (h * h) / six)
}

/// Width of the bracket, and the normalized distances of `loc` from its
/// right and left ends.
#[inline]
pub(crate) fn weights<T: Float>(x: &[T], klo: usize, loc: T) -> Result<(T, T, T), SplineError> {
    let h = x[klo + 1] - x[klo];
    if h == T::zero() {
        return Err(SplineError::DuplicateAbscissa { index: klo });
    }
    let a = (x[klo + 1] - loc) / h;
    let b = (loc - x[klo]) / h;
    Ok((h, a, b))
}
