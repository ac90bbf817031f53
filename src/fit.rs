//! Construction of a cubic spline: solving for the second derivative at each knot.
//!
//! Continuity of the first derivative at every interior knot, plus one condition
//! at each end, gives a tridiagonal system in the knot second derivatives. It is
//! solved here with a single decomposition sweep and a back-substitution,
//! using the output slice itself to hold the decomposed factors.
//!
//! ```rust
//! use cspline::{fit, Boundary};
//!
//! let x = [0.0_f64, 2.0, 5.0, 6.0, 8.0, 10.0];
//! let y = [0.0_f64, 1.0, 3.0, 6.0, 7.0, 10.0];
//! let y2 = fit::fit(&x, &y, Boundary::Natural, Boundary::Natural).unwrap();
//!
//! // Natural ends have zero curvature
//! assert_eq!(y2[0], 0.0);
//! assert_eq!(y2[5], 0.0);
//! ```
//!
//! References
//! * https://en.wikipedia.org/wiki/Tridiagonal_matrix_algorithm
use log::debug;
use num_traits::Float;

use crate::{Boundary, SplineError};

/// Solve for the second derivatives of the interpolating spline at each knot,
/// without allocating.
///
/// `x` must be strictly increasing. Checking this is expensive, and is left to the user;
/// unsorted or repeated knots produce meaningless (often non-finite) output rather than an error.
///
/// `work` is scratch storage for the right-hand side of the decomposed system,
/// and must hold at least `x.len()` entries. Its contents on return are unspecified.
///
/// # Errors
/// * If `y` or `y2` differ in length from `x`, or `work` is shorter than `x`
/// * If there are fewer than 2 knots
pub fn fit_into<T: Float>(
    x: &[T],
    y: &[T],
    lower: Boundary<T>,
    upper: Boundary<T>,
    y2: &mut [T],
    work: &mut [T],
) -> Result<(), SplineError> {
    let n = x.len();
    if y.len() != n || y2.len() != n || work.len() < n {
        return Err(SplineError::LengthMismatch);
    }
    if n < 2 {
        return Err(SplineError::TooFewKnots { n });
    }
    debug!(
        "Fitting cubic spline on {n} knots (natural lower: {}, natural upper: {})",
        lower.is_natural(),
        upper.is_natural()
    );

    let u = &mut work[..n];
    let zero = T::zero();
    let one = T::one();
    let two = one + one;
    let three = two + one;
    let six = three + three;
    let half = one / two;

    // Lower boundary
    match lower {
        Boundary::Natural => {
            y2[0] = zero;
            u[0] = zero;
        }
        Boundary::Clamped(yp1) => {
            let h = x[1] - x[0];
            y2[0] = -half;
            u[0] = (three / h) * ((y[1] - y[0]) / h - yp1);
        }
    }

    // Decomposition sweep.
    // y2 and u hold the decomposed factors until back-substitution.
    for i in 1..n - 1 {
        let sig = (x[i] - x[i - 1]) / (x[i + 1] - x[i - 1]);
        let p = sig * y2[i - 1] + two;
        y2[i] = (sig - one) / p;

        let ddy = (y[i + 1] - y[i]) / (x[i + 1] - x[i]) - (y[i] - y[i - 1]) / (x[i] - x[i - 1]);
        u[i] = (six * ddy / (x[i + 1] - x[i - 1]) - sig * u[i - 1]) / p;
    }

    // Upper boundary
    let (qn, un) = match upper {
        Boundary::Natural => (zero, zero),
        Boundary::Clamped(ypn) => {
            let h = x[n - 1] - x[n - 2];
            (half, (three / h) * (ypn - (y[n - 1] - y[n - 2]) / h))
        }
    };
    y2[n - 1] = (un - qn * u[n - 2]) / (qn * y2[n - 2] + one);

    // Back-substitution
    for k in (0..n - 1).rev() {
        y2[k] = y2[k] * y2[k + 1] + u[k];
    }

    Ok(())
}

/// Solve for knot second derivatives, allocating for the output and scratch space.
///
/// # Errors
/// * If `x` and `y` differ in length
/// * If there are fewer than 2 knots
#[cfg(feature = "std")]
pub fn fit<T: Float>(
    x: &[T],
    y: &[T],
    lower: Boundary<T>,
    upper: Boundary<T>,
) -> Result<Vec<T>, SplineError> {
    let mut y2 = vec![T::zero(); x.len()];
    let mut work = vec![T::zero(); x.len()];
    fit_into(x, y, lower, upper, &mut y2, &mut work)?;
    Ok(y2)
}

/// Solve for knot second derivatives using raw first derivatives at each end.
///
/// An end derivative with magnitude of at least [`crate::NATURAL_THRESHOLD`]
/// (for example `1e30`) requests a natural boundary on that end;
/// see [`Boundary::from_derivative`].
///
/// # Errors
/// * If `y` or `y2` differ in length from `x`
/// * If there are fewer than 2 knots
#[cfg(feature = "std")]
pub fn spline<T: Float>(x: &[T], y: &[T], yp1: T, ypn: T, y2: &mut [T]) -> Result<(), SplineError> {
    let mut work = vec![T::zero(); x.len()];
    fit_into(
        x,
        y,
        Boundary::from_derivative(yp1),
        Boundary::from_derivative(ypn),
        y2,
        &mut work,
    )
}
