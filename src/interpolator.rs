//! Cubic spline interpolator over borrowed knots and second derivatives.
//!
//! ```rust
//! use cspline::{fit, Boundary, CubicSpline};
//!
//! let x = [0.0_f64, 2.0, 5.0, 6.0, 8.0, 10.0];
//! let y = [0.0_f64, 1.0, 3.0, 6.0, 7.0, 10.0];
//! let y2 = fit::fit(&x, &y, Boundary::Natural, Boundary::Natural).unwrap();
//!
//! let spline = CubicSpline::new(&x, &y, &y2).unwrap();
//!
//! // Observation points in any order
//! let obs = [9.0, 0.5, 5.0, 3.3];
//! let mut out = [0.0; 4];
//! spline.eval(&obs, &mut out).unwrap();
//! assert_eq!(out[2], 3.0);
//! ```
use log::trace;
use num_traits::Float;

use crate::eval::{segment, splint, weights};
use crate::SplineError;

/// A fitted cubic spline, borrowing its knots and their second derivatives.
///
/// Assumes `x` is strictly increasing. Checking this is expensive, and is
/// left to the user; a repeated knot is reported only when an observation
/// point lands in the zero-width interval it creates.
///
/// Operation Complexity
/// * O(log2(n)) for a single observation point, via bisection
/// * Amortized O(1) per point for sorted batches, via a forward-walking cursor
///
/// Memory Complexity
/// * No allocation, except in `eval_alloc`
#[derive(Clone, Copy, Debug)]
pub struct CubicSpline<'a, T: Float> {
    /// Knot locations, size n
    x: &'a [T],

    /// Knot values, size n
    y: &'a [T],

    /// Second derivative at each knot, size n
    y2: &'a [T],
}

impl<'a, T: Float> CubicSpline<'a, T> {
    /// Bundle knots with their fitted second derivatives.
    ///
    /// # Errors
    /// * If `y` or `y2` differ in length from `x`
    /// * If there are fewer than 2 knots
    pub fn new(x: &'a [T], y: &'a [T], y2: &'a [T]) -> Result<Self, SplineError> {
        let n = x.len();
        if y.len() != n || y2.len() != n {
            return Err(SplineError::LengthMismatch);
        }
        if n < 2 {
            return Err(SplineError::TooFewKnots { n });
        }
        Ok(Self { x, y, y2 })
    }

    /// Number of knots
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false, since construction requires at least 2 knots
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Knot locations and values
    pub fn knots(&self) -> (&'a [T], &'a [T]) {
        (self.x, self.y)
    }

    /// Second derivative of the interpolant at each knot
    pub fn second_derivatives(&self) -> &'a [T] {
        self.y2
    }

    /// Evaluate the interpolant at a single observation point.
    ///
    /// # Errors
    /// * If the bracketing interval has zero width
    #[inline]
    pub fn eval_one(&self, loc: T) -> Result<T, SplineError> {
        segment(self.x, self.y, self.y2, self.bracket(loc), loc)
    }

    /// Evaluate the interpolant at a set of observation points.
    ///
    /// Runs of non-decreasing observation points share a search cursor;
    /// the cursor is reset whenever an observation point steps backward,
    /// so the output matches [`Self::eval_one`] for any ordering.
    ///
    /// # Errors
    /// * If `locs` and `out` differ in length
    /// * If any bracketing interval has zero width
    pub fn eval(&self, locs: &[T], out: &mut [T]) -> Result<(), SplineError> {
        if locs.len() != out.len() {
            return Err(SplineError::LengthMismatch);
        }

        let mut cursor = 0;
        for i in 0..locs.len() {
            if i > 0 && locs[i] < locs[i - 1] {
                trace!("Observation point {i} steps backward; resetting search cursor");
                cursor = 0;
            }
            out[i] = splint(self.x, self.y, self.y2, locs[i], &mut cursor)?;
        }

        Ok(())
    }

    /// Evaluate the interpolant at a set of observation points, allocating
    /// for the output values for convenience.
    ///
    /// # Errors
    /// * If any bracketing interval has zero width
    #[cfg(feature = "std")]
    pub fn eval_alloc(&self, locs: &[T]) -> Result<Vec<T>, SplineError> {
        let mut out = vec![T::zero(); locs.len()];
        self.eval(locs, &mut out)?;
        Ok(out)
    }

    /// First derivative of the interpolant at an observation point.
    ///
    /// # Errors
    /// * If the bracketing interval has zero width
    pub fn derivative_one(&self, loc: T) -> Result<T, SplineError> {
        let klo = self.bracket(loc);
        let khi = klo + 1;
        let (h, a, b) = weights(self.x, klo, loc)?;

        let one = T::one();
        let three = one + one + one;
        let six = three + three;
        let secant = (self.y[khi] - self.y[klo]) / h;

        Ok(secant - (three * a * a - one) / six * h * self.y2[klo]
            + (three * b * b - one) / six * h * self.y2[khi])
    }

    /// Second derivative of the interpolant at an observation point,
    /// which is linear between knots.
    ///
    /// # Errors
    /// * If the bracketing interval has zero width
    pub fn second_derivative_one(&self, loc: T) -> Result<T, SplineError> {
        let klo = self.bracket(loc);
        let (_, a, b) = weights(self.x, klo, loc)?;
        Ok(a * self.y2[klo] + b * self.y2[klo + 1])
    }

    /// Get the lower knot of the interval containing `loc`,
    /// saturating to the end intervals outside the knots.
    #[inline]
    fn bracket(&self, loc: T) -> usize {
        // Bisection search; this returns the same interval as a forward walk from zero
        let iloc = self.x.partition_point(|v| *v < loc) as isize - 1;
        let last = self.x.len() as isize - 2;
        iloc.max(0).min(last) as usize
    }
}

#[cfg(all(test, feature = "std"))]
mod test {
    use super::*;
    use crate::fit::fit;
    use crate::testing::*;
    use crate::utils::linspace;
    use crate::Boundary;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::seq::SliceRandom;

    const X: [f64; 6] = [0.0, 2.0, 5.0, 6.0, 8.0, 10.0];
    const Y: [f64; 6] = [0.0, 1.0, 3.0, 6.0, 7.0, 10.0];

    #[test]
    fn test_natural_example() {
        let y2 = fit(&X, &Y, Boundary::Natural, Boundary::Natural).unwrap();
        let spline = CubicSpline::new(&X, &Y, &y2).unwrap();

        assert_eq!(spline.eval_one(0.0).unwrap(), 0.0);
        assert_eq!(spline.eval_one(5.0).unwrap(), 3.0);
        assert_eq!(spline.eval_one(10.0).unwrap(), 10.0);

        // Zero curvature at both ends
        assert_eq!(spline.second_derivative_one(0.0).unwrap(), 0.0);
        assert_eq!(spline.second_derivative_one(10.0).unwrap(), 0.0);
        assert_eq!(spline.len(), 6);
    }

    #[test]
    fn test_clamped_end_slopes() {
        let x = [0.0, 1.0, 5.0, 10.0];
        let y = [10.0, 10.0, 5.0, 0.0];

        for (yp1, ypn) in [(0.0, 0.0), (-1.5, 2.0), (3.0, -0.25)] {
            let y2 = fit(&x, &y, Boundary::Clamped(yp1), Boundary::Clamped(ypn)).unwrap();
            let spline = CubicSpline::new(&x, &y, &y2).unwrap();

            assert_abs_diff_eq!(spline.derivative_one(0.0).unwrap(), yp1, epsilon = 1e-12);
            assert_abs_diff_eq!(spline.derivative_one(10.0).unwrap(), ypn, epsilon = 1e-12);

            // Same thing by one-sided finite differences
            let h = 1e-6;
            let fd_lo = (spline.eval_one(h).unwrap() - spline.eval_one(0.0).unwrap()) / h;
            let fd_hi = (spline.eval_one(10.0).unwrap() - spline.eval_one(10.0 - h).unwrap()) / h;
            assert_abs_diff_eq!(fd_lo, yp1, epsilon = 1e-4);
            assert_abs_diff_eq!(fd_hi, ypn, epsilon = 1e-4);
        }
    }

    /// Value, slope, and curvature match from both sides of each interior knot
    #[test]
    fn test_continuity_at_interior_knots() {
        let mut rng = rng_fixed_seed();
        let x = rand_knots(&mut rng, 12);
        let y = randn::<f64>(&mut rng, 12);
        let y2 = fit(&x, &y, Boundary::Natural, Boundary::Clamped(-1.0)).unwrap();
        let spline = CubicSpline::new(&x, &y, &y2).unwrap();

        for i in 1..x.len() - 1 {
            // Evaluate both neighboring cubics exactly at the shared knot
            let (left, right) = (i - 1, i);
            let v_left = segment(&x, &y, &y2, left, x[i]).unwrap();
            let v_right = segment(&x, &y, &y2, right, x[i]).unwrap();
            assert_abs_diff_eq!(v_left, y[i], epsilon = 1e-12);
            assert_abs_diff_eq!(v_right, y[i], epsilon = 1e-12);

            // One-sided finite differences differ only by the curvature term
            let h = 1e-6;
            let v = spline.eval_one(x[i]).unwrap();
            let slope_left = (v - spline.eval_one(x[i] - h).unwrap()) / h;
            let slope_right = (spline.eval_one(x[i] + h).unwrap() - v) / h;
            assert_abs_diff_eq!(slope_right - slope_left, h * y2[i], epsilon = 1e-6);

            let curv_left = spline.second_derivative_one(x[i] - 1e-9).unwrap();
            let curv_right = spline.second_derivative_one(x[i] + 1e-9).unwrap();
            assert_abs_diff_eq!(curv_left, curv_right, epsilon = 1e-6);
        }
    }

    /// Batch evaluation with shuffled observation points matches single-point evaluation
    #[test]
    fn test_eval_any_order() {
        let mut rng = rng_fixed_seed();
        let y2 = fit(&X, &Y, Boundary::Clamped(1.0), Boundary::Natural).unwrap();
        let spline = CubicSpline::new(&X, &Y, &y2).unwrap();

        let mut obs = linspace(-2.0, 12.0, 57);
        obs.shuffle(&mut rng);
        let out = spline.eval_alloc(&obs).unwrap();

        for (loc, v) in obs.iter().zip(out.iter()) {
            assert_eq!(*v, spline.eval_one(*loc).unwrap());
        }
    }

    /// Sorted batch evaluation matches a manual cursor sweep
    #[test]
    fn test_eval_sorted_matches_splint() {
        let y2 = fit(&X, &Y, Boundary::Natural, Boundary::Natural).unwrap();
        let spline = CubicSpline::new(&X, &Y, &y2).unwrap();

        let obs = linspace(0.0, 10.0, 101);
        let mut out = vec![0.0; obs.len()];
        spline.eval(&obs, &mut out).unwrap();

        let mut cursor = 0;
        for i in 0..obs.len() {
            assert_eq!(out[i], splint(&X, &Y, &y2, obs[i], &mut cursor).unwrap());
        }
    }

    #[test]
    fn test_derivative_of_reproduced_cubic() {
        let f = |x: f64| 0.5 * x.powi(3) - x;
        let df = |x: f64| 1.5 * x * x - 1.0;

        let x = linspace(-2.0, 2.0, 7);
        let y: Vec<f64> = x.iter().map(|&v| f(v)).collect();
        let y2 = fit(&x, &y, Boundary::Clamped(df(-2.0)), Boundary::Clamped(df(2.0))).unwrap();
        let spline = CubicSpline::new(&x, &y, &y2).unwrap();

        for loc in linspace(-1.9, 1.9, 23) {
            assert_relative_eq!(
                spline.eval_one(loc).unwrap(),
                f(loc),
                epsilon = 1e-10,
                max_relative = 1e-10
            );
            assert_relative_eq!(
                spline.derivative_one(loc).unwrap(),
                df(loc),
                epsilon = 1e-10,
                max_relative = 1e-10
            );
        }
    }

    #[test]
    fn test_errors() {
        let y2 = [0.0; 6];
        assert_eq!(
            CubicSpline::new(&X, &Y, &y2[..5]).unwrap_err(),
            SplineError::LengthMismatch
        );
        assert_eq!(
            CubicSpline::new(&X[..1], &Y[..1], &y2[..1]).unwrap_err(),
            SplineError::TooFewKnots { n: 1 }
        );

        let spline = CubicSpline::new(&X, &Y, &y2).unwrap();
        let mut out = [0.0; 2];
        assert_eq!(spline.eval(&[1.0], &mut out), Err(SplineError::LengthMismatch));

        // Repeated knot
        let x = [0.0, 0.0, 1.0];
        let spline = CubicSpline::new(&x, &Y[..3], &y2[..3]).unwrap();
        let err = SplineError::DuplicateAbscissa { index: 0 };
        assert_eq!(spline.eval_one(0.0), Err(err));
        assert_eq!(spline.derivative_one(-1.0), Err(err));
        assert_eq!(spline.eval_one(0.5), Ok(2.0));
        // The backward step resets the cursor into the zero-width interval
        assert_eq!(spline.eval_alloc(&[0.5, -1.0]), Err(err));
    }
}
