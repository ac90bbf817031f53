//! Cubic spline interpolation on tabulated 1D data, no-std and no-alloc compatible.
//!
//! Given knots `(x_i, y_i)` with strictly increasing `x`, [`fit`] solves a tridiagonal
//! system for the second derivative of the interpolant at every knot, and [`eval`]
//! evaluates the resulting piecewise cubic at observation points. The interpolant
//! passes through every knot and has continuous first and second derivatives.
//!
//! Each end of the spline takes a [`Boundary`] condition: either natural (zero
//! curvature) or clamped (a fixed first derivative).
//!
//! # Performance Scalings
//! | Operation                     | RAM       | Cost                                  |
//! |-------------------------------|-----------|---------------------------------------|
//! | fit::fit_into                 | O(1)      | O(n)                                  |
//! | eval::splint                  | O(1)      | amortized O(1) for sorted queries     |
//! | CubicSpline::eval_one         | O(1)      | O(log2(n))                            |
//!
//! # Example: Fit and Evaluate w/o Allocation
//! ```rust
//! use cspline::{fit, eval, Boundary};
//!
//! let x = [0.0_f64, 2.0, 5.0, 6.0, 8.0, 10.0];
//! let y = [0.0_f64, 1.0, 3.0, 6.0, 7.0, 10.0];
//!
//! // Storage for second derivatives and the scratch used by the solve
//! let mut y2 = [0.0; 6];
//! let mut work = [0.0; 6];
//! fit::fit_into(&x, &y, Boundary::Natural, Boundary::Natural, &mut y2, &mut work).unwrap();
//!
//! // Sequential queries reuse the search cursor
//! let mut cursor = 0;
//! for xq in [0.5, 1.5, 5.0, 9.0] {
//!     let _ = eval::splint(&x, &y, &y2, xq, &mut cursor).unwrap();
//! }
//! assert_eq!(eval::splint(&x, &y, &y2, 10.0, &mut cursor).unwrap(), 10.0);
//! ```
//!
//! # Example: Interpolator Struct
//! ```rust
//! use cspline::{fit, Boundary, CubicSpline};
//!
//! let x = [0.0_f64, 1.0, 5.0, 10.0];
//! let y = [10.0_f64, 10.0, 5.0, 0.0];
//! let y2 = fit::fit(&x, &y, Boundary::Clamped(0.0), Boundary::Clamped(0.0)).unwrap();
//!
//! let spline = CubicSpline::new(&x, &y, &y2).unwrap();
//! let out = spline.eval_alloc(&[0.0, 2.5, 7.5]).unwrap();
//! assert_eq!(out[0], 10.0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops mirror the recurrences they implement
#![allow(clippy::needless_range_loop)]

pub mod boundary;
pub use boundary::{Boundary, NATURAL_THRESHOLD};

pub mod error;
pub use error::SplineError;

pub mod fit;
pub mod eval;

pub mod interpolator;
pub use interpolator::CubicSpline;

#[cfg(feature = "std")]
pub mod utils;

#[cfg(feature = "std")]
pub mod table;

#[cfg(feature = "std")]
pub mod driver;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;
