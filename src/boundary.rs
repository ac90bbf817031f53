//! Boundary conditions at the two ends of a spline.

use num_traits::{Float, NumCast};

/// Raw boundary derivatives at or above this magnitude select a natural boundary.
///
/// Callers passing `1e30` as a first derivative get a natural spline on that end.
pub const NATURAL_THRESHOLD: f64 = 0.99e30;

/// Condition imposed on one end of the spline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Boundary<T> {
    /// Zero second derivative at the end knot
    Natural,
    /// Fixed first derivative at the end knot
    Clamped(T),
}

impl<T: Float> Boundary<T> {
    /// Interpret a raw first derivative, where any value with magnitude of at least
    /// [`NATURAL_THRESHOLD`] means "natural" instead of a real slope.
    ///
    /// NaN is treated as a clamped slope, and will propagate into the fit.
    #[inline]
    pub fn from_derivative(yp: T) -> Self {
        // Types too narrow for the threshold never see a natural boundary from a finite slope
        let threshold = <T as NumCast>::from(NATURAL_THRESHOLD).unwrap_or_else(T::infinity);
        if yp.abs() >= threshold {
            Boundary::Natural
        } else {
            Boundary::Clamped(yp)
        }
    }

    /// The imposed first derivative, if any.
    pub fn slope(&self) -> Option<T> {
        match *self {
            Boundary::Natural => None,
            Boundary::Clamped(yp) => Some(yp),
        }
    }

    pub fn is_natural(&self) -> bool {
        matches!(self, Boundary::Natural)
    }
}
