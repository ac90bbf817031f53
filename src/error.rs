use thiserror::Error;

/// Errors from fitting or evaluating a spline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SplineError {
    /// Two consecutive knots share an x value, so the bracket has zero width.
    #[error("Bad xa input to routine splint: knots {index} and {next} have the same x", next = .index + 1)]
    DuplicateAbscissa { index: usize },

    #[error("Length mismatch")]
    LengthMismatch,

    #[error("At least 2 knots are required, got {n}")]
    TooFewKnots { n: usize },
}
