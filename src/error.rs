//! Error type shared by cell construction and evaluation.
use std::fmt::Display;

use crate::cell::MAX_NDIMS;

/// Failure modes of fitting or evaluating a cell.
///
/// All variants except the evaluation-time point-length check are detected
/// during construction; a constructed cell never fails on finite input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FitError {
    /// An axis has an empty, inverted, or non-finite extent.
    InvalidBounds { axis: usize },

    /// A supplied sequence does not have the length the cell's dimension
    /// count requires.
    DimensionMismatch { expected: usize, actual: usize },

    /// The corner system is singular or too ill-conditioned for a direct
    /// solve. With finite, strictly-ordered bounds this cannot occur; it
    /// signals degenerate corner geometry or pathological numeric scaling.
    SingularSystem,

    /// Dimension count outside `1..=MAX_NDIMS`.
    UnsupportedDimension { ndims: usize },
}

impl std::error::Error for FitError {}

impl Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitError::InvalidBounds { axis } => {
                write!(f, "axis {axis} bounds must be finite with min < max")
            }
            FitError::DimensionMismatch { expected, actual } => {
                write!(f, "expected {expected} entries, got {actual}")
            }
            FitError::SingularSystem => {
                write!(f, "corner system is singular or numerically unstable")
            }
            FitError::UnsupportedDimension { ndims } => {
                write!(
                    f,
                    "dimension count {ndims} is outside the supported range 1..={MAX_NDIMS}"
                )
            }
        }
    }
}
