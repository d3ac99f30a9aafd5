//! Error type for the checked APIs.

use thiserror::Error;

/// Errors returned by the fallible counterparts of indexing, inversion and slice conversion.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Component or column index past the end.
    #[error("Index {index} is out of range for a length-{len} value")]
    IndexOutOfRange { index: usize, len: usize },

    /// The matrix has a determinant of exactly zero.
    #[error("Matrix is singular (determinant is zero)")]
    Singular,

    /// A slice didn't have the number of floats the target type holds.
    #[error("Expected {expected} floats, got {found}")]
    SliceLength { expected: usize, found: usize },
}
