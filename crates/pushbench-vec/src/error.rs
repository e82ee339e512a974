//! Errors reported by the checked [`GrowVec`](crate::GrowVec) accessors.

use std::error::Error;
use std::fmt;

/// Errors from checked element access and removal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VecError {
    /// An index at or past the current length was requested.
    OutOfBounds {
        /// The requested index.
        index: usize,
        /// Length of the sequence at the time of the request.
        len: usize,
    },
    /// A checked pop was attempted on an empty sequence.
    Empty,
}

impl fmt::Display for VecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::Empty => write!(f, "attempt to pop an empty sequence"),
        }
    }
}

impl Error for VecError {}
