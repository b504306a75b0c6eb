use thiserror::Error;

use crate::align::structs::{Coordinate, Recurrence};
use crate::align::LocalBest;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    #[error("at least 2 sequences are required for alignment, found {count}")]
    InvalidInput { count: usize },

    #[error("at most {max} non-empty sequences can be aligned at once, found {count}")]
    TooManySequences { count: usize, max: usize },

    #[error("the alignment matrix has not been solved yet, call solve() first")]
    NotSolved,

    #[error("requested a {requested} result from an engine that solves the {solved} recurrence")]
    WrongRecurrence {
        requested: Recurrence,
        solved: Recurrence,
    },

    /// For the local recurrence, `partial` holds the best cell solved before cancellation.
    #[error("alignment was cancelled before the matrix was filled")]
    Cancelled { partial: Option<LocalBest> },

    #[error("coordinate {coordinate} is out of bounds for a matrix of shape {shape:?}")]
    OutOfBounds {
        coordinate: Coordinate,
        shape: Vec<usize>,
    },

    #[error("coordinate has {found} dimensions, expected {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("tried to read the unset cell at {coordinate}")]
    UnsetCell { coordinate: Coordinate },

    #[error("the alignment lattice is too large to allocate")]
    LatticeTooLarge,
}
