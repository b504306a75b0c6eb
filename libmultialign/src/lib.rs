//! Optimal alignment of an arbitrary number of sequences.
//!
//! The [`align`] module generalizes two-sequence Needleman-Wunsch (global)
//! and Smith-Waterman (local) alignment to N sequences by filling an
//! N-dimensional dynamic programming lattice under a linear scoring scheme.

pub mod align;
pub mod alphabet;
pub mod error;
pub mod output;
pub mod structs;
pub mod util;
