use log::debug;

use crate::align::cancel::CancelToken;
use crate::align::moves::{best_transition, MoveEnumerator};
use crate::align::structs::{AlignmentMatrix, Cell, Coordinate, Odometer, Score, ScoreParams};
use crate::error::AlignError;
use crate::structs::Sequence;

/// Solve one cell of the global recurrence.
///
/// The cell takes the best candidate over every move with no flooring, so
/// scores may be negative and every cell but the origin gets a predecessor.
pub(crate) fn global_cell(
    matrix: &AlignmentMatrix,
    sequences: &[Sequence],
    params: &ScoreParams,
    coordinate: &Coordinate,
    idx: usize,
) -> Result<Cell, AlignError> {
    let enumerator = MoveEnumerator::new(coordinate, sequences);
    match best_transition(matrix, &enumerator, idx, params)? {
        Some((score, predecessor_idx)) => Ok(Cell::solved(score, Some(predecessor_idx))),
        // only the origin admits no moves
        None => Ok(Cell::solved(0, None)),
    }
}

/// Fill the matrix with the N-dimensional Needleman-Wunsch recurrence.
///
/// Returns the score at the far corner, which is the optimal global alignment score.
pub fn needleman_wunsch(
    matrix: &mut AlignmentMatrix,
    sequences: &[Sequence],
    params: &ScoreParams,
    cancel: &CancelToken,
) -> Result<Score, AlignError> {
    debug_assert_eq!(matrix.dimensions(), sequences.len());

    let odometer = Odometer::new(sequences.iter().map(|s| s.length).collect());

    matrix.reset();
    matrix.set_idx(0, Cell::solved(0, None));

    if cancel.is_cancelled() {
        return Err(AlignError::Cancelled { partial: None });
    }

    // odometer order is ascending flat index order, starting just after the origin
    for (idx, coordinate) in (1..).zip(odometer.iter()) {
        debug_assert_eq!(matrix.index_of(&coordinate), Ok(idx));

        // the odometer carried out of dimension 0: one outer traversal step
        if coordinate[0] == 0 && cancel.is_cancelled() {
            return Err(AlignError::Cancelled { partial: None });
        }

        let cell = global_cell(matrix, sequences, params, &coordinate, idx)?;
        matrix.set_idx(idx, cell);
    }

    let score = matrix.score_idx(matrix.len() - 1)?;
    debug!("global recurrence filled {} cells, score: {score}", matrix.len());
    Ok(score)
}
