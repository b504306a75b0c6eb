use log::{debug, trace};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::align::cancel::CancelToken;
use crate::align::needleman_wunsch::global_cell;
use crate::align::smith_waterman::{local_cell, scan_local_best, LocalBest};
use crate::align::structs::{AlignmentMatrix, Cell, Coordinate, Score, ScoreParams};
use crate::error::AlignError;
use crate::structs::Sequence;

type CellFn = fn(
    &AlignmentMatrix,
    &[Sequence],
    &ScoreParams,
    &Coordinate,
    usize,
) -> Result<Cell, AlignError>;

/// Group the flat indices of the matrix by wavefront, the sum of their coordinate components.
///
/// Every predecessor of a cell lies on a strictly earlier wavefront, so the
/// cells of one wavefront only depend on cells that are already solved.
/// Within each wavefront, indices are kept in ascending order.
fn wavefronts(matrix: &AlignmentMatrix) -> Vec<Vec<usize>> {
    let last = matrix.terminal().wavefront();
    let mut fronts: Vec<Vec<usize>> = vec![vec![]; last + 1];
    for idx in 0..matrix.len() {
        fronts[matrix.coordinate_of(idx).wavefront()].push(idx);
    }
    fronts
}

/// Fill every wavefront after the origin, solving the cells of each one in parallel.
///
/// The origin must already be seeded. Cancellation is checked once per wavefront.
fn fill(
    matrix: &mut AlignmentMatrix,
    sequences: &[Sequence],
    params: &ScoreParams,
    cancel: &CancelToken,
    cell_fn: CellFn,
) -> Result<(), AlignError> {
    let fronts = wavefronts(matrix);

    for (front_idx, front) in fronts.iter().enumerate().skip(1) {
        if cancel.is_cancelled() {
            return Err(AlignError::Cancelled { partial: None });
        }

        let solved: Vec<Cell> = {
            let view: &AlignmentMatrix = matrix;
            front
                .par_iter()
                .map(|&idx| cell_fn(view, sequences, params, &view.coordinate_of(idx), idx))
                .collect::<Result<Vec<Cell>, AlignError>>()?
        };

        trace!("wavefront {front_idx}: {} cells", front.len());

        front
            .iter()
            .zip(solved)
            .for_each(|(&idx, cell)| matrix.set_idx(idx, cell));
    }

    Ok(())
}

/// Fill the matrix with the global recurrence, one wavefront at a time.
///
/// Produces the same matrix and score as [`needleman_wunsch`](crate::align::needleman_wunsch).
pub fn wavefront_needleman_wunsch(
    matrix: &mut AlignmentMatrix,
    sequences: &[Sequence],
    params: &ScoreParams,
    cancel: &CancelToken,
) -> Result<Score, AlignError> {
    debug_assert_eq!(matrix.dimensions(), sequences.len());

    matrix.reset();
    matrix.set_idx(0, Cell::solved(0, None));

    fill(matrix, sequences, params, cancel, global_cell)?;

    let score = matrix.score_idx(matrix.len() - 1)?;
    debug!(
        "global recurrence filled {} cells by wavefront, score: {score}",
        matrix.len()
    );
    Ok(score)
}

/// Fill the matrix with the local recurrence, one wavefront at a time.
///
/// Produces the same matrix and best cell as [`smith_waterman`](crate::align::smith_waterman).
pub fn wavefront_smith_waterman(
    matrix: &mut AlignmentMatrix,
    sequences: &[Sequence],
    params: &ScoreParams,
    cancel: &CancelToken,
) -> Result<LocalBest, AlignError> {
    debug_assert_eq!(matrix.dimensions(), sequences.len());

    matrix.reset();
    matrix.set_idx(0, Cell::solved(0, None));

    match fill(matrix, sequences, params, cancel, local_cell) {
        Ok(()) => {}
        Err(AlignError::Cancelled { .. }) => {
            return Err(AlignError::Cancelled {
                partial: Some(scan_local_best(matrix)),
            })
        }
        Err(e) => return Err(e),
    }

    // the best cell is chosen in traversal order so ties match the sequential fill
    let best = scan_local_best(matrix);
    debug!(
        "local recurrence filled {} cells by wavefront, score: {} ending at {}",
        matrix.len(),
        best.score,
        best.end
    );
    Ok(best)
}
