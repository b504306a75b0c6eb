use crate::align::structs::{AlignmentMatrix, Cell, Coordinate, Trace};
use crate::error::AlignError;

/// Follow predecessors back from `end_idx` until a cell without one is reached.
fn follow(matrix: &AlignmentMatrix, end_idx: usize) -> Result<Trace, AlignError> {
    let mut indices = vec![end_idx];
    let mut idx = end_idx;

    loop {
        match matrix.get_idx(idx) {
            Cell::Unset => {
                return Err(AlignError::UnsetCell {
                    coordinate: matrix.coordinate_of(idx),
                })
            }
            Cell::Solved {
                predecessor_idx: Some(predecessor_idx),
                ..
            } => {
                idx = *predecessor_idx;
                indices.push(idx);
            }
            Cell::Solved {
                predecessor_idx: None,
                ..
            } => break,
        }
    }

    Ok(Trace::new(
        indices
            .into_iter()
            .rev()
            .map(|idx| matrix.coordinate_of(idx))
            .collect(),
    ))
}

/// Recover the optimal global path from a matrix filled by the global recurrence.
///
/// The path runs from the origin to the far corner.
pub fn traceback_global(matrix: &AlignmentMatrix) -> Result<Trace, AlignError> {
    follow(matrix, matrix.len() - 1)
}

/// Recover the optimal local path ending at `end` from a matrix filled by the local recurrence.
///
/// The path starts at the first cell on the way back with no predecessor,
/// where the local alignment restarted from zero. If `end` itself has no
/// predecessor, the trace is the single coordinate `end` and the alignment
/// is empty.
pub fn traceback_local(matrix: &AlignmentMatrix, end: &Coordinate) -> Result<Trace, AlignError> {
    follow(matrix, matrix.index_of(end)?)
}
